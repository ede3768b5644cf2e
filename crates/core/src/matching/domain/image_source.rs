use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a matched image came from. Sent as an integer tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ImageSource {
    DocumentPrinted = 1,
    DocumentRfid = 2,
    Live = 3,
    DocumentWithLive = 4,
    External = 5,
    GhostPortrait = 6,
    Barcode = 7,
}

#[derive(Error, Debug, PartialEq)]
pub enum ImageSourceError {
    #[error("unknown image source tag {0}")]
    UnknownTag(u8),
    #[error("unknown image source '{0}'")]
    UnknownName(String),
}

impl ImageSource {
    pub const ALL: &'static [ImageSource] = &[
        ImageSource::DocumentPrinted,
        ImageSource::DocumentRfid,
        ImageSource::Live,
        ImageSource::DocumentWithLive,
        ImageSource::External,
        ImageSource::GhostPortrait,
        ImageSource::Barcode,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ImageSource::DocumentPrinted => "DOCUMENT_PRINTED",
            ImageSource::DocumentRfid => "DOCUMENT_RFID",
            ImageSource::Live => "LIVE",
            ImageSource::DocumentWithLive => "DOCUMENT_WITH_LIVE",
            ImageSource::External => "EXTERNAL",
            ImageSource::GhostPortrait => "GHOST_PORTRAIT",
            ImageSource::Barcode => "BARCODE",
        }
    }
}

impl From<ImageSource> for u8 {
    fn from(source: ImageSource) -> u8 {
        source as u8
    }
}

impl TryFrom<u8> for ImageSource {
    type Error = ImageSourceError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        ImageSource::ALL
            .iter()
            .copied()
            .find(|s| *s as u8 == tag)
            .ok_or(ImageSourceError::UnknownTag(tag))
    }
}

impl FromStr for ImageSource {
    type Err = ImageSourceError;

    /// Accepts the wire name (`DOCUMENT_RFID`), a kebab-case alias
    /// (`document-rfid`) or the numeric tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(tag) = s.parse::<u8>() {
            return ImageSource::try_from(tag);
        }
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        ImageSource::ALL
            .iter()
            .copied()
            .find(|source| source.name() == normalized)
            .ok_or_else(|| ImageSourceError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
