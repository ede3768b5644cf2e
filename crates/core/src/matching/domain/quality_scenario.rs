use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Predefined detection scenario; selects which checks and crops the
/// service performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityScenario {
    CropCentralFace,
    CropAllFaces,
    Thumbnail,
    AttributesAll,
    QualityFull,
    #[serde(rename = "QualityICAO")]
    QualityIcao,
    QualityVisaSchengen,
    #[serde(rename = "QualityVisaUSA")]
    QualityVisaUsa,
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown quality scenario '{0}'")]
pub struct UnknownScenario(pub String);

impl QualityScenario {
    pub const ALL: &'static [QualityScenario] = &[
        QualityScenario::CropCentralFace,
        QualityScenario::CropAllFaces,
        QualityScenario::Thumbnail,
        QualityScenario::AttributesAll,
        QualityScenario::QualityFull,
        QualityScenario::QualityIcao,
        QualityScenario::QualityVisaSchengen,
        QualityScenario::QualityVisaUsa,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QualityScenario::CropCentralFace => "CropCentralFace",
            QualityScenario::CropAllFaces => "CropAllFaces",
            QualityScenario::Thumbnail => "Thumbnail",
            QualityScenario::AttributesAll => "AttributesAll",
            QualityScenario::QualityFull => "QualityFull",
            QualityScenario::QualityIcao => "QualityICAO",
            QualityScenario::QualityVisaSchengen => "QualityVisaSchengen",
            QualityScenario::QualityVisaUsa => "QualityVisaUSA",
        }
    }
}

impl FromStr for QualityScenario {
    type Err = UnknownScenario;

    /// Case-insensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QualityScenario::ALL
            .iter()
            .copied()
            .find(|scenario| scenario.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownScenario(s.to_string()))
    }
}

impl fmt::Display for QualityScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
