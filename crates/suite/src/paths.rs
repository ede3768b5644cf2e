use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Overrides the fixture image directory.
pub const FIXTURES_ENV: &str = "FACESDK_FIXTURES";

pub const FACE1: &str = "face1.jpg";
pub const FACE2: &str = "face2.jpg";
pub const FACE3: &str = "face3.jpg";
pub const LIVE_PHOTO: &str = "me.png";
pub const PRINTED_DOCUMENT: &str = "printedDoc.png";
pub const DOCUMENT_WITH_LIVE: &str = "me_and_id.png";
pub const SEVERAL_FACES: &str = "severalFaces.jpg";

/// Public portrait used by the search-by-URL scenario.
pub const REMOTE_PORTRAIT_URL: &str = "https://img.freepik.com/free-photo/portrait-beautiful-blond-woman-with-trendy-hairstyle_23-2149430891.jpg?t=st=1712577121~exp=1712577721~hmac=e4fb2fa9517e9bf0953bcc7eda15059d131fec68541bee602b8885f6e99bbc9b";

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("fixture file not found at path: {0}")]
    NotFound(PathBuf),
    #[error("failed to read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Locations of the fixture images.
#[derive(Clone, Debug, PartialEq)]
pub struct FixturePaths {
    dir: PathBuf,
}

impl FixturePaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `FACESDK_FIXTURES` if set, otherwise `tests/files` inside this crate.
    pub fn from_env() -> Self {
        match std::env::var_os(FIXTURES_ENV) {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("files")),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn face1(&self) -> PathBuf {
        self.file(FACE1)
    }

    pub fn face2(&self) -> PathBuf {
        self.file(FACE2)
    }

    pub fn face3(&self) -> PathBuf {
        self.file(FACE3)
    }

    pub fn live_photo(&self) -> PathBuf {
        self.file(LIVE_PHOTO)
    }

    pub fn printed_document(&self) -> PathBuf {
        self.file(PRINTED_DOCUMENT)
    }

    pub fn document_with_live(&self) -> PathBuf {
        self.file(DOCUMENT_WITH_LIVE)
    }

    pub fn several_faces(&self) -> PathBuf {
        self.file(SEVERAL_FACES)
    }

    /// Reads a fixture image by file name.
    pub fn read(&self, name: &str) -> Result<Vec<u8>, FixtureError> {
        read_image_bytes(&self.file(name))
    }
}

/// Reads an image file, failing with the offending path when it is missing.
pub fn read_image_bytes(path: &Path) -> Result<Vec<u8>, FixtureError> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FixtureError::NotFound(path.to_path_buf()),
        _ => FixtureError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })
}
