use serde::{Deserialize, Serialize};

use crate::matching::domain::image_source::ImageSource;
use crate::shared::constants::RESULT_OK;
use crate::shared::output_image_params::OutputImageParams;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<bool>,
    pub images: Vec<MatchImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_image_params: Option<OutputImageParams>,
}

impl MatchRequest {
    /// Builds a request from `(source, bytes)` pairs, indexing images from 1.
    pub fn from_images(images: impl IntoIterator<Item = (ImageSource, Vec<u8>)>) -> Self {
        let images = images
            .into_iter()
            .zip(1..)
            .map(|((source, data), index)| MatchImage::new(index, source, data))
            .collect();
        Self {
            images,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchImage {
    pub index: u32,
    #[serde(rename = "type")]
    pub source: ImageSource,
    #[serde(with = "crate::shared::base64_payload")]
    pub data: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detect_all: Option<bool>,
}

impl MatchImage {
    pub fn new(index: u32, source: ImageSource, data: Vec<u8>) -> Self {
        Self {
            index,
            source,
            data,
            detect_all: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// One entry per submitted image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detections: Option<Vec<MatchImageDetection>>,
    /// One entry per compared pair of faces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ComparedFacesPair>>,
}

impl MatchResponse {
    pub fn is_ok(&self) -> bool {
        self.code == RESULT_OK
    }

    /// Per-image detections, empty when the service omitted them.
    pub fn detections(&self) -> &[MatchImageDetection] {
        self.detections.as_deref().unwrap_or_default()
    }

    /// Compared pairs, empty when the service omitted them.
    pub fn results(&self) -> &[ComparedFacesPair] {
        self.results.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchImageDetection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(default, deserialize_with = "crate::shared::null_default::deserialize")]
    pub faces: Vec<DetectedFace>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedFace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roi: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparedFacesPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_face_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<ImageSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_face_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<ImageSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}
