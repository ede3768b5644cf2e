use serde::{Deserialize, Serialize};

use crate::matching::domain::quality_scenario::QualityScenario;
use crate::shared::constants::RESULT_OK;
use crate::shared::output_image_params::{Color, OutputImageParams};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_param: Option<ProcessParam>,
    #[serde(with = "crate::shared::base64_payload")]
    pub image: Vec<u8>,
}

impl DetectRequest {
    pub fn new(image: Vec<u8>) -> Self {
        Self {
            tag: None,
            process_param: None,
            image,
        }
    }

    pub fn with_params(mut self, params: ProcessParam) -> Self {
        self.process_param = Some(params);
        self
    }
}

/// Detection parameters. Every field is optional; unset fields use the
/// service defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<QualityScenario>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_central_face: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_image_params: Option<OutputImageParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributesRequest>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_match_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub config: Vec<DetailConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributesRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub config: Vec<DetailConfig>,
}

/// Names one quality check or attribute and, optionally, its accepted range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetailConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

impl DetailConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            range: None,
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some([min, max]);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    pub code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<DetectResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<f64>,
}

impl DetectResponse {
    pub fn is_ok(&self) -> bool {
        self.code == RESULT_OK
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detections: Option<Vec<Detection>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detector_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmarks_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<QualityScenario>,
}

impl DetectResult {
    /// Located faces, empty when the service omitted them.
    pub fn detections(&self) -> &[Detection] {
        self.detections.as_deref().unwrap_or_default()
    }
}

/// One face located in the image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    /// Base64-encoded face crop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<String>,
    /// `[x, y, width, height]` of the face.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roi: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmarks: Option<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributesReport>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "crate::shared::null_default::deserialize")]
    pub details: Vec<QualityDetail>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QualityDetail {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    /// 0 = false, 1 = true, 2 = undetermined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributesReport {
    #[serde(default, deserialize_with = "crate::shared::null_default::deserialize")]
    pub details: Vec<AttributeDetail>,
}

/// Attribute estimate. `value` is attribute-specific: `Age` yields a
/// `[min, max]` pair, most others a label string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeDetail {
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl AttributeDetail {
    /// Numeric components of `value`, whether it is a scalar or an array.
    pub fn numeric_values(&self) -> Vec<f64> {
        match &self.value {
            serde_json::Value::Array(items) => items.iter().filter_map(|v| v.as_f64()).collect(),
            other => other.as_f64().into_iter().collect(),
        }
    }
}
