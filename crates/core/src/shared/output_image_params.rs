use serde::{Deserialize, Serialize};

/// RGB triple, each channel 0-255.
pub type Color = [u8; 3];

/// Post-processing applied to face crops returned by detect, match and search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputImageParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<Crop>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    /// Face alignment type; 0 aligns to a 3:4 portrait.
    #[serde(rename = "type")]
    pub align_type: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad_color: Option<Color>,
    /// Output `[width, height]` in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<[u32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_original_rect: Option<bool>,
}

impl Crop {
    pub fn new(align_type: u8) -> Self {
        Self {
            align_type,
            pad_color: None,
            size: None,
            return_original_rect: None,
        }
    }

    pub fn with_pad_color(mut self, color: Color) -> Self {
        self.pad_color = Some(color);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Some([width, height]);
        self
    }
}
