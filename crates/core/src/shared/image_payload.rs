use serde::{Deserialize, Serialize};

/// An image handed to the service, either inline bytes or a remote URL.
///
/// Used for person enrollment and as the probe of a search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::shared::base64_payload::option"
    )]
    pub content: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize_options: Option<ResizeOptions>,
}

impl ImagePayload {
    pub fn from_bytes(content: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            content_type: Some(content_type.into()),
            content: Some(content),
            ..Self::default()
        }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            image_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_resize(mut self, options: ResizeOptions) -> Self {
        self.resize_options = Some(options);
        self
    }
}

/// Server-side resize applied before the image is processed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResizeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// JPEG quality, 0-100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
}

/// Request body for enrolling an image to a person.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageFields {
    pub image: ImagePayload,
}

impl From<ImagePayload> for ImageFields {
    fn from(image: ImagePayload) -> Self {
        Self { image }
    }
}
