use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::image_payload::ImagePayload;
use crate::shared::output_image_params::OutputImageParams;
use crate::shared::page::Metadata;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Groups to search in; empty searches every group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<Uuid>,
    pub image: ImagePayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Minimum similarity, 0.0-1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_image_params: Option<OutputImageParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detect_all: Option<bool>,
}

impl SearchRequest {
    pub fn new(image: ImagePayload) -> Self {
        Self {
            image,
            ..Self::default()
        }
    }

    pub fn in_groups(mut self, group_ids: impl IntoIterator<Item = Uuid>) -> Self {
        self.group_ids = group_ids.into_iter().collect();
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_output_image_params(mut self, params: OutputImageParams) -> Self {
        self.output_image_params = Some(params);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(default, deserialize_with = "crate::shared::null_default::deserialize")]
    pub persons: Vec<SearchPerson>,
}

impl SearchResult {
    pub fn find_person(&self, person_id: Uuid) -> Option<&SearchPerson> {
        self.persons.iter().find(|p| p.id == person_id)
    }
}

/// A person whose enrolled images resemble the probe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPerson {
    pub id: Uuid,
    #[serde(default, deserialize_with = "crate::shared::null_default::deserialize")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::shared::null_default::deserialize")]
    pub metadata: Metadata,
    #[serde(default, deserialize_with = "crate::shared::null_default::deserialize")]
    pub groups: Vec<Uuid>,
    /// The probe face the person was matched against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection: Option<SearchDetection>,
    #[serde(default, deserialize_with = "crate::shared::null_default::deserialize")]
    pub images: Vec<RecognizedImage>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDetection {
    /// Base64-encoded crop of the probe face.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roi: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmarks: Option<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_angle: Option<f64>,
}

/// An enrolled image that matched, with its similarity to the probe.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizedImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::output_image_params::Crop;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let group = Uuid::new_v4();
        let request = SearchRequest::new(ImagePayload::from_bytes(vec![7], "image/jpeg"))
            .in_groups([group])
            .with_limit(10)
            .with_threshold(0.8)
            .with_output_image_params(OutputImageParams {
                background_color: None,
                crop: Some(Crop::new(0).with_size(300, 400)),
            });
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["groupIds"], json!([group.to_string()]));
        assert_eq!(value["image"], json!({"contentType": "image/jpeg", "content": "Bw=="}));
        assert_eq!(value["limit"], json!(10));
        assert!((value["threshold"].as_f64().unwrap() - 0.8).abs() < 1e-6);
        assert_eq!(value["outputImageParams"]["crop"]["size"], json!([300, 400]));
        assert!(value.get("tag").is_none());
    }

    #[test]
    fn test_find_person() {
        let (hit, other) = (Uuid::new_v4(), Uuid::new_v4());
        let result: SearchResult = serde_json::from_value(json!({
            "code": 0,
            "persons": [
                {"id": other, "name": "B", "images": []},
                {
                    "id": hit,
                    "name": "A",
                    "groups": [],
                    "detection": {"crop": "AAAA", "roi": [0, 0, 10, 10]},
                    "images": [{"id": Uuid::new_v4(), "path": "p/1.jpg", "similarity": 0.99}]
                }
            ]
        }))
        .unwrap();

        let person = result.find_person(hit).unwrap();
        assert_eq!(person.name, "A");
        assert_eq!(person.images[0].path.as_deref(), Some("p/1.jpg"));
        assert_eq!(
            person.detection.as_ref().and_then(|d| d.crop.as_deref()),
            Some("AAAA")
        );
        assert!(result.find_person(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_empty_result() {
        let result: SearchResult = serde_json::from_str("{}").unwrap();
        assert!(result.persons.is_empty());
    }

    #[test]
    fn test_null_persons_and_person_fields() {
        let result: SearchResult =
            serde_json::from_value(json!({"code": 0, "persons": null})).unwrap();
        assert!(result.persons.is_empty());

        let person: SearchPerson = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "name": null,
            "metadata": null,
            "groups": null,
            "images": null
        }))
        .unwrap();
        assert_eq!(person.name, "");
        assert!(person.metadata.is_empty());
        assert!(person.groups.is_empty());
        assert!(person.images.is_empty());
    }
}
