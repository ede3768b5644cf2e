use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::page::{Metadata, Page};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    #[serde(default, deserialize_with = "crate::shared::null_default::deserialize")]
    pub metadata: Metadata,
    /// Ids of the groups the person belongs to.
    #[serde(default, deserialize_with = "crate::shared::null_default::deserialize")]
    pub groups: Vec<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

pub type PersonPage = Page<Person>;

/// Body for creating or updating a person.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonFields {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl PersonFields {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
            metadata: None,
        }
    }

    pub fn in_groups(mut self, groups: impl IntoIterator<Item = Uuid>) -> Self {
        self.groups = groups.into_iter().collect();
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// An image stored for a person.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonImage {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Storage path on the service side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

pub type ImagePage = Page<PersonImage>;
