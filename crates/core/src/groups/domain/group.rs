use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::page::{Metadata, Page};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    #[serde(default, deserialize_with = "crate::shared::null_default::deserialize")]
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

pub type GroupPage = Page<Group>;

/// Body for creating or replacing a group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupToCreate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl GroupToCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Batch membership change. Removals are applied before additions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroup {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_items: Vec<Uuid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove_items: Vec<Uuid>,
}

impl UpdateGroup {
    pub fn add(ids: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            add_items: ids.into_iter().collect(),
            remove_items: Vec::new(),
        }
    }

    pub fn remove(ids: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            add_items: Vec::new(),
            remove_items: ids.into_iter().collect(),
        }
    }
}
