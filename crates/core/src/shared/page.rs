use serde::{Deserialize, Serialize};

/// Free-form key/value metadata attached to groups, persons and images.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// One page of a paginated listing. Pages are 1-based.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(
        default,
        deserialize_with = "crate::shared::null_default::deserialize"
    )]
    pub items: Vec<T>,
    pub page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

impl<T> Page<T> {
    /// Whether a listing walk should request `page + 1`.
    ///
    /// Trusts `totalPages` when the service reports it, otherwise keeps
    /// going while pages come back full.
    pub fn has_next(&self, requested_size: u32) -> bool {
        match self.total_pages {
            Some(total) => self.page < total,
            None => !self.items.is_empty() && self.items.len() as u32 >= requested_size,
        }
    }
}
