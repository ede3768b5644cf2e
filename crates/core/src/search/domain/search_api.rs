use crate::search::domain::search::{SearchRequest, SearchResult};
use crate::shared::api_error::ApiError;

/// One-to-many lookup of a probe face against enrolled persons.
pub trait SearchApi {
    fn search(&self, request: &SearchRequest) -> Result<SearchResult, ApiError>;
}
