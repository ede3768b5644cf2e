pub mod search;
pub mod search_api;
