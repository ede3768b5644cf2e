pub mod group;
pub mod group_api;
