pub mod detect;
pub mod face_match;
pub mod image_source;
pub mod matching_api;
pub mod quality_scenario;
