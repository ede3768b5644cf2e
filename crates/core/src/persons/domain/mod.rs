pub mod person;
pub mod person_api;
