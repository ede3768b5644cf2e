pub mod groups;
pub mod infrastructure;
pub mod maintenance;
pub mod matching;
pub mod persons;
pub mod search;
pub mod shared;
