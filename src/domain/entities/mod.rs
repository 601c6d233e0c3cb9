pub mod property;
pub mod saved_search;
