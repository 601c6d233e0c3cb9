pub mod property_repository;
pub mod property_source;
pub mod saved_search_repository;
