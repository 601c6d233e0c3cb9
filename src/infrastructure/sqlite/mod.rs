pub mod migrations;
pub mod property_repo;
pub mod saved_search_repo;
