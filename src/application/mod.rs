pub mod analytics;
pub mod catalog;
pub mod clusters;
pub mod explore;
pub mod import;
pub mod saved_searches;
pub mod scenario;
