pub mod json_file;
pub mod unit_api;
pub mod unit_mapping;
