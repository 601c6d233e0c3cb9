pub mod feature;
pub mod filter_spec;
pub mod property_type;
pub mod range;
pub mod risk_level;
pub mod scenario;
pub mod sort_key;
