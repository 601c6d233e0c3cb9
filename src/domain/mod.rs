pub mod analytics;
pub mod clusters;
pub mod comparables;
pub mod distribution;
pub mod entities;
pub mod error;
pub mod filtering;
pub mod pipeline;
pub mod ports;
pub mod ranking;
pub mod summary;
pub mod values;
#[cfg(test)]
pub(crate) mod fixtures;
