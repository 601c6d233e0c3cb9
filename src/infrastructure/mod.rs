pub mod sources;
pub mod sqlite;
