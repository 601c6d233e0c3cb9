pub mod commands;
pub mod filter_args;
