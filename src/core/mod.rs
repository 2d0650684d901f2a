pub mod client;
pub mod persistence;
