// Library root: re-exports all modules so integration tests and external
// consumers can access the crate's public API.

pub mod config;
pub mod ranking;
pub mod render;
pub mod roster;
pub mod schema;
pub mod table;
