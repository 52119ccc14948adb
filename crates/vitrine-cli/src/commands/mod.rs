pub mod blog;
pub mod categories;
pub mod config;
pub mod scroll;
