pub mod config;
pub mod domain;
pub mod error;
pub mod fs;
pub mod grammar;
pub mod sources;
pub mod ui;

pub use error::{Result, VersionScoutError};
