//! Data models: the canonical record schema and run configuration.

pub mod config;
pub mod record;

pub use config::TagdataConfig;
pub use record::{FieldSet, COLUMNS};
