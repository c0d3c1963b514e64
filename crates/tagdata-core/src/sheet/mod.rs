//! Spec-sheet field extraction module.

mod parser;
pub mod rules;

pub use parser::{ParsedSheet, SheetParser};
