//! File loading for the three input documents.
//!
//! Policy (what is fatal, what silently defaults) lives with the caller;
//! these functions only read and parse.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::record::Scenario;
use crate::reference::{ColorTheme, ReferenceData};

/// Load the scenario dataset. The document must be a JSON array.
pub fn load_dataset(path: &Path) -> Result<Vec<Scenario>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load the reference/domain document.
pub fn load_reference(path: &Path) -> Result<ReferenceData> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load the optional color-theme document and overlay it on the defaults.
pub fn load_theme(path: &Path) -> Result<ColorTheme> {
    let content = fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&content)?;
    Ok(ColorTheme::from_document(&document))
}
