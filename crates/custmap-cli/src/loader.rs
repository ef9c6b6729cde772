//! Startup loading of the three input documents.
//!
//! Dataset and reference failures are fatal; the color theme is advisory and
//! silently falls back to the defaults. An empty dataset is tolerated with a
//! warning so the commands can still answer with empty output.

use std::path::Path;

use anyhow::{Context, Result};
use custmap_engine::AppState;
use custmap_types::load;

pub fn bootstrap(data: &Path, reference: &Path, colors: &Path) -> Result<AppState> {
    let dataset = load::load_dataset(data)
        .with_context(|| format!("failed to load dataset from {}", data.display()))?;
    let reference_data = load::load_reference(reference)
        .with_context(|| format!("failed to load reference data from {}", reference.display()))?;
    let theme = load::load_theme(colors).unwrap_or_default();

    if dataset.is_empty() {
        eprintln!("warning: dataset {} is empty, nothing to draw", data.display());
    }

    Ok(AppState::new(dataset, reference_data, theme))
}
