use anyhow::Result;
use custmap_engine::AppState;

use crate::args::OutputFormat;
use crate::handlers::{apply_collapse, select_scenario};
use crate::presentation::{presenters, render};

pub fn handle(
    mut state: AppState,
    format: OutputFormat,
    scenario: Option<&str>,
    collapse_all: bool,
    collapse: &[String],
) -> Result<()> {
    select_scenario(&mut state, scenario)?;
    apply_collapse(&mut state, collapse_all, collapse);
    let view_model = presenters::present_outline(&state);
    render::emit(format, &view_model, render::outline)
}
