use anyhow::Result;
use custmap_engine::AppState;

use crate::args::OutputFormat;
use crate::presentation::{presenters, render};

pub fn handle(state: AppState, format: OutputFormat) -> Result<()> {
    let view_model = presenters::present_legend(&state);
    render::emit(format, &view_model, render::legend)
}
