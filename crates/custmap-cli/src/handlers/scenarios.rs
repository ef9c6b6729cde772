use anyhow::Result;
use custmap_engine::AppState;

use crate::args::{FilterArgs, OutputFormat};
use crate::presentation::{presenters, render};

pub fn handle(mut state: AppState, format: OutputFormat, filters: &FilterArgs) -> Result<()> {
    state.set_filter(filters.to_state());
    let view_model = presenters::present_scenario_list(&state);
    render::emit(format, &view_model, render::scenario_list)
}
