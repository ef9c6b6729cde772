use anyhow::{Result, bail};
use custmap_engine::{AppState, NodeKey, find_node_value};

use crate::args::{FilterArgs, OutputFormat};
use crate::handlers::select_scenario;
use crate::presentation::{presenters, render};

pub fn handle(
    mut state: AppState,
    format: OutputFormat,
    scenario: Option<&str>,
    node: Option<&str>,
    filters: &FilterArgs,
) -> Result<()> {
    select_scenario(&mut state, scenario)?;
    state.set_filter(filters.to_state());

    if let Some(raw_key) = node {
        let key = NodeKey::new(raw_key);
        let resolves = state
            .current_scenario()
            .and_then(|scenario| find_node_value(scenario, &key))
            .is_some();
        if !resolves {
            bail!("unknown node key: {}", raw_key);
        }
        state.select_node(Some(key));
    }

    let view_model = presenters::present_inspector(&state);
    render::emit(format, &view_model, render::inspector)
}
