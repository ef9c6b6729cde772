pub mod inspect;
pub mod layout;
pub mod legend;
pub mod scenarios;
pub mod show;

use anyhow::{Result, bail};
use custmap_engine::{AppState, NodeKey};

/// Switch to the requested scenario, keeping the boot selection when none is
/// given.
pub(crate) fn select_scenario(state: &mut AppState, scenario: Option<&str>) -> Result<()> {
    if let Some(name) = scenario
        && !state.select_scenario(name)
    {
        bail!("unknown scenario: {}", name);
    }
    Ok(())
}

/// Apply the collapse flags shared by `show` and `layout`.
pub(crate) fn apply_collapse(state: &mut AppState, collapse_all: bool, keys: &[String]) {
    if collapse_all {
        state.collapse_all();
    }
    for key in keys {
        state.toggle_collapse(NodeKey::new(key.clone()));
    }
}
