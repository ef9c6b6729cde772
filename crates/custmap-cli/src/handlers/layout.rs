use std::collections::BTreeSet;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use custmap_engine::{AppState, Orientation, Viewport};
use custmap_types::NodeKind;

use crate::args::{FilterArgs, OutputFormat};
use crate::handlers::{apply_collapse, select_scenario};
use crate::presentation::view_models::LayoutViewModel;
use crate::presentation::render;

#[allow(clippy::too_many_arguments)]
pub fn handle(
    mut state: AppState,
    format: OutputFormat,
    scenario: Option<&str>,
    orientation: &str,
    hide: &[String],
    fit: Option<&str>,
    collapse_all: bool,
    collapse: &[String],
    filters: &FilterArgs,
) -> Result<()> {
    select_scenario(&mut state, scenario)?;
    state.set_filter(filters.to_state());

    let orientation = Orientation::from_str(orientation).map_err(anyhow::Error::msg)?;
    state.set_orientation(orientation);

    let mut kinds = BTreeSet::new();
    for raw in hide {
        let kind = NodeKind::from_str(raw).map_err(anyhow::Error::msg)?;
        kinds.insert(kind);
    }
    for kind in kinds {
        state.toggle_kind(kind);
    }

    apply_collapse(&mut state, collapse_all, collapse);

    let fit_transform = match fit {
        Some(spec) => {
            let viewport = parse_viewport(spec)?;
            state.request_fit();
            state.take_fit(viewport)
        }
        None => None,
    };

    let view_model = LayoutViewModel {
        scene: state.scene(),
        fit: fit_transform,
    };
    render::emit(format, &view_model, render::layout)
}

/// Parse a `WxH` viewport spec like `1280x720`.
fn parse_viewport(spec: &str) -> Result<Viewport> {
    let Some((width, height)) = spec.split_once(['x', 'X']) else {
        bail!("viewport must be WxH, got: {}", spec);
    };
    let width: f64 = width
        .trim()
        .parse()
        .with_context(|| format!("bad viewport width: {}", width))?;
    let height: f64 = height
        .trim()
        .parse()
        .with_context(|| format!("bad viewport height: {}", height))?;
    Ok(Viewport { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_viewport_specs() {
        let viewport = parse_viewport("1280x720").unwrap();
        assert_eq!(viewport.width, 1280.0);
        assert_eq!(viewport.height, 720.0);
        assert!(parse_viewport("1280").is_err());
        assert!(parse_viewport("axb").is_err());
    }
}
