use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::{handlers, loader};

pub fn run(cli: Cli) -> Result<()> {
    let state = loader::bootstrap(&cli.data, &cli.reference, &cli.colors)?;

    match cli.command {
        Commands::Scenarios { ref filters } => {
            handlers::scenarios::handle(state, cli.format, filters)
        }
        Commands::Show {
            ref scenario,
            collapse_all,
            ref collapse,
        } => handlers::show::handle(state, cli.format, scenario.as_deref(), collapse_all, collapse),
        Commands::Layout {
            ref scenario,
            ref orientation,
            ref hide,
            ref fit,
            collapse_all,
            ref collapse,
            ref filters,
        } => handlers::layout::handle(
            state,
            cli.format,
            scenario.as_deref(),
            orientation,
            hide,
            fit.as_deref(),
            collapse_all,
            collapse,
            filters,
        ),
        Commands::Inspect {
            ref scenario,
            ref node,
            ref filters,
        } => handlers::inspect::handle(
            state,
            cli.format,
            scenario.as_deref(),
            node.as_deref(),
            filters,
        ),
        Commands::Legend => handlers::legend::handle(state, cli.format),
    }
}
