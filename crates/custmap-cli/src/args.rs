use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use custmap_types::FilterState;

#[derive(Parser)]
#[command(name = "custmap")]
#[command(about = "Explore customer master-data hierarchies as positioned diagrams", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Scenario dataset (JSON array)
    #[arg(long, default_value = "data/customerData.json", global = true)]
    pub data: PathBuf,

    /// Reference master data with the filter domains
    #[arg(long, default_value = "data/reference_master_data.json", global = true)]
    pub reference: PathBuf,

    /// Optional color token overrides (defaults apply when missing)
    #[arg(long, default_value = "data/reference_colors.json", global = true)]
    pub colors: PathBuf,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the scenarios selectable under the given filters
    Scenarios {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the built hierarchy of a scenario as a collapsible outline
    Show {
        /// Scenario name (defaults to the boot selection)
        scenario: Option<String>,

        /// Collapse every collapsible node below the root
        #[arg(long)]
        collapse_all: bool,

        /// Collapse specific nodes by stable key (repeatable)
        #[arg(long = "collapse", value_name = "KEY")]
        collapse: Vec<String>,
    },

    /// Compute the positioned scene for a scenario
    Layout {
        /// Scenario name (defaults to the boot selection)
        scenario: Option<String>,

        /// Hierarchy axis: vertical or horizontal
        #[arg(long, default_value = "vertical")]
        orientation: String,

        /// Exclude a node kind entirely, edges included (repeatable)
        #[arg(long = "hide", value_name = "KIND")]
        hide: Vec<String>,

        /// Also compute the zoom-to-fit transform for a WxH viewport
        #[arg(long, value_name = "WxH")]
        fit: Option<String>,

        /// Collapse every collapsible node below the root
        #[arg(long)]
        collapse_all: bool,

        /// Collapse specific nodes by stable key (repeatable)
        #[arg(long = "collapse", value_name = "KEY")]
        collapse: Vec<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Inspect one object: classification, meaning, fields and raw record
    Inspect {
        /// Scenario name (defaults to the boot selection)
        scenario: Option<String>,

        /// Stable key of the node to inspect (defaults to the primary
        /// customer)
        #[arg(long, value_name = "KEY")]
        node: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the legend with the effective per-kind colors
    Legend,
}

#[derive(Debug, Clone, clap::Args)]
pub struct FilterArgs {
    /// Customer type predicate
    #[arg(long, value_name = "TYPE")]
    pub customer_type: Option<String>,

    /// Industry sector predicate
    #[arg(long, value_name = "SECTOR")]
    pub industry: Option<String>,

    /// Sales channel predicate (matched against accounts)
    #[arg(long, value_name = "CHANNEL")]
    pub channel: Option<String>,
}

impl FilterArgs {
    pub fn to_state(&self) -> FilterState {
        FilterState {
            customer_type: self.customer_type.clone(),
            industry_sector: self.industry.clone(),
            sales_channel: self.channel.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}
