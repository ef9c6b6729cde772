//! Output rendering: JSON verbatim, or plain text with optional color.

use std::fmt::Write as _;
use std::io::stdout;

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::{AnsiColors, OwoColorize};
use serde::Serialize;

use custmap_types::NodeKind;

use super::view_models::{
    InspectorViewModel, KeyValue, LayoutViewModel, LegendViewModel, OutlineViewModel,
    ScenarioListViewModel, Section,
};
use crate::args::OutputFormat;

/// Emit a view model: pretty JSON, or the given plain formatter with color
/// enabled only on a terminal.
pub fn emit<T: Serialize>(
    format: OutputFormat,
    view_model: &T,
    plain: impl FnOnce(&T, bool) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view_model)?),
        OutputFormat::Plain => {
            let color = stdout().is_terminal();
            print!("{}", plain(view_model, color));
        }
    }
    Ok(())
}

fn kind_color(kind: NodeKind) -> AnsiColors {
    match kind {
        NodeKind::GlobalCustomer => AnsiColors::Yellow,
        NodeKind::Customer => AnsiColors::Blue,
        NodeKind::Account => AnsiColors::Magenta,
        NodeKind::Contract => AnsiColors::Green,
        NodeKind::Billing => AnsiColors::Red,
        NodeKind::Address => AnsiColors::Cyan,
        NodeKind::Contact => AnsiColors::BrightBlue,
        NodeKind::Platform => AnsiColors::White,
    }
}

fn paint(text: &str, color: AnsiColors, enabled: bool) -> String {
    if enabled {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

fn dim(text: &str, enabled: bool) -> String {
    if enabled {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub fn scenario_list(view_model: &ScenarioListViewModel, color: bool) -> String {
    let mut out = String::new();
    if view_model.entries.is_empty() {
        let _ = writeln!(out, "no scenarios loaded");
        return out;
    }
    for entry in &view_model.entries {
        let marker = if entry.matches_filters {
            paint("ok   ", AnsiColors::Green, color)
        } else {
            paint("check", AnsiColors::Yellow, color)
        };
        let _ = writeln!(
            out,
            "{}  {}  {}",
            marker,
            entry.name,
            dim(
                &format!(
                    "{} · {} · {}",
                    entry.customer_type, entry.industry_sector, entry.dominant_channel
                ),
                color
            )
        );
    }
    out
}

pub fn outline(view_model: &OutlineViewModel, color: bool) -> String {
    let mut out = String::new();
    let Some(scenario) = &view_model.scenario else {
        let _ = writeln!(out, "no scenario selected");
        return out;
    };
    let _ = writeln!(out, "{}", scenario);
    for row in &view_model.rows {
        let indent = "  ".repeat(row.depth);
        let affix = if row.collapsible {
            if row.collapsed { "[+]" } else { "[-]" }
        } else {
            "   "
        };
        let _ = writeln!(
            out,
            "{}{} {} {}  {}",
            indent,
            affix,
            paint(row.kind.as_str(), kind_color(row.kind), color),
            row.title,
            dim(&row.line1, color)
        );
    }
    out
}

pub fn layout(view_model: &LayoutViewModel, color: bool) -> String {
    let mut out = String::new();
    let Some(scene) = &view_model.scene else {
        let _ = writeln!(out, "no scenario selected");
        return out;
    };
    let _ = writeln!(
        out,
        "{}  {}  {} nodes, {} edges",
        scene.scenario,
        dim(scene.orientation.as_str(), color),
        scene.nodes.len(),
        scene.edges.len()
    );
    if let Some(bounds) = &scene.bounds {
        let _ = writeln!(
            out,
            "bounds: {:.0} x {:.0}",
            bounds.width(),
            bounds.height()
        );
    }
    if let Some(fit) = &view_model.fit {
        let _ = writeln!(
            out,
            "fit: scale {:.3}, translate ({:.1}, {:.1})",
            fit.scale, fit.translate_x, fit.translate_y
        );
    }
    for node in &scene.nodes {
        let label = format!("{} {}", node.kind.as_str(), node.title);
        let label = if node.dimmed { dim(&label, color) } else { paint(&label, kind_color(node.kind), color) };
        let _ = writeln!(out, "{:>9.1} {:>9.1}  {}", node.x, node.y, label);
    }
    out
}

pub fn inspector(view_model: &InspectorViewModel, color: bool) -> String {
    let mut out = String::new();
    let c = &view_model.classification;
    let _ = writeln!(
        out,
        "[customerType: {}] [industry: {}] [channel: {}]",
        c.customer_type, c.industry_sector, c.sales_channel
    );
    let dq = if view_model.data_quality_ok {
        paint("DQ: OK", AnsiColors::Green, color)
    } else {
        paint("DQ: CHECK", AnsiColors::Yellow, color)
    };
    let _ = writeln!(out, "{}", dq);

    match (&view_model.meaning.title, &view_model.meaning.definition) {
        (Some(title), Some(definition)) => {
            let _ = writeln!(out, "\n{}", title);
            let _ = writeln!(out, "{}", definition);
            if let Some(contact) = &view_model.meaning.primary_contact {
                let _ = writeln!(out, "Primary contact: {}", contact);
            }
        }
        _ => {
            let _ = writeln!(
                out,
                "\nNo standard channel definition found for {}.",
                view_model.meaning.channel
            );
        }
    }

    let _ = writeln!(out, "\nSummary");
    write_pairs(&mut out, &view_model.summary, color);

    for section in &view_model.sections {
        write_section(&mut out, section, color);
    }
    if !view_model.key_rows.is_empty() {
        let _ = writeln!(out, "\nKey fields");
        write_pairs(&mut out, &view_model.key_rows, color);
    }

    let raw = serde_json::to_string_pretty(&view_model.raw).unwrap_or_default();
    let _ = writeln!(out, "\nRaw record\n{}", dim(&raw, color));
    out
}

fn write_section(out: &mut String, section: &Section, color: bool) {
    let _ = writeln!(out, "\n{}", section.title);
    if section.items.is_empty() {
        let _ = writeln!(out, "  (no data)");
        return;
    }
    write_pairs(out, &section.items, color);
}

fn write_pairs(out: &mut String, pairs: &[KeyValue], color: bool) {
    for pair in pairs {
        let _ = writeln!(out, "  {}: {}", dim(&pair.key, color), pair.value);
    }
}

pub fn legend(view_model: &LegendViewModel, color: bool) -> String {
    let mut out = String::new();
    for entry in &view_model.entries {
        let state = if entry.hidden { " (hidden)" } else { "" };
        let _ = writeln!(
            out,
            "{} {}  {}{}",
            paint("■", kind_color(entry.kind), color),
            entry.label,
            dim(&entry.color, color),
            state
        );
    }
    out
}
