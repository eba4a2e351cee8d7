//! Subcommand implementations. Each returns the text to print.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as Json;
use tabledata::{parse_assignment, DataTable, TableConfig};

use crate::{FilterArgs, RenderArgs, TabsArgs};

const FALLBACK_WIDTH: usize = 80;

fn load_config(path: &Path) -> Result<TableConfig> {
    TableConfig::from_path(path).with_context(|| format!("loading table config {}", path.display()))
}

/// Reads a JSON array of rows.
fn load_rows(path: &Path) -> Result<Vec<Json>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading rows from {}", path.display()))?;
    let parsed: Json = serde_json::from_str(&source)
        .with_context(|| format!("parsing rows from {}", path.display()))?;
    match parsed {
        Json::Array(rows) => {
            tracing::debug!(rows = rows.len(), path = %path.display(), "rows loaded");
            Ok(rows)
        }
        _ => bail!("{} must contain a JSON array of rows", path.display()),
    }
}

fn build_table(config: &TableConfig) -> Result<DataTable<Json>> {
    Ok(config
        .to_builder::<Json>()
        .context("building table from config")?
        .build())
}

fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(FALLBACK_WIDTH)
}

pub fn render(args: &RenderArgs) -> Result<String> {
    let config = load_config(&args.config)?;
    let rows = load_rows(&args.data)?;
    let mut table = build_table(&config)?;
    if let Some(tab) = &args.tab {
        if table.tabs().index_of(tab).is_none() {
            tracing::warn!(tab = %tab, "no tab with this key, showing every row");
        }
        table.select_tab(tab);
    }

    if args.json {
        return Ok(serde_json::to_string_pretty(&table.view(&rows))?);
    }
    let width = args.width.unwrap_or_else(terminal_width);
    Ok(table.render_text(&rows, width, args.border))
}

pub fn filter(args: &FilterArgs) -> Result<String> {
    let config = load_config(&args.config)?;
    let mut table = build_table(&config)?;
    if table.filter_form().is_none() {
        bail!("{} configures no filters", args.config.display());
    }

    for assignment in &args.set {
        let (field, value) = parse_assignment(assignment)?;
        if !table.set_filter_value(field, value) {
            bail!("unknown filter '{}'", field);
        }
    }

    let Some(change) = table.submit_filters() else {
        bail!("{} configures no filters", args.config.display());
    };
    if args.json {
        Ok(serde_json::to_string_pretty(&change)?)
    } else {
        Ok(change.params.to_query_string())
    }
}

pub fn tabs(args: &TabsArgs) -> Result<String> {
    let config = load_config(&args.config)?;
    let rows = load_rows(&args.data)?;
    let table = build_table(&config)?;
    let active = table.active_tab_key();

    let lines: Vec<String> = table
        .tab_counts(&rows)
        .into_iter()
        .map(|c| {
            let marker = if active == Some(c.key.as_str()) { '*' } else { ' ' };
            format!("{} {}\t{}\t{}", marker, c.key, c.label, c.count)
        })
        .collect();
    Ok(lines.join("\n"))
}
