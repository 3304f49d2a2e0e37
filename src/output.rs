//! Output formatting for rendered dashboard content.
//!
//! Supports JSON (for a drawing front-end) and plain-text tables (for the
//! console).

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::debug;

use crate::charts::ChartSpec;
use crate::render::{DashboardUpdate, RenderedContent};

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty(update: &DashboardUpdate) {
    debug!("{:#?}", update);
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Series")]
    series: String,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Writes the year-control state and each chart's data as markdown tables.
pub fn write_tables<W: Write>(mut writer: W, update: &DashboardUpdate) -> Result<()> {
    let state = if update.year_selector_enabled {
        "enabled"
    } else {
        "disabled"
    };
    writeln!(writer, "Year selector: {state}\n")?;

    match &update.content {
        RenderedContent::Prompt { message } => writeln!(writer, "{message}")?,
        RenderedContent::Grid(grid) => {
            for (r, row) in grid.rows.iter().enumerate() {
                for (c, chart) in row.iter().enumerate() {
                    write_chart(&mut writer, r + 1, c + 1, chart)?;
                }
            }
        }
    }

    Ok(())
}

fn write_chart<W: Write>(writer: &mut W, row: usize, col: usize, chart: &ChartSpec) -> Result<()> {
    writeln!(
        writer,
        "[{row},{col}] {} ({}): {} vs {}",
        chart.title,
        chart.kind.name(),
        chart.y_label,
        chart.x_label
    )?;

    let points: Vec<PointRow> = chart
        .traces
        .iter()
        .flat_map(|trace| {
            let series = trace.name.clone().unwrap_or_else(|| "-".to_string());
            trace.x.iter().zip(&trace.y).map(move |(x, y)| PointRow {
                series: series.clone(),
                key: x.to_string(),
                value: format!("{y:.2}"),
            })
        })
        .collect();

    if points.is_empty() {
        writeln!(writer, "(no data)\n")?;
        return Ok(());
    }

    let table = Table::new(points).with(Style::markdown()).to_string();
    writeln!(writer, "{table}\n")?;
    Ok(())
}
