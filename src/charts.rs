//! Chart specifications for the dashboard.
//!
//! A [`ChartSpec`] is a display-agnostic description of one chart: its kind,
//! title, axis labels, and the traces to draw. Specs are built from
//! [`SummaryTable`]s and serialize to JSON for whatever surface draws them.

use serde::Serialize;

use crate::aggregation::{GroupValue, SummaryTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

/// One drawable series. For pie charts `x` holds slice names and `y`
/// slice values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<GroupValue>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Dimension that splits bars into colored series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_label: Option<String>,
    pub traces: Vec<Trace>,
}

impl ChartSpec {
    /// Line chart over a time-ordered key.
    pub fn line(title: impl Into<String>, table: &SummaryTable) -> Self {
        Self::from_table(ChartKind::Line, title.into(), table)
    }

    /// Bar chart; composite tables get one colored trace per series.
    pub fn bar(title: impl Into<String>, table: &SummaryTable) -> Self {
        Self::from_table(ChartKind::Bar, title.into(), table)
    }

    /// Pie chart with one slice per group.
    pub fn pie(title: impl Into<String>, table: &SummaryTable) -> Self {
        Self::from_table(ChartKind::Pie, title.into(), table)
    }

    pub fn with_labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
        self
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.traces.iter().all(|t| t.x.is_empty())
    }

    fn from_table(kind: ChartKind, title: String, table: &SummaryTable) -> Self {
        ChartSpec {
            kind,
            title,
            x_label: table.group_key.label().to_string(),
            y_label: table.value_field.label().to_string(),
            color_label: table.group_key.series_label().map(str::to_string),
            traces: traces(table),
        }
    }
}

/// Splits table rows into traces by series, in first-seen series order.
fn traces(table: &SummaryTable) -> Vec<Trace> {
    let mut out: Vec<Trace> = Vec::new();

    for row in &table.rows {
        let pos = match out.iter().position(|t| t.name == row.series) {
            Some(pos) => pos,
            None => {
                out.push(Trace {
                    name: row.series.clone(),
                    x: Vec::new(),
                    y: Vec::new(),
                });
                out.len() - 1
            }
        };
        out[pos].x.push(row.key.clone());
        out[pos].y.push(row.value);
    }

    out
}
