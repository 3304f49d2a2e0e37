//! Turns a control selection into the dashboard's output region.
//!
//! [`render_view`] is the whole pipeline: selection → report → four charts
//! → 2×2 grid, or the selection prompt when the inputs are incomplete.

use serde::Serialize;
use tracing::{debug, info};

use crate::charts::ChartSpec;
use crate::dataset::Dataset;
use crate::reports::{RecessionReport, YearlyReport};
use crate::selector::{RenderDecision, SELECTION_PROMPT, ViewSelection, compute_enablement};

/// Four charts laid out as two rows of two.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGrid {
    pub rows: [[ChartSpec; 2]; 2],
}

impl ChartGrid {
    /// Places `charts` row-major: first two on top, last two below.
    pub fn new(charts: [ChartSpec; 4]) -> Self {
        let [a, b, c, d] = charts;
        Self {
            rows: [[a, b], [c, d]],
        }
    }

    /// Charts in grid order.
    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.rows.iter().flatten()
    }
}

/// Content of the dashboard's output region.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderedContent {
    Grid(ChartGrid),
    Prompt { message: String },
}

impl RenderedContent {
    pub fn grid(&self) -> Option<&ChartGrid> {
        match self {
            RenderedContent::Grid(grid) => Some(grid),
            RenderedContent::Prompt { .. } => None,
        }
    }

    pub fn prompt(&self) -> Option<&str> {
        match self {
            RenderedContent::Prompt { message } => Some(message),
            RenderedContent::Grid(_) => None,
        }
    }
}

/// Both outputs of one interaction: year control state and output region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardUpdate {
    pub year_selector_enabled: bool,
    pub content: RenderedContent,
}

impl DashboardUpdate {
    pub fn new(report_type: Option<&str>, selected_year: Option<&str>, dataset: &Dataset) -> Self {
        Self {
            year_selector_enabled: compute_enablement(report_type),
            content: render_view(report_type, selected_year, dataset),
        }
    }
}

pub fn recession_charts(report: &RecessionReport) -> ChartGrid {
    ChartGrid::new([
        ChartSpec::line(
            "Yearly Average Automobile Sales During Recession",
            &report.yearly_sales,
        ),
        ChartSpec::bar(
            "Average Vehicle Sales by Vehicle Type During Recession",
            &report.sales_by_vehicle,
        ),
        ChartSpec::pie(
            "Advertising Expenditure Share by Vehicle Type During Recession",
            &report.ad_spend_by_vehicle,
        ),
        ChartSpec::bar(
            "Effect of Unemployment Rate on Vehicle Type and Sales",
            &report.sales_by_unemployment,
        )
        .with_labels("Unemployment Rate", "Average Automobile Sales"),
    ])
}

pub fn yearly_charts(report: &YearlyReport) -> ChartGrid {
    ChartGrid::new([
        ChartSpec::line("Average Automobile Sales Over the Years", &report.sales_trend),
        ChartSpec::line("Total Monthly Automobile Sales", &report.monthly_sales),
        ChartSpec::bar(
            format!(
                "Average Vehicles Sold by Vehicle Type in the year {}",
                report.year
            ),
            &report.sales_by_vehicle,
        ),
        ChartSpec::pie(
            "Total Advertisement Expenditure for Each Vehicle",
            &report.ad_spend_by_vehicle,
        ),
    ])
}

/// Renders the output region for the raw control values.
///
/// Never fails: incomplete or unknown selections become the prompt, and
/// empty aggregations become empty charts.
pub fn render_view(
    report_type: Option<&str>,
    selected_year: Option<&str>,
    dataset: &Dataset,
) -> RenderedContent {
    render_selection(&ViewSelection::new(report_type, selected_year), dataset)
}

#[tracing::instrument(skip(dataset, selection), fields(report_type = ?selection.report_type, selected_year = ?selection.selected_year))]
pub fn render_selection(selection: &ViewSelection, dataset: &Dataset) -> RenderedContent {
    match selection.decide() {
        RenderDecision::Recession => {
            let grid = recession_charts(&RecessionReport::build(dataset));
            info!(empty_charts = count_empty(&grid), "Rendered recession view");
            RenderedContent::Grid(grid)
        }
        RenderDecision::Yearly { year } => {
            let grid = yearly_charts(&YearlyReport::build(dataset, year));
            info!(year, empty_charts = count_empty(&grid), "Rendered yearly view");
            RenderedContent::Grid(grid)
        }
        RenderDecision::Prompt(reason) => {
            debug!(%reason, "Selection incomplete, showing prompt");
            RenderedContent::Prompt {
                message: SELECTION_PROMPT.to_string(),
            }
        }
    }
}

fn count_empty(grid: &ChartGrid) -> usize {
    grid.charts().filter(|c| c.is_empty()).count()
}
