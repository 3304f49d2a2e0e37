//! The two dashboard reports.
//!
//! Each report is the set of four summary tables its charts are drawn from,
//! in grid order (top-left, top-right, bottom-left, bottom-right).

use serde::Serialize;
use tracing::debug;

use crate::aggregation::{AggregationOp, GroupKey, SummaryTable, ValueField, summarize};
use crate::dataset::{Dataset, SalesRecord};

/// Sales behaviour across all recession periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecessionReport {
    /// Mean sales per year.
    pub yearly_sales: SummaryTable,
    /// Mean sales per vehicle type.
    pub sales_by_vehicle: SummaryTable,
    /// Total advertising spend per vehicle type.
    pub ad_spend_by_vehicle: SummaryTable,
    /// Mean sales per (unemployment rate, vehicle type).
    pub sales_by_unemployment: SummaryTable,
}

impl RecessionReport {
    /// Aggregates the rows flagged as recession periods.
    #[tracing::instrument(skip(dataset))]
    pub fn build(dataset: &Dataset) -> Self {
        let rows: Vec<&SalesRecord> = dataset.recession_rows().collect();
        debug!(recession_rows = rows.len(), "Building recession report");

        Self {
            yearly_sales: summarize(
                rows.iter().copied(),
                GroupKey::Year,
                ValueField::AutomobileSales,
                AggregationOp::Mean,
            ),
            sales_by_vehicle: summarize(
                rows.iter().copied(),
                GroupKey::VehicleType,
                ValueField::AutomobileSales,
                AggregationOp::Mean,
            ),
            ad_spend_by_vehicle: summarize(
                rows.iter().copied(),
                GroupKey::VehicleType,
                ValueField::AdvertisingExpenditure,
                AggregationOp::Sum,
            ),
            sales_by_unemployment: summarize(
                rows.iter().copied(),
                GroupKey::UnemploymentRateByVehicleType,
                ValueField::AutomobileSales,
                AggregationOp::Mean,
            ),
        }
    }
}

/// All-time trends plus a breakdown of one selected year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyReport {
    pub year: i32,
    /// Mean sales per year over the whole table.
    pub sales_trend: SummaryTable,
    /// Total sales per month over the whole table.
    pub monthly_sales: SummaryTable,
    /// Mean sales per vehicle type within `year`.
    pub sales_by_vehicle: SummaryTable,
    /// Total advertising spend per vehicle type within `year`.
    pub ad_spend_by_vehicle: SummaryTable,
}

impl YearlyReport {
    #[tracing::instrument(skip(dataset))]
    pub fn build(dataset: &Dataset, year: i32) -> Self {
        let year_rows: Vec<&SalesRecord> = dataset.year_rows(year).collect();
        debug!(year_rows = year_rows.len(), "Building yearly report");

        Self {
            year,
            sales_trend: summarize(
                dataset.records(),
                GroupKey::Year,
                ValueField::AutomobileSales,
                AggregationOp::Mean,
            ),
            monthly_sales: summarize(
                dataset.records(),
                GroupKey::Month,
                ValueField::AutomobileSales,
                AggregationOp::Sum,
            ),
            sales_by_vehicle: summarize(
                year_rows.iter().copied(),
                GroupKey::VehicleType,
                ValueField::AutomobileSales,
                AggregationOp::Mean,
            ),
            ad_spend_by_vehicle: summarize(
                year_rows.iter().copied(),
                GroupKey::VehicleType,
                ValueField::AdvertisingExpenditure,
                AggregationOp::Sum,
            ),
        }
    }
}
