//! Data types produced by the aggregation engine.

use serde::Serialize;
use std::fmt;

use crate::dataset::SalesRecord;

/// Column (or column pair) rows are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    Year,
    Month,
    VehicleType,
    /// Composite key; the vehicle type becomes the series of each row.
    UnemploymentRateByVehicleType,
}

impl GroupKey {
    pub fn label(self) -> &'static str {
        match self {
            GroupKey::Year => "Year",
            GroupKey::Month => "Month",
            GroupKey::VehicleType => "Vehicle Type",
            GroupKey::UnemploymentRateByVehicleType => "Unemployment Rate",
        }
    }

    /// Label of the secondary key, for composite groupings.
    pub fn series_label(self) -> Option<&'static str> {
        match self {
            GroupKey::UnemploymentRateByVehicleType => Some("Vehicle Type"),
            _ => None,
        }
    }
}

/// Numeric column being aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueField {
    AutomobileSales,
    AdvertisingExpenditure,
}

impl ValueField {
    pub fn label(self) -> &'static str {
        match self {
            ValueField::AutomobileSales => "Automobile Sales",
            ValueField::AdvertisingExpenditure => "Advertising Expenditure",
        }
    }

    pub fn value(self, record: &SalesRecord) -> f64 {
        match self {
            ValueField::AutomobileSales => record.automobile_sales,
            ValueField::AdvertisingExpenditure => record.advertising_expenditure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationOp {
    Mean,
    Sum,
}

/// Value of a group key as it appears on a chart axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GroupValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl fmt::Display for GroupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupValue::Integer(v) => write!(f, "{v}"),
            GroupValue::Number(v) => write!(f, "{v}"),
            GroupValue::Text(v) => f.write_str(v),
        }
    }
}

/// One group of a [`SummaryTable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub key: GroupValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    pub value: f64,
    /// Number of source rows in the group; never zero.
    pub count: usize,
}

/// Grouped and aggregated view of a set of sales rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    pub group_key: GroupKey,
    pub value_field: ValueField,
    pub op: AggregationOp,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Aggregated value for `key` in a table without series.
    pub fn get(&self, key: &GroupValue) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.series.is_none() && &row.key == key)
            .map(|row| row.value)
    }
}
