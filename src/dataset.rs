//! Historical automobile sales table.
//!
//! The table is parsed once from CSV and then shared as a read-only
//! [`Dataset`] handle. Every view is computed from this handle; nothing
//! mutates it after load.

use anyhow::{Context, Result, anyhow, bail};
use chrono::Month;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::fetch::{BasicClient, HttpClient, fetch_bytes};
use crate::selector::{FIRST_YEAR, LAST_YEAR};

/// Location of the published historical sales CSV.
pub const DEFAULT_DATASET_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBMDeveloperSkillsNetwork-DV0101EN-SkillsNetwork/Data%20Files/historical_automobile_sales.csv";

/// Columns read from the source CSV. Any other column is ignored.
#[derive(Debug, Deserialize)]
struct RawSalesRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "Vehicle_Type")]
    vehicle_type: String,
    #[serde(rename = "Automobile_Sales")]
    automobile_sales: f64,
    #[serde(rename = "Advertising_Expenditure")]
    advertising_expenditure: f64,
    #[serde(rename = "Recession")]
    recession: f64,
    unemployment_rate: f64,
}

/// One validated row of the sales table.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub year: i32,
    pub month: Month,
    pub vehicle_type: String,
    pub automobile_sales: f64,
    pub advertising_expenditure: f64,
    pub recession: bool,
    pub unemployment_rate: f64,
}

impl SalesRecord {
    fn from_raw(raw: RawSalesRow) -> Result<Self> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&raw.year) {
            bail!("year {} outside {FIRST_YEAR}-{LAST_YEAR}", raw.year);
        }

        let month = raw
            .month
            .parse::<Month>()
            .map_err(|_| anyhow!("unknown month '{}'", raw.month))?;

        if raw.vehicle_type.is_empty() {
            bail!("missing Vehicle_Type");
        }

        Ok(Self {
            year: raw.year,
            month,
            vehicle_type: raw.vehicle_type,
            automobile_sales: non_negative("Automobile_Sales", raw.automobile_sales)?,
            advertising_expenditure: non_negative(
                "Advertising_Expenditure",
                raw.advertising_expenditure,
            )?,
            recession: recession_flag(raw.recession)?,
            unemployment_rate: non_negative("unemployment_rate", raw.unemployment_rate)?,
        })
    }
}

fn non_negative(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(anyhow!("{field} must be a non-negative number, got {value}"))
    }
}

/// Accepts `0`/`1` in any numeric spelling (`1`, `1.0`, ...).
fn recession_flag(value: f64) -> Result<bool> {
    if value == 0.0 {
        Ok(false)
    } else if value == 1.0 {
        Ok(true)
    } else {
        Err(anyhow!("Recession must be 0 or 1, got {value}"))
    }
}

/// Parses the sales CSV into validated records.
///
/// # Errors
///
/// Any malformed or invalid row fails the whole parse; there is no
/// partial-data mode.
pub fn parse_sales_csv(bytes: &[u8]) -> Result<Vec<SalesRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize::<RawSalesRow>().enumerate() {
        // header occupies line 1
        let line = idx + 2;
        let raw = result.with_context(|| format!("malformed sales row at line {line}"))?;
        let record =
            SalesRecord::from_raw(raw).with_context(|| format!("invalid sales row at line {line}"))?;
        records.push(record);
    }

    Ok(records)
}

/// Shared, immutable handle to the full sales table.
///
/// Cloning is cheap; all clones see the same rows.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[SalesRecord]>,
}

impl Dataset {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn from_csv(bytes: &[u8]) -> Result<Self> {
        Ok(Self::new(parse_sales_csv(bytes)?))
    }

    /// Loads the table from an `http(s)` URL or a local file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or fails to parse.
    /// Callers treat this as fatal.
    pub async fn load(source: &str) -> Result<Self> {
        let client = BasicClient::new()?;
        Self::load_with_client(&client, source).await
    }

    /// Same as [`Dataset::load`], fetching remote sources through `client`.
    #[tracing::instrument(skip(client, source), fields(source = %source))]
    pub async fn load_with_client<C: HttpClient>(client: &C, source: &str) -> Result<Self> {
        let bytes = if source.starts_with("http://") || source.starts_with("https://") {
            fetch_bytes(client, source)
                .await
                .with_context(|| format!("failed to fetch dataset from {source}"))?
        } else {
            tokio::fs::read(source)
                .await
                .with_context(|| format!("failed to read dataset file {source}"))?
        };

        let dataset = Self::from_csv(&bytes).context("failed to parse sales dataset")?;
        info!(
            records = dataset.len(),
            recession_records = dataset.recession_rows().count(),
            vehicle_types = ?dataset.vehicle_types(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows flagged as falling in a recession period.
    pub fn recession_rows(&self) -> impl Iterator<Item = &SalesRecord> {
        self.records.iter().filter(|r| r.recession)
    }

    pub fn year_rows(&self, year: i32) -> impl Iterator<Item = &SalesRecord> {
        self.records.iter().filter(move |r| r.year == year)
    }

    /// Distinct years present, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Distinct vehicle types in first-seen order.
    pub fn vehicle_types(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for r in self.records.iter() {
            if !seen.contains(&r.vehicle_type.as_str()) {
                seen.push(&r.vehicle_type);
            }
        }
        seen
    }
}
