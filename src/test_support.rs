//! Shared fixtures for unit tests.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use chrono::Month;

use crate::dataset::{Dataset, SalesRecord};

pub fn record(
    year: i32,
    month: Month,
    vehicle_type: &str,
    automobile_sales: f64,
    advertising_expenditure: f64,
    recession: bool,
    unemployment_rate: f64,
) -> SalesRecord {
    SalesRecord {
        year,
        month,
        vehicle_type: vehicle_type.to_string(),
        automobile_sales,
        advertising_expenditure,
        recession,
        unemployment_rate,
    }
}

/// Small table spanning two years, with recession rows only in 1981.
pub fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        record(1980, Month::January, "Sports", 10.0, 100.0, false, 5.0),
        record(1980, Month::February, "Executivecar", 30.0, 300.0, false, 5.5),
        record(1980, Month::January, "Sports", 20.0, 50.0, false, 5.0),
        record(1981, Month::March, "Executivecar", 6.0, 60.0, true, 7.5),
        record(1981, Month::January, "Sports", 2.0, 20.0, true, 7.5),
        record(1981, Month::March, "Sports", 4.0, 40.0, true, 6.0),
    ])
}

/// Table with no recession rows at all.
pub fn boom_dataset() -> Dataset {
    Dataset::new(vec![
        record(1990, Month::May, "Sports", 12.0, 10.0, false, 4.0),
        record(1991, Month::June, "Mediumfamilycar", 18.0, 30.0, false, 4.2),
    ])
}
