//! Grouping and summarizing of sales rows.
//!
//! [`summarize`] is the single entry point: it groups a set of
//! [`SalesRecord`](crate::dataset::SalesRecord)s by one [`GroupKey`] and
//! reduces one [`ValueField`] per group, producing a [`SummaryTable`] that
//! a chart is drawn from.

pub mod summarize;
pub mod types;
pub mod utility;

pub use summarize::summarize;
pub use types::{AggregationOp, GroupKey, GroupValue, SummaryRow, SummaryTable, ValueField};
