pub mod aggregation;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod fetch;
pub mod output;
pub mod render;
pub mod reports;
pub mod selector;

#[cfg(test)]
mod test_support;

pub use dataset::Dataset;
pub use render::{DashboardUpdate, RenderedContent, render_view};
pub use selector::compute_enablement;
