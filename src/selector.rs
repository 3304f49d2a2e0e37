//! Report-type / year selection logic.
//!
//! The dashboard has two controls: a report-type dropdown and a year
//! dropdown. Which view gets rendered, and whether the year dropdown is
//! usable, is decided here from the raw control values alone.

use std::fmt;
use std::ops::RangeInclusive;

pub const DASHBOARD_TITLE: &str = "Automobile Sales Statistics Dashboard";

pub const YEARLY_STATISTICS: &str = "Yearly Statistics";
pub const RECESSION_STATISTICS: &str = "Recession Period Statistics";
pub const REPORT_TYPE_PLACEHOLDER: &str = "Select a report type";
pub const YEAR_PLACEHOLDER: &str = "Select-year";

/// Text shown in place of the chart grid when the selection is incomplete.
pub const SELECTION_PROMPT: &str = "Please select appropriate inputs.";

pub const FIRST_YEAR: i32 = 1980;
pub const LAST_YEAR: i32 = 2023;

/// Report-type dropdown options, in display order.
pub const REPORT_TYPES: [&str; 2] = [YEARLY_STATISTICS, RECESSION_STATISTICS];

/// Year dropdown options.
pub fn year_options() -> RangeInclusive<i32> {
    FIRST_YEAR..=LAST_YEAR
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    /// No report type has been chosen yet.
    #[default]
    Uninitialized,
    RecessionMode,
    YearlyMode,
    Invalid,
}

impl ViewState {
    /// State reached after the report-type control takes `report_type`.
    ///
    /// The previous state never matters; only the new value does.
    pub fn from_report_type(report_type: Option<&str>) -> Self {
        match report_type {
            Some(YEARLY_STATISTICS) => ViewState::YearlyMode,
            Some(RECESSION_STATISTICS) => ViewState::RecessionMode,
            _ => ViewState::Invalid,
        }
    }

    pub fn year_selector_enabled(self) -> bool {
        self == ViewState::YearlyMode
    }
}

/// Whether the year dropdown accepts input for `report_type`.
pub fn compute_enablement(report_type: Option<&str>) -> bool {
    ViewState::from_report_type(report_type).year_selector_enabled()
}

/// Why a selection cannot be rendered as a chart grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidSelection {
    MissingReportType,
    UnknownReportType(String),
    MissingYear,
    UnparsableYear(String),
    YearOutOfRange(i32),
}

impl fmt::Display for InvalidSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidSelection::MissingReportType => write!(f, "no report type selected"),
            InvalidSelection::UnknownReportType(value) => {
                write!(f, "unknown report type '{value}'")
            }
            InvalidSelection::MissingYear => write!(f, "yearly statistics need a year"),
            InvalidSelection::UnparsableYear(value) => write!(f, "'{value}' is not a year"),
            InvalidSelection::YearOutOfRange(year) => {
                write!(f, "year {year} outside {FIRST_YEAR}-{LAST_YEAR}")
            }
        }
    }
}

/// Outcome of a selection: which grid to build, or the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDecision {
    Recession,
    Yearly { year: i32 },
    Prompt(InvalidSelection),
}

/// Raw values of the two controls at the moment of an interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSelection {
    pub report_type: Option<String>,
    pub selected_year: Option<String>,
}

impl ViewSelection {
    pub fn new(report_type: Option<&str>, selected_year: Option<&str>) -> Self {
        Self {
            report_type: report_type.map(str::to_string),
            selected_year: selected_year.map(str::to_string),
        }
    }

    pub fn state(&self) -> ViewState {
        ViewState::from_report_type(self.report_type.as_deref())
    }

    pub fn decide(&self) -> RenderDecision {
        match self.state() {
            ViewState::RecessionMode => RenderDecision::Recession,
            ViewState::YearlyMode => match parse_year(self.selected_year.as_deref()) {
                Ok(year) => RenderDecision::Yearly { year },
                Err(reason) => RenderDecision::Prompt(reason),
            },
            ViewState::Invalid | ViewState::Uninitialized => {
                let reason = match self.report_type.as_deref() {
                    None => InvalidSelection::MissingReportType,
                    Some(other) => InvalidSelection::UnknownReportType(other.to_string()),
                };
                RenderDecision::Prompt(reason)
            }
        }
    }
}

/// Parses the year control's value.
///
/// Blank values and the dropdown placeholder count as "no year".
pub fn parse_year(value: Option<&str>) -> Result<i32, InvalidSelection> {
    let value = match value.map(str::trim) {
        None | Some("") | Some(YEAR_PLACEHOLDER) => return Err(InvalidSelection::MissingYear),
        Some(v) => v,
    };

    let year: i32 = value
        .parse()
        .map_err(|_| InvalidSelection::UnparsableYear(value.to_string()))?;

    if year_options().contains(&year) {
        Ok(year)
    } else {
        Err(InvalidSelection::YearOutOfRange(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enablement_for_every_report_type_input() {
        assert!(compute_enablement(Some(YEARLY_STATISTICS)));
        assert!(!compute_enablement(Some(RECESSION_STATISTICS)));
        assert!(!compute_enablement(None));
        assert!(!compute_enablement(Some("Select Statistics")));
    }

    #[test]
    fn test_report_type_match_is_exact() {
        assert_eq!(
            ViewState::from_report_type(Some("yearly statistics")),
            ViewState::Invalid
        );
        assert_eq!(ViewState::from_report_type(Some("")), ViewState::Invalid);
    }

    #[test]
    fn test_default_state_is_uninitialized() {
        assert_eq!(ViewState::default(), ViewState::Uninitialized);
        assert!(!ViewState::Uninitialized.year_selector_enabled());
    }

    #[test]
    fn test_recession_ignores_year() {
        for year in [None, Some("1980"), Some("garbage"), Some(YEAR_PLACEHOLDER)] {
            let selection = ViewSelection::new(Some(RECESSION_STATISTICS), year);
            assert_eq!(selection.decide(), RenderDecision::Recession);
        }
    }

    #[test]
    fn test_yearly_requires_year() {
        let selection = ViewSelection::new(Some(YEARLY_STATISTICS), None);
        assert_eq!(
            selection.decide(),
            RenderDecision::Prompt(InvalidSelection::MissingYear)
        );

        let selection = ViewSelection::new(Some(YEARLY_STATISTICS), Some(" 1995 "));
        assert_eq!(selection.decide(), RenderDecision::Yearly { year: 1995 });
    }

    #[test]
    fn test_invalid_report_type_prompts_regardless_of_year() {
        for year in [None, Some("1980")] {
            assert_eq!(
                ViewSelection::new(None, year).decide(),
                RenderDecision::Prompt(InvalidSelection::MissingReportType)
            );
            assert_eq!(
                ViewSelection::new(Some("Monthly"), year).decide(),
                RenderDecision::Prompt(InvalidSelection::UnknownReportType("Monthly".into()))
            );
        }
    }

    #[test]
    fn test_parse_year_edges() {
        assert_eq!(parse_year(Some("1980")), Ok(1980));
        assert_eq!(parse_year(Some("2023")), Ok(2023));
        assert_eq!(parse_year(Some("1979")), Err(InvalidSelection::YearOutOfRange(1979)));
        assert_eq!(parse_year(Some("2024")), Err(InvalidSelection::YearOutOfRange(2024)));
        assert_eq!(parse_year(Some("   ")), Err(InvalidSelection::MissingYear));
        assert_eq!(parse_year(Some(YEAR_PLACEHOLDER)), Err(InvalidSelection::MissingYear));
        assert_eq!(
            parse_year(Some("19x0")),
            Err(InvalidSelection::UnparsableYear("19x0".into()))
        );
    }

    #[test]
    fn test_year_options_span() {
        let years: Vec<i32> = year_options().collect();
        assert_eq!(years.len(), 44);
        assert_eq!(years.first(), Some(&1980));
        assert_eq!(years.last(), Some(&2023));
    }
}
