use crate::aggregation::types::{
    AggregationOp, GroupKey, GroupValue, SummaryRow, SummaryTable, ValueField,
};
use crate::aggregation::utility::{mean, sum};
use crate::dataset::SalesRecord;
use chrono::Month;
use std::collections::HashMap;

/// Hashable identity of a group while rows are being accumulated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum GroupId {
    Year(i32),
    Month(Month),
    Vehicle(String),
    /// Unemployment rate stored as raw bits.
    RateVehicle(u64, String),
}

impl GroupId {
    fn of(group_key: GroupKey, record: &SalesRecord) -> Self {
        match group_key {
            GroupKey::Year => GroupId::Year(record.year),
            GroupKey::Month => GroupId::Month(record.month),
            GroupKey::VehicleType => GroupId::Vehicle(record.vehicle_type.clone()),
            GroupKey::UnemploymentRateByVehicleType => {
                // + 0.0 folds -0.0 into 0.0 so both land in one group
                let rate = record.unemployment_rate + 0.0;
                GroupId::RateVehicle(rate.to_bits(), record.vehicle_type.clone())
            }
        }
    }

    /// Axis position for time-like and numeric keys; `None` keeps first-seen order.
    fn sort_position(&self) -> Option<f64> {
        match self {
            GroupId::Year(y) => Some(f64::from(*y)),
            GroupId::Month(m) => Some(f64::from(m.number_from_month())),
            GroupId::RateVehicle(bits, _) => Some(f64::from_bits(*bits)),
            GroupId::Vehicle(_) => None,
        }
    }

    fn into_key(self) -> (GroupValue, Option<String>) {
        match self {
            GroupId::Year(y) => (GroupValue::Integer(i64::from(y)), None),
            GroupId::Month(m) => (GroupValue::Text(m.name()[..3].to_string()), None),
            GroupId::Vehicle(v) => (GroupValue::Text(v), None),
            GroupId::RateVehicle(bits, v) => (GroupValue::Number(f64::from_bits(bits)), Some(v)),
        }
    }
}

struct Acc {
    id: GroupId,
    values: Vec<f64>,
}

/// Groups `rows` by `group_key` and aggregates `value_field` with `op`.
///
/// Only groups with at least one row appear in the result. Year, month and
/// unemployment-rate keys come out ascending; vehicle types keep the order
/// they were first seen in. The result depends only on the input rows and
/// their order.
pub fn summarize<'a, I>(
    rows: I,
    group_key: GroupKey,
    value_field: ValueField,
    op: AggregationOp,
) -> SummaryTable
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut index: HashMap<GroupId, usize> = HashMap::new();
    let mut groups: Vec<Acc> = Vec::new();

    for record in rows {
        let id = GroupId::of(group_key, record);
        let slot = *index.entry(id.clone()).or_insert_with(|| {
            groups.push(Acc {
                id,
                values: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].values.push(value_field.value(record));
    }

    // stable: equal positions (one rate, several vehicles) keep first-seen order
    groups.sort_by(|a, b| {
        let x = a.id.sort_position().unwrap_or(0.0);
        let y = b.id.sort_position().unwrap_or(0.0);
        x.total_cmp(&y)
    });

    let rows = groups
        .into_iter()
        .map(|acc| {
            let value = match op {
                AggregationOp::Mean => mean(&acc.values),
                AggregationOp::Sum => sum(&acc.values),
            };
            let count = acc.values.len();
            let (key, series) = acc.id.into_key();
            SummaryRow {
                key,
                series,
                value,
                count,
            }
        })
        .collect();

    SummaryTable {
        group_key,
        value_field,
        op,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{record, sample_dataset};

    #[test]
    fn test_mean_by_year_matches_arithmetic_mean() {
        let dataset = sample_dataset();
        let table = summarize(
            dataset.records(),
            GroupKey::Year,
            ValueField::AutomobileSales,
            AggregationOp::Mean,
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&GroupValue::Integer(1980)), Some(20.0));
        assert_eq!(table.get(&GroupValue::Integer(1981)), Some(4.0));
        assert_eq!(table.rows[0].count, 3);
    }

    #[test]
    fn test_sum_by_vehicle_type_first_seen_order() {
        let dataset = sample_dataset();
        let table = summarize(
            dataset.records(),
            GroupKey::VehicleType,
            ValueField::AdvertisingExpenditure,
            AggregationOp::Sum,
        );

        let keys: Vec<String> = table.rows.iter().map(|r| r.key.to_string()).collect();
        assert_eq!(keys, vec!["Sports", "Executivecar"]);
        assert_eq!(table.rows[0].value, 210.0);
        assert_eq!(table.rows[1].value, 360.0);
    }

    #[test]
    fn test_month_groups_follow_calendar_order() {
        let rows = vec![
            record(1990, Month::December, "Sports", 1.0, 0.0, false, 3.0),
            record(1990, Month::April, "Sports", 2.0, 0.0, false, 3.0),
            record(1991, Month::August, "Sports", 3.0, 0.0, false, 3.0),
            record(1991, Month::April, "Sports", 4.0, 0.0, false, 3.0),
        ];
        let table = summarize(
            &rows,
            GroupKey::Month,
            ValueField::AutomobileSales,
            AggregationOp::Sum,
        );

        let keys: Vec<String> = table.rows.iter().map(|r| r.key.to_string()).collect();
        assert_eq!(keys, vec!["Apr", "Aug", "Dec"]);
        assert_eq!(table.get(&GroupValue::Text("Apr".into())), Some(6.0));
    }

    #[test]
    fn test_month_labels_are_three_letter_abbreviations() {
        let rows: Vec<SalesRecord> = (1..=12u8)
            .rev()
            .map(|n| {
                let month = Month::try_from(n).unwrap();
                record(1990, month, "Sports", 1.0, 0.0, false, 3.0)
            })
            .collect();
        let table = summarize(
            &rows,
            GroupKey::Month,
            ValueField::AutomobileSales,
            AggregationOp::Sum,
        );

        let keys: Vec<String> = table.rows.iter().map(|r| r.key.to_string()).collect();
        assert_eq!(
            keys,
            vec![
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"
            ]
        );
    }

    #[test]
    fn test_years_sorted_ascending_regardless_of_input_order() {
        let rows = vec![
            record(2001, Month::May, "Sports", 1.0, 0.0, false, 3.0),
            record(1985, Month::May, "Sports", 2.0, 0.0, false, 3.0),
            record(1999, Month::May, "Sports", 3.0, 0.0, false, 3.0),
        ];
        let table = summarize(
            &rows,
            GroupKey::Year,
            ValueField::AutomobileSales,
            AggregationOp::Mean,
        );

        let years: Vec<GroupValue> = table.rows.into_iter().map(|r| r.key).collect();
        assert_eq!(
            years,
            vec![
                GroupValue::Integer(1985),
                GroupValue::Integer(1999),
                GroupValue::Integer(2001)
            ]
        );
    }

    #[test]
    fn test_composite_key_carries_vehicle_series() {
        let dataset = sample_dataset();
        let table = summarize(
            dataset.recession_rows(),
            GroupKey::UnemploymentRateByVehicleType,
            ValueField::AutomobileSales,
            AggregationOp::Mean,
        );

        let rows: Vec<(GroupValue, Option<String>, f64)> = table
            .rows
            .into_iter()
            .map(|r| (r.key, r.series, r.value))
            .collect();
        assert_eq!(
            rows,
            vec![
                (GroupValue::Number(6.0), Some("Sports".into()), 4.0),
                (GroupValue::Number(7.5), Some("Executivecar".into()), 6.0),
                (GroupValue::Number(7.5), Some("Sports".into()), 2.0),
            ]
        );
    }

    #[test]
    fn test_negative_zero_rate_shares_group() {
        let rows = vec![
            record(1990, Month::May, "Sports", 1.0, 0.0, true, 0.0),
            record(1990, Month::May, "Sports", 3.0, 0.0, true, -0.0),
        ];
        let table = summarize(
            &rows,
            GroupKey::UnemploymentRateByVehicleType,
            ValueField::AutomobileSales,
            AggregationOp::Mean,
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].value, 2.0);
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        let dataset = sample_dataset();
        let table = summarize(
            dataset.year_rows(2010),
            GroupKey::VehicleType,
            ValueField::AutomobileSales,
            AggregationOp::Mean,
        );

        assert!(table.is_empty());
        assert_eq!(table.group_key, GroupKey::VehicleType);
    }

    #[test]
    fn test_summarize_is_repeatable() {
        let dataset = sample_dataset();
        let run = || {
            summarize(
                dataset.records(),
                GroupKey::UnemploymentRateByVehicleType,
                ValueField::AutomobileSales,
                AggregationOp::Mean,
            )
        };
        assert_eq!(run(), run());
    }
}
