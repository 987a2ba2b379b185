//! Order operations by their timestamp.

use crate::operation_struct::DATE_KEY;
use crate::{parse_timestamp, Operation, OperationError, TimestampError};
use chrono::NaiveDateTime;
use serde_json::Value;

/// Newest operations come first unless asked otherwise
pub const DEFAULT_REVERSE: bool = true;

/// Parse the timestamp of the operation found at `index` in the input
fn timestamp_of(index: usize, op: &Operation) -> Result<NaiveDateTime, OperationError> {
    let parsed = match op.get(DATE_KEY) {
        Some(Value::String(date)) => parse_timestamp(date),
        Some(other) => Err(TimestampError::Malformed(other.to_string())),
        None => {
            return Err(OperationError::MissingField {
                index,
                field: DATE_KEY,
            })
        }
    };

    parsed.map_err(|source| OperationError::ParseError { index, source })
}

/// Order operations by their `date`, newest first when `reverse` is set.
///
/// Every operation must carry a well-formed `date`; the first one that does not
/// fails the whole call. Operations with identical timestamps keep their
/// relative order in either direction.
pub fn sort_by_date<'a, I>(
    operations: I,
    reverse: bool,
) -> Result<Vec<&'a Operation>, OperationError>
where
    I: IntoIterator<Item = &'a Operation>,
{
    let mut keyed = operations
        .into_iter()
        .enumerate()
        .map(|(i, op)| timestamp_of(i, op).map(|ts| (ts, op)))
        .collect::<Result<Vec<(NaiveDateTime, &Operation)>, OperationError>>()?;

    // `sort_by` is stable, so ties stay put in both directions
    match reverse {
        true => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
        false => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
    }

    Ok(keyed.into_iter().map(|(_, op)| op).collect())
}

/// Order operations from the most recent to the oldest.
pub fn sort_newest_first<'a, I>(operations: I) -> Result<Vec<&'a Operation>, OperationError>
where
    I: IntoIterator<Item = &'a Operation>,
{
    sort_by_date(operations, DEFAULT_REVERSE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixtures::{ids, ledger};
    use crate::filter_executed;

    fn dated(id: u64, date: &str) -> Operation {
        Operation::new().with_field("id", id).with_date(date)
    }

    #[track_caller]
    fn check_sort_by_date(input: &[Operation], reverse: bool, expected: Vec<u64>) {
        let observed = sort_by_date(input, reverse).unwrap();

        assert_eq!(expected, ids(&observed));
    }

    #[track_caller]
    fn check_sort_by_date_err(input: &[Operation], expected: OperationError) {
        let observed = sort_by_date(input, DEFAULT_REVERSE);

        assert_eq!(Err(expected), observed);
    }

    #[test]
    fn sort_newest_first_by_default() {
        let input = ledger();
        let observed = sort_newest_first(&input).unwrap();

        assert_eq!(vec![3, 1, 2], ids(&observed));
    }

    #[test]
    fn sort_descending() {
        check_sort_by_date(&ledger(), true, vec![3, 1, 2]);
    }

    #[test]
    fn sort_ascending() {
        check_sort_by_date(&ledger(), false, vec![2, 1, 3]);
    }

    #[test]
    fn sort_empty() {
        check_sort_by_date(&[], true, vec![]);
        check_sort_by_date(&[], false, vec![]);
    }

    #[test]
    fn sort_by_microseconds() {
        let input = vec![
            dated(1, "2019-07-03T18:35:29.512365"),
            dated(2, "2019-07-03T18:35:29.512364"),
            dated(3, "2019-07-03T18:35:29.512366"),
        ];

        check_sort_by_date(&input, false, vec![2, 1, 3]);
    }

    #[test]
    fn sort_across_years() {
        let input = vec![
            dated(1, "2019-01-01T00:00:00.000000"),
            dated(2, "2018-12-31T23:59:59.999999"),
            dated(3, "2020-02-29T08:15:00.000000"),
        ];

        check_sort_by_date(&input, true, vec![3, 1, 2]);
    }

    #[test]
    fn sort_ties_are_stable() {
        let input = vec![
            dated(1, "2019-07-03T18:35:29.512364"),
            dated(2, "2019-07-01T00:00:00.000000"),
            dated(3, "2019-07-03T18:35:29.512364"),
            dated(4, "2019-07-03T18:35:29.512364"),
        ];

        check_sort_by_date(&input, true, vec![1, 3, 4, 2]);
        check_sort_by_date(&input, false, vec![2, 1, 3, 4]);
    }

    #[test]
    fn sort_twice_with_unique_dates() {
        let input = ledger();
        let descending = sort_by_date(&input, true).unwrap();
        let observed = sort_by_date(descending, false).unwrap();
        let expected = sort_by_date(&input, false).unwrap();

        assert_eq!(expected, observed);
    }

    fn timestamps(ops: &[&Operation]) -> Vec<NaiveDateTime> {
        ops.iter()
            .map(|op| parse_timestamp(op.date().unwrap()).unwrap())
            .collect()
    }

    #[test]
    fn sort_is_ordered() {
        let input = vec![
            dated(1, "2018-06-30T02:08:58.425572"),
            dated(2, "2019-12-08T22:46:21.935582"),
            dated(3, "2018-03-23T10:45:06.972075"),
            dated(4, "2019-04-04T23:20:05.206878"),
            dated(5, "2018-09-12T21:27:25.241689"),
        ];
        let descending = timestamps(&sort_by_date(&input, true).unwrap());
        assert_eq!(input.len(), descending.len());
        assert!(descending.windows(2).all(|w| w[0] >= w[1]));

        let ascending = timestamps(&sort_by_date(&input, false).unwrap());
        assert_eq!(input.len(), ascending.len());
        assert!(ascending.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn sort_returns_the_same_records() {
        let input = ledger();
        let observed = sort_newest_first(&input).unwrap();

        assert!(std::ptr::eq(observed[0], &input[2]));
        assert!(std::ptr::eq(observed[1], &input[0]));
        assert!(std::ptr::eq(observed[2], &input[1]));
    }

    #[test]
    fn sort_keeps_input_intact() {
        let input = ledger();
        let _ = sort_by_date(&input, false).unwrap();

        assert_eq!(ledger(), input);
    }

    #[test]
    fn sort_after_filter() {
        let input = ledger();
        let observed = sort_newest_first(filter_executed(&input)).unwrap();

        assert_eq!(vec![3, 1], ids(&observed));
    }

    #[test]
    fn sort_missing_date() {
        let mut input = ledger();
        input.push(Operation::new().with_field("id", 4).with_state("EXECUTED"));

        check_sort_by_date_err(
            &input,
            OperationError::MissingField {
                index: 3,
                field: "date",
            },
        );
    }

    #[test]
    fn sort_not_a_date() {
        let input = vec![dated(1, "2019-07-03T18:35:29.512364"), dated(2, "not-a-date")];

        check_sort_by_date_err(
            &input,
            OperationError::ParseError {
                index: 1,
                source: TimestampError::Malformed("not-a-date".to_string()),
            },
        );
    }

    #[test]
    fn sort_non_string_date() {
        let input = vec![
            dated(1, "2019-07-03T18:35:29.512364"),
            Operation::new().with_field("id", 2).with_field("date", 20190703),
        ];

        check_sort_by_date_err(
            &input,
            OperationError::ParseError {
                index: 1,
                source: TimestampError::Malformed("20190703".to_string()),
            },
        );
    }

    #[test]
    fn sort_null_date() {
        let input = vec![Operation::new()
            .with_field("id", 1)
            .with_field("date", Value::Null)];

        check_sort_by_date_err(
            &input,
            OperationError::ParseError {
                index: 0,
                source: TimestampError::Malformed("null".to_string()),
            },
        );
    }

    #[test]
    fn sort_impossible_date() {
        let input = vec![dated(1, "2019-02-30T00:00:00.000000")];

        check_sort_by_date_err(
            &input,
            OperationError::ParseError {
                index: 0,
                source: TimestampError::Invalid("2019-02-30T00:00:00.000000".to_string()),
            },
        );
    }

    #[test]
    fn sort_reports_first_bad_record() {
        let input = vec![
            dated(1, "2019-07-03T18:35:29.512364"),
            Operation::new().with_field("id", 2),
            dated(3, "garbage"),
        ];

        check_sort_by_date_err(
            &input,
            OperationError::MissingField {
                index: 1,
                field: "date",
            },
        );
    }

    #[test]
    #[should_panic]
    fn sort_missing_date_has_no_partial_result() {
        let input = vec![
            dated(1, "2019-07-03T18:35:29.512364"),
            Operation::new().with_field("id", 2),
        ];

        check_sort_by_date(&input, true, vec![1]);
    }
}
