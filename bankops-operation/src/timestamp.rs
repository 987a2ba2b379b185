//! Parse the timestamps attached to each operation.

use crate::TimestampError;
use chrono::NaiveDateTime;

/// `chrono` format string for operation timestamps, e.g. `2019-07-03T18:35:29.512364`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Character layout every timestamp must follow. `d` stands for any ASCII digit.
const TIMESTAMP_SHAPE: &[u8] = b"dddd-dd-ddTdd:dd:dd.dddddd";

/// Position of the tens digit of the seconds
const SECONDS_TENS: usize = 17;

/// Check that the string has exactly the digits and separators of a timestamp.
/// `chrono` alone is more lenient than this (single-digit months, any number of
/// fractional digits), so the layout is checked up front.
fn matches_shape(s: &str) -> bool {
    s.len() == TIMESTAMP_SHAPE.len()
        && s
            .bytes()
            .zip(TIMESTAMP_SHAPE.iter())
            .all(|(c, &p)| match p {
                b'd' => c.is_ascii_digit(),
                _ => c == p,
            })
}

/// Parse a timestamp of the form `YYYY-MM-DDTHH:MM:SS.ffffff` into a timezone-less datetime.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, TimestampError> {
    if !matches_shape(s) {
        return Err(TimestampError::Malformed(s.to_string()));
    }

    // chrono reads `60` as a leap second
    if s.as_bytes()[SECONDS_TENS] > b'5' {
        return Err(TimestampError::Invalid(s.to_string()));
    }

    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|_| TimestampError::Invalid(s.to_string()))
}
