//! Resolves month parameters and decides which month a sale happened in.
//!
//! Both the transaction listing and the statistics use [MonthFilter], so a
//! month means the same thing everywhere.

use time::{
    Date, Month, OffsetDateTime, PrimitiveDateTime,
    format_description::{
        BorrowedFormatItem,
        well_known::{Iso8601, Rfc3339},
    },
    macros::format_description,
};
use time_tz::Tz;

use crate::timezone::get_offset_at;

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Date-times with an offset that RFC 3339 does not cover.
const OFFSET_DATE_TIME_FORMATS: [&[BorrowedFormatItem]; 3] = [
    format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]][offset_hour sign:mandatory][offset_minute]"
    ),
    format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]][offset_hour sign:mandatory]:[offset_minute]"
    ),
    format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]][offset_hour sign:mandatory][offset_minute]"
    ),
];

/// Date-times without an offset.
const DATE_TIME_FORMATS: [&[BorrowedFormatItem]; 2] = [
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"),
];

/// Restricts transactions to those sold in one calendar month of any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    /// Every transaction passes, including those with unreadable sale dates.
    Any,
    /// Only transactions sold in this month pass.
    Month(Month),
    /// No transaction passes.
    Unmatched,
}

impl MonthFilter {
    /// The filter for listing transactions.
    ///
    /// A missing or unrecognised month does not filter anything.
    pub fn for_listing(month: Option<&str>) -> Self {
        match month.and_then(parse_month) {
            Some(month) => Self::Month(month),
            None => Self::Any,
        }
    }

    /// The filter for the monthly statistics.
    ///
    /// Statistics are always for one month, so a missing or unrecognised
    /// month matches nothing and the statistics come out empty.
    pub fn for_statistics(month: Option<&str>) -> Self {
        match month.and_then(parse_month) {
            Some(month) => Self::Month(month),
            None => Self::Unmatched,
        }
    }

    /// Whether a sale on `date_of_sale` passes the filter.
    ///
    /// The sale date is converted to `timezone` before its month is read.
    /// Sale dates that cannot be parsed never match a specific month.
    pub fn matches(&self, date_of_sale: &str, timezone: &Tz) -> bool {
        match self {
            Self::Any => true,
            Self::Month(month) => sale_month(date_of_sale, timezone) == Some(*month),
            Self::Unmatched => false,
        }
    }
}

/// Parse a month from its English name, its three letter abbreviation or its
/// number (1 to 12). Case and surrounding whitespace are ignored.
pub fn parse_month(value: &str) -> Option<Month> {
    let value = value.trim();

    if let Ok(number) = value.parse::<u8>() {
        return Month::try_from(number).ok();
    }

    let value = value.to_lowercase();
    let mut month = Month::January;
    for _ in 0..12 {
        let name = month.to_string().to_lowercase();
        if value == name || (value.len() == 3 && name.starts_with(&value)) {
            return Some(month);
        }
        month = month.next();
    }

    None
}

/// The month a sale happened in, as seen from `timezone`.
///
/// Returns `None` if `date_of_sale` is not a date.
pub fn sale_month(date_of_sale: &str, timezone: &Tz) -> Option<Month> {
    let date_time = parse_date_of_sale(date_of_sale)?;
    let offset = get_offset_at(timezone, &date_time);

    Some(date_time.to_offset(offset).month())
}

/// Read a sale date as an instant.
///
/// Accepts RFC 3339 and ISO 8601 date-times, including offsets without a
/// colon and a space in place of the "T". Date-times without an offset and
/// plain dates are taken to be UTC.
fn parse_date_of_sale(value: &str) -> Option<OffsetDateTime> {
    let value = value.trim();

    if let Ok(date_time) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(date_time);
    }

    if let Ok(date_time) = OffsetDateTime::parse(value, &Iso8601::DEFAULT) {
        return Some(date_time);
    }

    if let Some(date_time) = OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| OffsetDateTime::parse(value, *format).ok())
    {
        return Some(date_time);
    }

    if let Some(date_time) = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(value, *format).ok())
    {
        return Some(date_time.assume_utc());
    }

    Date::parse(value, DATE_FORMAT)
        .ok()
        .map(|date| date.midnight().assume_utc())
}
