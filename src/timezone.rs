use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone, Tz};

pub fn get_timezone(canonical_timezone: &str) -> Option<&'static Tz> {
    time_tz::timezones::get_by_name(canonical_timezone)
}

/// The UTC offset that `timezone` observed at the instant `date_time`.
pub fn get_offset_at(timezone: &Tz, date_time: &OffsetDateTime) -> UtcOffset {
    timezone.get_offset_utc(date_time).to_utc()
}
