use chrono::{DateTime, Local, SecondsFormat, TimeZone};

/// Layout of server-assigned user ids: `YYYYMMDDHHMMSS`.
const ID_FORMAT: &str = "%Y%m%d%H%M%S";

/// Current local time as RFC3339 with second precision.
pub fn now_rfc3339() -> String {
    rfc3339(&Local::now())
}

pub fn rfc3339<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// 14-digit id derived from a timestamp, second resolution.
pub fn timestamp_id<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(ID_FORMAT).to_string()
}
