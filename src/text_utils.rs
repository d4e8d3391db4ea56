use std::ops::Index;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DATE_TIME_REGEX: Regex = Regex::new(
        r"^(\d{4})-(\d{1,2})-(\d{1,2})[ T](\d{1,2}):(\d{1,2}):(\d{1,2})(\.\d{0,3})?$"
    ).unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

/// Parses `YYYY-MM-DD HH:MM:SS[.mmm]`, interpreted as UTC.
pub fn parse_date_time(buf: &str) -> Result<NaiveDateTime, String> {
    let Some(caps) = DATE_TIME_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date time {}", buf));
    };

    let to_i32 = |num_str: &str| to_int::<i32>(num_str, buf);
    let to_u32 = |num_str: &str| to_int::<u32>(num_str, buf);

    let y: i32 = to_i32(caps.index(1))?;
    let m: u32 = to_u32(caps.index(2))?;
    let d: u32 = to_u32(caps.index(3))?;
    let h: u32 = to_u32(caps.index(4))?;
    let mn: u32 = to_u32(caps.index(5))?;
    let s: u32 = to_u32(caps.index(6))?;

    let date = NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| format!("Invalid date {}", buf))?;
    let time = NaiveTime::from_hms_opt(h, mn, s)
        .ok_or_else(|| format!("Invalid time {}", buf))?;

    Ok(NaiveDateTime::new(date, time))
}

/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS[.mmm]` and bare `YYYY-MM-DD`.
/// Dates without an offset are taken as UTC.
pub fn parse_publish_date(buf: &str) -> Result<DateTime<Utc>, String> {
    let buf = buf.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(buf) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = parse_date_time(buf) {
        return Ok(Utc.from_utc_datetime(&dt));
    }

    match NaiveDate::parse_from_str(buf, "%Y-%m-%d") {
        Ok(date) => Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))),
        Err(_) => Err(format!("Unable to parse date time {}", buf)),
    }
}

/// `Mon, 01 Jan 2024 00:00:00 GMT`
pub fn format_http_date(date_time: &DateTime<Utc>) -> String {
    date_time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// `2024-01-01T00:00:00.000Z`
pub fn format_iso8601(date_time: &DateTime<Utc>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Lower-cases the tag and joins its words with a single hyphen.
/// Applying it twice gives the same result as applying it once.
pub fn slugify_tag(tag: &str) -> String {
    WHITESPACE_REGEX
        .replace_all(tag.trim(), "-")
        .to_lowercase()
}
