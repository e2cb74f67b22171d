//! Time utilities: the "current year" used to complete year-less dates.

use anyhow::Result;
use chrono::{DateTime, Datelike, Local, Utc};
use chrono_tz::Tz;

/// Calendar year on the local clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Calendar year right now in an IANA tz like "America/Los_Angeles".
pub fn current_year_in(tz: &str) -> Result<i32> {
    year_in(Utc::now(), tz)
}

/// Calendar year of `instant` as seen from `tz`.
pub fn year_in(instant: DateTime<Utc>, tz: &str) -> Result<i32> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
    Ok(instant.with_timezone(&tz).year())
}
