//! Conversion of civil timestamps into seconds since the equinox epoch.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, TimeDelta, TimeZone, Utc};
use log::{debug, warn};

use crate::error::{Error, Result};

/// 2020-03-20 12:00:00 UTC as a Unix timestamp. The sun stood directly over
/// latitude 0, longitude 0 at the 2020 spring equinox.
pub const EPOCH_UNIX_SECONDS: i64 = 1_584_705_600;

/// Accepted layout for command-line timestamps.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(EPOCH_UNIX_SECONDS)
}

/// Signed seconds from the epoch to `instant`, independent of its zone.
pub fn elapsed_seconds<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    let whole = instant.timestamp() - EPOCH_UNIX_SECONDS;
    whole as f64 + instant.timestamp_subsec_nanos() as f64 / 1e9
}

/// Inverse of [`elapsed_seconds`]: the instant `elapsed` seconds after the
/// epoch, shown at `offset`.
pub fn instant_at(elapsed: f64, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    if !elapsed.is_finite() {
        return Err(Error::InvalidTime(format!("non-finite elapsed seconds {elapsed}")));
    }
    // Microsecond resolution is exact for |elapsed| up to ~30 years.
    let mut whole = elapsed.floor();
    let mut micros = ((elapsed - whole) * 1e6).round() as u32;
    if micros >= 1_000_000 {
        whole += 1.0;
        micros = 0;
    }
    let nanos = micros * 1000;
    let utc = EPOCH_UNIX_SECONDS
        .checked_add(whole as i64)
        .and_then(|secs| DateTime::from_timestamp(secs, nanos))
        .ok_or_else(|| Error::InvalidTime(format!("{elapsed} s from epoch is out of range")))?;
    Ok(utc.with_timezone(&offset))
}

pub fn parse_date_time(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), DATE_TIME_FORMAT).map_err(|e| {
        Error::InvalidTime(format!("'{input}': {e}, expected YYYY-MM-DD HH:MM:SS"))
    })
}

/// Attaches `zone`'s offset to a wall-clock time.
///
/// During a fall-back overlap the standard-time (later) reading wins. Wall
/// times skipped by a spring-forward transition are rejected.
pub fn localize<Tz: TimeZone>(naive: NaiveDateTime, zone: &Tz) -> Result<DateTime<Tz>> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, latest) => {
            warn!(
                "{} is ambiguous in this zone, using {} over {}",
                naive,
                latest.fixed_offset(),
                earliest.fixed_offset()
            );
            Ok(latest)
        }
        LocalResult::None => Err(Error::InvalidTime(format!(
            "{naive} does not exist in this zone (skipped by a clock change)"
        ))),
    }
}

pub fn parse_local<Tz: TimeZone>(input: &str, zone: &Tz) -> Result<DateTime<Tz>> {
    let naive = parse_date_time(input)?;
    let local = localize(naive, zone)?;
    debug!("parsed '{}' as {}", input, local.fixed_offset());
    Ok(local)
}

pub fn now_in<Tz: TimeZone>(zone: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(zone)
}
