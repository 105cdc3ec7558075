use chrono::{Offset, TimeZone, Timelike};
use chrono_tz::America::Los_Angeles;

use sun_position::angles::sun_position;
use sun_position::sky_path::*;
use sun_position::types::{GeoPosition, SkyPathConfig};
use sun_position::Error;

fn san_francisco() -> GeoPosition {
    GeoPosition::new(37.7749, -122.4194).unwrap()
}

fn june_path() -> SkyPath {
    let reference = Los_Angeles.with_ymd_and_hms(2020, 6, 21, 13, 7, 42).unwrap();
    SkyPath::new(&reference, san_francisco(), SkyPathConfig::default()).unwrap()
}

// ── Config ──

#[test]
fn test_default_config() {
    assert_eq!(SkyPathConfig::default().interval_minutes, 20);
}

#[test]
fn test_rejects_bad_interval() {
    let reference = Los_Angeles.with_ymd_and_hms(2020, 6, 21, 13, 0, 0).unwrap();
    for interval_minutes in [0, 1441] {
        let config = SkyPathConfig { interval_minutes };
        assert!(matches!(
            SkyPath::new(&reference, san_francisco(), config),
            Err(Error::InvalidTime(_))
        ));
    }
}

// ── Time utilities ──

#[test]
fn test_known_time_conversions() {
    assert_eq!(minutes_to_time(0), (0, 0));
    assert_eq!(minutes_to_time(720), (12, 0));
    assert_eq!(minutes_to_time(1420), (23, 40));
    assert_eq!(minutes_to_time(61), (1, 1));
}

#[test]
fn test_intervals_per_day() {
    assert_eq!(intervals_per_day(20), 72);
    assert_eq!(intervals_per_day(5), 288);
    assert_eq!(intervals_per_day(7), 206);
    assert_eq!(intervals_per_day(1440), 1);
}

// ── Sampling ──

#[test]
fn test_samples_cover_day_in_order() {
    let path = june_path();
    let samples: Vec<_> = path.samples().collect();
    assert_eq!(samples.len(), 72);
    assert_eq!(path.len(), 72);
    assert_eq!((samples[0].hour, samples[0].minute), (0, 0));
    assert_eq!((samples[71].hour, samples[71].minute), (23, 40));
    for pair in samples.windows(2) {
        let a = pair[0].hour * 60 + pair[0].minute;
        let b = pair[1].hour * 60 + pair[1].minute;
        assert_eq!(b - a, 20);
        assert!(pair[1].time > pair[0].time);
    }
}

#[test]
fn test_samples_keep_date_seconds_and_offset() {
    let path = june_path();
    for s in path.samples() {
        assert_eq!(s.time.date_naive().to_string(), "2020-06-21");
        assert_eq!(s.time.second(), 42);
        assert_eq!(s.time.hour(), s.hour);
        assert_eq!(s.time.minute(), s.minute);
        assert_eq!(s.time.offset().fix().local_minus_utc(), -7 * 3600);
    }
}

#[test]
fn test_samples_match_engine() {
    let path = june_path();
    for s in path.samples().step_by(7) {
        assert_eq!(s.angles, sun_position(san_francisco(), &s.time));
    }
}

#[test]
fn test_iteration_is_restartable() {
    let path = june_path();
    let first: Vec<_> = path.samples().collect();
    let second: Vec<_> = (&path).into_iter().collect();
    assert_eq!(first, second);

    let mut iter = path.samples();
    iter.nth(9);
    assert_eq!(iter.len(), 62);
    let fork = iter.clone();
    assert_eq!(iter.collect::<Vec<_>>(), fork.collect::<Vec<_>>());
}

#[test]
fn test_above_horizon_daylight_only() {
    let path = june_path();
    let up: Vec<_> = path.above_horizon().collect();
    assert!(up.len() >= 40 && up.len() <= 50, "count={}", up.len());
    assert!(up.iter().all(|s| s.angles.elevation > 0.0));
    assert!(up.iter().all(|s| (5..=21).contains(&s.hour)));
}

#[test]
fn test_path_across_dst_change_keeps_reference_offset() {
    let reference = Los_Angeles.with_ymd_and_hms(2021, 3, 14, 12, 0, 0).unwrap();
    let path = SkyPath::new(&reference, san_francisco(), SkyPathConfig::default()).unwrap();
    let samples: Vec<_> = path.samples().collect();
    assert_eq!(samples.len(), 72);
    assert!(samples
        .iter()
        .all(|s| s.time.offset().fix().local_minus_utc() == -7 * 3600));
}

#[test]
fn test_custom_interval() {
    let reference = Los_Angeles.with_ymd_and_hms(2020, 6, 21, 13, 0, 0).unwrap();
    let config = SkyPathConfig { interval_minutes: 60 };
    let path = SkyPath::new(&reference, san_francisco(), config).unwrap();
    let hours: Vec<u32> = path.samples().map(|s| s.hour).collect();
    assert_eq!(hours, (0..24).collect::<Vec<u32>>());
}
