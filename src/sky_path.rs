use chrono::{DateTime, FixedOffset, TimeZone, Timelike};
use log::debug;

use crate::angles;
use crate::error::{Error, Result};
use crate::types::{GeoPosition, SkyPathConfig, SkySample};

pub const MINUTES_PER_DAY: u32 = 1440;

pub fn minutes_to_time(total_minutes: u32) -> (u32, u32) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn intervals_per_day(interval_minutes: u32) -> u32 {
    MINUTES_PER_DAY.div_ceil(interval_minutes)
}

/// The sun's track across the calendar day of a reference instant.
///
/// Samples keep the reference's date, seconds and UTC offset; only the hour
/// and minute change. Iterating twice yields the same samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyPath {
    reference: DateTime<FixedOffset>,
    position: GeoPosition,
    config: SkyPathConfig,
}

impl SkyPath {
    pub fn new<Tz: TimeZone>(
        reference: &DateTime<Tz>,
        position: GeoPosition,
        config: SkyPathConfig,
    ) -> Result<Self> {
        if !(1..=MINUTES_PER_DAY).contains(&config.interval_minutes) {
            return Err(Error::InvalidTime(format!(
                "sampling interval of {} minutes is outside 1..={}",
                config.interval_minutes, MINUTES_PER_DAY
            )));
        }
        let reference = reference.fixed_offset();
        debug!(
            "sky path for {} every {} min ({} samples)",
            reference.date_naive(),
            config.interval_minutes,
            intervals_per_day(config.interval_minutes)
        );
        Ok(Self {
            reference,
            position,
            config,
        })
    }

    pub fn len(&self) -> usize {
        intervals_per_day(self.config.interval_minutes) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn samples(&self) -> SkyPathIter<'_> {
        SkyPathIter {
            path: self,
            next: 0,
            count: intervals_per_day(self.config.interval_minutes),
        }
    }

    pub fn above_horizon(&self) -> impl Iterator<Item = SkySample> + '_ {
        self.samples().filter(|s| s.angles.is_above_horizon())
    }

    fn sample(&self, index: u32) -> Option<SkySample> {
        let (hour, minute) = minutes_to_time(index * self.config.interval_minutes);
        let time = self
            .reference
            .with_hour(hour)
            .and_then(|t| t.with_minute(minute))?;
        Some(SkySample {
            hour,
            minute,
            time,
            angles: angles::sun_position(self.position, &time),
        })
    }
}

impl<'a> IntoIterator for &'a SkyPath {
    type Item = SkySample;
    type IntoIter = SkyPathIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples()
    }
}

#[derive(Debug, Clone)]
pub struct SkyPathIter<'a> {
    path: &'a SkyPath,
    next: u32,
    count: u32,
}

impl Iterator for SkyPathIter<'_> {
    type Item = SkySample;

    fn next(&mut self) -> Option<SkySample> {
        while self.next < self.count {
            let index = self.next;
            self.next += 1;
            if let Some(sample) = self.path.sample(index) {
                return Some(sample);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SkyPathIter<'_> {}
