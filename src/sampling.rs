use chrono::{NaiveDate, NaiveTime, TimeDelta};
use log::debug;
use crate::config::Orientation;
use crate::errors::SamplingError;
use crate::hsa;
use crate::manager_sun::Sun;
use crate::models::solar_sample::FilteredSample;

/// The four key dates the design is sized against, the equinoxes and the
/// solstices as the seasonal extremes. Fixed design choice.
const KEY_DATES: [(i32, u32, u32); 4] = [
    (2025, 3, 21),
    (2025, 6, 21),
    (2025, 9, 21),
    (2025, 12, 21),
];

/// First sampled time of day
const GRID_START: (u32, u32) = (6, 0);

/// Last sampled time of day, inclusive
const GRID_END: (u32, u32) = (18, 0);

/// Step between sampled times in minutes
const GRID_STEP_MINUTES: i64 = 15;

/// Returns the key dates as calendar dates, ascending
pub fn key_dates() -> [NaiveDate; 4] {
    KEY_DATES.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Returns the fixed time of day grid, 06:00 to 18:00 inclusive in
/// 15 minute steps
pub fn time_grid() -> Vec<NaiveTime> {
    let start = NaiveTime::from_hms_opt(GRID_START.0, GRID_START.1, 0).unwrap();
    let end = NaiveTime::from_hms_opt(GRID_END.0, GRID_END.1, 0).unwrap();

    let mut times: Vec<NaiveTime> = Vec::new();
    let mut time = start;
    while time <= end {
        times.push(time);
        time = time + TimeDelta::minutes(GRID_STEP_MINUTES);
    }

    times
}

/// Samples the sun over every key date and retains the positions where the
/// apparent elevation clears the visibility cutoff, each augmented with its
/// horizontal shadow angle toward the facade normal.
///
/// The result is ordered by key date, then by time of day.
///
/// # Arguments
///
/// * 'sun' - the ephemeris to query
/// * 'orientation' - the facade orientation
/// * 'cutoff' - minimum visible solar altitude in degrees
pub fn collect_samples(sun: &Sun, orientation: Orientation, cutoff: f64)
                       -> Result<Vec<FilteredSample>, SamplingError> {

    let times = time_grid();
    let facade_azimuth = orientation.azimuth();

    let mut samples: Vec<FilteredSample> = Vec::new();
    for date in key_dates() {
        let positions = sun.positions_for_day(date, &times)?;

        let before = samples.len();
        for position in positions {
            if position.elevation > cutoff {
                samples.push(FilteredSample {
                    date,
                    time: position.timestamp.time(),
                    elevation: position.elevation,
                    hsa: hsa::horizontal_shadow_angle(
                        position.azimuth, facade_azimuth, position.elevation),
                });
            }
        }
        debug!("{}: {} of {} samples retained", date, samples.len() - before, times.len());
    }

    Ok(samples)
}
