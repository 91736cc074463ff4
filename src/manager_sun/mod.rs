pub mod errors;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, Utc};
use solar_positioning::spa;
use solar_positioning::RefractionCorrection;
use solar_positioning::time::DeltaT;
use crate::manager_sun::errors::SunError;

/// Observer elevation above sea level in meters
const OBSERVER_ELEVATION: f64 = 0.0;

/// Atmospheric pressure in millibars used for the refraction correction
const STANDARD_PRESSURE: f64 = 1013.25;

/// Air temperature in degrees Celsius used for the refraction correction
const STANDARD_TEMPERATURE: f64 = 15.0;

/// One solar position as reported by the ephemeris, apparent elevation
/// (refraction corrected) and azimuth in degrees clockwise from North
pub struct SunPosition {
    pub timestamp: DateTime<FixedOffset>,
    pub elevation: f64,
    pub azimuth: f64,
}

/// Struct for querying apparent solar positions for a fixed geographic point
pub struct Sun {
    lat: f64,
    long: f64,
    utc_offset: FixedOffset,
}

impl Sun {
    /// Returns a Sun struct ready for computing solar positions
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude for the point to compute positions for
    /// * 'long' - longitude for the point to compute positions for
    /// * 'utc_offset' - the fixed utc offset local times are given in
    pub fn new(lat: f64, long: f64, utc_offset: FixedOffset) -> Sun {
        Sun { lat, long, utc_offset }
    }

    /// Computes apparent solar elevation and azimuth for every given time of day
    /// on one date. The whole date is served by one call so that the delta T
    /// estimate is only derived once.
    ///
    /// # Arguments
    ///
    /// * 'date' - the calendar date to compute positions for
    /// * 'times' - the times of day, localized to the fixed utc offset
    pub fn positions_for_day(&self, date: NaiveDate, times: &[NaiveTime])
                             -> Result<Vec<SunPosition>, SunError> {

        let delta_t = DeltaT::estimate_from_date(date.year(), date.month())?;

        let mut positions: Vec<SunPosition> = Vec::with_capacity(times.len());
        for time in times {
            let local = date.and_time(*time)
                .and_local_timezone(self.utc_offset)
                .unwrap();

            let position = spa::solar_position(
                local.with_timezone(&Utc),
                self.lat,
                self.long,
                OBSERVER_ELEVATION,
                delta_t,
                Some(RefractionCorrection::new(
                    STANDARD_PRESSURE,
                    STANDARD_TEMPERATURE,
                )?),
            )?;

            positions.push(SunPosition {
                timestamp: local,
                elevation: position.elevation_angle(),
                azimuth: position.azimuth(),
            });
        }

        Ok(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mexico_city() -> Sun {
        Sun::new(19.3809, -99.1931, FixedOffset::east_opt(-6 * 3600).unwrap())
    }

    #[test]
    fn one_position_per_time() {
        let sun = mexico_city();
        let times = [
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        ];
        let date = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();

        let positions = sun.positions_for_day(date, &times).unwrap();

        assert_eq!(positions.len(), 3);
    }

    #[test]
    fn summer_noon_is_high_and_dawn_is_low() {
        let sun = mexico_city();
        let times = [
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        ];
        let date = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();

        let positions = sun.positions_for_day(date, &times).unwrap();

        assert!(positions[0].elevation < 20.0);
        assert!(positions[1].elevation > 60.0);
    }

    #[test]
    fn azimuth_stays_on_compass() {
        let sun = mexico_city();
        let times: Vec<NaiveTime> = (6..=18)
            .map(|h| NaiveTime::from_hms_opt(h, 0, 0).unwrap())
            .collect();
        let date = NaiveDate::from_ymd_opt(2025, 12, 21).unwrap();

        let positions = sun.positions_for_day(date, &times).unwrap();

        for p in positions {
            assert!(p.azimuth >= 0.0 && p.azimuth <= 360.0);
        }
    }
}
