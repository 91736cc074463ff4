use crate::errors::SamplingError;
use crate::models::solar_sample::FilteredSample;

/// Percentile of the absolute shadow angles used as the single design angle.
/// The worst case angle would make the fin array impractically dense while
/// the median would let direct sun through for too many of the sampled times.
const DESIGN_PERCENTILE: f64 = 75.0;

/// Returns the horizontal shadow angle in degrees for one solar position.
///
/// This is the angle, measured in the horizontal plane containing the facade
/// normal, between that normal and the projection of the sun direction.
///
/// # Arguments
///
/// * 'azimuth' - solar azimuth in degrees clockwise from North
/// * 'facade_azimuth' - facade outward normal azimuth in degrees
/// * 'elevation' - apparent solar elevation in degrees
pub fn horizontal_shadow_angle(azimuth: f64, facade_azimuth: f64, elevation: f64) -> f64 {
    ((azimuth - facade_azimuth).to_radians().sin() * elevation.to_radians().cos())
        .asin()
        .to_degrees()
}

/// Reduces all retained samples to the single design shadow angle, the 75th
/// percentile of the absolute hsa values across every key date.
///
/// # Arguments
///
/// * 'samples' - the retained solar samples
pub fn design_hsa(samples: &[FilteredSample]) -> Result<f64, SamplingError> {
    if samples.is_empty() {
        Err(SamplingError::from("no visible solar samples above the obstruction cutoff"))?
    }

    let magnitudes: Vec<f64> = samples.iter().map(|s| s.hsa.abs()).collect();

    Ok(percentile(&magnitudes, DESIGN_PERCENTILE))
}

/// Percentile with linear interpolation between order statistics.
/// The input must not be empty.
///
/// # Arguments
///
/// * 'values' - the values to aggregate
/// * 'p' - percentile between 0 and 100
fn percentile(values: &[f64], p: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (sorted[upper] - sorted[lower]) * (rank - lower as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    macro_rules! assert_approx {
        ($left:expr, $right:expr, $tol:expr) => {
            let (l, r) = ($left as f64, $right as f64);
            assert!(
                (l - r).abs() <= $tol,
                "assert_approx failed: left={}, right={}, diff={}, tol={}",
                l, r, (l - r).abs(), $tol
            );
        };
    }

    fn sample(hsa: f64) -> FilteredSample {
        FilteredSample {
            date: NaiveDate::from_ymd_opt(2025, 3, 21).unwrap(),
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            elevation: 50.0,
            hsa,
        }
    }

    #[test]
    fn sun_on_the_facade_normal_gives_zero() {
        for facade in [0.0, 90.0, 180.0, 270.0] {
            assert_approx!(horizontal_shadow_angle(facade, facade, 0.0), 0.0, 1e-9);
        }
    }

    #[test]
    fn sign_follows_the_side_of_the_normal() {
        assert!(horizontal_shadow_angle(300.0, 270.0, 30.0) > 0.0);
        assert!(horizontal_shadow_angle(240.0, 270.0, 30.0) < 0.0);
    }

    #[test]
    fn high_sun_flattens_the_angle() {
        let low = horizontal_shadow_angle(300.0, 270.0, 10.0);
        let high = horizontal_shadow_angle(300.0, 270.0, 80.0);
        assert!(high < low);
    }

    #[test]
    fn percentile_interpolates_linearly() {
        assert_approx!(percentile(&[1.0, 2.0, 3.0, 4.0], 75.0), 3.25, 1e-9);
        assert_approx!(percentile(&[1.0, 2.0, 3.0, 4.0], 50.0), 2.5, 1e-9);
        assert_approx!(percentile(&[1.0, 2.0, 3.0, 4.0], 100.0), 4.0, 1e-9);
        assert_approx!(percentile(&[7.0], 75.0), 7.0, 1e-9);
    }

    #[test]
    fn design_angle_lies_between_median_and_max() {
        let samples: Vec<FilteredSample> =
            [12.0, -35.0, 51.0, 8.0, -64.0, 27.0, 43.0].iter().map(|&h| sample(h)).collect();

        let magnitudes: Vec<f64> = samples.iter().map(|s| s.hsa.abs()).collect();
        let median = percentile(&magnitudes, 50.0);
        let max = percentile(&magnitudes, 100.0);

        let design = design_hsa(&samples).unwrap();
        assert!(design >= median && design <= max);
    }

    #[test]
    fn design_angle_uses_absolute_values() {
        let samples: Vec<FilteredSample> =
            [-40.0, -40.0, -40.0, -40.0].iter().map(|&h| sample(h)).collect();

        assert_approx!(design_hsa(&samples).unwrap(), 40.0, 1e-9);
    }

    #[test]
    fn empty_sample_set_is_an_error() {
        assert!(design_hsa(&[]).is_err());
    }
}
