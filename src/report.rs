use std::fs;
use chrono::{DateTime, Local};
use log::info;
use serde::Serialize;
use crate::errors::ReportError;
use crate::layout::FinLayout;
use crate::models::solar_sample::FilteredSample;

#[derive(Serialize)]
struct SampleReport<'a> {
    generated: DateTime<Local>,
    design_hsa: f64,
    spacing: f64,
    fin_count: usize,
    samples: &'a Vec<FilteredSample>,
}

/// Saves the design result and every retained sample as a json report
///
/// # Arguments
///
/// * 'path' - the file to write to
/// * 'samples' - the retained solar samples
/// * 'design_hsa' - the design horizontal shadow angle in degrees
/// * 'layout' - the solved fin array
pub fn save_samples(path: &str, samples: &Vec<FilteredSample>,
                    design_hsa: f64, layout: &FinLayout) -> Result<(), ReportError> {

    let report = SampleReport {
        generated: Local::now(),
        design_hsa,
        spacing: layout.spacing,
        fin_count: layout.count,
        samples,
    };

    let json = serde_json::to_string_pretty(&report)?;
    fs::write(path, json)?;

    Ok(())
}

/// Prints the design summary
///
/// # Arguments
///
/// * 'design_hsa' - the design horizontal shadow angle in degrees
/// * 'layout' - the solved fin array
pub fn print_summary(design_hsa: f64, layout: &FinLayout) {
    println!("Design HSA: {:.1}\u{b0}", design_hsa);
    println!("Fin spacing: {:.2} m", layout.spacing);
    println!("Number of fins: {}", layout.count);

    info!("design hsa {:.1}, {}", design_hsa, layout);
}

/// Prints one table row per retained sample
///
/// # Arguments
///
/// * 'samples' - the retained solar samples
pub fn print_sample_table(samples: &Vec<FilteredSample>) {
    println!();
    println!("Solar table (equinoxes and solstices)");
    println!("{:>10}  {:>5}  {:>13}  {:>8}", "Date", "Time", "Elevation (\u{b0})", "HSA (\u{b0})");

    for s in samples {
        println!("{:>10}  {:>5}  {:>13.2}  {:>8.2}",
                 s.date.to_string(), s.time.format("%H:%M").to_string(), s.elevation, s.hsa);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn report_round_trips_through_json() {
        let samples = vec![FilteredSample {
            date: NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
            time: NaiveTime::from_hms_opt(12, 45, 0).unwrap(),
            elevation: 67.3,
            hsa: -21.4,
        }];
        let layout = FinLayout { spacing: 0.23, count: 5 };

        let path = std::env::temp_dir().join("parasol_samples_test.json");
        save_samples(path.to_str().unwrap(), &samples, 30.0, &layout).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"design_hsa\": 30.0"));
        assert!(json.contains("\"fin_count\": 5"));
        assert!(json.contains("\"2025-06-21\""));

        fs::remove_file(path).unwrap();
    }
}
