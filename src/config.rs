use std::fmt;
use std::fs;
use chrono::FixedOffset;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct GeoRef {
    pub lat: f64,
    pub long: f64,
    pub utc_offset_hours: i32,
}

impl GeoRef {
    /// Returns the fixed utc offset the run is localized to
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).unwrap()
    }
}

/// Compass bearing the facade wall faces outward toward
#[derive(Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// Returns the facade azimuth in degrees clockwise from North
    pub fn azimuth(&self) -> f64 {
        match self {
            Orientation::North => 0.0,
            Orientation::East  => 90.0,
            Orientation::South => 180.0,
            Orientation::West  => 270.0,
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::North => write!(f, "North"),
            Orientation::East  => write!(f, "East"),
            Orientation::South => write!(f, "South"),
            Orientation::West  => write!(f, "West"),
        }
    }
}

#[derive(Deserialize)]
pub struct Facade {
    pub orientation: Orientation,
}

#[derive(Deserialize)]
pub struct WindowParameters {
    pub height: f64,
    pub width: f64,
}

#[derive(Deserialize)]
pub struct FinParameters {
    pub thickness: f64,
    pub depth: f64,
}

#[derive(Deserialize)]
pub struct ObstructionParameters {
    pub building_height: f64,
    pub street_width: f64,
}

#[derive(Deserialize)]
pub struct Files {
    pub schematic_file: String,
    pub samples_file: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub geo_ref: GeoRef,
    pub facade: Facade,
    pub window: WindowParameters,
    pub fin: FinParameters,
    pub obstruction: ObstructionParameters,
    pub files: Files,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {

    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    validate(&config)?;

    Ok(config)
}

/// Validates all numeric parameters against their permitted ranges.
/// Geometry out of range never reaches the solver, it is rejected here.
///
/// # Arguments
///
/// * 'config' - the configuration to validate
fn validate(config: &Config) -> Result<(), ConfigError> {
    check_range("geo_ref.lat", config.geo_ref.lat, -90.0, 90.0)?;
    check_range("geo_ref.long", config.geo_ref.long, -180.0, 180.0)?;
    check_range("geo_ref.utc_offset_hours", config.geo_ref.utc_offset_hours as f64, -12.0, 14.0)?;
    check_range("window.height", config.window.height, 0.5, 5.0)?;
    check_range("window.width", config.window.width, 0.5, 20.0)?;
    check_range("fin.thickness", config.fin.thickness, 0.02, 0.1)?;
    check_range("fin.depth", config.fin.depth, 0.1, 1.5)?;
    check_range("obstruction.building_height", config.obstruction.building_height, 1.0, 30.0)?;
    check_range("obstruction.street_width", config.obstruction.street_width, 1.0, 30.0)?;

    if config.files.schematic_file.is_empty() {
        Err(ConfigError::from("files.schematic_file must not be empty"))?
    }
    if config.files.samples_file.is_empty() {
        Err(ConfigError::from("files.samples_file must not be empty"))?
    }

    Ok(())
}

/// Checks that a parameter lies within its inclusive range
///
/// # Arguments
///
/// * 'name' - the configuration item name used in the error message
/// * 'value' - the value to check
/// * 'min' - lower bound
/// * 'max' - upper bound
fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value < min || value > max {
        Err(ConfigError(format!("{} must be within {} and {}, got {}", name, min, max, value)))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_toml(street_width: f64, window_width: f64) -> String {
        format!(r#"
            [geo_ref]
            lat = 19.3809
            long = -99.1931
            utc_offset_hours = -6

            [facade]
            orientation = "West"

            [window]
            height = 1.5
            width = {}

            [fin]
            thickness = 0.06
            depth = 0.4

            [obstruction]
            building_height = 6.0
            street_width = {}

            [files]
            schematic_file = "plan.svg"
            samples_file = "samples.json"

            [general]
            log_path = "parasol.log"
            log_level = "Info"
            log_to_stdout = true
        "#, window_width, street_width)
    }

    #[test]
    fn parses_and_validates_defaults() {
        let config: Config = toml::from_str(&sample_toml(6.0, 1.5)).unwrap();
        assert!(validate(&config).is_ok());
        assert_eq!(config.facade.orientation.azimuth(), 270.0);
        assert_eq!(config.geo_ref.utc_offset(), FixedOffset::east_opt(-6 * 3600).unwrap());
    }

    #[test]
    fn rejects_zero_street_width() {
        let config: Config = toml::from_str(&sample_toml(0.0, 1.5)).unwrap();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_out_of_range_window_width() {
        let config: Config = toml::from_str(&sample_toml(6.0, 25.0)).unwrap();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn orientation_azimuths() {
        assert_eq!(Orientation::North.azimuth(), 0.0);
        assert_eq!(Orientation::East.azimuth(), 90.0);
        assert_eq!(Orientation::South.azimuth(), 180.0);
        assert_eq!(Orientation::West.azimuth(), 270.0);
    }
}
