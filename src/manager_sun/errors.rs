use thiserror::Error;

#[derive(Error, Debug)]
#[error("error in solar position calculation: {0}")]
pub struct SunError(pub String);
impl From<solar_positioning::Error> for SunError {
    fn from(e: solar_positioning::Error) -> SunError {
        SunError(format!("ephemeris error: {}", e.to_string()))
    }
}
