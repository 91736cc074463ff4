use std::fmt;
use std::fmt::Formatter;
use chrono::Local;
use thiserror::Error;
use crate::manager_sun::errors::SunError;

#[derive(Error, Debug)]
#[error("error in configuration: {0}")]
pub struct ConfigError(pub String);
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError(format!("config file error: {}", e.to_string()))
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(format!("toml document error: {}", e.to_string()))
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self {
        ConfigError(e.to_string())
    }
}

#[derive(Error, Debug)]
#[error("error while sampling solar positions: {0}")]
pub struct SamplingError(pub String);
impl From<SunError> for SamplingError {
    fn from(e: SunError) -> Self {
        SamplingError(e.to_string())
    }
}
impl From<&str> for SamplingError {
    fn from(e: &str) -> Self {
        SamplingError(e.to_string())
    }
}

#[derive(Error, Debug)]
#[error("error while writing the schematic: {0}")]
pub struct RenderError(pub String);
impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError(format!("file error: {}", e.to_string()))
    }
}

#[derive(Error, Debug)]
#[error("error while writing the sample report: {0}")]
pub struct ReportError(pub String);
impl From<std::io::Error> for ReportError {
    fn from(e: std::io::Error) -> Self {
        ReportError(format!("file error: {}", e.to_string()))
    }
}
impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError(format!("json document error: {}", e.to_string()))
    }
}

pub struct ParasolInitError(pub String);

impl fmt::Display for ParasolInitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ParasolInitError: {}", self.0)
    }
}
impl From<ConfigError> for ParasolInitError {
    fn from(e: ConfigError) -> Self {
        ParasolInitError(e.to_string())
    }
}
impl From<std::io::Error> for ParasolInitError {
    fn from(e: std::io::Error) -> Self {
        ParasolInitError(e.to_string())
    }
}
impl From<log::SetLoggerError> for ParasolInitError {
    fn from(e: log::SetLoggerError) -> Self {
        ParasolInitError(e.to_string())
    }
}
impl From<log4rs::config::runtime::ConfigErrors> for ParasolInitError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self {
        ParasolInitError(e.to_string())
    }
}

pub struct ParasolError {
    msg: String,
}
impl fmt::Display for ParasolError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let report_time = format!("{}", Local::now().format("%Y-%m-%d %H:%M:%S"));
        let caption = format!("{} ParasolError ", report_time);
        write!(f, "{:=<100}\n", caption)?;
        write!(f, "{}\n", self.msg)
    }
}
impl From<SamplingError> for ParasolError {
    fn from(e: SamplingError) -> Self {
        ParasolError { msg: e.to_string() }
    }
}
impl From<RenderError> for ParasolError {
    fn from(e: RenderError) -> Self {
        ParasolError { msg: e.to_string() }
    }
}
impl From<ReportError> for ParasolError {
    fn from(e: ReportError) -> Self {
        ParasolError { msg: e.to_string() }
    }
}
