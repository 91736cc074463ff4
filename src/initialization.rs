use std::env;
use log::info;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::{load_config, Config};
use crate::errors::ParasolInitError;

/// Environment variable naming the configuration file
const CONFIG_ENV: &str = "PARASOL_CONFIG";

/// Configuration file used when the environment variable is not set
const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Loads the configuration and initializes logging
///
pub fn init() -> Result<Config, ParasolInitError> {
    let config_path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let config = load_config(&config_path)?;

    setup_logging(&config)?;

    // Print version
    println!("parasol version: {}", env!("CARGO_PKG_VERSION"));
    info!("configuration loaded from {}", config_path);

    Ok(config)
}

/// Builds the log4rs configuration from the general section, a file appender
/// and optionally a console appender
///
/// # Arguments
///
/// * 'config' - the loaded configuration
fn setup_logging(config: &Config) -> Result<(), ParasolInitError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} {l} {m}{n}")))
        .build(&config.general.log_path)?;

    let mut builder = log4rs::config::Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if config.general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {l} {m}{n}")))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let log_config = builder.build(root.build(config.general.log_level))?;
    log4rs::init_config(log_config)?;

    Ok(())
}
