use crate::settings::SimulatorConfig;
use log::info;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;

/// Sets up terminal logging and, if `log_file` is configured, logging into that file.
/// Calling it a second time does nothing (the global logger is already set).
pub fn init_logging(config: &SimulatorConfig) -> Result<(), Box<dyn std::error::Error>> {
    let level = config.log_level_filter();
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        term_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(path) = &config.log_file {
        let file = File::create(path)?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file));
    }
    if CombinedLogger::init(loggers).is_ok() {
        info!("logging started at level {}", level);
    }
    Ok(())
}

// reqwest/hyper internals are too chatty for the terminal
fn term_config() -> Config {
    ConfigBuilder::new()
        .add_filter_ignore_str("reqwest")
        .add_filter_ignore_str("hyper")
        .build()
}
