//! # Settings Module
//!
//! ## Purpose
//! Holds the configuration of the dashboard: addresses of the external data services,
//! network timeout, how much enrichment data to show, default form values and logging.
//!
//! ## Configuration File
//! JSON file (default name `reactsim_config.json`). Every field is optional, missing
//! fields take default values. If the file does not exist the defaults are used.
//! ```json
//! {
//!   "pubchem_base_url": "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/name",
//!   "wikipedia_base_url": "https://en.wikipedia.org/api/rest_v1/page/summary",
//!   "request_timeout_secs": 10,
//!   "max_synonyms": 5,
//!   "summary_sentences": 2,
//!   "enrichment_enabled": true,
//!   "default_temperature": 25.0,
//!   "default_pressure": 1.0,
//!   "log_level": "info",
//!   "log_file": null
//! }
//! ```
//!
//! ## Usage
//! ```rust, ignore
//! use ReactSim::settings::SimulatorConfig;
//! let config = SimulatorConfig::load("reactsim_config.json")?;
//! let level = config.log_level_filter();
//! ```
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "reactsim_config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read or write config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// PUG REST endpoint for compound lookup by name
    pub pubchem_base_url: String,
    /// REST endpoint returning page summaries
    pub wikipedia_base_url: String,
    pub request_timeout_secs: u64,
    /// how many synonyms of a compound are kept
    pub max_synonyms: usize,
    /// how many sentences of the summary are kept
    pub summary_sentences: usize,
    /// false - basic dashboard without network lookups
    pub enrichment_enabled: bool,
    /// °C, used when the temperature field is left blank
    pub default_temperature: f64,
    /// atm, used when the pressure field is left blank
    pub default_pressure: f64,
    /// off, error, warn, info, debug or trace
    pub log_level: String,
    /// if set, log is also written to this file
    pub log_file: Option<String>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            pubchem_base_url: "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/name"
                .to_string(),
            wikipedia_base_url: "https://en.wikipedia.org/api/rest_v1/page/summary".to_string(),
            request_timeout_secs: 10,
            max_synonyms: 5,
            summary_sentences: 2,
            enrichment_enabled: true,
            default_temperature: 25.0,
            default_pressure: 1.0,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl SimulatorConfig {
    /// Reads the config file. Missing file is not an error: defaults are returned.
    pub fn load(config_file: &str) -> Result<Self, ConfigError> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let config: SimulatorConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(SimulatorConfig::default())
        }
    }

    pub fn save(&self, config_file: &str) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_file, content)?;
        Ok(())
    }

    /// unknown level names fall back to Info
    pub fn log_level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
