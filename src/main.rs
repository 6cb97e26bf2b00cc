use ReactSim::Dashboard::dashboard_main::Dashboard;
use ReactSim::Utils::logger::init_logging;
use ReactSim::cli::cli_main::run_interactive_menu;
use ReactSim::settings::{DEFAULT_CONFIG_FILE, SimulatorConfig};
use log::{error, warn};

pub fn main() {
    let config_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    let loaded = SimulatorConfig::load(&config_file);
    let config = loaded.as_ref().cloned().unwrap_or_default();
    if let Err(e) = init_logging(&config) {
        eprintln!("Failed to start logging: {}", e);
    }
    if let Err(e) = loaded {
        warn!("{}: {}; using default settings", config_file, e);
    }
    let mut dashboard = match Dashboard::from_config(&config) {
        Ok(dashboard) => dashboard,
        Err(e) => {
            warn!("{}; compound lookups are disabled", e);
            Dashboard::new()
        }
    };
    if let Err(e) = run_interactive_menu(&mut dashboard, &config) {
        error!("terminal error: {}", e);
        std::process::exit(1);
    }
}
