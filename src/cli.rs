/// interactive terminal menu of the dashboard
pub mod cli_main;
