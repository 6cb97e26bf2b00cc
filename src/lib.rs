#[allow(non_snake_case)]
pub mod Dashboard;
#[allow(non_snake_case)]
pub mod Enrichment;
#[allow(non_snake_case)]
pub mod Ledger;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod settings;
