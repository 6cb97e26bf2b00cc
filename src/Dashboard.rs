/// user input of one reaction: parsing of text fields and range checks
pub mod input_form;
/// text bar charts of reaction rates and yields
pub mod charts;
/// CSV export of the derived table
pub mod export;
/// session state: ledger, last derived table, optional enrichment collaborators
/// # Example
/// ```
/// use ReactSim::Dashboard::dashboard_main::Dashboard;
/// use ReactSim::Dashboard::input_form::ReactionInput;
/// let mut dashboard = Dashboard::new();
/// let input = ReactionInput::new("Na + Cl2", 300.0, 5.0, "Pt");
/// let row = dashboard.submit(input).unwrap();
/// assert_eq!(row.product, "NaCl");
/// assert_eq!(row.yield_percent, 100.0);
/// ```
pub mod dashboard_main;
mod dashboard_tests;
