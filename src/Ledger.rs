/// eng
/// Static table of known reactant pairs and the product each one gives.
/// The table is built once per process and never changes; lookups are exact,
/// case and whitespace sensitive.
pub mod reaction_rules;
/// The reaction ledger: append-only sequence of user reactions and the
/// derived table with reaction rate and yield for every reaction.
/// # Example
/// ```
/// use ReactSim::Ledger::reaction_ledger::ReactionLedger;
/// let mut ledger = ReactionLedger::new();
/// ledger.add_reaction("H2 + O2", 100.0, 2.0, "");
/// let table = ledger.derive_table();
/// assert_eq!(table.rows()[0].product, "H2O");
/// assert_eq!(table.rows()[0].catalyst, "None");
/// ```
pub mod reaction_ledger;
