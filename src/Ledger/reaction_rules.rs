use std::collections::HashMap;
use std::sync::OnceLock;

/// product returned for reactants which are not in the table
pub const UNKNOWN_PRODUCT: &str = "Unknown";

static REACTION_RULES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// reactants -> product, created on first use
pub fn reaction_rules() -> &'static HashMap<&'static str, &'static str> {
    REACTION_RULES.get_or_init(|| {
        HashMap::from([
            ("H2 + O2", "H2O"),
            ("N2 + H2", "NH3"),
            ("C + O2", "CO2"),
            ("Na + Cl2", "NaCl"),
            ("Fe + O2", "Fe2O3"),
        ])
    })
}

/// Exact-match lookup of the product for a reactants string.
/// No case folding, no trimming, no partial matches: anything not in the table
/// gives `"Unknown"`.
pub fn predict_product(reactants: &str) -> &'static str {
    reaction_rules()
        .get(reactants)
        .copied()
        .unwrap_or(UNKNOWN_PRODUCT)
}

/// all known (reactants, product) pairs sorted by reactants
pub fn known_reactions() -> Vec<(&'static str, &'static str)> {
    let mut pairs: Vec<(&'static str, &'static str)> = reaction_rules()
        .iter()
        .map(|(reactants, product)| (*reactants, *product))
        .collect();
    pairs.sort();
    pairs
}
