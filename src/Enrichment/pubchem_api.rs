//! # PubChem compound lookup
//!
//! ## Aim
//! Resolves a product name (e.g. "H2O", "Sodium chloride") to compound metadata using
//! PubChem PUG REST (https://pubchem.ncbi.nlm.nih.gov/rest/pug).
//!
//! ## Main Data Structures and Logic
//! - `CompoundLookup`: capability "product name -> metadata", so the dashboard can be tested with fakes
//! - `PubChemClient<C>`: real implementation, generic over `HttpClient` (dependency injection)
//! - `CompoundInfo`: name, formula, molecular weight, canonical SMILES, synonyms and a solvent flag
//!
//! Two requests are made: the property table and the synonym list. A 404 on the
//! properties means the name is unknown to PubChem. A failed synonym request is not
//! fatal, the compound is returned without synonyms.
//!
//! ## Solvent flag
//! `likely_solvent` is true when any synonym contains the word "solvent". This is a weak
//! heuristic with no accuracy guarantee, kept only as a hint for the user.
use crate::Enrichment::http_client::{EnrichmentError, HttpClient, join_segments};
use crate::settings::SimulatorConfig;
use log::{info, warn};
use prettytable::{Cell, Row, Table};
use serde_json::Value;
use url::Url;

const PROPERTIES: &str = "MolecularFormula,MolecularWeight,CanonicalSMILES,IUPACName";
// newer PubChem responses name the SMILES column differently
const SMILES_KEYS: [&str; 3] = ["CanonicalSMILES", "ConnectivitySMILES", "SMILES"];

#[derive(Debug, Clone, PartialEq)]
pub struct CompoundInfo {
    pub name: String,
    pub formula: String,
    /// g/mol
    pub molecular_weight: Option<f64>,
    pub canonical_smiles: String,
    pub likely_solvent: bool,
    pub synonyms: Vec<String>,
}

impl CompoundInfo {
    pub fn to_table(&self) -> Table {
        let weight = self
            .molecular_weight
            .map(|w| format!("{} g/mol", w))
            .unwrap_or_else(|| "n/a".to_string());
        let solvent = if self.likely_solvent { "Yes" } else { "No" };
        let mut table = Table::new();
        for (key, value) in [
            ("Name", self.name.clone()),
            ("Formula", self.formula.clone()),
            ("Molecular weight", weight),
            ("Canonical SMILES", self.canonical_smiles.clone()),
            ("Likely solvent", solvent.to_string()),
            ("Synonyms", self.synonyms.join(", ")),
        ] {
            table.add_row(Row::new(vec![Cell::new(key), Cell::new(&value)]));
        }
        table
    }
}

/// resolve product name to compound metadata
pub trait CompoundLookup {
    fn lookup_compound(&self, name: &str) -> Result<CompoundInfo, EnrichmentError>;
}

pub struct PubChemClient<C: HttpClient> {
    client: C,
    base_url: String,
    max_synonyms: usize,
}

impl<C: HttpClient> PubChemClient<C> {
    pub fn with_client(client: C, config: &SimulatorConfig) -> Self {
        Self {
            client,
            base_url: config.pubchem_base_url.clone(),
            max_synonyms: config.max_synonyms,
        }
    }

    pub fn properties_url(&self, name: &str) -> Result<Url, EnrichmentError> {
        join_segments(&self.base_url, &[name, "property", PROPERTIES, "JSON"])
    }

    pub fn synonyms_url(&self, name: &str) -> Result<Url, EnrichmentError> {
        join_segments(&self.base_url, &[name, "synonyms", "JSON"])
    }

    fn fetch_json(&self, url: &Url, name: &str) -> Result<Value, EnrichmentError> {
        let text = self.client.get_text(url.as_str()).map_err(|e| {
            if e.is_not_found() {
                EnrichmentError::NotFound(name.to_string())
            } else {
                EnrichmentError::Http(e)
            }
        })?;
        serde_json::from_str(&text).map_err(|e| EnrichmentError::InvalidResponse(e.to_string()))
    }

    fn fetch_synonyms(&self, name: &str) -> Result<Vec<String>, EnrichmentError> {
        let url = self.synonyms_url(name)?;
        let json = self.fetch_json(&url, name)?;
        Ok(parse_synonyms(&json, usize::MAX))
    }
}

impl<C: HttpClient> CompoundLookup for PubChemClient<C> {
    fn lookup_compound(&self, name: &str) -> Result<CompoundInfo, EnrichmentError> {
        let url = self.properties_url(name)?;
        info!("PubChem lookup for {}: {}", name, url);
        let json = self.fetch_json(&url, name)?;
        let mut compound = parse_properties(&json, name)?;
        match self.fetch_synonyms(name) {
            Ok(synonyms) => {
                // the flag looks at every synonym, only the first few are kept for display
                compound.likely_solvent = looks_like_solvent(&synonyms);
                compound.synonyms = synonyms.into_iter().take(self.max_synonyms).collect();
            }
            Err(e) => warn!("no synonyms for {}: {}", name, e),
        }
        Ok(compound)
    }
}

/// parses `{"PropertyTable": {"Properties": [{...}]}}`, first entry only
pub fn parse_properties(json: &Value, queried_name: &str) -> Result<CompoundInfo, EnrichmentError> {
    let properties = json
        .pointer("/PropertyTable/Properties/0")
        .ok_or_else(|| EnrichmentError::NotFound(queried_name.to_string()))?;
    let text = |key: &str| -> Option<String> {
        properties
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    };
    // weight comes as "18.015" in current responses and as 18.015 in older ones
    let molecular_weight = match properties.get("MolecularWeight") {
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    };
    let canonical_smiles = SMILES_KEYS
        .iter()
        .find_map(|key| text(*key))
        .unwrap_or_default();
    Ok(CompoundInfo {
        name: text("IUPACName").unwrap_or_else(|| queried_name.to_string()),
        formula: text("MolecularFormula").unwrap_or_default(),
        molecular_weight,
        canonical_smiles,
        likely_solvent: false,
        synonyms: Vec::new(),
    })
}

/// parses `{"InformationList": {"Information": [{"Synonym": [...]}]}}`
pub fn parse_synonyms(json: &Value, max_synonyms: usize) -> Vec<String> {
    json.pointer("/InformationList/Information/0/Synonym")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(Value::as_str)
                .take(max_synonyms)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub fn looks_like_solvent(synonyms: &[String]) -> bool {
    synonyms
        .iter()
        .any(|s| s.to_lowercase().contains("solvent"))
}
