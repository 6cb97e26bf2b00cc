//! # Reaction Ledger
//!
//! ## Aim
//! Keeps every reaction the user submitted during a session and turns them into a
//! table with two estimated metrics: reaction rate and yield.
//!
//! ## Main Data Structures and Logic
//! - `ReactionRecord`: one submitted reaction (reactants, predicted product, T, P, catalyst)
//! - `ReactionLedger`: append-only vector of records. Records are never mutated or removed
//! - `DerivedReaction`: record plus rate and yield, one row of the table
//! - `ReactionTable`: ordered rows, rebuilt by `derive_table()` after every new reaction
//!
//! ## Formulas
//! - rate = (T*0.05 + P*0.3) * (1.2 with catalyst, 1.0 without)
//! - yield = min(100, T*0.2 + P*1.5 + (10 with catalyst, 0 without))
//!
//! both rounded to 2 decimal places. A record has a catalyst when its catalyst field is not "None".
use crate::Ledger::reaction_rules::predict_product;
use log::{debug, info};
use serde::Serialize;

/// value stored when no catalyst was given
pub const NO_CATALYST: &str = "None";
/// captions of the columns of the derived table, in order
pub const TABLE_COLUMNS: [&str; 7] = [
    "Reactants",
    "Products",
    "Temperature (°C)",
    "Pressure (atm)",
    "Catalyst",
    "Reaction Rate (mol/s)",
    "Yield (%)",
];

/// Rounds to 2 decimal places. The exact binary value is rounded, ties go to even:
/// 0.125 -> 0.12, 0.015 (stored as 0.01499..) -> 0.01. Non-finite values pass through.
pub fn round2(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{:.2}", x).parse::<f64>().unwrap_or(x)
}

/// empty catalyst input becomes "None"
pub fn normalize_catalyst(catalyst: &str) -> String {
    if catalyst.is_empty() {
        NO_CATALYST.to_string()
    } else {
        catalyst.to_string()
    }
}

/// one reaction as it was submitted by the user
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionRecord {
    pub reactants: String,
    pub product: String,
    /// °C
    pub temperature: f64,
    /// atm
    pub pressure: f64,
    pub catalyst: String,
}

impl ReactionRecord {
    /// builds a record: catalyst is normalized and product is predicted from reactants
    pub fn new(reactants: &str, temperature: f64, pressure: f64, catalyst: &str) -> Self {
        Self {
            reactants: reactants.to_string(),
            product: predict_product(reactants).to_string(),
            temperature,
            pressure,
            catalyst: normalize_catalyst(catalyst),
        }
    }

    pub fn has_catalyst(&self) -> bool {
        self.catalyst != NO_CATALYST
    }

    /// reaction rate, mol/s
    pub fn reaction_rate(&self) -> f64 {
        let factor = if self.has_catalyst() { 1.2 } else { 1.0 };
        round2((self.temperature * 0.05 + self.pressure * 0.3) * factor)
    }

    /// yield, %, never above 100
    pub fn yield_percent(&self) -> f64 {
        let bonus = if self.has_catalyst() { 10.0 } else { 0.0 };
        round2(f64::min(
            100.0,
            self.temperature * 0.2 + self.pressure * 1.5 + bonus,
        ))
    }

    pub fn derive(&self) -> DerivedReaction {
        DerivedReaction {
            reactants: self.reactants.clone(),
            product: self.product.clone(),
            temperature: self.temperature,
            pressure: self.pressure,
            catalyst: self.catalyst.clone(),
            rate: self.reaction_rate(),
            yield_percent: self.yield_percent(),
        }
    }
}

/// row of the derived table. Serialized field names are the column captions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedReaction {
    #[serde(rename = "Reactants")]
    pub reactants: String,
    #[serde(rename = "Products")]
    pub product: String,
    #[serde(rename = "Temperature (°C)")]
    pub temperature: f64,
    #[serde(rename = "Pressure (atm)")]
    pub pressure: f64,
    #[serde(rename = "Catalyst")]
    pub catalyst: String,
    #[serde(rename = "Reaction Rate (mol/s)")]
    pub rate: f64,
    #[serde(rename = "Yield (%)")]
    pub yield_percent: f64,
}

/// tabular projection of the ledger
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReactionTable {
    rows: Vec<DerivedReaction>,
}

impl ReactionTable {
    pub fn rows(&self) -> &[DerivedReaction] {
        &self.rows
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn columns(&self) -> &'static [&'static str] {
        &TABLE_COLUMNS
    }
}

/// append-only sequence of reactions of one session
#[derive(Debug, Clone, Default)]
pub struct ReactionLedger {
    records: Vec<ReactionRecord>,
}

impl ReactionLedger {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a record and appends it. Same reactants may be added any number of times,
    /// each call is a separate entry.
    pub fn add_reaction(
        &mut self,
        reactants: &str,
        temperature: f64,
        pressure: f64,
        catalyst: &str,
    ) -> &ReactionRecord {
        let record = ReactionRecord::new(reactants, temperature, pressure, catalyst);
        info!(
            "reaction added: {} -> {} (T = {} °C, P = {} atm, catalyst: {})",
            record.reactants, record.product, record.temperature, record.pressure, record.catalyst
        );
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// rate and yield for every record in insertion order
    pub fn derive_table(&self) -> ReactionTable {
        let rows: Vec<DerivedReaction> = self.records.iter().map(ReactionRecord::derive).collect();
        debug!("derived table rebuilt: {} rows", rows.len());
        ReactionTable { rows }
    }

    pub fn records(&self) -> &[ReactionRecord] {
        &self.records
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
