//! # Dashboard
//!
//! ## Purpose
//! The presentation layer of the simulator without any terminal input/output, so that
//! everything the user sees can be produced (and tested) as plain values and strings.
//!
//! ## Logic
//! - `submit()` validates the form; only valid input reaches the ledger. After every new
//!   reaction the derived table is rebuilt and kept for rendering
//! - `render_table()`, `render_charts()` and `export_csv()` work on the kept table
//! - in the enriched variant `enrich()` asks two collaborators about the predicted product:
//!   compound metadata (may fail, the error becomes a message) and a text summary (never fails)
use crate::Dashboard::charts::{ChartError, reaction_charts};
use crate::Dashboard::export::{ExportError, table_to_csv, write_csv};
use crate::Dashboard::input_form::{InputError, ReactionInput};
use crate::Enrichment::http_client::{HttpError, build_client};
use crate::Enrichment::pubchem_api::{CompoundInfo, CompoundLookup, PubChemClient};
use crate::Enrichment::wiki_summary::{SUMMARY_FALLBACK, SummaryLookup, WikiSummaryClient};
use crate::Ledger::reaction_ledger::{DerivedReaction, ReactionLedger, ReactionTable};
use crate::Ledger::reaction_rules::{UNKNOWN_PRODUCT, known_reactions};
use crate::settings::SimulatorConfig;
use log::{info, warn};
use prettytable::{Cell, Row, Table};
use std::path::Path;

pub const EMPTY_TABLE_HINT: &str = "Add a reaction using the menu to see results.";
pub const SUBMIT_SUCCESS: &str = "Reaction added and simulated.";

/// what the enriched variant shows about a product
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentPanel {
    pub product: String,
    /// metadata, or the message shown instead of it
    pub compound: Result<CompoundInfo, String>,
    pub summary: String,
}

impl EnrichmentPanel {
    pub fn render(&self) -> String {
        let compound = match &self.compound {
            Ok(info) => info.to_table().to_string(),
            Err(message) => format!("Error: {}\n", message),
        };
        format!(
            "Compound information: {}\n{}\nSummary:\n{}\n",
            self.product, compound, self.summary
        )
    }
}

/// external collaborators of the enriched variant
pub struct Enrichers {
    pub compounds: Box<dyn CompoundLookup>,
    pub summaries: Box<dyn SummaryLookup>,
}

pub struct Dashboard {
    ledger: ReactionLedger,
    table: ReactionTable,
    enrichers: Option<Enrichers>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    /// basic variant, no network lookups
    pub fn new() -> Self {
        Self {
            ledger: ReactionLedger::new(),
            table: ReactionTable::default(),
            enrichers: None,
        }
    }

    pub fn with_enrichers(
        compounds: Box<dyn CompoundLookup>,
        summaries: Box<dyn SummaryLookup>,
    ) -> Self {
        Self {
            enrichers: Some(Enrichers {
                compounds,
                summaries,
            }),
            ..Self::new()
        }
    }

    /// enriched variant with PubChem and Wikipedia if enabled in the config
    pub fn from_config(config: &SimulatorConfig) -> Result<Self, HttpError> {
        if !config.enrichment_enabled {
            return Ok(Self::new());
        }
        let client = build_client(config)?;
        Ok(Self::with_enrichers(
            Box::new(PubChemClient::with_client(client.clone(), config)),
            Box::new(WikiSummaryClient::with_client(client, config)),
        ))
    }

    pub fn is_enriched(&self) -> bool {
        self.enrichers.is_some()
    }

    /// Validates the input, appends the reaction and rebuilds the table.
    /// Returns the new row of the table.
    pub fn submit(&mut self, input: ReactionInput) -> Result<&DerivedReaction, InputError> {
        if let Err(e) = input.validate() {
            warn!("reaction rejected: {}", e);
            return Err(e);
        }
        self.ledger.add_reaction(
            &input.reactants,
            input.temperature,
            input.pressure,
            &input.catalyst,
        );
        self.table = self.ledger.derive_table();
        info!("{}", SUBMIT_SUCCESS);
        let last = self.table.len() - 1;
        Ok(&self.table.rows()[last])
    }

    pub fn table(&self) -> &ReactionTable {
        &self.table
    }

    pub fn ledger(&self) -> &ReactionLedger {
        &self.ledger
    }

    pub fn render_table(&self) -> String {
        if self.table.is_empty() {
            return format!("{}\n", EMPTY_TABLE_HINT);
        }
        let mut table = Table::new();
        table.set_titles(Row::new(
            self.table.columns().iter().map(|c| Cell::new(c)).collect(),
        ));
        for row in self.table.rows() {
            table.add_row(Row::new(vec![
                Cell::new(&row.reactants),
                Cell::new(&row.product),
                Cell::new(&row.temperature.to_string()),
                Cell::new(&row.pressure.to_string()),
                Cell::new(&row.catalyst),
                Cell::new(&row.rate.to_string()),
                Cell::new(&row.yield_percent.to_string()),
            ]));
        }
        table.to_string()
    }

    pub fn render_charts(&self, width: usize) -> Result<String, ChartError> {
        let (rates, yields) = reaction_charts(&self.table)?;
        Ok(format!("{}\n{}", rates.render(width), yields.render(width)))
    }

    pub fn export_csv(&self) -> Result<Vec<u8>, ExportError> {
        table_to_csv(&self.table)
    }

    pub fn export_csv_to(&self, path: &Path) -> Result<(), ExportError> {
        write_csv(path, &self.table)
    }

    /// `None` in the basic variant. Collaborator errors never escape from here.
    pub fn enrich(&self, product: &str) -> Option<EnrichmentPanel> {
        let enrichers = self.enrichers.as_ref()?;
        // "Unknown" is a sentinel, not a compound name
        if product == UNKNOWN_PRODUCT {
            return Some(EnrichmentPanel {
                product: product.to_string(),
                compound: Err("No compound data for an unknown product".to_string()),
                summary: SUMMARY_FALLBACK.to_string(),
            });
        }
        let compound = enrichers.compounds.lookup_compound(product).map_err(|e| {
            warn!("compound lookup failed: {}", e);
            e.to_string()
        });
        let summary = enrichers.summaries.summary(product);
        Some(EnrichmentPanel {
            product: product.to_string(),
            compound,
            summary,
        })
    }

    /// enrichment of the table row with index `row` (0-based)
    pub fn enrich_row(&self, row: usize) -> Option<EnrichmentPanel> {
        let product = self.table.rows().get(row)?.product.clone();
        self.enrich(&product)
    }

    pub fn render_known_reactions(&self) -> String {
        let mut table = Table::new();
        table.set_titles(Row::new(vec![Cell::new("Reactants"), Cell::new("Products")]));
        for (reactants, product) in known_reactions() {
            table.add_row(Row::new(vec![Cell::new(reactants), Cell::new(product)]));
        }
        table.to_string()
    }
}
