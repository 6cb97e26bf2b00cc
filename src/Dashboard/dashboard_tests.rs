#[cfg(test)]
mod tests {
    use crate::Dashboard::charts::ChartError;
    use crate::Dashboard::dashboard_main::{Dashboard, EMPTY_TABLE_HINT};
    use crate::Dashboard::input_form::{ABSOLUTE_ZERO_C, InputError, ReactionInput};
    use crate::Enrichment::http_client::EnrichmentError;
    use crate::Enrichment::pubchem_api::{CompoundInfo, CompoundLookup};
    use crate::Enrichment::wiki_summary::{SUMMARY_FALLBACK, SummaryLookup};
    use crate::settings::SimulatorConfig;
    use approx::assert_relative_eq;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::tempdir;

    /// fake PubChem: knows only water, records every name it was asked about
    struct FakeCompounds {
        asked: Rc<RefCell<Vec<String>>>,
    }

    impl CompoundLookup for FakeCompounds {
        fn lookup_compound(&self, name: &str) -> Result<CompoundInfo, EnrichmentError> {
            self.asked.borrow_mut().push(name.to_string());
            if name == "H2O" {
                Ok(CompoundInfo {
                    name: "oxidane".to_string(),
                    formula: "H2O".to_string(),
                    molecular_weight: Some(18.015),
                    canonical_smiles: "O".to_string(),
                    likely_solvent: true,
                    synonyms: vec!["water".to_string()],
                })
            } else {
                Err(EnrichmentError::NotFound(name.to_string()))
            }
        }
    }

    struct FakeSummaries;

    impl SummaryLookup for FakeSummaries {
        fn summary(&self, name: &str) -> String {
            if name == "H2O" {
                "Water is an inorganic compound.".to_string()
            } else {
                SUMMARY_FALLBACK.to_string()
            }
        }
    }

    fn enriched() -> (Dashboard, Rc<RefCell<Vec<String>>>) {
        let asked = Rc::new(RefCell::new(Vec::new()));
        let dashboard = Dashboard::with_enrichers(
            Box::new(FakeCompounds {
                asked: asked.clone(),
            }),
            Box::new(FakeSummaries),
        );
        (dashboard, asked)
    }

    #[test]
    fn test_submit_scenarios() {
        let mut dashboard = Dashboard::new();
        let row = dashboard
            .submit(ReactionInput::new("H2 + O2", 100.0, 2.0, ""))
            .unwrap()
            .clone();
        assert_eq!(row.product, "H2O");
        assert_eq!(row.catalyst, "None");
        assert_relative_eq!(row.rate, 5.6, epsilon = 1e-9);
        assert_relative_eq!(row.yield_percent, 23.0, epsilon = 1e-9);

        let row = dashboard
            .submit(ReactionInput::new("Na + Cl2", 300.0, 5.0, "Pt"))
            .unwrap()
            .clone();
        assert_relative_eq!(row.rate, 19.8, epsilon = 1e-9);
        assert_relative_eq!(row.yield_percent, 100.0, epsilon = 1e-9);

        let row = dashboard
            .submit(ReactionInput::new("X + Y", 25.0, 1.0, ""))
            .unwrap()
            .clone();
        assert_eq!(row.product, "Unknown");
        assert_eq!(row.catalyst, "None");

        assert_eq!(dashboard.table().len(), 3);
        assert_eq!(dashboard.ledger().len(), 3);
    }

    #[test]
    fn test_rejected_input_creates_no_record() {
        let mut dashboard = Dashboard::new();
        assert_eq!(
            dashboard.submit(ReactionInput::new("", 25.0, 1.0, "")),
            Err(InputError::EmptyReactants)
        );
        assert_eq!(
            dashboard.submit(ReactionInput::new("H2 + O2", -273.16, 1.0, "")),
            Err(InputError::BelowAbsoluteZero(-273.16))
        );
        assert_eq!(
            dashboard.submit(ReactionInput::new("H2 + O2", 25.0, -0.1, "")),
            Err(InputError::NegativePressure(-0.1))
        );
        assert!(matches!(
            dashboard.submit(ReactionInput::new("H2 + O2", f64::NAN, 1.0, "")),
            Err(InputError::NotFinite { .. })
        ));
        assert!(dashboard.ledger().is_empty());
        assert!(dashboard.table().is_empty());
        // boundaries are valid
        assert!(
            dashboard
                .submit(ReactionInput::new("H2 + O2", ABSOLUTE_ZERO_C, 0.0, ""))
                .is_ok()
        );
        assert_eq!(dashboard.ledger().len(), 1);
    }

    #[test]
    fn test_input_from_fields() {
        let input = ReactionInput::from_fields("C + O2", "", " ", "", 25.0, 1.0).unwrap();
        assert_eq!(input, ReactionInput::new("C + O2", 25.0, 1.0, ""));
        let input = ReactionInput::from_fields("C + O2", " 150.5 ", "3", "Pt", 25.0, 1.0).unwrap();
        assert_eq!(input.temperature, 150.5);
        assert_eq!(input.pressure, 3.0);
        assert_eq!(input.catalyst, "Pt");
        assert_eq!(
            ReactionInput::from_fields("C + O2", "hot", "1", "", 25.0, 1.0),
            Err(InputError::InvalidNumber {
                field: "Temperature",
                value: "hot".to_string()
            })
        );
    }

    #[test]
    fn test_render_table() {
        let mut dashboard = Dashboard::new();
        assert_eq!(dashboard.render_table(), format!("{}\n", EMPTY_TABLE_HINT));
        dashboard
            .submit(ReactionInput::new("Fe + O2", 30.0, 1.0, "Cu"))
            .unwrap();
        let text = dashboard.render_table();
        for caption in ["Reactants", "Products", "Reaction Rate (mol/s)", "Yield (%)"] {
            assert!(text.contains(caption), "{}", caption);
        }
        assert!(text.contains("Fe2O3"));
        // (30*0.05 + 0.3) * 1.2 = 2.16 ; 6 + 1.5 + 10 = 17.5
        assert!(text.contains("2.16"));
        assert!(text.contains("17.5"));
        assert!(!text.contains("17.50"));
    }

    #[test]
    fn test_table_and_csv_show_stored_values() {
        let mut dashboard = Dashboard::new();
        // rate 0.125 rounds to 0.12, yield 0.5
        dashboard
            .submit(ReactionInput::new("C + O2", 2.5, 0.0, ""))
            .unwrap();
        let row = dashboard.table().rows()[0].clone();
        assert_eq!(row.rate, 0.12);
        let text = dashboard.render_table();
        assert!(text.contains(&format!(" {} ", row.rate)));
        assert!(text.contains(&format!(" {} ", row.yield_percent)));
        let csv = String::from_utf8(dashboard.export_csv().unwrap()).unwrap();
        assert_eq!(csv.lines().nth(1), Some("C + O2,CO2,2.5,0.0,None,0.12,0.5"));
    }

    #[test]
    fn test_render_charts() {
        let mut dashboard = Dashboard::new();
        assert_eq!(dashboard.render_charts(20), Err(ChartError::Empty));
        dashboard
            .submit(ReactionInput::new("H2 + O2", 100.0, 2.0, ""))
            .unwrap();
        let text = dashboard.render_charts(20).unwrap();
        assert!(text.contains("Reaction Rates (mol/s)"));
        assert!(text.contains("Reaction Yields (% Yield)"));
        assert!(text.contains("H2 + O2 | #################### 5.6"));
    }

    #[test]
    fn test_export_csv() {
        let mut dashboard = Dashboard::new();
        let empty = String::from_utf8(dashboard.export_csv().unwrap()).unwrap();
        assert_eq!(
            empty,
            "Reactants,Products,Temperature (°C),Pressure (atm),Catalyst,Reaction Rate (mol/s),Yield (%)\n"
        );
        dashboard
            .submit(ReactionInput::new("H2 + O2", 100.0, 2.0, ""))
            .unwrap();
        dashboard
            .submit(ReactionInput::new("Na + Cl2", 300.0, 5.0, "Pt"))
            .unwrap();
        let csv = String::from_utf8(dashboard.export_csv().unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "H2 + O2,H2O,100.0,2.0,None,5.6,23.0");
        assert_eq!(lines[2], "Na + Cl2,NaCl,300.0,5.0,Pt,19.8,100.0");

        let dir = tempdir().unwrap();
        let path = dir.path().join("reactions.csv");
        dashboard.export_csv_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), csv);
    }

    #[test]
    fn test_csv_quotes_commas() {
        let mut dashboard = Dashboard::new();
        dashboard
            .submit(ReactionInput::new("A, B", 0.0, 0.0, ""))
            .unwrap();
        let csv = String::from_utf8(dashboard.export_csv().unwrap()).unwrap();
        assert_eq!(csv.lines().nth(1), Some("\"A, B\",Unknown,0.0,0.0,None,0.0,0.0"));
    }

    #[test]
    fn test_basic_variant_has_no_enrichment() {
        let mut dashboard = Dashboard::new();
        dashboard
            .submit(ReactionInput::new("H2 + O2", 100.0, 2.0, ""))
            .unwrap();
        assert!(!dashboard.is_enriched());
        assert!(dashboard.enrich("H2O").is_none());
        assert!(dashboard.enrich_row(0).is_none());

        let mut config = SimulatorConfig::default();
        config.enrichment_enabled = false;
        assert!(!Dashboard::from_config(&config).unwrap().is_enriched());
    }

    #[test]
    fn test_enrichment_panel() {
        let (mut dashboard, asked) = enriched();
        assert!(dashboard.is_enriched());
        dashboard
            .submit(ReactionInput::new("H2 + O2", 100.0, 2.0, ""))
            .unwrap();
        dashboard
            .submit(ReactionInput::new("N2 + H2", 400.0, 200.0, "Fe"))
            .unwrap();
        dashboard
            .submit(ReactionInput::new("X + Y", 25.0, 1.0, ""))
            .unwrap();

        let water = dashboard.enrich_row(0).unwrap();
        assert_eq!(water.product, "H2O");
        assert_eq!(water.compound.as_ref().unwrap().name, "oxidane");
        assert_eq!(water.summary, "Water is an inorganic compound.");
        let text = water.render();
        assert!(text.contains("oxidane"));
        assert!(text.contains("Water is an inorganic compound."));

        // lookup errors become a message, not a failure
        let ammonia = dashboard.enrich_row(1).unwrap();
        assert_eq!(
            ammonia.compound,
            Err("Compound 'NH3' not found".to_string())
        );
        assert_eq!(ammonia.summary, SUMMARY_FALLBACK);
        assert!(ammonia.render().contains("Error: Compound 'NH3' not found"));

        // unknown product never reaches the collaborators
        let unknown = dashboard.enrich_row(2).unwrap();
        assert!(unknown.compound.is_err());
        assert_eq!(unknown.summary, SUMMARY_FALLBACK);
        assert_eq!(*asked.borrow(), vec!["H2O".to_string(), "NH3".to_string()]);

        assert!(dashboard.enrich_row(3).is_none());
    }

    #[test]
    fn test_known_reactions_listing() {
        let dashboard = Dashboard::new();
        let text = dashboard.render_known_reactions();
        for product in ["H2O", "NH3", "CO2", "NaCl", "Fe2O3"] {
            assert!(text.contains(product));
        }
    }
}
