//! End-to-end tests of the value store and cash-flow formulas.
//!
//! Tests cover:
//! - Unknown-name asymmetry between writes and reads
//! - Unset indicators reading as zero
//! - Overwrites and round-trips through different aliases
//! - Formula results and the ordering dependency of cash
//! - Registry built from an INI file on disk

mod common;

use approx::assert_relative_eq;
use cashflow::adapters::file_config_adapter::FileConfigAdapter;
use cashflow::domain::chart_of_accounts::{CHART_OF_ACCOUNTS, DERIVED_TOTALS};
use cashflow::domain::engine_config::build_engine_config;
use cashflow::{CashflowError, IndicatorRegistry, Lookup, ValueStore};
use common::*;
use std::io::Write;

mod unknown_names {
    use super::*;

    #[test]
    fn write_fails_read_returns_zero() {
        let registry = registry();
        let audit = RecordingAudit::new();
        let mut store = ValueStore::with_audit(&registry, &audit);

        let err = store.set_value("not_a_real_name", 1.0).unwrap_err();
        assert!(matches!(err, CashflowError::UnknownIndicator { name } if name == "not_a_real_name"));

        assert_eq!(store.get_value("not_a_real_name"), 0.0);
        assert_eq!(audit.unresolved_reads(), vec!["not_a_real_name".to_string()]);
        assert!(audit.sets().is_empty());
    }

    #[test]
    fn failed_write_leaves_store_untouched() {
        let registry = registry();
        let mut store = ValueStore::new(&registry);
        store.set_value("NI", 5.0).unwrap();
        assert!(store.set_value("NI2", 6.0).is_err());
        assert_eq!(store.snapshot(), vec![("net_income".to_string(), 5.0)]);
    }

    #[test]
    fn lookup_distinguishes_unknown_from_unset() {
        let registry = registry();
        let store = ValueStore::new(&registry);
        assert_eq!(store.lookup("nope"), Lookup::Unresolved);
        assert_eq!(store.lookup("Inv"), Lookup::Unset { id: "inventory" });
        assert_eq!(store.lookup("nope").value(), store.lookup("Inv").value());
    }
}

mod reads_and_writes {
    use super::*;

    #[test]
    fn every_indicator_unset_reads_zero() {
        let registry = registry();
        let store = ValueStore::new(&registry);
        for (id, _, _) in CHART_OF_ACCOUNTS {
            assert_eq!(store.get_value(id), 0.0);
        }
    }

    #[test]
    fn overwrite_through_different_aliases() {
        let registry = registry();
        let mut store = ValueStore::new(&registry);
        store.set_value("Net Accounts Receivable", 7.0).unwrap();
        store.set_value("NetA/R", 9.0).unwrap();
        assert_eq!(store.get_value("net_accounts_receivable"), 9.0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn round_trip_through_every_other_spelling() {
        let registry = registry();
        let value = 1234.5678_f64;
        for ind in registry.iter() {
            let spellings = ind.spellings();
            let mut store = ValueStore::new(&registry);
            store.set_value(&spellings[0], value).unwrap();
            for other in &spellings[1..] {
                assert_eq!(store.get_value(other), value, "{} via {}", ind.id, other);
            }
        }
    }

    #[test]
    fn set_audit_names_display_name_and_id() {
        let registry = registry();
        let audit = RecordingAudit::new();
        let mut store = ValueStore::with_audit(&registry, &audit);
        store.set_value("delDiv", 12).unwrap();
        assert_eq!(
            audit.sets(),
            vec![("Дивиденды".to_string(), "dividends".to_string(), 12.0)]
        );
    }

    #[test]
    fn derived_totals_are_readable_by_alias() {
        let registry = registry();
        let mut store = ValueStore::new(&registry);
        store.set_value("CC", 10.0).unwrap();
        store.compute_statement();
        for key in DERIVED_TOTALS {
            assert!(store.is_set(key), "{key} not stored");
        }
        assert_relative_eq!(store.get_value("FinancingCF"), 10.0);
        assert_relative_eq!(store.get_value("Финансовый денежный поток"), 10.0);
    }
}

mod formulas {
    use super::*;

    fn seeded(registry: &IndicatorRegistry) -> ValueStore<'_> {
        let mut store = ValueStore::new(registry);
        for (name, value) in OPERATING_INPUTS {
            store.set_value(name, value).unwrap();
        }
        store.set_value("NetPPE", 50.0).unwrap();
        store.set_value("ONCA", 4.0).unwrap();
        store.set_value("OE", 1.5).unwrap();
        store.set_value("NCL", 60.0).unwrap();
        store.set_value("CC", 25.0).unwrap();
        store.set_value("Div", 15.0).unwrap();
        store
    }

    #[test]
    fn operational_cf_matches_worked_example() {
        let registry = registry();
        let mut store = ValueStore::new(&registry);
        for (name, value) in OPERATING_INPUTS {
            store.set_value(name, value).unwrap();
        }
        assert_relative_eq!(store.calculate_operational_cf(), 118.0);
    }

    #[test]
    fn legacy_spellings_feed_formulas() {
        let registry = registry();
        let mut store = ValueStore::new(&registry);
        store.set_value("depreciation_expence", 20.0).unwrap();
        store.set_value("net_property, plant & equipment", 5.0).unwrap();
        store.set_value("non-current liabilities", 3.0).unwrap();

        assert_relative_eq!(store.calculate_operational_cf(), 20.0);
        assert_relative_eq!(store.calculate_investing_cf(), 15.0);
        assert_relative_eq!(store.calculate_financing_cf(), 3.0);
    }

    #[test]
    fn cash_before_components_is_zero() {
        let registry = registry();
        let mut store = seeded(&registry);
        assert_eq!(store.calculate_cash(), 0.0);
    }

    #[test]
    fn cash_after_components_is_their_sum() {
        let registry = registry();
        let mut store = seeded(&registry);

        let operating = store.calculate_operational_cf();
        let investing = store.calculate_investing_cf();
        let financing = store.calculate_financing_cf();
        assert_relative_eq!(operating, 118.0);
        assert_relative_eq!(investing, -30.5);
        assert_relative_eq!(financing, 70.0);
        assert_eq!(store.calculate_cash(), operating + investing + financing);
    }

    #[test]
    fn compute_statement_matches_manual_order() {
        let registry = registry();
        let mut manual = seeded(&registry);
        manual.calculate_operational_cf();
        manual.calculate_investing_cf();
        manual.calculate_financing_cf();
        let expected = manual.calculate_cash();

        let mut store = seeded(&registry);
        let statement = store.compute_statement();
        assert_eq!(statement.cash, expected);
        assert_relative_eq!(statement.cash, 157.5);
    }

    #[test]
    fn formulas_report_derived_writes() {
        let registry = registry();
        let audit = RecordingAudit::new();
        let mut store = ValueStore::with_audit(&registry, &audit);
        store.set_value("CC", 2.0).unwrap();
        store.compute_statement();
        assert_eq!(
            audit.derived(),
            vec![
                ("operation_cf".to_string(), 0.0),
                ("investing_cf".to_string(), 0.0),
                ("financing_cf".to_string(), 2.0),
                ("cash".to_string(), 2.0),
            ]
        );
        assert!(audit.unresolved_reads().is_empty());
    }
}

mod configured_registry {
    use super::*;

    fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn extra_indicator_from_file_is_storable() {
        init_logging();
        let file = write_temp_ini(
            "[registry]\non_duplicate = reject\n\n[indicator:capex]\ndisplay_name = Капитальные затраты\naliases = CapEx, Capital Expenditure\n",
        );
        let adapter = FileConfigAdapter::load(file.path()).unwrap();
        let config = build_engine_config(&adapter).unwrap();
        let registry = IndicatorRegistry::from_config(&config).unwrap();

        let mut store = ValueStore::new(&registry);
        store.set_value("capital expenditure", 42.0).unwrap();
        assert_eq!(store.get_value("КАПИТАЛЬНЫЕ ЗАТРАТЫ"), 42.0);

        // extras do not take part in the formulas
        assert_eq!(store.calculate_investing_cf(), 0.0);
    }

    #[test]
    fn reject_policy_from_file_refuses_builtin_alias() {
        let file = write_temp_ini(
            "[registry]\non_duplicate = reject\n\n[indicator:capex]\ndisplay_name = CapEx\naliases = Div\n",
        );
        let adapter = FileConfigAdapter::load(file.path()).unwrap();
        let config = build_engine_config(&adapter).unwrap();
        let err = IndicatorRegistry::from_config(&config).unwrap_err();
        assert!(matches!(err, CashflowError::DuplicateAlias { existing, .. } if existing == "dividends"));
    }
}
