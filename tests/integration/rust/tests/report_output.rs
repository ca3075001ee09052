//! Report Rendering Integration Tests
//!
//! Runs real (short) trials and checks that the display layer renders
//! them faithfully in both table and JSON form.

use harness::{Harness, InputCaches, InputKind, TrialConfig};
use op_registry::OperationTable;
use perf_cli::{format_catalogue, format_reports, format_reports_json, TrialReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn run_reports(names: &[&str]) -> Vec<TrialReport> {
    let caches = InputCaches::generate(&mut StdRng::seed_from_u64(13));
    let config = TrialConfig {
        loop_count: 2,
        loop_budget: Duration::from_millis(5),
    };
    let mut bench = Harness::new(OperationTable::standard(), caches, config);

    names
        .iter()
        .map(|name| {
            let result = bench.run_trial(name, InputKind::Uint8).expect("trial failed");
            TrialReport {
                name: name.to_string(),
                input_kind: InputKind::Uint8,
                result,
            }
        })
        .collect()
}

#[test]
fn test_table_lists_every_trial() {
    let reports = run_reports(&["add", "sqrt", "gt"]);
    let output = format_reports(&reports);

    for name in ["add", "sqrt", "gt"] {
        assert!(output.contains(name), "table is missing '{name}'");
    }
    assert!(output.contains("Runs/s"));
    assert!(output.contains("Ratio"));
}

#[test]
fn test_json_round_trips_real_results() {
    let reports = run_reports(&["add", "sin-lut"]);
    let json = format_reports_json(&reports).expect("serialization failed");

    let back: Vec<TrialReport> = serde_json::from_str(&json).expect("deserialization failed");
    assert_eq!(back.len(), reports.len());
    for (restored, original) in back.iter().zip(&reports) {
        assert_eq!(restored.name, original.name);
        assert_eq!(restored.input_kind, original.input_kind);
        assert_eq!(restored.result, original.result);
    }
}

#[test]
fn test_catalogue_listing_is_complete() {
    let table = OperationTable::standard();
    let output = format_catalogue(&table);

    for name in table.names() {
        assert!(output.contains(name), "catalogue listing is missing '{name}'");
    }
}
