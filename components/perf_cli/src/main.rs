//! Math Perf CLI
//!
//! Entry point for the benchmark tool. Parses CLI arguments, assembles a
//! harness, and renders trial results.

use clap::Parser;
use harness::{Harness, InputCaches, TrialConfig};
use op_registry::OperationTable;
use perf_cli::{report, Cli, TrialReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;
use std::time::Duration;

fn main() {
    let cli = Cli::parse();
    let registry = OperationTable::standard();

    if cli.list {
        print!("{}", report::format_catalogue(&registry));
        return;
    }

    let names: Vec<String> = if cli.all {
        registry
            .names()
            .into_iter()
            .filter(|name| *name != op_registry::NOOP)
            .map(str::to_string)
            .collect()
    } else if let Some(op) = &cli.op {
        vec![op.clone()]
    } else {
        eprintln!("Error: nothing to run (use --op <NAME>, --all, or --list)");
        process::exit(2);
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let caches = InputCaches::generate(&mut rng);
    let config = TrialConfig {
        loop_count: cli.loops,
        loop_budget: Duration::from_millis(cli.budget_ms),
    };
    let mut bench = Harness::new(registry, caches, config);

    let mut reports = Vec::new();
    for name in &names {
        // Progress goes to stderr so --json output stays parseable.
        eprintln!("Running '{}' against {} inputs...", name, cli.inputs);
        match bench.run_trial(name, cli.inputs) {
            Ok(result) => reports.push(TrialReport {
                name: name.clone(),
                input_kind: cli.inputs,
                result,
            }),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }

    if cli.json {
        match report::format_reports_json(&reports) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error formatting JSON: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("{}", report::format_reports(&reports));
    }
}
