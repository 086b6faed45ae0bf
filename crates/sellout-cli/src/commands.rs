//! Subcommand implementations.

use anyhow::{Context, Result};
use comfy_table::Table;

use sellout_core::{RunConfig, RunSummary, run_period};
use sellout_model::{CANONICAL_COLUMNS, MissingColumnPolicy, Period};
use sellout_store::LocalStore;

use crate::cli::{MissingColumnsArg, RunArgs};
use crate::summary::apply_table_style;

/// Runs the compile pipeline for the period given on the command line.
pub fn run_compile(args: &RunArgs) -> Result<RunSummary> {
    let period = Period::new(args.month, args.year).context("invalid period")?;
    let config = RunConfig {
        period,
        missing_columns: match args.missing_columns {
            MissingColumnsArg::Reject => MissingColumnPolicy::Reject,
            MissingColumnsArg::FillEmpty => MissingColumnPolicy::FillEmpty,
        },
        dry_run: args.dry_run,
    };
    let store = LocalStore::new(&args.root);
    run_period(&store, &config)
}

/// Prints the canonical output schema, in column order.
pub fn run_columns() {
    let mut table = Table::new();
    table.set_header(vec!["#", "Column"]);
    apply_table_style(&mut table);
    for (position, name) in CANONICAL_COLUMNS.iter().enumerate() {
        table.add_row(vec![(position + 1).to_string(), (*name).to_string()]);
    }
    println!("{table}");
}
