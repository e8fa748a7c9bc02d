//! Glue shared by the command handlers: reading inputs, engine parameters,
//! randomness and output location.

use crate::cli::parser::{EngineArgs, OutputArgs};
use crate::config::{Config, ProcessingConfig};
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic, Sheet};
use crate::import::{merge_tables, read_table};
use crate::models::Table;
use crate::ui::messages::info;
use crate::utils::path::{expand_tilde, output_path};
use crate::utils::table::Table as TextTable;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Read every input (once each) and merge them in order.
pub fn load_inputs(inputs: &[String]) -> AppResult<Table> {
    let mut tables = Vec::with_capacity(inputs.len());
    for input in inputs {
        let table = read_table(&expand_tilde(input))?;
        info(format!("{}: {} rows", table.source, table.len()));
        tables.push(table);
    }
    merge_tables(tables)
}

/// File values overridden by command-line flags, validated.
pub fn engine_config(base: ProcessingConfig, args: &EngineArgs) -> AppResult<ProcessingConfig> {
    let cfg = ProcessingConfig {
        shift_threshold_hours: args.threshold.unwrap_or(base.shift_threshold_hours),
        lunch_min_duration: args.lunch_min.unwrap_or(base.lunch_min_duration),
        lunch_max_duration: args.lunch_max.unwrap_or(base.lunch_max_duration),
        default_lunch_duration: args.lunch_default.unwrap_or(base.default_lunch_duration),
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Fresh randomness per run; fixed only when a seed is requested.
pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

pub fn resolve_output(cfg: &Config, output: &OutputArgs, label: &str) -> (ExportFormat, PathBuf) {
    let format = output.format.unwrap_or(cfg.default_format);
    let path = output_path(output.file.as_deref(), &cfg.output_dir, |dir| {
        ExportLogic::default_path(dir, label, format)
    });
    (format, path)
}

/// Write the sheets as requested by the output flags.
pub fn write_output(cfg: &Config, output: &OutputArgs, label: &str, sheets: &[Sheet]) -> AppResult<()> {
    let (format, path) = resolve_output(cfg, output, label);
    ExportLogic::write(sheets, format, &path, output.force)?;
    Ok(())
}

/// Print a sheet as a plain text table.
pub fn print_sheet(sheet: &Sheet) {
    let mut t = TextTable::new(sheet.headers.clone());
    for r in &sheet.rows {
        t.add_row(r.clone());
    }
    println!("{}", t.render());
}
