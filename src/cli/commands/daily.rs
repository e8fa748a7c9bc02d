use crate::cli::commands::common::{load_inputs, print_sheet, write_output};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::export::{DailyWorkerExport, sheet_from_records};
use crate::ui::messages::{info, warning};

pub const SHEET_NAME: &str = "Diaristas";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Daily {
        inputs,
        lunch_min,
        lunch_max,
        output,
    } = cmd
    {
        let table = load_inputs(inputs)?;

        let mut params = cfg.processing();
        params.lunch_min_duration = lunch_min.unwrap_or(params.lunch_min_duration);
        params.lunch_max_duration = lunch_max.unwrap_or(params.lunch_max_duration);
        params.validate()?;

        let records = Core::daily_workers(&table, &params);
        if records.is_empty() {
            warning("No person/date columns found: nothing to consolidate.");
            return Ok(());
        }
        info(format!("Daily-worker records: {}", records.len()));

        let rows: Vec<DailyWorkerExport> = records.iter().map(DailyWorkerExport::from).collect();
        let sheet = sheet_from_records(SHEET_NAME, &rows);

        if output.print {
            print_sheet(&sheet);
        }
        write_output(cfg, output, "diaristas", &[sheet])?;
    }
    Ok(())
}
