use crate::cli::commands::common::{engine_config, load_inputs, rng, write_output};
use crate::cli::commands::shifts::{print_summary, render_shifts};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::export::{ShiftExport, Sheet, sheet_from_records};
use crate::ui::messages::{header, info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Identify {
        inputs,
        engine,
        output,
    } = cmd
    {
        let table = load_inputs(inputs)?;
        let params = engine_config(cfg.identification(), engine)?;
        let mut rng = rng(engine.seed);

        let groups = Core::identify(&table, &params, &mut rng);
        if groups.is_empty() {
            warning("No person/date columns found: nothing to consolidate.");
            return Ok(());
        }

        let mut sheets: Vec<Sheet> = Vec::with_capacity(groups.len());
        for (period, shifts) in &groups {
            info(format!("{}: {} shift(s)", period.label(), shifts.len()));
            print_summary(shifts);
            if output.print {
                header(period.label());
                println!("{}", render_shifts(shifts));
            }

            let records: Vec<ShiftExport> = shifts.iter().map(ShiftExport::from).collect();
            sheets.push(sheet_from_records(period.label(), &records));
        }

        write_output(cfg, output, "identificacao_turnos", &sheets)?;
    }
    Ok(())
}
