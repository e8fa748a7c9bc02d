use crate::cli::commands::common::{engine_config, load_inputs, rng, write_output};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::export::{ShiftExport, sheet_from_records};
use crate::models::{LunchKind, Shift};
use crate::ui::messages::{info, warning};
use crate::utils::colors::{color_for_lunch, colorize};
use crate::utils::formatting::readable;
use crate::utils::table::Table;
use crate::utils::time::{format_duration, format_time};

pub const SHEET_NAME: &str = "Turnos";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shifts {
        inputs,
        engine,
        output,
    } = cmd
    {
        let table = load_inputs(inputs)?;
        let params = engine_config(cfg.processing(), engine)?;
        let mut rng = rng(engine.seed);

        let shifts = Core::shifts(&table, &params, &mut rng);
        if shifts.is_empty() {
            warning("No person/date columns found: nothing to consolidate.");
            return Ok(());
        }

        print_summary(&shifts);
        if output.print {
            println!("{}", render_shifts(&shifts));
        }

        let records: Vec<ShiftExport> = shifts.iter().map(ShiftExport::from).collect();
        let sheet = sheet_from_records(SHEET_NAME, &records);
        write_output(cfg, output, "turnos", &[sheet])?;
    }
    Ok(())
}

pub(crate) fn print_summary(shifts: &[Shift<'_>]) {
    let count = |k: LunchKind| shifts.iter().filter(|s| s.lunch_kind == k).count();
    let worked: chrono::Duration = shifts
        .iter()
        .fold(chrono::Duration::zero(), |acc, s| acc + s.worked);

    info(format!(
        "Shifts: {} | lunch NORMAL {} · ARTIFICIAL {} · NONE {} | worked {}",
        shifts.len(),
        count(LunchKind::Normal),
        count(LunchKind::Artificial),
        count(LunchKind::None),
        readable(worked)
    ));

    let flagged = shifts.iter().filter(|s| !s.warnings.is_empty()).count();
    if flagged > 0 {
        warning(format!("{flagged} shift(s) incomplete or shorter than 1h"));
    }
}

pub(crate) fn render_shifts(shifts: &[Shift<'_>]) -> String {
    let mut table = Table::new(vec![
        "Person", "Date", "Start", "End", "Lunch", "Kind", "Worked", "Warnings",
    ]);

    for s in shifts {
        let lunch = s
            .lunch
            .map(|l| format!("{}-{}", format_time(&l.start), format_time(&l.end)))
            .unwrap_or_else(|| "--:--".to_string());

        table.add_row(vec![
            s.person().to_string(),
            s.start.format("%Y-%m-%d").to_string(),
            format_time(&s.start),
            format_time(&s.end),
            lunch,
            colorize(s.lunch_kind.as_str(), color_for_lunch(s.lunch_kind)),
            format_duration(s.worked),
            s.warnings.join("; "),
        ]);
    }

    table.render()
}
