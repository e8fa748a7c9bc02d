use crate::cli::commands::common::{print_sheet, write_output};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::{AppError, AppResult};
use crate::export::rows_to_sheet;
use crate::import::read_table;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Intersect {
        file_a,
        file_b,
        output,
    } = cmd
    {
        let a = read_table(&expand_tilde(file_a))?;
        let b = read_table(&expand_tilde(file_b))?;

        // both sides must carry rows to intersect
        if a.is_empty() {
            return Err(AppError::EmptyTable(a.source));
        }
        if b.is_empty() {
            return Err(AppError::EmptyTable(b.source));
        }

        let kept = Core::intersect(&a, &b);
        info(format!(
            "{} of {} rows of '{}' have a name present in '{}'",
            kept.len(),
            a.len(),
            a.source,
            b.source
        ));
        if kept.is_empty() {
            warning("No common names found.");
            return Ok(());
        }

        let sheet = rows_to_sheet("Filtrado", &kept);
        if output.print {
            print_sheet(&sheet);
        }

        write_output(cfg, output, "filtrado", &[sheet])?;
    }
    Ok(())
}
