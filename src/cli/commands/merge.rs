use crate::cli::commands::common::{load_inputs, print_sheet, write_output};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::rows_to_sheet;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Merge { inputs, output } = cmd {
        let table = load_inputs(inputs)?;
        info(format!("Merged {} files: {} rows", inputs.len(), table.len()));

        let rows: Vec<_> = table.rows.iter().collect();
        let sheet = rows_to_sheet("Mesclado", &rows);
        if output.print {
            print_sheet(&sheet);
        }
        write_output(cfg, output, "mesclado", &[sheet])?;
    }
    Ok(())
}
