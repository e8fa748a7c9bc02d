use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Handle the `init` command: write the configuration file with defaults
/// (an existing file is left untouched).
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli.config.as_deref().map(expand_tilde);

    println!("⚙️  Initializing shiftrecon…");
    let path = Config::init(custom.as_deref())?;
    println!("📄 Config file : {}", path.display());
    println!("🎉 shiftrecon initialization completed!");
    Ok(())
}
