//! shiftrecon main entrypoint.

use shiftrecon::run;
use shiftrecon::ui::messages::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics on stderr; RUST_LOG=debug shows skipped rows and candidates
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
