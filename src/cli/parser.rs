use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for shiftrecon
#[derive(Parser)]
#[command(
    name = "shiftrecon",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rebuild work shifts and meal breaks from time-clock exports (csv, xlsx, ods)",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output options shared by every command that writes a file.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format (default from configuration)
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file (default: <label>_<timestamp>.<ext> in the configured output dir)
    #[arg(long, value_name = "FILE")]
    pub file: Option<String>,

    /// Overwrite output file without confirmation
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Also print the records as a table
    #[arg(long)]
    pub print: bool,
}

/// Engine overrides shared by the shift commands.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Max gap between punches of one shift, in hours
    #[arg(long, value_name = "HOURS")]
    pub threshold: Option<f64>,

    /// Shortest gap counted as a meal break (minutes)
    #[arg(long = "lunch-min", value_name = "MIN")]
    pub lunch_min: Option<i64>,

    /// Longest gap counted as a meal break (minutes)
    #[arg(long = "lunch-max", value_name = "MIN")]
    pub lunch_max: Option<i64>,

    /// Base length of synthetic breaks (minutes)
    #[arg(long = "lunch-default", value_name = "MIN")]
    pub lunch_default: Option<i64>,

    /// Seed for synthetic break placement (reproducible runs)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default value")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Full shift detail: one row per shift with lunch and worked time
    Shifts {
        /// Input files (merged in order)
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<String>,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Shift identification: 12h threshold, one sheet per shift period
    Identify {
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<String>,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Daily workers: one first/last punch row per shift
    Daily {
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<String>,

        /// Shortest gap counted as a meal break (minutes)
        #[arg(long = "lunch-min", value_name = "MIN")]
        lunch_min: Option<i64>,

        /// Longest gap counted as a meal break (minutes)
        #[arg(long = "lunch-max", value_name = "MIN")]
        lunch_max: Option<i64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Keep the rows of FILE_A whose person also appears in FILE_B
    Intersect {
        #[arg(value_name = "FILE_A")]
        file_a: String,

        #[arg(value_name = "FILE_B")]
        file_b: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Concatenate several exports into one table
    Merge {
        #[arg(required = true, num_args = 2.., value_name = "INPUT")]
        inputs: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
}
