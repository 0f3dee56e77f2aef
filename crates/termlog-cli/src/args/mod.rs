mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "termlog")]
#[command(about = "Print leveled logs as text or JSON", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, short = 'o', default_value = "text", global = true)]
    pub output_format: OutputFormat,

    #[arg(long, help = "Disable ANSI colors in text output", global = true)]
    pub disable_colors: bool,

    #[arg(long, help = "Destination to report output for", global = true)]
    pub output_target: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
