use crate::config::ConverterConfig;
use crate::utils::logger::LogFormat;
use clap::Parser;

/// Command-line surface. File locations are fixed; only diagnostics are
/// tunable.
#[derive(Debug, Clone, Parser)]
#[command(name = "csv-json-etl")]
#[command(about = "Converts datospoint.csv into an indented JSON array in output.json")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage after each phase")]
    pub monitor: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact, help = "Layout of log lines on stderr")]
    pub log_format: LogFormat,
}

impl CliConfig {
    pub fn converter_config(&self) -> ConverterConfig {
        ConverterConfig::default()
    }
}
