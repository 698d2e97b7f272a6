use clap::Parser;
use csv_json_etl::utils::logger;
use csv_json_etl::{run_conversion, CliConfig};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_format);

    tracing::info!("Starting csv-json-etl");
    tracing::debug!("CLI config: {:?}", cli);

    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    match run_conversion(cli.converter_config(), cli.monitor) {
        Ok(summary) => {
            tracing::info!("✅ Converted {} records", summary.record_count);
            println!("JSON file created: {}", summary.output_path);
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {} (Kind: {:?})", e, e.kind());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
