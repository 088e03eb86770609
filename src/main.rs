use clap::Parser;
use lp_etl::utils::{logger, validation::Validate};
use lp_etl::{CliConfig, ConvertEngine, ConvertPipeline, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting lp-etl CSV conversion");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.data_dir.clone());
    let pipeline = ConvertPipeline::new(storage, config);
    let engine = ConvertEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            println!(
                "✅ Conversion completed ({} written, {} skipped)",
                summary.written.len(),
                summary.skipped.len()
            );
        }
        Err(e) => {
            tracing::error!("Conversion failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
