use clap::Parser;
use idf_convert::utils::{logger, validation::Validate};
use idf_convert::{CliConfig, ConvertEngine, LocalStorage};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(config.logging.verbose);
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }

    tracing::info!("Starting idf-convert CLI");
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 輸入路徑以目前目錄為基準，不受輸出目錄影響
    let input_path = std::env::current_dir()?.join(Path::new(&cli.input));
    let input_path = input_path.to_string_lossy().into_owned();

    let storage = LocalStorage::new(config.idf.output_dir.clone());
    let engine = ConvertEngine::new(storage, config);

    match engine.run(&input_path) {
        Ok(summary) => {
            println!("{}", serde_json::to_string_pretty(&summary.report)?);
            println!("📁 IDF saved to: {}", summary.output_path);

            if summary.report.has_failures() {
                tracing::warn!("⚠️ Some records failed to convert");
                std::process::exit(2);
            }
            tracing::info!("✅ Conversion completed successfully!");
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
