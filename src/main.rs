use clap::Parser;
use portfolio::utils::{logger, validation::Validate};
use portfolio::{CliConfig, HttpAssetFetcher, LocalStorage, SiteAssembler};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting portfolio assembly");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let assembler = SiteAssembler::new(storage, config, HttpAssetFetcher::new());

    match assembler.assemble().await {
        Ok(page) => {
            tracing::info!("✅ Page context assembled");
            println!("✅ Page context ready: {}", portfolio::core::catalog::PAGE_TITLE);
            println!(
                "   {} skills, {} projects, {} education entries",
                page.catalog.skills().len(),
                page.catalog.projects().len(),
                page.catalog.education().len()
            );
            println!(
                "   resume: {} ({} bytes, {})",
                page.resume.file_name,
                page.resume.data.len(),
                page.resume.mime
            );
            println!(
                "   animations: {}/{} available",
                page.animations.available(),
                page.animations.len()
            );
        }
        Err(e) => {
            tracing::error!("❌ Assembly failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
