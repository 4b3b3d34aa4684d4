use anyhow::Context;
use cents_point::core::lessons::LessonInput;
use cents_point::core::ConfigProvider;
use cents_point::utils::{logger, validation::Validate};
use cents_point::{standard_lessons, CliConfig, DemoError, LessonEngine, LocalStorage, TomlConfig};
use clap::Parser;
use std::io::BufReader;

async fn run_demo<C: ConfigProvider + Validate>(config: C) -> Result<(), DemoError> {
    config.validate()?;
    tracing::info!("✅ Configuration validated");

    let input = if config.read_points() > 0 {
        tracing::info!("⌨️  Reading {} point(s) from stdin", config.read_points());
        let stdin: LessonInput = Box::new(BufReader::new(std::io::stdin()));
        Some(stdin)
    } else {
        None
    };

    let storage = LocalStorage::new(config.output_dir().to_string());
    let lessons = standard_lessons(&config, input);
    let mut engine = LessonEngine::new(storage, lessons).with_echo(true);

    let summary = engine.run().await?;
    tracing::info!(
        "Finished {} lesson(s), wrote {:?}",
        summary.lessons_run,
        summary.files_written
    );

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting cents-point demo");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let result = match args.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(&path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            run_demo(config).await
        }
        None => run_demo(args).await,
    };

    if let Err(e) = result {
        tracing::error!("❌ Demo failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
