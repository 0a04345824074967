use anyhow::Context;
use bowling_analytics::utils::{logger, validation::Validate};
use bowling_analytics::{
    calculate_percentage, format_number, validate_frame_score, AnalyticsEngine, AnalyticsError,
    AnalyticsPipeline, AppConfig, CliArgs, Command, LocalStorage, RunSettings,
};
use clap::Parser;

fn report_failure(e: &AnalyticsError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}

fn load_config(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path))?,
        None => AppConfig::default(),
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // logging first so config errors are reported
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::debug!("CLI args: {:?}", args);

    let config = load_config(args.config.as_deref())?;
    if let Err(e) = config.validate() {
        report_failure(&e);
    }

    match args.command {
        Command::Validate {
            score,
            strike,
            spare,
        } => match validate_frame_score(score, strike, spare) {
            None => println!("✅ valid"),
            Some(reason) => {
                println!("❌ {}", reason);
                std::process::exit(2);
            }
        },
        Command::Percent { part, total } => {
            println!("{}", calculate_percentage(part, total));
        }
        Command::Format { number } => {
            println!("{}", format_number(number));
        }
        Command::Stats { input, output } => {
            let settings = RunSettings::from_config(&config, &input, output.as_deref());

            if let Err(e) = settings.validate() {
                report_failure(&e);
            }

            let pipeline = AnalyticsPipeline::new(LocalStorage::new("."), settings);
            match AnalyticsEngine::new(pipeline).run().await {
                Ok(output_path) => {
                    println!("✅ Dashboard report written");
                    println!("📁 Output saved to: {}", output_path);
                }
                Err(e) => report_failure(&e),
            }
        }
    }

    Ok(())
}
