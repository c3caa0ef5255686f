use anyhow::Context;
use clap::Parser;
use correios::utils::error::ErrorSeverity;
use correios::utils::{logger, validation::Validate};
use correios::{render, CliArgs, ConfigProvider, CorreiosConfig, HttpFetcher, ReferenceTables, Tracker};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    match run(args).await {
        Ok(ErrorSeverity::Low) => {}
        Ok(worst) => std::process::exit(worst.exit_code()),
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(ErrorSeverity::Critical.exit_code());
        }
    }
}

/// Returns the worst severity among the codes that failed.
async fn run(args: CliArgs) -> anyhow::Result<ErrorSeverity> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            CorreiosConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?
        }
        None => CorreiosConfig::default(),
    };
    args.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        return Err(anyhow::Error::new(e).context("Configuration validation failed"));
    }
    tracing::debug!("Config: {:?}", config);

    let tables = config.reference_tables()?;
    if args.list_services || args.list_countries {
        print_tables(&tables, args.list_services, args.list_countries);
        return Ok(ErrorSeverity::Low);
    }

    let fetcher = HttpFetcher::from_config(&config)?;
    let tracker = Tracker::new(fetcher, Arc::new(tables), config.tracking_endpoint());

    let mut worst = ErrorSeverity::Low;
    for code in &args.codes {
        let rendered = match tracker.track(code).await {
            Ok(result) => render(&result, config.output.format, config.output.pretty),
            Err(e) => Err(e),
        };

        match rendered {
            Ok(document) => println!("{}", document),
            Err(e) => {
                tracing::error!(
                    "❌ {}: {} (Category: {:?}, Severity: {:?})",
                    code,
                    e,
                    e.category(),
                    e.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}: {}", code, e.user_friendly_message());
                worst = worst.max(e.severity());
            }
        }
    }

    Ok(worst)
}

fn print_tables(tables: &ReferenceTables, services: bool, countries: bool) {
    if services {
        for (code, name) in tables.services() {
            println!("{}\t{}", code, name);
        }
    }
    if countries {
        for (code, name) in tables.countries() {
            println!("{}\t{}", code, name);
        }
    }
}
