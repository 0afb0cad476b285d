//! # Landscape Estimator CLI
//!
//! Terminal front end for the instant estimate. Every command starts from
//! the built-in rates, layers an optional local config file and then an
//! optional remote `/config.json` on top, and never fails because a config
//! layer is missing.

mod args;
mod report;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use landscape_core::gallery::collect_images;
use landscape_core::remote::{config_url, fetch_override};
use landscape_core::{estimate, QuoteContext, SiteConfig};

use args::{enquiry, Cli, Command};

fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "landscape_core=debug,landscape_cli=debug,info"
    } else {
        "landscape_core=warn,landscape_cli=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Defaults, then the local file, then the remote document.
async fn load_config(cli: &Cli) -> SiteConfig {
    let mut config = SiteConfig::load_layered(cli.config.as_deref());
    if let Some(base) = &cli.config_url {
        let url = config_url(base);
        if let Some(over) = fetch_override(&url).await {
            config = config.merged(over);
        }
    }
    config
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli).await;
    tracing::debug!(brand = %config.brand.name, "configuration ready");

    match &cli.command {
        Command::Estimate { job, json } => {
            let input = job.to_input();
            let result = estimate(&config.pricing, &input);
            if *json {
                let out = serde_json::json!({ "input": input, "result": result });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                report::print_estimate(&config, &input, &result);
            }
        }
        Command::Links { job, contact } => {
            let input = job.to_input();
            let result = estimate(&config.pricing, &input);
            let enquiry = enquiry(job, Some(contact));
            let quote = QuoteContext::new(&config.brand, &input, &result, &enquiry);
            report::print_links(&quote);
        }
        Command::Summary { job } => {
            let input = job.to_input();
            let result = estimate(&config.pricing, &input);
            let enquiry = enquiry(job, None);
            let quote = QuoteContext::new(&config.brand, &input, &result, &enquiry);
            println!("{}", quote.summary_text());
        }
        Command::Rates => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::Gallery { dir } => {
            let images = collect_images(dir)
                .with_context(|| format!("listing gallery folder {}", dir.display()))?;
            if images.is_empty() {
                println!("No gallery images in {}", dir.display());
            }
            for image in images {
                println!("{}", image.display());
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
