//! Operator CLI for the profile aggregator.
//!
//! Runs the aggregation pipeline once without starting the HTTP server, and
//! inspects the effective configuration.
//!
//! # Usage
//!
//! ```bash
//! # Run one aggregation and print a per-section summary
//! cargo run --bin profile-cli -- run
//!
//! # Print the raw JSON envelope instead
//! cargo run --bin profile-cli -- run --json
//!
//! # Show configuration (credentials reported as configured / not configured)
//! cargo run --bin profile-cli -- config
//! ```
//!
//! Reads the same environment variables (and `.env`) as the server.

use profile_aggregator::config::{self, Config, credential_status};
use profile_aggregator::domain::entities::{Profile, ProfileResult};
use profile_aggregator::state::AppState;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::process::ExitCode;

/// CLI tool for the profile aggregator.
#[derive(Parser)]
#[command(name = "profile-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one aggregation against the configured providers
    Run {
        /// Print the JSON envelope instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Run { json } => run_once(&config, json).await,
        Commands::Config => {
            show_config(&config);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Runs the pipeline once. Exit code is non-zero on a fatal envelope.
async fn run_once(config: &Config, json: bool) -> Result<ExitCode> {
    let state = AppState::from_config(config)?;
    let result = state.profile_service.run().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&result);
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Prints one line per section.
///
/// # Output Format
///
/// ```text
/// Profile
///
///   user       OK        Louise Martin, Lyon, France
///   country    OK        France (EUR)
///   exchange   DEGRADED  ExchangeRate error: request timed out
///   news       OK        3 article(s)
/// ```
fn print_summary(result: &ProfileResult) {
    println!("{}", "Profile".bright_blue().bold());
    println!();

    let profile = match result {
        ProfileResult::Success(profile) => profile,
        ProfileResult::Failure(failure) => {
            println!("  {} {}", "FAILED".red().bold(), failure.message);
            return;
        }
    };

    for (section, ok, detail) in sections(profile) {
        let status = if ok {
            "OK".green()
        } else {
            "DEGRADED".yellow()
        };
        println!("  {:<10} {:<9} {}", section.cyan(), status, detail);
    }

    println!();
    println!(
        "  Generated at: {}",
        profile.meta.generated_at.to_rfc3339().bright_black()
    );
}

fn sections(profile: &Profile) -> Vec<(&'static str, bool, String)> {
    let identity = &profile.identity;
    let user = [
        identity.display_name(),
        identity.city.clone(),
        identity.country.clone(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ");

    let geo = &profile.geography;
    let country = if geo.ok {
        format!(
            "{} ({})",
            geo.name.as_deref().unwrap_or("?"),
            geo.currency_code.as_deref().unwrap_or("no currency")
        )
    } else {
        geo.message.clone().unwrap_or_default()
    };

    let fx = &profile.exchange;
    let exchange = if fx.ok {
        format!(
            "1 {} = {} USD / {} KZT via {}",
            fx.base.as_deref().unwrap_or("?"),
            format_rate(fx.usd),
            format_rate(fx.kzt),
            fx.provider.as_deref().unwrap_or("?")
        )
    } else {
        fx.message.clone().unwrap_or_default()
    };

    let news = if profile.news.ok {
        format!("{} article(s)", profile.news.articles.len())
    } else {
        profile.news.message.clone().unwrap_or_default()
    };

    vec![
        ("user", true, user),
        ("country", geo.ok, country),
        ("exchange", fx.ok, exchange),
        ("news", profile.news.ok, news),
    ]
}

fn format_rate(rate: Option<f64>) -> String {
    rate.map(|r| format!("{r:.4}"))
        .unwrap_or_else(|| "n/a".to_string())
}

fn show_config(config: &Config) {
    println!("{}", "Configuration".bright_blue().bold());
    println!();
    println!("  Listen address:   {}", config.listen_addr.cyan());
    println!("  Static files:     {}", config.static_dir.cyan());
    println!("  Provider timeout: {}s", config.provider_timeout_secs);
    println!();

    println!("{}", "Credentials".bright_white().bold());
    for (var, key) in config.credentials() {
        let status = credential_status(key);
        let status = if key.is_some() {
            status.green()
        } else {
            status.yellow()
        };
        println!("  {:<22} {}", var, status);
    }
    println!();

    println!("{}", "Endpoints".bright_white().bold());
    let endpoints = &config.endpoints;
    println!("  identity          {}", endpoints.random_user);
    println!("  geography         {}", endpoints.country_layer);
    println!("  exchange (keyed)  {}", endpoints.exchange_keyed);
    println!("  exchange (public) {}", endpoints.exchange_public);
    println!("  news              {}", endpoints.news_api);
}
