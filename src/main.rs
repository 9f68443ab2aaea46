use std::path::PathBuf;
use std::process::ExitCode;

use airinsight::demo::SyntheticDemo;
use airinsight::fetcher::validate_city_name;
use airinsight::{AirInsightConfig, AirQualityFetcher, DashboardReport, logging, web};
use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "airinsight")]
#[command(about = "Air quality and current weather lookup by city", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch air quality for a city once and print it
    Report {
        /// City name; defaults to dashboard.default_city
        #[arg(long)]
        city: Option<String>,
    },

    /// Serve the JSON API for a dashboard
    Serve {
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },

    /// Print random placeholder data for layout testing
    Demo,

    /// Print the effective configuration with the API key hidden
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = AirInsightConfig::load_from_path(cli.config.clone())?;
    logging::init(&config.logging, cli.verbose)?;

    match cli.command {
        Commands::Report { city } => report(&config, city).await,
        Commands::Serve { port } => web::run(config, port).await.map(|()| ExitCode::SUCCESS),
        Commands::Demo => {
            print!("{}", SyntheticDemo::generate());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config => {
            let rendered = serde_json::to_string_pretty(&config.redacted())
                .context("Failed to render configuration")?;
            println!("{rendered}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn report(config: &AirInsightConfig, city: Option<String>) -> Result<ExitCode> {
    let city = city.unwrap_or_else(|| config.dashboard.default_city.clone());
    if let Err(e) = validate_city_name(&city) {
        eprintln!("{}", e.user_message());
        return Ok(ExitCode::FAILURE);
    }

    let fetcher = match AirQualityFetcher::from_config(config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    println!(
        "Current Date and Time: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    match fetcher.fetch(&city).await {
        Ok((weather, air_quality)) => {
            print!("{}", DashboardReport::build(city, weather, air_quality));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            if e.is_recoverable() {
                eprintln!("Run the report again to retry.");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
