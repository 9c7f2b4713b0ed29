mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use datasources::{ClassifierClient, ClassifierFeatures};
use error::Result;
use logic::{units, RecommendationEngine};
use models::{FieldInput, RawFieldInput, RecommendationReport};
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Init => {
            let (_, path) = Config::setup_interactive()?;
            tracing::info!(path = %path.display(), "configuration written");
            Ok(())
        }
        Commands::Check => {
            let config = Config::load(cli.config)?;
            let client = ClassifierClient::new(config.classifier);
            match client.test_connection().await {
                Ok(true) => {
                    println!("Classifier: OK");
                    Ok(())
                }
                Ok(false) => {
                    println!("Classifier: UNHEALTHY");
                    std::process::exit(1);
                }
                Err(e) => {
                    println!("Classifier: OFFLINE ({})", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Recommend { input, pretty } => {
            let config = Config::load(cli.config)?;
            recommend(&config, &input, pretty).await
        }
    }
}

async fn recommend(config: &Config, input_path: &Path, pretty: bool) -> Result<()> {
    let raw = read_raw_input(input_path)?;
    let input = FieldInput::from_raw(&raw)?;

    let client = ClassifierClient::new(config.classifier.clone());
    let prediction = client.predict(&ClassifierFeatures::from_input(&input)).await?;

    let engine = RecommendationEngine::new();
    let recommendation = engine.assemble(&input, &prediction)?;

    let report = RecommendationReport {
        generated_at: chrono::Utc::now(),
        crop_type: input.crop_type,
        soil_type: input.soil_type,
        field_size: input.field_size,
        size_unit: input.size_unit,
        area_hectares: units::to_hectares(input.field_size, input.size_unit)?,
        recommendation,
    };

    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(())
}

fn read_raw_input(path: &Path) -> Result<RawFieldInput> {
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    Ok(serde_json::from_str(&contents)?)
}
