//! Clarion CLI - fact-check claims and trending headlines from the terminal.

mod cli;
mod output;

use clap::Parser;
use clarion_engine::{Engine, EngineConfig};
use clarion_sources::{FactCheckToolsClient, GeminiClient, NewsDataClient, ProviderCredentials};
use cli::{Cli, Command};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let args = Cli::parse();

    let credentials = ProviderCredentials::from_env()?;

    let mut config = EngineConfig::default();
    if let Command::Trending {
        country: Some(country),
    } = &args.command
    {
        config.country = country.clone();
    }

    let fact_check = FactCheckToolsClient::new(credentials.fact_check_api_key.clone());
    let news = NewsDataClient::new(credentials.newsdata_api_key.clone());
    let mut gemini = GeminiClient::new(credentials.gemini_api_key.clone());
    if let Some(model) = &credentials.gemini_model {
        gemini = gemini.with_model(model);
    }

    let engine = Engine::new(fact_check, news, gemini, config);

    match args.command {
        Command::Check { claim } => {
            let verdict = engine.fact_check(&claim).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                println!("{}", output::render_verdict(&verdict));
            }
        }
        Command::Trending { .. } => {
            let items = engine.trending().await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                println!("{}", output::render_trending(&items));
            }
        }
    }

    Ok(())
}
