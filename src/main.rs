//! Wiring & DI. Entry point: parse args, bootstrap adapters, inject into the service.
//! No business logic here.

use clap::Parser;
use dotenv::dotenv;
use reddit_persona::adapters::persistence::{FsReportWriter, JsonListingSource};
use reddit_persona::adapters::reddit::{extract_username, RedditClient};
use reddit_persona::cli::Cli;
use reddit_persona::domain::DomainError;
use reddit_persona::ports::{ContentSource, ReportSink};
use reddit_persona::shared::config::AppConfig;
use reddit_persona::usecases::{PersonaRequest, PersonaService};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    let cli = Cli::parse();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_filter().into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });

    let username = extract_username(&cli.profile_url)?;
    info!(username = %username, "analyzing profile");

    let source: Arc<dyn ContentSource> = match &cli.input {
        Some(path) => Arc::new(JsonListingSource::new(path)),
        None => Arc::new(RedditClient::new(
            &cfg.base_url_or_default(),
            &cfg.user_agent_or_default(),
            cfg.request_delay(),
            cfg.page_size_or_default(),
        )?),
    };
    let sink: Arc<dyn ReportSink> = Arc::new(FsReportWriter::new(cfg.output_dir_or_default()));
    let service = PersonaService::new(source, sink);

    let request = PersonaRequest {
        profile_url: cli.profile_url.clone(),
        username,
        limit: cli.limit.unwrap_or_else(|| cfg.fetch_limit_or_default()),
        output_name: cli.output.clone(),
        generated_at: chrono::Local::now().naive_local(),
    };

    match service.generate(&request).await {
        Ok(outcome) => {
            println!("Persona analysis complete!");
            println!("Output saved to: {}", outcome.path.display());
            println!("Posts/comments analyzed: {}", outcome.items_analyzed);
            println!("Citations generated: {}", outcome.citations);
            Ok(())
        }
        Err(e @ DomainError::NoContent(_)) => {
            error!("No posts found for this user. Cannot generate persona.");
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
