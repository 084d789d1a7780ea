use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod model;
mod service;

use model::Config;
use service::{AnalysisService, LlmClient, RigEvidenceExtractor};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");
    let llm_client = LlmClient::new(&api_key).expect("Failed to create LLM client");

    let extractor = Arc::new(RigEvidenceExtractor::new(llm_client));
    let analysis_service = web::Data::new(AnalysisService::new(extractor, config.scoring.clone()));

    tracing::info!("Starting VerifyHire scoring server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(analysis_service.clone())
            .configure(api::analysis::configure)
            .configure(api::scores::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
