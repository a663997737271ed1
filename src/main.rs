use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use code_comment_service::{AppConfig, GeminiClient, PromptOrchestrator, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Arc::new(AppConfig::from_env()?);
    if config.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; generation requests will fail until it is");
    }

    let backend = Arc::new(GeminiClient::new(config.as_ref()));
    let orchestrator = Arc::new(PromptOrchestrator::new(backend));
    let router = build_router(config.clone(), orchestrator);

    let listener = TcpListener::bind(config.listen_addr).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, model = %config.model_id, "code comment service ready");

    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,hyper=warn,axum::rejection=trace".into());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
