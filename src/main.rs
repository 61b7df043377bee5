mod api;
mod api_state;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use clap::Parser;
use prompta::{CandidatePool, Recommender};
use prompta_in_memory_store::InMemoryStore;
use prompta_openai::{
    completion::DEFAULT_COMPLETION_MODEL, embedder::DEFAULT_EMBEDDING_MODEL, OpenAiCompletion,
    OpenAiEmbedder,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api_state::ApiState;

#[derive(Parser)]
struct Cli {
    #[clap(long, default_value = "0.0.0.0")]
    host: String,
    #[clap(long, default_value = "3000")]
    port: u16,
    #[clap(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,
    #[clap(long, default_value = DEFAULT_EMBEDDING_MODEL)]
    embedding_model: String,
    #[clap(long, default_value = DEFAULT_COMPLETION_MODEL)]
    completion_model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=debug,prompta=debug,tower_http=debug",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if cli.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; recommendation requests will fail");
    }

    let recommender = Recommender::builder()
        .with_pool(CandidatePool::high_potential())
        .with_embedder(Arc::new(
            OpenAiEmbedder::builder()
                .with_api_key(cli.openai_api_key.clone())
                .with_model(cli.embedding_model)
                .build()
                .expect("Failed to create OpenAiEmbedder"),
        ))
        .with_completion(Arc::new(
            OpenAiCompletion::builder()
                .with_api_key(cli.openai_api_key)
                .with_model(cli.completion_model)
                .build()
                .expect("Failed to create OpenAiCompletion"),
        ))
        .with_store(Arc::new(InMemoryStore::new()))
        .build();

    let listener = TcpListener::bind(SocketAddr::new(cli.host.parse()?, cli.port)).await?;
    tracing::debug!("listening on {}", listener.local_addr()?);
    axum::serve(
        listener,
        api::routes::router(ApiState { recommender }).layer(TraceLayer::new_for_http()),
    )
    .await?;

    Ok(())
}
