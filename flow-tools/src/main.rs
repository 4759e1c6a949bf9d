use tracing::info;
use warp::Filter;

use flow_tools::{api::ToolState, config::ToolsConfig, middleware, server_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ToolsConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!("Starting flow tool server");
    info!(
        "Hybrid search {}",
        if config.azure_search.is_some() { "enabled" } else { "disabled" }
    );

    let state = ToolState::from_config(&config)?;
    let routes = server_routes(state).with(middleware::request_log());

    let addr = ([0, 0, 0, 0], config.port);
    info!("Server listening on {}", addr.1);

    warp::serve(routes).run(addr).await;

    Ok(())
}
