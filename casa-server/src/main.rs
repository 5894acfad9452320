use casa_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, then config
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. logging
    setup_environment(&config);
    print_banner();
    tracing::info!(
        environment = %config.environment,
        timezone = %config.timezone,
        "Casa server starting..."
    );

    // 3. state and HTTP server (background tasks start inside run)
    let state = ServerState::initialize(&config);
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
