use anyhow::Context;
use reserva_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment and configuration
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    // 2. Logging (file output only when asked for)
    config
        .ensure_work_dir_structure()
        .with_context(|| format!("Failed to create work directory {}", config.work_dir))?;
    let logs_dir = config.logs_dir();
    let log_dir = config.log_to_file.then(|| logs_dir.to_string_lossy().into_owned());
    init_logger_with_file(&config.log_level, log_dir.as_deref());

    print_banner();
    tracing::info!(
        "Starting reserva-server (env: {}, port: {})",
        config.environment,
        config.http_port
    );

    // 3. State (opens the store) and HTTP server
    let state = ServerState::initialize(&config)
        .await
        .context("Failed to initialize server state")?;
    let server = Server::with_state(config, state);

    server.run().await.context("Server error")?;

    Ok(())
}
