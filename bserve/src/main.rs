use anyhow::Context;
use bserve::config::ServerConfig;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env().context("failed to load configuration")?;
    bserve::init_tracing(config.log_format)?;

    let state = bserve::build_state(&config)?;
    tracing::info!(
        phase = "startup",
        bind_addr = %config.bind_addr,
        backend_url = %config.backend_url,
        max_iterations = config.max_iterations,
        tools = state.tool_count(),
        "starting toolbridge server"
    );

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    axum::serve(listener, bserve::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    tracing::info!(phase = "shutdown", "toolbridge server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(phase = "shutdown", error = %error, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(phase = "shutdown", error = %error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!(phase = "shutdown", "received Ctrl+C"),
        _ = terminate => tracing::info!(phase = "shutdown", "received SIGTERM"),
    }
}
