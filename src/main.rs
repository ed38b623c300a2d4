use anyhow::Context;
use hello_listener::config::Config;
use hello_listener::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    if let Err(e) = serve().await {
        let error = format!("{e:#}");
        tracing::error!(%error, "Server error");
        std::process::exit(1);
    }
}

async fn serve() -> anyhow::Result<()> {
    let cfg = Config::load();
    server::listener::run(&cfg)
        .await
        .context("listener terminated")
}
