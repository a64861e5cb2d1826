use clap::Parser;
use std::sync::Arc;

use newsdesk::api;
use newsdesk::config::CONFIG;
use newsdesk::gnews::GNewsClient;

#[derive(Parser, Debug)]
#[command(name = "newsdesk", about = "Proxy server for the GNews API")]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Directory with the front-end files (overrides STATIC_DIR)
    #[arg(long)]
    static_dir: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();

    // Forces the lazy config here, so a missing GNEWS_API_KEY kills the
    // process at startup instead of on the first proxied request.
    let config = &*CONFIG;

    let host = cli.host.unwrap_or_else(|| config.host.clone());
    let port = cli.port.unwrap_or(config.port);
    let static_dir = cli.static_dir.unwrap_or_else(|| config.static_dir.clone());

    let client = Arc::new(GNewsClient::new(
        &config.gnews_base_url,
        &config.gnews_api_key,
    ));
    let router = api::create_router(client, &static_dir);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("server running on {addr}");
    tracing::info!("gnews api integration ready");
    axum::serve(listener, router).await?;

    Ok(())
}
