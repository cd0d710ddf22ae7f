use std::path::PathBuf;

use clap::Parser;
use server_training::{
    content::{Catalog, ContentStore},
    AppState,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding modules/, quizzes/, scenarios/ and catalog.json.
    #[arg(short, long, env, default_value = "content")]
    content_dir: PathBuf,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:8000")]
    address: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,tower_http=debug,server_training=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    if !args.content_dir.is_dir() {
        color_eyre::eyre::bail!(
            "content directory {} does not exist",
            args.content_dir.display()
        );
    }

    let content = ContentStore::new(&args.content_dir);
    let catalog = Catalog::load(content.root())?;
    let app = server_training::router(AppState::new(content, catalog));

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!(
        "serving {} on http://{address}",
        args.content_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("could not install Ctrl+C handler: {e}");
        std::future::pending::<()>().await;
    }
}
