use paychart::config::Config;
use paychart::server::build_app;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paychart=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!("Starting Paychart on {}", config.address());

    if !config.data_path.exists() {
        tracing::warn!(
            "Chart data file {} not found; the chart will show an error until it exists",
            config.data_path.display()
        );
    }

    let (_, app) = build_app(config.clone());

    let listener = TcpListener::bind(config.address())
        .await
        .expect("Failed to bind address");

    tracing::info!("Listening on http://{}", config.address());
    tracing::info!(
        "Chart data API available at http://{}/api/chartdata",
        config.address()
    );

    axum::serve(listener, app).await.expect("Server error");
}
