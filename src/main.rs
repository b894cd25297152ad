use sso_portal::server::{
    config::Config, error::Error, model::app::AppState, router, startup,
};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_logger();

    if let Err(e) = run().await {
        eprintln!("Startup error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    serve(config).await
}

async fn serve(config: Config) -> Result<(), Error> {
    let oauth_client = startup::build_oauth_client(&config).await?;

    let app = router::routes().with_state(AppState { oauth_client });
    let app = startup::with_session(app, &config).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Starting server on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
