#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let backend = services::backend::ActivitiesBackend::new(
        config.activities_api_url.clone(),
        config.request_timeout,
        config.connect_timeout,
    )
    .expect("activities backend client init failed");
    tracing::info!(backend = %backend.base(), "forwarding /activities");
    let state = state::AppState::new(backend);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "activity board listening");
    axum::serve(listener, app).await.expect("server failed");
}
