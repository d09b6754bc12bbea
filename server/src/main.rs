mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let state = state::AppState::new();

    if let Some(demo) = &config.demo_account {
        state.accounts.seed("Demo User", &demo.email, &demo.password).await;
        tracing::info!(email = %demo.email, accounts = state.accounts.count().await, "demo account seeded");
    }

    let app = routes::app(state).expect("router init failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "health dashboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
