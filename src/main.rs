mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cfg = config::ServerConfig::from_env();
    let state = state::AppState::new();

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind((cfg.bind_addr, cfg.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = cfg.port, addr = %cfg.bind_addr, "bounciehouse dev api listening");
    axum::serve(listener, app).await.expect("server failed");
}
