use log::{error, info};
use login_theme::config::Config;
use login_theme::state::AppState;

#[tokio::main]
async fn main() {
    let cfg = Config::default();

    let state = match AppState::init(&cfg).await {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to load login context: {e}");
            std::process::exit(1);
        }
    };

    let app = login_theme::app(state, &cfg.static_dir);
    let addr = cfg.env.addr();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    info!("Serving login theme on {addr}");
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
