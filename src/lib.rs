use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware::map_response;
use axum::routing::get;
use tower_http::services::ServeDir;

use crate::state::AppState;

pub mod alert;
pub mod config;
pub mod context;
pub mod error;
pub mod i18n;
pub mod login;
pub mod markup;
pub mod state;

pub use error::{Error, Result};

pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(login::pages(state))
        .route("/health", get(|| async { StatusCode::OK }))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(map_response(markup::wrap_in_base))
}
