use axum::Router;
use axum::routing::get;

use crate::state::AppState;

mod handler;
pub mod markup;

type Result<T> = std::result::Result<T, Error>;

pub fn pages<S>(s: AppState) -> Router<S> {
    Router::new()
        .route(
            "/login",
            get(handler::pages::login).post(handler::api::preview),
        )
        .with_state(s)
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("page is not themed, only login.ftl can be rendered")]
    UnsupportedPage,
}
