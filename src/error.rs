use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

use crate::login;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    _Login(#[from] login::Error),

    #[error(transparent)]
    _Io(#[from] std::io::Error),

    #[error(transparent)]
    _ParseJson(#[from] serde_json::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!("{self}");

        let (status, message) = match self {
            Self::_Login(e) => {
                let message = e.to_string();
                (StatusCode::from(e), message)
            }
            Self::_Io(_) | Self::_ParseJson(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_owned(),
            ),
        };

        (status, message).into_response()
    }
}
