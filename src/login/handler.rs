use axum::http::StatusCode;
use log::debug;
use serde::Deserialize;

use crate::context::KcContext;
use crate::i18n::Locale;
use crate::login::markup;
use crate::markup::Wrappable;

impl From<super::Error> for StatusCode {
    fn from(e: super::Error) -> Self {
        match e {
            super::Error::UnsupportedPage => Self::NOT_FOUND,
        }
    }
}

#[derive(Deserialize)]
pub struct Params {
    locale: Option<Locale>,
}

/// Locale precedence: explicit request, then the server's choice, then the
/// configured default.
fn render(
    ctx: &KcContext,
    requested: Option<Locale>,
    fallback: Locale,
) -> super::Result<Wrappable> {
    let login = ctx.login().ok_or(super::Error::UnsupportedPage)?;
    let locale = requested.or(login.requested_locale()).unwrap_or(fallback);
    debug!("Rendering login page in '{locale}'");

    Ok(Wrappable::new(
        markup::template(login, locale),
        markup::LoginPage::new(login, locale.messages()),
    ))
}

pub(super) mod pages {
    use axum::extract::State;
    use axum_extra::extract::Query;

    use crate::markup::Wrappable;
    use crate::state::AppState;

    use super::Params;

    pub async fn login(
        State(state): State<AppState>,
        Query(params): Query<Params>,
    ) -> crate::Result<Wrappable> {
        let page = super::render(&state.context, params.locale, state.locale)?;
        Ok(page)
    }
}

pub(super) mod api {
    use axum::Json;
    use axum::extract::State;
    use axum_extra::extract::Query;
    use log::debug;

    use crate::context::KcContext;
    use crate::markup::Wrappable;
    use crate::state::AppState;

    use super::Params;

    pub async fn preview(
        State(state): State<AppState>,
        Query(params): Query<Params>,
        Json(ctx): Json<KcContext>,
    ) -> crate::Result<Wrappable> {
        debug!("Previewing posted context");
        let page = super::render(&ctx, params.locale, state.locale)?;
        Ok(page)
    }
}
