use std::convert::Infallible;

use axum::{
    body::Body,
    http::{
        HeaderValue,
        header::{CONTENT_LENGTH, CONTENT_TYPE},
    },
    response::{IntoResponse, IntoResponseParts, Response, ResponseParts},
};
use maud::{DOCTYPE, Markup, PreEscaped, Render, html};

use crate::alert::Alert;
use crate::context::Message;
use crate::i18n::Locale;

pub const EMPTY: PreEscaped<&'static str> = PreEscaped("");

const HTML: &str = "text/html; charset=utf-8";
const STYLESHEET: &str = "/static/authPages.css";
const DEFAULT_STYLESHEET: &str = "/static/login.css";

struct Head<'a> {
    title: &'a str,
    default_css: bool,
}

impl Render for Head<'_> {
    fn render(&self) -> Markup {
        html! {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (self.title) }

                @if self.default_css {
                    link rel="stylesheet" href=(DEFAULT_STYLESHEET);
                }
                link rel="stylesheet" href=(STYLESHEET);
            }
        }
    }
}

/// Page chrome every themed page is rendered into.
#[derive(Clone)]
pub struct Template {
    title: String,
    locale: Locale,
    body_class: Option<String>,
    do_use_default_css: bool,
    header: Markup,
    display_message: bool,
    message: Option<Message>,
    display_info: bool,
    info: Option<Markup>,
}

impl Template {
    pub fn new(title: impl Into<String>, locale: Locale) -> Self {
        Self {
            title: title.into(),
            locale,
            body_class: None,
            do_use_default_css: true,
            header: EMPTY.render(),
            display_message: true,
            message: None,
            display_info: true,
            info: None,
        }
    }

    pub fn body_class(mut self, class: impl Into<String>) -> Self {
        self.body_class = Some(class.into());
        self
    }

    pub fn default_css(mut self, enabled: bool) -> Self {
        self.do_use_default_css = enabled;
        self
    }

    pub fn header(mut self, header: impl Render) -> Self {
        self.header = header.render();
        self
    }

    pub fn message(mut self, message: Option<Message>, display: bool) -> Self {
        self.message = message;
        self.display_message = display;
        self
    }

    pub fn info(mut self, info: Option<Markup>, display: bool) -> Self {
        self.info = info;
        self.display_info = display;
        self
    }
}

fn base(w: &Wrappable) -> Markup {
    let t = &w.template;

    html! {
        (DOCTYPE)
        html lang=(t.locale.tag()) {
            (Head { title: &t.title, default_css: t.do_use_default_css })

            body class=[t.body_class.as_deref()] {
                h1 id="kc-page-title" { (t.header) }

                @if t.display_message {
                    @if let Some(m) = &t.message {
                        (Alert::new(m.kind.as_deref(), &m.summary, t.locale.messages()))
                    }
                }

                (w.content)

                @if t.display_info {
                    @if let Some(info) = &t.info {
                        div id="kc-info" { (info) }
                    }
                }
            }
        }
    }
}

#[derive(Clone)]
pub struct Wrappable {
    template: Template,
    content: Markup,
}

impl Wrappable {
    pub fn new(template: Template, content: impl Render) -> Self {
        Self {
            template,
            content: content.render(),
        }
    }
}

impl Render for Wrappable {
    fn render(&self) -> Markup {
        base(self)
    }
}

impl IntoResponseParts for Wrappable {
    type Error = Infallible;

    fn into_response_parts(
        self,
        mut res: ResponseParts,
    ) -> core::result::Result<ResponseParts, Self::Error> {
        res.extensions_mut().insert(self);
        Ok(res)
    }
}

impl IntoResponse for Wrappable {
    fn into_response(self) -> axum::response::Response {
        (self, ()).into_response()
    }
}

pub async fn wrap_in_base(mut resp: Response) -> Response {
    if let Some(w) = resp.extensions_mut().remove::<Wrappable>() {
        let headers = resp.headers_mut();
        headers.remove(CONTENT_LENGTH);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(HTML));
        *resp.body_mut() = Body::new(w.render().into_string());
        return resp;
    }

    resp
}
