use maud::{Markup, Render, html};

use crate::alert::Alert;
use crate::context::LoginContext;
use crate::i18n::{Locale, Messages};
use crate::markup::{EMPTY, Template};

const BODY_CLASS: &str = "modern-auth";

/// Chrome for the login page. The page renders its own alert, so the
/// template-level message and info slots stay off.
pub fn template(ctx: &LoginContext, locale: Locale) -> Template {
    let title = ctx
        .realm
        .display_name
        .as_deref()
        .unwrap_or(locale.messages().login_title);

    Template::new(title, locale)
        .default_css(false)
        .body_class(BODY_CLASS)
        .header(EMPTY)
        .message(ctx.message.clone(), false)
        .info(None, false)
}

pub struct LoginPage<'a> {
    ctx: &'a LoginContext,
    messages: &'a Messages,
}

impl<'a> LoginPage<'a> {
    pub const fn new(ctx: &'a LoginContext, messages: &'a Messages) -> Self {
        Self { ctx, messages }
    }
}

impl Render for LoginPage<'_> {
    fn render(&self) -> Markup {
        let ctx = self.ctx;
        let m = self.messages;

        html! {
            div class="auth-shell" {
                div class="auth-card" role="form" aria-labelledby="kc-page-title" {
                    header {
                        h2 { (m.welcome) }
                        p class="auth-subtitle" { (m.subtitle) }
                    }

                    @if let Some(msg) = &ctx.message {
                        (Alert::new(msg.kind.as_deref(), &msg.summary, m))
                    }

                    form id="kc-form-login"
                        class="auth-form"
                        action=(ctx.url.login_action)
                        method="post"
                        novalidate
                    {
                        @if let Some(id) = ctx.selected_credential() {
                            input type="hidden" name="credentialId" value=(id);
                        }

                        @if ctx.show_username() {
                            (UsernameField(ctx, m))
                        }

                        @if ctx.realm.password {
                            (PasswordField(m))
                        }

                        div class="auth-inline" {
                            @if ctx.show_remember_me() {
                                label class="auth-remember" for="rememberMe" {
                                    input id="rememberMe"
                                        name="rememberMe"
                                        type="checkbox"
                                        checked[ctx.login.remember_me()];
                                    span { (m.remember_me) }
                                }
                            }
                            @if let Some(href) = ctx.forgot_password_url() {
                                a class="auth-forgot-link" href=(href) { (m.forgot_password) }
                            }
                        }

                        button type="submit" class="auth-submit" name="login" { (m.do_log_in) }
                    }
                }
            }
        }
    }
}

struct UsernameField<'a>(&'a LoginContext, &'a Messages);

impl Render for UsernameField<'_> {
    fn render(&self) -> Markup {
        let (ctx, m) = (self.0, self.1);
        let caption = if ctx.realm.login_with_email_allowed {
            m.username_or_email
        } else {
            m.username
        };

        html! {
            div class="auth-field" {
                label for="username" { (caption) }
                input id="username"
                    class="auth-input"
                    name="username"
                    type="text"
                    autofocus
                    value=(ctx.login.username())
                    autocomplete="username"
                    placeholder=(m.username_placeholder);
            }
        }
    }
}

struct PasswordField<'a>(&'a Messages);

impl Render for PasswordField<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="auth-field" {
                label for="password" { (self.0.password) }
                input id="password"
                    class="auth-input"
                    name="password"
                    type="password"
                    autocomplete="current-password"
                    placeholder=(self.0.password_placeholder);
            }
        }
    }
}
