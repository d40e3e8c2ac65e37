//! Snapshot of the state the authentication server hands to the theme.
//!
//! Every page the server can ask for is a variant tagged by `pageId`. Only the
//! login page is themed here; other pages deserialize to
//! [`KcContext::Unsupported`] so that reading login fields from them yields
//! nothing instead of failing.

use serde::Deserialize;

use crate::i18n::Locale;

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "pageId")]
pub enum KcContext {
    #[serde(rename = "login.ftl")]
    Login(LoginContext),
    #[serde(other)]
    Unsupported,
}

impl KcContext {
    pub fn login(&self) -> Option<&LoginContext> {
        match self {
            KcContext::Login(ctx) => Some(ctx),
            KcContext::Unsupported => None,
        }
    }

    /// Context used when no fixture is configured: every optional login
    /// feature switched on, no prior submission.
    pub fn mock() -> Self {
        KcContext::Login(LoginContext {
            realm: Realm {
                display_name: Some("Yıldız Skylab".to_owned()),
                password: true,
                login_with_email_allowed: true,
                remember_me: true,
                reset_password_allowed: true,
            },
            url: Urls {
                login_action: "/realms/skylab/login-actions/authenticate".to_owned(),
                login_reset_password_url: None,
                login_reset_credentials_url: Some(
                    "/realms/skylab/login-actions/reset-credentials".to_owned(),
                ),
            },
            login: LoginState::default(),
            message: None,
            auth: None,
            username_hidden: false,
            locale: None,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginContext {
    #[serde(default)]
    pub realm: Realm,
    pub url: Urls,
    #[serde(default)]
    pub login: LoginState,
    pub message: Option<Message>,
    pub auth: Option<AuthState>,
    #[serde(default)]
    pub username_hidden: bool,
    pub locale: Option<LocaleInfo>,
}

impl LoginContext {
    pub fn selected_credential(&self) -> Option<&str> {
        self.auth
            .as_ref()
            .and_then(|a| a.selected_credential.as_deref())
    }

    /// Locale requested by the server, if it is one the theme ships.
    pub fn requested_locale(&self) -> Option<Locale> {
        self.locale
            .as_ref()
            .and_then(|l| l.current_language_tag.as_deref())
            .and_then(Locale::from_tag)
    }

    pub fn show_username(&self) -> bool {
        self.realm.password && !self.username_hidden
    }

    pub fn show_remember_me(&self) -> bool {
        self.realm.remember_me && !self.username_hidden
    }

    pub fn forgot_password_url(&self) -> Option<&str> {
        if !self.realm.reset_password_allowed {
            return None;
        }
        self.url.reset_password()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Realm {
    pub display_name: Option<String>,
    pub password: bool,
    pub login_with_email_allowed: bool,
    pub remember_me: bool,
    pub reset_password_allowed: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Urls {
    pub login_action: String,
    pub login_reset_password_url: Option<String>,
    pub login_reset_credentials_url: Option<String>,
}

impl Urls {
    /// Older server versions only send `loginResetCredentialsUrl`.
    pub fn reset_password(&self) -> Option<&str> {
        self.login_reset_password_url
            .as_deref()
            .or(self.login_reset_credentials_url.as_deref())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginState {
    pub username: Option<String>,
    pub remember_me: Option<Flag>,
}

impl LoginState {
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me.as_ref().is_some_and(Flag::is_set)
    }
}

/// Form values echoed back by the server arrive either as booleans or as the
/// raw submitted string (`"on"` for a ticked checkbox).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    pub fn is_set(&self) -> bool {
        match self {
            Flag::Bool(b) => *b,
            Flag::Text(s) => !s.is_empty(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub summary: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub selected_credential: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub current_language_tag: Option<String>,
}
