use std::fmt::Display;
use std::str::FromStr;

use serde::Deserialize;

/// Locales shipped with the theme. Turkish is the source locale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Locale {
    #[default]
    Tr,
    En,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Tr => "tr",
            Locale::En => "en",
        }
    }

    /// Resolves a BCP 47 tag such as `en-US` by its primary subtag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "tr" => Some(Locale::Tr),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::Tr => &TR,
            Locale::En => &EN,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_tag(s).ok_or_else(|| format!("unsupported locale: {s}"))
    }
}

impl TryFrom<String> for Locale {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

pub struct Messages {
    pub login_title: &'static str,
    pub welcome: &'static str,
    pub subtitle: &'static str,
    pub username: &'static str,
    pub username_or_email: &'static str,
    pub username_placeholder: &'static str,
    pub password: &'static str,
    pub password_placeholder: &'static str,
    pub remember_me: &'static str,
    pub forgot_password: &'static str,
    pub do_log_in: &'static str,

    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub info: &'static str,
}

pub const TR: Messages = Messages {
    login_title: "Giriş",
    welcome: "Hoş geldiniz",
    subtitle: "Hesabınıza giriş yaparak yönetim paneline erişin.",
    username: "Kullanıcı adı",
    username_or_email: "Kullanıcı adı veya e-posta",
    username_placeholder: "ornek@yildizskylab.com",
    password: "Şifre",
    password_placeholder: "Şifrenizi girin",
    remember_me: "Beni hatırla",
    forgot_password: "Şifremi unuttum",
    do_log_in: "Giriş yap",

    success: "Başarılı",
    warning: "Uyarı",
    error: "Hata",
    info: "Bilgi",
};

pub const EN: Messages = Messages {
    login_title: "Sign in",
    welcome: "Welcome",
    subtitle: "Sign in to your account to access the management panel.",
    username: "Username",
    username_or_email: "Username or email",
    username_placeholder: "example@yildizskylab.com",
    password: "Password",
    password_placeholder: "Enter your password",
    remember_me: "Remember me",
    forgot_password: "Forgot password",
    do_log_in: "Sign in",

    success: "Successful",
    warning: "Warning",
    error: "Error",
    info: "Info",
};
