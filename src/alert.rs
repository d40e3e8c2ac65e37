use maud::{Markup, Render, html};

use crate::i18n::Messages;

/// Severity of a server message. Anything the server sends that is not one
/// of the known kinds, including no kind at all, is treated as `Info`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
}

impl From<Option<&str>> for Severity {
    fn from(kind: Option<&str>) -> Self {
        match kind {
            Some("success") => Severity::Success,
            Some("warning") => Severity::Warning,
            Some("error") => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "auth-alert-success",
            Severity::Warning => "auth-alert-warning",
            Severity::Error => "auth-alert-error",
            Severity::Info => "auth-alert-info",
        }
    }

    pub fn heading(&self, messages: &Messages) -> &'static str {
        match self {
            Severity::Success => messages.success,
            Severity::Warning => messages.warning,
            Severity::Error => messages.error,
            Severity::Info => messages.info,
        }
    }
}

pub fn alert_class(kind: Option<&str>) -> &'static str {
    Severity::from(kind).css_class()
}

pub fn alert_heading(kind: Option<&str>, messages: &Messages) -> &'static str {
    Severity::from(kind).heading(messages)
}

pub struct Alert<'a> {
    severity: Severity,
    summary: &'a str,
    messages: &'a Messages,
}

impl<'a> Alert<'a> {
    pub fn new(kind: Option<&str>, summary: &'a str, messages: &'a Messages) -> Self {
        Self {
            severity: kind.into(),
            summary,
            messages,
        }
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        html! {
            div class={"auth-alert " (self.severity.css_class())} role="alert" {
                strong { (self.severity.heading(self.messages)) }
                span { (self.summary) }
            }
        }
    }
}
