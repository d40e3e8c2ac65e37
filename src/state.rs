use std::sync::Arc;

use log::info;

use crate::config::Config;
use crate::context::KcContext;
use crate::i18n::Locale;

#[derive(Clone)]
pub struct AppState {
    pub context: Arc<KcContext>,
    pub locale: Locale,
}

impl AppState {
    pub fn new(context: KcContext, locale: Locale) -> Self {
        Self {
            context: Arc::new(context),
            locale,
        }
    }

    pub async fn init(cfg: &Config) -> crate::Result<Self> {
        let context = match &cfg.context_file {
            Some(path) => {
                info!("Loading login context from {}", path.display());
                let raw = tokio::fs::read_to_string(path).await?;
                serde_json::from_str(&raw)?
            }
            None => {
                info!("No CONTEXT_FILE set, using built-in mock context");
                KcContext::mock()
            }
        };

        Ok(Self::new(context, cfg.locale))
    }
}
