use std::sync::Arc;

use tokio::sync::watch;

/// Observable news-language code shared between the filter and the loaders.
#[derive(Clone)]
pub struct LocaleStore {
    tx: Arc<watch::Sender<String>>,
}

impl LocaleStore {
    pub fn new(language_code: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(language_code.into());
        Self { tx: Arc::new(tx) }
    }

    pub fn language_code(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Store a new code; subscribers are only notified on change.
    pub fn set_language_code(&self, code: &str) {
        let changed = self.tx.send_if_modified(|current| {
            if current == code {
                return false;
            }
            *current = code.to_string();
            true
        });
        if changed {
            tracing::info!(language = code, "News language changed");
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}
