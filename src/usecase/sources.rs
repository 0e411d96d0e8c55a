use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::models::ArticleSource;
use crate::news::{NewsApi, NewsError};

pub type SourcesResult = Result<Vec<ArticleSource>, NewsError>;

const STREAM_BUFFER: usize = 4;

/// Publishes the source catalog as a stream.
pub struct ObserveSources {
    api: Arc<dyn NewsApi>,
    refresh: Option<Duration>,
}

impl ObserveSources {
    /// `refresh` of `None` fetches once per subscription.
    pub fn new(api: Arc<dyn NewsApi>, refresh: Option<Duration>) -> Self {
        Self { api, refresh }
    }

    /// Fetches the full catalog on subscription, then every refresh period.
    ///
    /// The background task stops as soon as the returned stream is dropped.
    pub fn stream(&self) -> ReceiverStream<SourcesResult> {
        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        let api = Arc::clone(&self.api);
        let refresh = self.refresh;

        tokio::spawn(async move {
            loop {
                let result = api.get_sources(None, None).await;
                match &result {
                    Ok(sources) => tracing::debug!(count = sources.len(), "Fetched sources"),
                    Err(err) => tracing::warn!("Fetching sources failed: {}", err),
                }
                if tx.send(result).await.is_err() {
                    break;
                }

                let Some(period) = refresh else {
                    break;
                };
                tokio::select! {
                    _ = tokio::time::sleep(period) => {}
                    _ = tx.closed() => break,
                }
            }
        });

        ReceiverStream::new(rx)
    }
}
