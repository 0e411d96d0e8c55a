use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use tokio::sync::{mpsc, watch};
use tokio_stream::StreamExt;

use crate::models::{ApiError, Article, ArticleFilter};

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// Result of a `LoadArticles` command, tagged with its generation.
    ArticlesLoaded {
        generation: u64,
        result: Result<Vec<Article>, ApiError>,
    },
    /// The applied filter changed.
    FilterChanged,
    /// Terminal input stream ended or failed.
    InputClosed,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventHandler {
    /// Spawn the terminal reader and the tick timer.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut ticker = tokio::time::interval(tick_rate);
            loop {
                let event = tokio::select! {
                    _ = ticker.tick() => AppEvent::Tick,
                    maybe = reader.next() => match maybe {
                        Some(Ok(Event::Key(key))) => AppEvent::Key(key),
                        Some(Ok(Event::Resize(cols, rows))) => AppEvent::Resize(cols, rows),
                        Some(Ok(_)) => continue,
                        Some(Err(err)) => {
                            tracing::error!("Terminal input error: {}", err);
                            let _ = event_tx.send(AppEvent::InputClosed);
                            break;
                        }
                        None => {
                            let _ = event_tx.send(AppEvent::InputClosed);
                            break;
                        }
                    },
                };
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx, tx }
    }

    /// Forward applied-filter changes as [`AppEvent::FilterChanged`].
    pub fn watch_filter(&self, mut filter: watch::Receiver<ArticleFilter>) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            while filter.changed().await.is_ok() {
                if tx.send(AppEvent::FilterChanged).is_err() {
                    break;
                }
            }
        });
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }
}
