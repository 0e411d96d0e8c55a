use std::io;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::news::{NewsApi, NewsApiClient};
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::filter::ArticleFilterStateHolder;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::usecase::{LoadArticles, LocaleStore, ObserveSources};

pub async fn run(config: Config) -> io::Result<()> {
    let api: Arc<dyn NewsApi> = Arc::new(
        NewsApiClient::new(&config.news).map_err(|err| io::Error::other(err.to_string()))?,
    );
    let locale = LocaleStore::new(config.defaults.language.clone());
    let holder = Arc::new(ArticleFilterStateHolder::with_clock(
        locale.clone(),
        Arc::new(|| Local::now().date_naive()),
    ));
    let refresh = match config.ui.sources_refresh_seconds {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };
    holder.start(ObserveSources::new(Arc::clone(&api), refresh).stream());
    let loader = LoadArticles::new(
        Arc::clone(&api),
        locale,
        config.defaults.category.clone(),
    );

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut events = EventHandler::new(tick_rate);
    events.watch_filter(holder.current_filter());
    let event_tx = events.sender();

    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    let mut app = App::new(Arc::clone(&holder));
    app.set_command_sender(command_tx);
    app.request_reload();
    tracing::info!(language = %config.defaults.language, "Article screen started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Resize(_, _)) => {}
                Some(AppEvent::Tick) => app.on_tick(),
                Some(AppEvent::ArticlesLoaded { generation, result }) => {
                    app.on_articles_loaded(generation, result)
                }
                Some(AppEvent::FilterChanged) => app.on_filter_changed(),
                Some(AppEvent::InputClosed) | None => break,
            },
            Some(command) = command_rx.recv() => {
                spawn_command(command, &loader, event_tx.clone(), holder.today());
            }
        }
    }

    holder.stop();
    drop(guard);
    Ok(())
}

/// Run a UI command off the render loop; the result comes back as an event.
fn spawn_command(
    command: UiCommand,
    loader: &LoadArticles,
    events: mpsc::UnboundedSender<AppEvent>,
    today: NaiveDate,
) {
    match command {
        UiCommand::LoadArticles { generation, filter } => {
            let loader = loader.clone();
            tokio::spawn(async move {
                let result = loader
                    .load(&filter, today)
                    .await
                    .map_err(|err| {
                        tracing::warn!(generation, "Article load failed: {}", err);
                        err.to_api_error()
                    });
                let _ = events.send(AppEvent::ArticlesLoaded { generation, result });
            });
        }
    }
}
