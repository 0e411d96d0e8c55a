//! Tests for the filter state holder: stream merging, locale sync and
//! change notifications.

mod common;

use std::sync::Arc;
use std::time::Duration;

use acaraus::models::{ApiError, ArticleFilter};
use acaraus::news::NewsError;
use acaraus::ui::filter::{ArticleFilterStateHolder, ALL_SOURCES};
use acaraus::usecase::{LocaleStore, ObserveSources, SourcesResult};
use common::*;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

fn today() -> chrono::NaiveDate {
    date(2024, 7, 20)
}

fn holder(language: &str) -> (Arc<ArticleFilterStateHolder>, LocaleStore) {
    let locale = LocaleStore::new(language);
    let holder = Arc::new(ArticleFilterStateHolder::new(locale.clone(), today()));
    (holder, locale)
}

fn catalog() -> Vec<acaraus::models::ArticleSource> {
    vec![
        source("bbc-news", "BBC News", "en"),
        source("cnn", "CNN", "en"),
        source("le-monde", "Le Monde", "fr"),
    ]
}

async fn wait_for<F: Fn() -> bool>(condition: F) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

#[tokio::test]
async fn initial_state_follows_locale() {
    let (holder, _locale) = holder("fr");
    assert_eq!(holder.editor().language, "French");
    assert_eq!(holder.filter(), ArticleFilter::new("fr", today()));
    assert!(!holder.editor().is_visible);
}

#[tokio::test]
async fn stream_updates_source_options() {
    let (holder, _locale) = holder("en");
    let (tx, rx) = mpsc::channel::<SourcesResult>(4);
    holder.start(ReceiverStream::new(rx));

    let mut editor = holder.filter_editor_state();
    tx.send(Ok(catalog())).await.unwrap();

    tokio::time::timeout(Duration::from_secs(2), editor.changed())
        .await
        .expect("editor update")
        .unwrap();
    assert_eq!(
        editor.borrow().source_options,
        vec!["All", "BBC News", "CNN"]
    );
}

#[tokio::test]
async fn stream_error_is_recorded_then_cleared() {
    let (holder, _locale) = holder("en");
    let (tx, rx) = mpsc::channel::<SourcesResult>(4);
    holder.start(ReceiverStream::new(rx));

    let error = ApiError::new("rateLimited", "Slow down");
    tx.send(Err(NewsError::Api(error.clone()))).await.unwrap();
    wait_for(|| holder.last_error().is_some()).await;
    assert_eq!(holder.last_error(), Some(error));

    tx.send(Ok(catalog())).await.unwrap();
    wait_for(|| holder.last_error().is_none()).await;
    assert_eq!(holder.editor().source_options.len(), 3);
}

#[tokio::test]
async fn language_change_updates_locale_immediately() {
    let (holder, locale) = holder("en");
    let mut locale_rx = locale.subscribe();

    holder.set_language("German");

    assert!(locale_rx.has_changed().unwrap());
    assert_eq!(locale.language_code(), "de");
    // The applied filter waits for an explicit apply.
    assert_eq!(holder.filter().language, "en");

    holder.apply();
    assert_eq!(holder.filter().language, "de");
}

#[tokio::test]
async fn unknown_language_leaves_locale_alone() {
    let (holder, locale) = holder("en");
    let locale_rx = locale.subscribe();
    holder.set_language("Esperanto");
    assert!(!locale_rx.has_changed().unwrap());
    assert_eq!(locale.language_code(), "en");
}

#[tokio::test]
async fn applied_filter_notifies_only_on_change() {
    let (holder, _locale) = holder("en");
    let mut filter_rx = holder.current_filter();

    holder.show();
    holder.set_query("space");
    assert!(!filter_rx.has_changed().unwrap());

    holder.apply();
    assert!(filter_rx.has_changed().unwrap());
    assert_eq!(filter_rx.borrow_and_update().query, "space");

    holder.apply();
    assert!(!filter_rx.has_changed().unwrap());
}

#[tokio::test]
async fn reset_restores_default_filter() {
    let (holder, _locale) = holder("en");
    holder.set_query("space");
    holder.set_sort_by("Popularity");
    holder.apply();
    assert!(!holder.filter().is_default(today()));

    holder.show();
    holder.reset();
    assert!(holder.filter().is_default(today()));
    assert_eq!(holder.editor().query, "");
    assert!(!holder.editor().is_visible);
}

#[tokio::test]
async fn selected_source_reaches_applied_filter() {
    let (holder, _locale) = holder("en");
    let (tx, rx) = mpsc::channel::<SourcesResult>(4);
    holder.start(ReceiverStream::new(rx));
    tx.send(Ok(catalog())).await.unwrap();
    wait_for(|| holder.editor().source_options.len() == 3).await;

    holder.set_source("CNN");
    holder.apply();
    let filter = holder.filter();
    assert_eq!(filter.sources.len(), 1);
    assert_eq!(filter.sources[0].id, "cnn");

    holder.set_source(ALL_SOURCES);
    holder.apply();
    assert!(holder.filter().sources.is_empty());
}

#[tokio::test]
async fn stop_ends_subscription() {
    let (holder, _locale) = holder("en");
    let (tx, rx) = mpsc::channel::<SourcesResult>(4);
    holder.start(ReceiverStream::new(rx));
    holder.stop();

    // The aborted task drops the receiver, closing the channel.
    tokio::time::timeout(Duration::from_secs(2), tx.closed())
        .await
        .expect("stream dropped");
    assert_eq!(holder.editor().source_options, vec!["All"]);
}

#[tokio::test]
async fn observe_sources_feeds_holder() {
    let api = FakeNewsApi::with_sources(catalog());
    let (holder, _locale) = holder("fr");
    holder.start(ObserveSources::new(api.clone(), None).stream());

    wait_for(|| holder.editor().source_options.len() == 2).await;
    assert_eq!(holder.editor().source_options, vec!["All", "Le Monde"]);
    assert_eq!(api.calls.lock().await.as_slice(), &[ApiCall::Sources]);
}

#[tokio::test]
async fn observe_sources_refreshes_periodically() {
    let api = FakeNewsApi::with_sources(catalog());
    let stream = ObserveSources::new(api.clone(), Some(Duration::from_millis(10))).stream();
    let (holder, _locale) = holder("en");
    holder.start(stream);

    tokio::time::timeout(Duration::from_secs(2), async {
        while api.calls.lock().await.len() < 3 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("refreshes");
    holder.stop();
}

#[tokio::test]
async fn external_locale_change_reaches_sheet() {
    let (holder, locale) = holder("en");
    let (tx, rx) = mpsc::channel::<SourcesResult>(4);
    holder.start(ReceiverStream::new(rx));
    tx.send(Ok(catalog())).await.unwrap();
    wait_for(|| holder.editor().source_options.len() == 3).await;

    locale.set_language_code("fr");

    wait_for(|| holder.editor().language == "French").await;
    assert_eq!(holder.editor().source_options, vec!["All", "Le Monde"]);
}

#[tokio::test]
async fn locale_is_followed_after_finite_stream_ends() {
    let (holder, locale) = holder("en");
    let (tx, rx) = mpsc::channel::<SourcesResult>(4);
    holder.start(ReceiverStream::new(rx));
    tx.send(Ok(catalog())).await.unwrap();
    drop(tx);
    wait_for(|| holder.editor().source_options.len() == 3).await;

    locale.set_language_code("fr");
    wait_for(|| holder.editor().language == "French").await;
}

#[tokio::test]
async fn date_defaults_roll_over_at_midnight() {
    let day = Arc::new(parking_lot::Mutex::new(today()));
    let clock_day = Arc::clone(&day);
    let holder = ArticleFilterStateHolder::with_clock(
        LocaleStore::new("en"),
        Arc::new(move || *clock_day.lock()),
    );
    assert_eq!(holder.filter(), ArticleFilter::new("en", today()));

    let tomorrow = date(2024, 7, 21);
    *day.lock() = tomorrow;

    assert_eq!(holder.today(), tomorrow);
    assert_eq!(holder.filter(), ArticleFilter::new("en", tomorrow));
    assert!(!holder.editor().is_set(tomorrow));

    holder.set_to_date(tomorrow);
    assert_eq!(holder.editor().to_newest_date, tomorrow);
}
