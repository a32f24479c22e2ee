// SPDX-License-Identifier: MPL-2.0
mod common;

use common::{headless_factory, titles, ScriptedCatalogue};
use cine_lens::app::{self, App, Message, Runtime};
use cine_lens::application::playback::PlaybackSettings;
use cine_lens::application::query::{ApplyOutcome, BootstrapStatus, CatalogueCoordinator};
use cine_lens::domain::catalogue::GenreSelection;
use cine_lens::domain::error::LoadError;
use cine_lens::infrastructure::CommandLog;
use futures_util::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use std::time::Duration;

async fn bootstrapped(service: &ScriptedCatalogue) -> CatalogueCoordinator {
    let mut coordinator = CatalogueCoordinator::new();
    let response = coordinator.begin_bootstrap().execute(service).await;
    assert_eq!(coordinator.apply_bootstrap(response), ApplyOutcome::Applied);
    coordinator
}

fn runtime_for(service: ScriptedCatalogue) -> (Runtime, app::Command) {
    let (sender, inbox) = app::channel();
    let factory = headless_factory(sender, CommandLog::new(), false);
    let (app, bootstrap) = App::new(PlaybackSettings::default(), factory);
    (Runtime::new(app, Arc::new(service), inbox), bootstrap)
}

#[tokio::test(start_paused = true)]
async fn earlier_request_resolving_later_is_discarded() {
    let service = ScriptedCatalogue::sample()
        .with_genre_delay("Action", Duration::from_millis(500))
        .with_genre_delay("Drama", Duration::from_millis(20));
    let mut coordinator = bootstrapped(&service).await;

    let slow = coordinator.set_genre(GenreSelection::from_label("Action"));
    let fast = coordinator.set_genre(GenreSelection::from_label("Drama"));

    let mut pending: FuturesUnordered<_> = [slow.execute(&service), fast.execute(&service)]
        .into_iter()
        .collect();
    let mut outcomes = Vec::new();
    while let Some(response) = pending.next().await {
        outcomes.push(coordinator.apply_catalogue(response));
    }

    assert_eq!(outcomes, vec![ApplyOutcome::Applied, ApplyOutcome::Discarded]);
    assert_eq!(
        titles(coordinator.catalogue().movies()),
        vec!["Forrest Gump"]
    );
    assert!(!coordinator.is_loading());
}

#[tokio::test(start_paused = true)]
async fn latest_request_wins_when_responses_arrive_in_order() {
    let service = ScriptedCatalogue::sample()
        .with_genre_delay("Action", Duration::from_millis(10))
        .with_genre_delay("Sci-Fi", Duration::from_millis(400));
    let mut coordinator = bootstrapped(&service).await;

    let first = coordinator.set_genre(GenreSelection::from_label("Action"));
    let second = coordinator.set_genre(GenreSelection::from_label("Sci-Fi"));

    let mut pending: FuturesUnordered<_> = [first.execute(&service), second.execute(&service)]
        .into_iter()
        .collect();
    let mut outcomes = Vec::new();
    while let Some(response) = pending.next().await {
        outcomes.push(coordinator.apply_catalogue(response));
    }

    assert_eq!(outcomes, vec![ApplyOutcome::Discarded, ApplyOutcome::Applied]);
    assert_eq!(
        titles(coordinator.catalogue().movies()),
        vec!["Inception", "Interstellar"]
    );
}

#[tokio::test(start_paused = true)]
async fn featured_failure_blocks_with_empty_catalogue() {
    let service = ScriptedCatalogue::sample().failing_featured();
    let mut coordinator = CatalogueCoordinator::new();

    let response = coordinator.begin_bootstrap().execute(&service).await;
    assert_eq!(coordinator.apply_bootstrap(response), ApplyOutcome::Failed);

    assert!(matches!(
        coordinator.bootstrap_status(),
        BootstrapStatus::Failed(LoadError::Bootstrap(_))
    ));
    assert!(coordinator.catalogue().is_empty());
    assert!(coordinator.featured().is_empty());
    assert!(coordinator.genres().is_empty());
    assert!(coordinator.error().is_some_and(LoadError::is_blocking));
}

#[tokio::test(start_paused = true)]
async fn failed_filter_fetch_keeps_previous_catalogue() {
    let service = ScriptedCatalogue::sample().failing_genre("Crime");
    let mut coordinator = bootstrapped(&service).await;

    let response = coordinator
        .set_genre(GenreSelection::from_label("Crime"))
        .execute(&service)
        .await;
    assert_eq!(coordinator.apply_catalogue(response), ApplyOutcome::Failed);

    assert_eq!(coordinator.catalogue().count(), 6);
    let error = coordinator.error().expect("query error recorded");
    assert!(!error.is_blocking());
    assert_eq!(coordinator.bootstrap_status(), &BootstrapStatus::Ready);
}

#[tokio::test(start_paused = true)]
async fn clearing_search_requests_unconstrained_catalogue() {
    let service = ScriptedCatalogue::sample();
    let mut coordinator = bootstrapped(&service).await;

    let narrowed = coordinator.set_search("dark").execute(&service).await;
    coordinator.apply_catalogue(narrowed);
    assert_eq!(
        titles(coordinator.catalogue().movies()),
        vec!["The Dark Knight"]
    );

    let request = coordinator.set_search("");
    assert!(!request.query().is_constrained());
    let cleared = request.execute(&service).await;
    coordinator.apply_catalogue(cleared);
    assert_eq!(coordinator.catalogue().count(), 6);
}

#[tokio::test(start_paused = true)]
async fn runtime_shows_only_last_filter_after_burst() {
    let service = ScriptedCatalogue::sample()
        .with_base_delay(Duration::from_millis(50))
        .with_genre_delay("Action", Duration::from_millis(900))
        .with_genre_delay("Crime", Duration::from_millis(300));
    let (mut runtime, bootstrap) = runtime_for(service);
    runtime.dispatch(bootstrap);
    runtime.settle().await;

    runtime.send(Message::SetGenre(GenreSelection::from_label("Action")));
    runtime.send(Message::SetGenre(GenreSelection::from_label("Crime")));
    runtime.send(Message::SetGenre(GenreSelection::from_label("all")));
    assert_eq!(runtime.fetches_in_flight(), 3);
    runtime.settle().await;

    let catalogue = runtime.app().catalogue();
    assert_eq!(catalogue.catalogue().count(), 6);
    assert_eq!(catalogue.filter().genre, GenreSelection::All);
    assert!(!catalogue.is_loading());
}

#[tokio::test(start_paused = true)]
async fn filter_issued_during_bootstrap_wins_over_unfiltered_catalogue() {
    let service = ScriptedCatalogue::sample()
        .with_base_delay(Duration::from_millis(400))
        .with_genre_delay("Drama", Duration::from_millis(10));
    let (mut runtime, bootstrap) = runtime_for(service);
    runtime.dispatch(bootstrap);
    runtime.send(Message::SetGenre(GenreSelection::from_label("Drama")));
    runtime.settle().await;

    let catalogue = runtime.app().catalogue();
    assert_eq!(titles(catalogue.catalogue().movies()), vec!["Forrest Gump"]);
    assert_eq!(catalogue.genres().len(), 4);
    assert_eq!(
        catalogue.featured_hero().map(|m| m.title.as_str()),
        Some("The Dark Knight")
    );
    assert_eq!(catalogue.bootstrap_status(), &BootstrapStatus::Ready);
}

#[tokio::test(start_paused = true)]
async fn retry_after_failed_bootstrap_recovers() {
    let (mut runtime, bootstrap) = runtime_for(ScriptedCatalogue::sample().failing_featured());
    runtime.dispatch(bootstrap);
    runtime.settle().await;
    assert!(runtime.app().catalogue().error().is_some());

    // Same service, still failing: the retry fails again but is processed.
    runtime.send(Message::RetryBootstrap);
    assert!(runtime.app().catalogue().is_bootstrapping());
    runtime.settle().await;
    assert!(matches!(
        runtime.app().catalogue().bootstrap_status(),
        BootstrapStatus::Failed(_)
    ));
}
