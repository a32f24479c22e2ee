// SPDX-License-Identifier: MPL-2.0
//! Catalogue query coordinator.
//!
//! Owns the filter state and the displayed catalogue, and turns filter
//! changes into tagged fetch requests. Requests are executed elsewhere; their
//! responses come back through [`CatalogueCoordinator::apply_bootstrap`] and
//! [`CatalogueCoordinator::apply_catalogue`], which drop anything that was
//! superseded while in flight.

use super::request::{BootstrapRequest, BootstrapResponse, CatalogueRequest, CatalogueResponse};
use super::sequence::{RequestId, RequestSequence};
use crate::domain::catalogue::{CatalogueResult, FilterState, GenreSelection, Movie};
use crate::domain::error::LoadError;

/// Progress of the initial load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BootstrapStatus {
    /// Bootstrap has not been issued yet.
    #[default]
    Pending,
    /// The three initial fetches are in flight.
    Loading,
    /// Catalogue, featured and genres loaded.
    Ready,
    /// At least one initial fetch failed. Blocking until retried.
    Failed(LoadError),
}

/// What happened to a response handed to the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The response replaced visible state.
    Applied,
    /// The response was current but carried a failure, now recorded as an
    /// error condition.
    Failed,
    /// The response was superseded and ignored.
    Discarded,
}

/// Reconciles filter intent with out-of-order catalogue responses.
#[derive(Debug, Default)]
pub struct CatalogueCoordinator {
    filter: FilterState,
    sequence: RequestSequence,
    latest_bootstrap: Option<RequestId>,
    bootstrap: BootstrapStatus,
    catalogue: CatalogueResult,
    featured: Vec<Movie>,
    genres: Vec<String>,
    query_error: Option<LoadError>,
}

impl CatalogueCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Issues the initial (or retried) parallel load.
    pub fn begin_bootstrap(&mut self) -> BootstrapRequest {
        let id = self.sequence.issue();
        self.latest_bootstrap = Some(id);
        self.bootstrap = BootstrapStatus::Loading;
        log::debug!("issuing bootstrap {id}");
        BootstrapRequest::new(id)
    }

    /// Changes the genre constraint and re-fetches the catalogue.
    pub fn set_genre(&mut self, genre: GenreSelection) -> CatalogueRequest {
        self.filter.genre = genre;
        self.issue_query()
    }

    /// Changes the search text and re-fetches the catalogue.
    pub fn set_search(&mut self, text: impl Into<String>) -> CatalogueRequest {
        self.filter.search = text.into();
        self.issue_query()
    }

    /// Re-fetches the catalogue with the current filter.
    pub fn submit_search(&mut self) -> CatalogueRequest {
        self.issue_query()
    }

    fn issue_query(&mut self) -> CatalogueRequest {
        let id = self.sequence.issue();
        let query = self.filter.to_query();
        log::debug!("issuing catalogue request {id} for {query:?}");
        CatalogueRequest::new(id, query)
    }

    // =========================================================================
    // Responses
    // =========================================================================

    /// Applies the result of a bootstrap.
    ///
    /// A response from an older bootstrap than the latest one is ignored.
    /// On success, featured and genres always apply, while the unfiltered
    /// catalogue only applies if no filter fetch was issued in the meantime.
    /// On failure, the catalogue is left empty and the failure blocks.
    pub fn apply_bootstrap(&mut self, response: BootstrapResponse) -> ApplyOutcome {
        if self.latest_bootstrap != Some(response.id) {
            log::debug!("discarding superseded bootstrap {}", response.id);
            return ApplyOutcome::Discarded;
        }
        self.latest_bootstrap = None;

        match response.outcome {
            Ok(data) => {
                log::info!(
                    "bootstrap loaded {} movies, {} featured, {} genres",
                    data.catalogue.movies.len(),
                    data.featured.len(),
                    data.genres.len()
                );
                self.featured = data.featured;
                self.genres = data.genres;
                self.bootstrap = BootstrapStatus::Ready;
                if self.sequence.settle(response.id) {
                    self.catalogue = data.catalogue.into();
                    self.query_error = None;
                } else {
                    log::debug!(
                        "bootstrap catalogue {} superseded by a filter request",
                        response.id
                    );
                }
                ApplyOutcome::Applied
            }
            Err(error) => {
                log::warn!("bootstrap failed: {error}");
                self.sequence.settle(response.id);
                self.catalogue = CatalogueResult::empty();
                self.featured.clear();
                self.genres.clear();
                self.bootstrap = BootstrapStatus::Failed(LoadError::Bootstrap(error));
                ApplyOutcome::Failed
            }
        }
    }

    /// Applies the result of a filter-driven fetch.
    ///
    /// Only the most recently issued request may change visible state, and
    /// nothing does while the bootstrap has failed.
    pub fn apply_catalogue(&mut self, response: CatalogueResponse) -> ApplyOutcome {
        if !self.sequence.settle(response.id) {
            log::debug!(
                "discarding stale catalogue response {} (current {:?})",
                response.id,
                self.sequence.current()
            );
            return ApplyOutcome::Discarded;
        }
        if matches!(self.bootstrap, BootstrapStatus::Failed(_)) {
            log::debug!(
                "discarding catalogue response {} after failed bootstrap",
                response.id
            );
            return ApplyOutcome::Discarded;
        }

        match response.outcome {
            Ok(page) => {
                self.catalogue = page.into();
                self.query_error = None;
                ApplyOutcome::Applied
            }
            Err(error) => {
                log::warn!("catalogue request {} failed: {error}", response.id);
                self.query_error = Some(LoadError::Query(error));
                ApplyOutcome::Failed
            }
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The displayed catalogue.
    #[must_use]
    pub fn catalogue(&self) -> &CatalogueResult {
        &self.catalogue
    }

    #[must_use]
    pub fn featured(&self) -> &[Movie] {
        &self.featured
    }

    /// The featured movie shown in the hero banner.
    #[must_use]
    pub fn featured_hero(&self) -> Option<&Movie> {
        self.featured.first()
    }

    #[must_use]
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    #[must_use]
    pub fn bootstrap_status(&self) -> &BootstrapStatus {
        &self.bootstrap
    }

    /// The recoverable error from the latest filter-driven fetch, if it failed.
    #[must_use]
    pub fn query_error(&self) -> Option<&LoadError> {
        self.query_error.as_ref()
    }

    /// The error to show, blocking bootstrap failures first.
    #[must_use]
    pub fn error(&self) -> Option<&LoadError> {
        match &self.bootstrap {
            BootstrapStatus::Failed(error) => Some(error),
            _ => self.query_error.as_ref(),
        }
    }

    /// True while the most recently issued request is unresolved.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.sequence.in_flight()
    }

    #[must_use]
    pub fn is_bootstrapping(&self) -> bool {
        self.bootstrap == BootstrapStatus::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::query::request::BootstrapData;
    use crate::domain::catalogue::movie::sample_movie;
    use crate::domain::catalogue::{CataloguePage, CatalogueQuery};
    use crate::domain::error::CatalogueError;

    fn page(ids: &[&str]) -> CataloguePage {
        CataloguePage::new(
            ids.iter()
                .map(|id| sample_movie(id, &id.to_uppercase(), "Drama"))
                .collect(),
        )
    }

    fn ids(coordinator: &CatalogueCoordinator) -> Vec<&str> {
        coordinator
            .catalogue()
            .movies()
            .iter()
            .map(|movie| movie.id.as_str())
            .collect()
    }

    fn ok(request: &CatalogueRequest, ids: &[&str]) -> CatalogueResponse {
        CatalogueResponse {
            id: request.id(),
            query: request.query().clone(),
            outcome: Ok(page(ids)),
        }
    }

    fn failed(request: &CatalogueRequest) -> CatalogueResponse {
        CatalogueResponse {
            id: request.id(),
            query: request.query().clone(),
            outcome: Err(CatalogueError::Transport("connection reset".into())),
        }
    }

    fn bootstrapped(request: BootstrapRequest, ids: &[&str]) -> BootstrapResponse {
        BootstrapResponse {
            id: request.id(),
            outcome: Ok(BootstrapData {
                catalogue: page(ids),
                featured: vec![sample_movie("f1", "Featured", "Action")],
                genres: vec!["Action".into(), "Drama".into()],
            }),
        }
    }

    fn ready(ids: &[&str]) -> CatalogueCoordinator {
        let mut coordinator = CatalogueCoordinator::new();
        let request = coordinator.begin_bootstrap();
        coordinator.apply_bootstrap(bootstrapped(request, ids));
        coordinator
    }

    #[test]
    fn new_coordinator_is_pending_and_empty() {
        let coordinator = CatalogueCoordinator::new();
        assert_eq!(coordinator.bootstrap_status(), &BootstrapStatus::Pending);
        assert!(coordinator.catalogue().is_empty());
        assert!(!coordinator.is_loading());
        assert!(coordinator.error().is_none());
    }

    #[test]
    fn bootstrap_success_fills_everything() {
        let mut coordinator = CatalogueCoordinator::new();
        let request = coordinator.begin_bootstrap();
        assert!(coordinator.is_bootstrapping());
        assert!(coordinator.is_loading());

        let outcome = coordinator.apply_bootstrap(bootstrapped(request, &["a", "b"]));

        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(coordinator.bootstrap_status(), &BootstrapStatus::Ready);
        assert_eq!(ids(&coordinator), vec!["a", "b"]);
        assert_eq!(coordinator.genres(), ["Action", "Drama"]);
        assert_eq!(
            coordinator.featured_hero().map(|m| m.id.as_str()),
            Some("f1")
        );
        assert!(!coordinator.is_loading());
    }

    #[test]
    fn bootstrap_failure_leaves_catalogue_empty_and_blocks() {
        let mut coordinator = CatalogueCoordinator::new();
        let request = coordinator.begin_bootstrap();
        let error = CatalogueError::Status {
            status: 500,
            url: "http://localhost/catalogue/featured".into(),
        };

        let outcome = coordinator.apply_bootstrap(BootstrapResponse {
            id: request.id(),
            outcome: Err(error.clone()),
        });

        assert_eq!(outcome, ApplyOutcome::Failed);
        assert!(coordinator.catalogue().is_empty());
        assert!(coordinator.featured().is_empty());
        assert_eq!(
            coordinator.bootstrap_status(),
            &BootstrapStatus::Failed(LoadError::Bootstrap(error))
        );
        assert!(coordinator.error().is_some_and(LoadError::is_blocking));
        assert!(!coordinator.is_loading());
    }

    #[test]
    fn failed_bootstrap_ends_empty_whichever_response_lands_first() {
        let outage = || CatalogueError::Transport("connection refused".into());

        let mut filter_first = CatalogueCoordinator::new();
        let bootstrap = filter_first.begin_bootstrap();
        let filtered = filter_first.set_genre(GenreSelection::Genre("Drama".into()));
        filter_first.apply_catalogue(ok(&filtered, &["drama"]));
        filter_first.apply_bootstrap(BootstrapResponse {
            id: bootstrap.id(),
            outcome: Err(outage()),
        });

        let mut bootstrap_first = CatalogueCoordinator::new();
        let bootstrap = bootstrap_first.begin_bootstrap();
        let filtered = bootstrap_first.set_genre(GenreSelection::Genre("Drama".into()));
        bootstrap_first.apply_bootstrap(BootstrapResponse {
            id: bootstrap.id(),
            outcome: Err(outage()),
        });
        assert_eq!(
            bootstrap_first.apply_catalogue(ok(&filtered, &["drama"])),
            ApplyOutcome::Discarded
        );

        for coordinator in [&filter_first, &bootstrap_first] {
            assert!(coordinator.catalogue().is_empty());
            assert!(coordinator.genres().is_empty());
            assert!(coordinator.featured().is_empty());
            assert!(matches!(
                coordinator.bootstrap_status(),
                BootstrapStatus::Failed(_)
            ));
            assert!(!coordinator.is_loading());
        }
    }

    #[test]
    fn retry_after_failed_bootstrap_repopulates() {
        let mut coordinator = CatalogueCoordinator::new();
        let failing = coordinator.begin_bootstrap();
        coordinator.apply_bootstrap(BootstrapResponse {
            id: failing.id(),
            outcome: Err(CatalogueError::Transport("timed out".into())),
        });

        let retry = coordinator.begin_bootstrap();
        assert_eq!(
            coordinator.apply_bootstrap(bootstrapped(retry, &["a"])),
            ApplyOutcome::Applied
        );
        let request = coordinator.set_search("a");
        assert_eq!(
            coordinator.apply_catalogue(ok(&request, &["a"])),
            ApplyOutcome::Applied
        );
        assert_eq!(ids(&coordinator), vec!["a"]);
    }

    #[test]
    fn retry_bootstrap_discards_the_earlier_attempt() {
        let mut coordinator = CatalogueCoordinator::new();
        let first = coordinator.begin_bootstrap();
        let second = coordinator.begin_bootstrap();

        assert_eq!(
            coordinator.apply_bootstrap(bootstrapped(first, &["old"])),
            ApplyOutcome::Discarded
        );
        assert_eq!(
            coordinator.apply_bootstrap(bootstrapped(second, &["new"])),
            ApplyOutcome::Applied
        );
        assert_eq!(ids(&coordinator), vec!["new"]);
    }

    #[test]
    fn filter_issued_during_bootstrap_supersedes_its_catalogue() {
        let mut coordinator = CatalogueCoordinator::new();
        let bootstrap = coordinator.begin_bootstrap();
        let filtered = coordinator.set_genre(GenreSelection::Genre("Drama".into()));

        coordinator.apply_catalogue(ok(&filtered, &["drama"]));
        coordinator.apply_bootstrap(bootstrapped(bootstrap, &["everything"]));

        assert_eq!(ids(&coordinator), vec!["drama"]);
        assert_eq!(coordinator.bootstrap_status(), &BootstrapStatus::Ready);
        assert_eq!(coordinator.genres().len(), 2);
    }

    #[test]
    fn later_request_wins_when_earlier_resolves_last() {
        let mut coordinator = ready(&["all"]);
        let m = coordinator.set_search("bat");
        let n = coordinator.set_search("batman");

        assert_eq!(coordinator.apply_catalogue(ok(&n, &["n"])), ApplyOutcome::Applied);
        assert_eq!(
            coordinator.apply_catalogue(ok(&m, &["m"])),
            ApplyOutcome::Discarded
        );
        assert_eq!(ids(&coordinator), vec!["n"]);
        assert!(!coordinator.is_loading());
    }

    #[test]
    fn stale_response_arriving_first_is_discarded() {
        let mut coordinator = ready(&["all"]);
        let m = coordinator.set_genre(GenreSelection::Genre("Action".into()));
        let n = coordinator.set_genre(GenreSelection::Genre("Drama".into()));

        assert_eq!(
            coordinator.apply_catalogue(ok(&m, &["m"])),
            ApplyOutcome::Discarded
        );
        assert_eq!(ids(&coordinator), vec!["all"]);
        assert!(coordinator.is_loading());

        coordinator.apply_catalogue(ok(&n, &["n"]));
        assert_eq!(ids(&coordinator), vec!["n"]);
    }

    #[test]
    fn stale_failure_reports_nothing() {
        let mut coordinator = ready(&["all"]);
        let m = coordinator.set_search("x");
        let n = coordinator.set_search("xy");

        coordinator.apply_catalogue(ok(&n, &["n"]));
        assert_eq!(coordinator.apply_catalogue(failed(&m)), ApplyOutcome::Discarded);
        assert!(coordinator.query_error().is_none());
    }

    #[test]
    fn query_failure_keeps_prior_result() {
        let mut coordinator = ready(&["a", "b"]);
        let request = coordinator.set_genre(GenreSelection::Genre("Horror".into()));

        assert_eq!(coordinator.apply_catalogue(failed(&request)), ApplyOutcome::Failed);
        assert_eq!(ids(&coordinator), vec!["a", "b"]);
        let error = coordinator.query_error().expect("query error recorded");
        assert!(!error.is_blocking());
        assert!(!coordinator.is_loading());
    }

    #[test]
    fn successful_fetch_clears_query_error() {
        let mut coordinator = ready(&["a"]);
        let failing = coordinator.submit_search();
        coordinator.apply_catalogue(failed(&failing));

        let retry = coordinator.submit_search();
        coordinator.apply_catalogue(ok(&retry, &["b"]));

        assert!(coordinator.query_error().is_none());
        assert_eq!(ids(&coordinator), vec!["b"]);
    }

    #[test]
    fn empty_match_is_not_an_error() {
        let mut coordinator = ready(&["a"]);
        let request = coordinator.set_search("zzz");
        coordinator.apply_catalogue(ok(&request, &[]));

        assert!(coordinator.catalogue().is_empty());
        assert!(coordinator.error().is_none());
    }

    #[test]
    fn clearing_search_drops_the_constraint() {
        let mut coordinator = ready(&["a"]);
        let batman = coordinator.set_search("batman");
        assert_eq!(batman.query().search(), Some("batman"));

        let cleared = coordinator.set_search("");
        assert_eq!(cleared.query(), &CatalogueQuery::unconstrained());
    }

    #[test]
    fn clearing_search_keeps_active_genre() {
        let mut coordinator = ready(&["a"]);
        coordinator.set_genre(GenreSelection::Genre("Sci-Fi".into()));
        coordinator.set_search("matrix");

        let request = coordinator.set_search("   ");
        assert_eq!(request.query().genre(), Some("Sci-Fi"));
        assert_eq!(request.query().search(), None);
    }

    #[test]
    fn genre_and_search_combine() {
        let mut coordinator = ready(&["a"]);
        coordinator.set_genre(GenreSelection::Genre("Action".into()));
        let request = coordinator.set_search("dark");

        assert_eq!(request.query(), &CatalogueQuery::new(Some("Action"), Some("dark")));
    }

    #[test]
    fn submit_search_uses_current_filter() {
        let mut coordinator = ready(&["a"]);
        let typed = coordinator.set_search("inception");
        let submitted = coordinator.submit_search();

        assert!(submitted.id() > typed.id());
        assert_eq!(submitted.query(), typed.query());
    }

    #[test]
    fn query_error_yields_to_blocking_error() {
        let mut coordinator = CatalogueCoordinator::new();
        let bootstrap = coordinator.begin_bootstrap();
        coordinator.apply_bootstrap(BootstrapResponse {
            id: bootstrap.id(),
            outcome: Err(CatalogueError::Transport("refused".into())),
        });
        let query = coordinator.submit_search();
        coordinator.apply_catalogue(failed(&query));

        assert!(coordinator.error().is_some_and(LoadError::is_blocking));
    }
}
