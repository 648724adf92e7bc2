//! Selection and fetch state for the search page.
//!
//! `SearchState` is the single owner of everything the page shows. Components
//! read it and call the named transitions; nothing else writes to it.
//!
//! A search runs in two halves: [`SearchState::begin_search`] hands out a
//! [`SearchTicket`] and flips the state into loading, the caller performs the
//! request, then [`SearchState::complete`] applies the outcome. Tickets carry a
//! generation number so an outcome that is no longer the latest is dropped.

use crate::api::{SearchError, SearchQuery, Track};
use crate::catalog::{genres_for, Genre, Language};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// What the results area renders. Variants are checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsView<'a> {
    Loading,
    Error(&'a str),
    Songs(&'a [Track]),
    NoResults,
    Initial,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: SearchQuery,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    language: Language,
    genres: Vec<Genre>,
    selected_genre: String,
    songs: Vec<Track>,
    is_loading: bool,
    error: Option<String>,
    has_searched: bool,
    #[serde(default)]
    generation: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl SearchState {
    pub fn new(language: Language) -> Self {
        let genres = genres_for(language);
        let selected_genre = first_slug(&genres);
        Self {
            language,
            genres,
            selected_genre,
            songs: Vec::new(),
            is_loading: false,
            error: None,
            has_searched: false,
            generation: 0,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn selected_genre(&self) -> &str {
        &self.selected_genre
    }

    pub fn songs(&self) -> &[Track] {
        &self.songs
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn status(&self) -> SearchStatus {
        if self.is_loading() {
            SearchStatus::Loading
        } else if self.error().is_some() {
            SearchStatus::Error
        } else if self.has_searched() {
            SearchStatus::Success
        } else {
            SearchStatus::Idle
        }
    }

    pub fn can_search(&self) -> bool {
        !self.is_loading && !self.selected_genre.is_empty()
    }

    /// Switches catalogs and selects the first genre of the new one.
    ///
    /// Leaves the fetch state alone. Returns `false` if `language` is
    /// already active.
    pub fn set_language(&mut self, language: Language) -> bool {
        if self.language == language {
            return false;
        }
        self.language = language;
        self.genres = genres_for(language);
        self.selected_genre = first_slug(&self.genres);
        info!(
            language = language.as_str(),
            genre = %self.selected_genre,
            "language switched"
        );
        true
    }

    /// Selects a genre by slug. Values outside the current catalog are
    /// rejected and leave the selection unchanged.
    pub fn set_genre(&mut self, slug: &str) -> bool {
        let slug = slug.to_lowercase();
        if !self.genres.iter().any(|genre| genre.slug == slug) {
            debug!(%slug, language = self.language.as_str(), "ignoring unknown genre");
            return false;
        }
        self.selected_genre = slug;
        true
    }

    /// Enters the loading state and returns the request to perform.
    ///
    /// Returns `None` while a search is already loading.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if !self.can_search() {
            return None;
        }

        self.is_loading = true;
        self.error = None;
        // Earlier results stay in place until the new outcome replaces them.
        if !self.has_searched {
            self.songs.clear();
        }
        self.generation = self.generation.wrapping_add(1);

        let query = SearchQuery::new(self.selected_genre.clone(), self.language);
        info!(
            genre = %query.genre,
            language = query.language.as_str(),
            generation = self.generation,
            "search issued"
        );
        Some(SearchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Same request as [`begin_search`](Self::begin_search), offered once
    /// results are on screen.
    pub fn refresh(&mut self) -> Option<SearchTicket> {
        self.begin_search()
    }

    /// Applies the outcome of `ticket`'s request. Returns `false` and changes
    /// nothing if a newer search has been issued since.
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<Track>, SearchError>,
    ) -> bool {
        if ticket.generation != self.generation || !self.is_loading {
            debug!(
                generation = ticket.generation,
                current = self.generation,
                "discarding stale search result"
            );
            return false;
        }

        self.is_loading = false;
        self.has_searched = true;
        match outcome {
            Ok(tracks) => {
                info!(count = tracks.len(), "search completed");
                self.songs = tracks;
            }
            Err(err) => {
                error!(error = %err, "fetch error");
                self.error = Some(err.user_message());
            }
        }
        true
    }

    pub fn results_view(&self) -> ResultsView<'_> {
        match self.status() {
            SearchStatus::Loading => ResultsView::Loading,
            SearchStatus::Error => ResultsView::Error(self.error().unwrap_or_default()),
            SearchStatus::Success if self.songs().is_empty() => ResultsView::NoResults,
            SearchStatus::Success => ResultsView::Songs(self.songs()),
            SearchStatus::Idle => ResultsView::Initial,
        }
    }
}

fn first_slug(genres: &[Genre]) -> String {
    genres
        .first()
        .map(|genre| genre.slug.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, name: &str) -> Track {
        Track {
            id: id.to_string(),
            name: name.to_string(),
            artist: "B".to_string(),
            album: "C".to_string(),
            image: None,
            spotify_url: "http://x".to_string(),
        }
    }

    fn server_error() -> SearchError {
        SearchError::Http {
            status: 500,
            message: Some("boom".to_string()),
        }
    }

    #[test]
    fn initial_state_is_idle_with_first_english_genre() {
        let state = SearchState::default();
        assert_eq!(state.language(), Language::English);
        assert_eq!(state.genres(), genres_for(Language::English).as_slice());
        assert_eq!(state.selected_genre(), "acoustic");
        assert_eq!(state.status(), SearchStatus::Idle);
        assert_eq!(state.results_view(), ResultsView::Initial);
        assert!(!state.has_searched());
    }

    #[test]
    fn switching_language_resets_selection() {
        let mut state = SearchState::default();
        assert!(state.set_genre("rock"));

        assert!(state.set_language(Language::Hindi));
        assert_eq!(state.genres(), genres_for(Language::Hindi).as_slice());
        assert_eq!(state.selected_genre(), "bollywood");

        assert!(state.set_genre("punjabi"));
        assert!(state.set_language(Language::English));
        assert_eq!(state.selected_genre(), "acoustic");
    }

    #[test]
    fn selecting_the_active_language_is_a_no_op() {
        let mut state = SearchState::default();
        state.set_genre("metal");
        assert!(!state.set_language(Language::English));
        assert_eq!(state.selected_genre(), "metal");
    }

    #[test]
    fn genre_outside_catalog_is_rejected() {
        let mut state = SearchState::default();
        assert!(!state.set_genre("ghazal"));
        assert_eq!(state.selected_genre(), "acoustic");
        assert!(state.set_genre("Hip-Hop"));
        assert_eq!(state.selected_genre(), "hip-hop");
    }

    #[test]
    fn search_builds_query_from_selection() {
        let mut state = SearchState::default();
        state.set_language(Language::Hindi);
        state.set_genre("desi-pop");

        let ticket = state.begin_search().unwrap();
        assert_eq!(
            ticket.query,
            SearchQuery {
                genre: "desi-pop".to_string(),
                language: Language::Hindi,
            }
        );
        assert_eq!(state.status(), SearchStatus::Loading);
        assert_eq!(state.results_view(), ResultsView::Loading);
    }

    #[test]
    fn search_while_loading_has_no_effect() {
        let mut state = SearchState::default();
        let first = state.begin_search().unwrap();
        let snapshot = state.clone();

        assert!(state.begin_search().is_none());
        assert!(state.refresh().is_none());
        assert_eq!(state, snapshot);
        assert!(state.complete(&first, Ok(vec![track("1", "A")])));
    }

    #[test]
    fn success_populates_songs() {
        let mut state = SearchState::default();
        let ticket = state.begin_search().unwrap();
        assert!(state.complete(&ticket, Ok(vec![track("1", "A")])));

        assert_eq!(state.status(), SearchStatus::Success);
        assert!(state.has_searched());
        match state.results_view() {
            ResultsView::Songs(songs) => {
                assert_eq!(songs.len(), 1);
                assert_eq!(songs[0].name, "A");
                assert_eq!(songs[0].artist, "B");
                assert_eq!(songs[0].spotify_url, "http://x");
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn empty_result_shows_no_results_not_initial() {
        let mut state = SearchState::default();
        let ticket = state.begin_search().unwrap();
        state.complete(&ticket, Ok(Vec::new()));
        assert_eq!(state.results_view(), ResultsView::NoResults);
    }

    #[test]
    fn failure_sets_error_and_marks_searched() {
        let mut state = SearchState::default();
        let ticket = state.begin_search().unwrap();
        state.complete(&ticket, Err(server_error()));

        assert_eq!(state.status(), SearchStatus::Error);
        assert!(state.has_searched());
        match state.results_view() {
            ResultsView::Error(text) => assert!(text.contains("boom")),
            other => panic!("unexpected view: {other:?}"),
        }
        assert!(state.can_search());
    }

    #[test]
    fn refresh_keeps_previous_results_until_replaced() {
        let mut state = SearchState::default();
        let first = state.begin_search().unwrap();
        state.complete(&first, Ok(vec![track("1", "A")]));

        let second = state.refresh().unwrap();
        assert_eq!(state.songs().len(), 1);
        assert_eq!(state.error(), None);

        state.complete(&second, Ok(vec![track("2", "B2"), track("3", "C3")]));
        let names: Vec<&str> = state.songs().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["B2", "C3"]);
    }

    #[test]
    fn new_search_clears_previous_error() {
        let mut state = SearchState::default();
        let first = state.begin_search().unwrap();
        state.complete(&first, Err(server_error()));

        let second = state.begin_search().unwrap();
        assert_eq!(state.error(), None);
        state.complete(&second, Ok(Vec::new()));
        assert_eq!(state.results_view(), ResultsView::NoResults);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = SearchState::default();
        let first = state.begin_search().unwrap();
        state.complete(&first, Ok(vec![track("1", "A")]));
        let second = state.begin_search().unwrap();

        assert!(!state.complete(&first, Err(server_error())));
        assert!(state.is_loading());
        assert_eq!(state.error(), None);

        assert!(state.complete(&second, Ok(vec![track("2", "B")])));
        assert!(!state.complete(&second, Ok(Vec::new())));
        assert_eq!(state.songs().len(), 1);
    }

    #[test]
    fn has_searched_survives_language_switches() {
        let mut state = SearchState::default();
        let ticket = state.begin_search().unwrap();
        state.complete(&ticket, Err(server_error()));

        state.set_language(Language::Hindi);
        state.set_language(Language::English);
        assert!(state.has_searched());
        assert_eq!(state.status(), SearchStatus::Error);
    }

    #[test]
    fn language_switch_does_not_disturb_loading() {
        let mut state = SearchState::default();
        let ticket = state.begin_search().unwrap();
        state.set_language(Language::Hindi);

        assert_eq!(state.status(), SearchStatus::Loading);
        assert_eq!(ticket.query.language, Language::English);
        assert!(state.complete(&ticket, Ok(vec![track("1", "A")])));
        assert_eq!(state.selected_genre(), "bollywood");
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut state = SearchState::default();
        let ticket = state.begin_search().unwrap();
        state.complete(&ticket, Ok(vec![track("1", "A")]));

        let json = serde_json::to_string(&state).unwrap();
        let restored: SearchState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
