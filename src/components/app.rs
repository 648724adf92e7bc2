use crate::api::BackendClient;
use crate::catalog::Language;
use crate::components::{
    ControlPanel, InitialStateIcon, Loader, MessageDisplay, MessageKind, RefreshButton, SongCard,
};
use crate::config::AppConfig;
use crate::controller::{ResultsView, SearchState, SearchTicket};
use dioxus::prelude::*;
use tracing::debug;

const NO_RESULTS_MESSAGE: &str = "No songs found. Try another genre!";

#[component]
pub fn PageHeader() -> Element {
    rsx! {
        h1 { class: "text-3xl font-bold text-white", "Muziverse" }
        p { class: "text-gray-400 text-sm", "Your personalized genre picks" }
    }
}

/// Runs the request for `ticket` and feeds the outcome back into `state`.
fn dispatch(mut state: Signal<SearchState>, config: Signal<AppConfig>, ticket: Option<SearchTicket>) {
    let Some(ticket) = ticket else {
        debug!("search already in flight");
        return;
    };
    let client = BackendClient::new(config());

    spawn(async move {
        let outcome = client.search(&ticket.query).await;
        state.write().complete(&ticket, outcome);
    });
}

/// The area right of the control panel: exactly one of loader, error,
/// song grid, empty message, or the first-visit placeholder.
#[component]
pub fn ResultsPanel(state: SearchState, on_refresh: EventHandler<()>) -> Element {
    let is_loading = state.is_loading();

    match state.results_view() {
        ResultsView::Loading => rsx! {
            Loader {}
        },
        ResultsView::Error(message) => rsx! {
            MessageDisplay { message: message.to_string(), kind: MessageKind::Error }
        },
        ResultsView::Songs(songs) => rsx! {
            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
                for track in songs.iter() {
                    SongCard { key: "{track.id}", track: track.clone() }
                }
            }
            RefreshButton { is_loading, on_refresh }
        },
        ResultsView::NoResults => rsx! {
            div { class: "flex-grow flex items-center justify-center",
                MessageDisplay { message: NO_RESULTS_MESSAGE.to_string() }
            }
        },
        ResultsView::Initial => rsx! {
            div { class: "flex-grow flex items-center justify-center",
                InitialStateIcon {}
            }
        },
    }
}

#[component]
pub fn SearchPage() -> Element {
    let config = use_context::<Signal<AppConfig>>();
    let mut state = use_signal(SearchState::default);

    let on_language = move |language: Language| {
        state.write().set_language(language);
    };

    let on_genre = move |slug: String| {
        state.write().set_genre(&slug);
    };

    let on_search = move |_: ()| {
        let ticket = state.write().begin_search();
        dispatch(state, config, ticket);
    };

    let on_refresh = move |_: ()| {
        let ticket = state.write().refresh();
        dispatch(state, config, ticket);
    };

    let snapshot = state();

    rsx! {
        div { class: "min-h-screen bg-black text-gray-200 font-sans flex flex-col md:flex-row gap-8 p-4 sm:p-6 md:p-8",
            ControlPanel {
                language: snapshot.language(),
                genres: snapshot.genres().to_vec(),
                selected_genre: snapshot.selected_genre().to_string(),
                is_loading: snapshot.is_loading(),
                on_language,
                on_genre,
                on_search,
            }

            main { class: "flex-grow flex flex-col",
                header { class: "text-left mb-6 hidden md:block",
                    PageHeader {}
                }

                ResultsPanel { state: snapshot.clone(), on_refresh }
            }
        }
    }
}
