use crate::catalog::{Genre, Language};
use crate::components::{Icon, PageHeader};
use dioxus::prelude::*;

#[component]
pub fn ControlPanel(
    language: Language,
    genres: Vec<Genre>,
    selected_genre: String,
    is_loading: bool,
    on_language: EventHandler<Language>,
    on_genre: EventHandler<String>,
    on_search: EventHandler<()>,
) -> Element {
    rsx! {
        aside { class: "w-full md:w-1/4 lg:w-1/5 bg-black/20 p-6 rounded-xl flex flex-col gap-8",
            div { class: "text-center md:hidden",
                PageHeader {}
            }

            div {
                h2 { class: "text-sm font-semibold text-gray-400 uppercase tracking-wider mb-3", "Language" }
                div { class: "bg-gray-800 rounded-full p-1 flex items-center border border-gray-700",
                    for lang in Language::ALL {
                        button {
                            key: "{lang.as_str()}",
                            class: if lang == language {
                                "lang-btn w-1/2 px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 bg-purple-600 text-white"
                            } else {
                                "lang-btn w-1/2 px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 text-gray-300 hover:bg-gray-700"
                            },
                            onclick: move |_| on_language.call(lang),
                            "{lang.label()}"
                        }
                    }
                }
            }

            div {
                h2 { class: "text-sm font-semibold text-gray-400 uppercase tracking-wider mb-3", "Genre" }
                select {
                    class: "w-full bg-gray-800 border border-gray-700 text-white text-md rounded-lg focus:ring-purple-500 focus:border-purple-500 block p-3 select-arrow",
                    value: "{selected_genre}",
                    onchange: move |e| on_genre.call(e.value()),
                    for genre in genres {
                        option {
                            key: "{genre.slug}",
                            value: "{genre.slug}",
                            selected: genre.slug == selected_genre,
                            "{genre.label}"
                        }
                    }
                }
            }

            button {
                class: "w-full bg-purple-600 hover:bg-purple-700 text-white font-bold py-3 px-6 rounded-lg transition-colors duration-300 flex items-center justify-center gap-2 disabled:bg-gray-500 disabled:cursor-not-allowed",
                disabled: is_loading,
                onclick: move |_| on_search.call(()),
                Icon { name: "search".to_string(), class: "w-4 h-4".to_string() }
                span { "Search" }
            }
        }
    }
}
