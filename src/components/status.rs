use crate::components::Icon;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MessageKind {
    #[default]
    Info,
    Error,
}

#[component]
pub fn MessageDisplay(message: String, #[props(default)] kind: MessageKind) -> Element {
    let color_class = match kind {
        MessageKind::Error => "text-red-400",
        MessageKind::Info => "text-gray-400",
    };

    rsx! {
        div { class: "text-center flex-grow flex items-center justify-center",
            p { class: "{color_class} text-xl", "{message}" }
        }
    }
}

#[component]
pub fn Loader() -> Element {
    rsx! {
        div { class: "text-center flex-grow flex items-center justify-center",
            div {
                Icon {
                    name: "loader".to_string(),
                    class: "w-16 h-16 text-purple-500 mx-auto".to_string(),
                }
                p { class: "mt-4 text-gray-400", "Finding some tunes..." }
            }
        }
    }
}

/// Shown before the first search.
#[component]
pub fn InitialStateIcon() -> Element {
    rsx! {
        div { class: "text-center",
            Icon {
                name: "bars".to_string(),
                class: "w-40 h-40 text-gray-800 mx-auto mb-6".to_string(),
            }
            h2 { class: "text-2xl font-bold text-white mb-2", "Find Your Vibe" }
            p { class: "text-gray-400", "Use the controls on the left to start discovering new music." }
        }
    }
}

#[component]
pub fn RefreshButton(is_loading: bool, on_refresh: EventHandler<()>) -> Element {
    let icon_class = if is_loading { "w-5 h-5 animate-spin" } else { "w-5 h-5" };

    rsx! {
        div { class: "text-center mt-8",
            button {
                class: "bg-gray-800 hover:bg-gray-700 text-white font-semibold py-3 px-6 rounded-full transition-colors duration-300 flex items-center justify-center gap-2 disabled:bg-gray-600 disabled:cursor-not-allowed mx-auto",
                disabled: is_loading,
                onclick: move |_| on_refresh.call(()),
                Icon { name: "refresh".to_string(), class: icon_class.to_string() }
                "Get New Songs"
            }
        }
    }
}
