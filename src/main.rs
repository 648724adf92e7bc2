use dioxus::prelude::*;
use tracing::Level;

mod api;
mod catalog;
mod components;
mod config;
mod controller;
mod utils;

use components::SearchPage;
use config::AppConfig;

const APP_CSS: Asset = asset!("/assets/styling/app.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_signal(AppConfig::default);
    use_context_provider(|| config);

    rsx! {
        document::Title { "Muziverse" }
        document::Meta { name: "theme-color", content: "#000000" }
        document::Script { src: TAILWIND_CDN }
        document::Stylesheet { href: APP_CSS }

        SearchPage {}
    }
}
