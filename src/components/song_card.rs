use crate::api::Track;
use crate::components::Icon;
use crate::utils::{artwork_failed, card_image_url};
use dioxus::prelude::*;

#[component]
pub fn SongCard(track: Track) -> Element {
    // URL whose load failed; the placeholder is never retried.
    let mut failed_image = use_signal(|| None::<String>);
    let image = track.image.clone();
    let load_failed = artwork_failed(image.as_deref(), failed_image().as_deref());
    let image_src = card_image_url(image.as_deref(), &track.album, load_failed);

    rsx! {
        div { class: "bg-black/20 rounded-lg overflow-hidden shadow-lg card-hover-effect animate-fade-in group relative",
            img {
                class: "w-full h-auto aspect-square object-cover transition-transform duration-500 group-hover:scale-110",
                src: "{image_src}",
                alt: "Album art for {track.album}",
                loading: "lazy",
                onerror: move |_| {
                    if !load_failed && image.is_some() {
                        failed_image.set(image.clone());
                    }
                },
            }
            div { class: "absolute inset-0 bg-gradient-to-t from-black/80 via-transparent to-transparent" }
            div { class: "absolute bottom-0 left-0 p-4",
                h3 {
                    class: "font-bold text-lg text-white truncate",
                    title: "{track.name}",
                    "{track.name}"
                }
                p {
                    class: "text-gray-300 text-sm truncate",
                    title: "{track.artist}",
                    "{track.artist}"
                }
            }
            a {
                class: "absolute top-4 right-4 bg-purple-600 text-white p-3 rounded-full transform transition-all duration-300 opacity-0 group-hover:opacity-100 hover:scale-110",
                href: "{track.spotify_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                aria_label: "Open {track.name} on Spotify",
                Icon { name: "spotify".to_string(), class: "w-5 h-5".to_string() }
            }
        }
    }
}
