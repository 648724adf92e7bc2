//! The components module contains all shared components for our app.

mod app;
mod control_panel;
mod icons;
mod song_card;
mod status;

pub use app::*;
pub use control_panel::*;
pub use icons::*;
pub use song_card::*;
pub use status::*;

#[cfg(test)]
pub(crate) fn render_to_string(app: fn() -> dioxus::prelude::Element) -> String {
    let mut dom = dioxus::prelude::VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
