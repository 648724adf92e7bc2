/// Utility helpers for Muziverse

const PLACEHOLDER_BASE: &str = "https://placehold.co/300x300/121212/ffffff";

/// Generated artwork showing the album title, for tracks without usable art.
pub fn placeholder_image_url(album: &str) -> String {
    format!("{PLACEHOLDER_BASE}?text={}", urlencoding::encode(album))
}

/// The image a card should display. Missing, blank, or failed artwork falls
/// back to the placeholder.
pub fn card_image_url(image: Option<&str>, album: &str, load_failed: bool) -> String {
    match image {
        Some(url) if !load_failed && !url.trim().is_empty() => url.to_string(),
        _ => placeholder_image_url(album),
    }
}

/// Whether `image` is the URL that last failed to load on this card. A new
/// URL starts with a clean slate.
pub fn artwork_failed(image: Option<&str>, failed: Option<&str>) -> bool {
    matches!((image, failed), (Some(image), Some(failed)) if image == failed)
}
