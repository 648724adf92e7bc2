use serde::{Deserialize, Serialize};

pub const ENGLISH_GENRES: &[&str] = &[
    "Pop",
    "Hip-Hop",
    "Rock",
    "Indie",
    "Electronic",
    "Dance",
    "Phonk",
    "R&B",
    "Metal",
    "Jazz",
    "Country",
    "Acoustic",
];

pub const HINDI_GENRES: &[&str] = &[
    "Bollywood",
    "Desi-Hip-Hop",
    "Indie",
    "Punjabi",
    "Ghazal",
    "Classical",
    "Desi-Pop",
    "Haryanvi",
    "Hindi-Oldies",
];

/// Catalog language, serialized as the lowercase tag the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Hindi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
        }
    }

    fn raw_genres(&self) -> &'static [&'static str] {
        match self {
            Language::English => ENGLISH_GENRES,
            Language::Hindi => HINDI_GENRES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub label: String,
    /// Lowercase form sent as the `genre` query parameter.
    pub slug: String,
}

impl Genre {
    fn from_label(label: &str) -> Self {
        Self {
            label: label.to_string(),
            slug: label.to_lowercase(),
        }
    }
}

/// Returns the catalog for `language`, sorted by label.
///
/// The result is never empty and is re-sorted on every call.
pub fn genres_for(language: Language) -> Vec<Genre> {
    let mut labels: Vec<&str> = language.raw_genres().to_vec();
    labels.sort_unstable();
    labels.into_iter().map(Genre::from_label).collect()
}
