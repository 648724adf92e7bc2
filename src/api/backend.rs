use crate::api::error::SearchError;
use crate::api::models::{ErrorBody, Track};
use crate::catalog::Language;
use crate::config::AppConfig;
use once_cell::sync::Lazy;
use tracing::debug;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// The only two inputs of a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub genre: String,
    pub language: Language,
}

impl SearchQuery {
    pub fn new(genre: impl Into<String>, language: Language) -> Self {
        Self {
            genre: genre.into().to_lowercase(),
            language,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    pub config: AppConfig,
}

impl BackendClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}/search?genre={}&language={}",
            self.config.backend_url,
            urlencoding::encode(&query.genre),
            query.language.as_str()
        )
    }

    /// GET `/search`. Any non-2xx status is an error whatever the body holds.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Track>, SearchError> {
        let url = self.search_url(query);
        debug!(%url, "requesting tracks");

        let response = HTTP_CLIENT.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(SearchError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))?;
        serde_json::from_str::<Vec<Track>>(&body).map_err(|e| SearchError::Decode(e.to_string()))
    }
}
