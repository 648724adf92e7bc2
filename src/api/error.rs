use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Non-2xx response. `message` is the server-supplied text, if the
    /// error body could be parsed and carried one.
    #[error("{}", http_message(*status, message.as_deref()))]
    Http { status: u16, message: Option<String> },

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(String),
}

fn http_message(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) if !message.trim().is_empty() => message.to_string(),
        _ => format!("HTTP error! Status: {status}"),
    }
}

impl SearchError {
    /// The text shown in the error display.
    pub fn user_message(&self) -> String {
        format!("Could not fetch songs. {self}. Is the backend server running?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_prefers_server_message() {
        let err = SearchError::Http {
            status: 500,
            message: Some("boom".to_string()),
        };
        assert_eq!(err.to_string(), "boom");
        assert_eq!(
            err.user_message(),
            "Could not fetch songs. boom. Is the backend server running?"
        );
    }

    #[test]
    fn http_error_falls_back_to_status() {
        let err = SearchError::Http {
            status: 503,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP error! Status: 503");

        let blank = SearchError::Http {
            status: 404,
            message: Some(String::new()),
        };
        assert!(blank.user_message().contains("404"));
    }

    #[test]
    fn decode_error_is_wrapped() {
        let err = SearchError::Decode("expected a sequence".to_string());
        let text = err.user_message();
        assert!(text.starts_with("Could not fetch songs."));
        assert!(text.contains("expected a sequence"));
        assert!(text.ends_with("Is the backend server running?"));
    }
}
