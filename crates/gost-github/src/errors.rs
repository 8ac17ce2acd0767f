use gost_interface::GistError;

/// GitHub driver error.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names, missing_docs)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid token")]
    Unauthorized,

    #[error("Invalid URL '{}',\n  caused by: {}", url, source)]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("Credential is not a valid header value,\n  caused by: {}", source)]
    InvalidCredential {
        source: http::header::InvalidHeaderValue,
    },

    #[error(transparent)]
    SerializationError { source: serde_json::Error },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<serde_json::Error> for GitHubError {
    fn from(e: serde_json::Error) -> Self {
        GitHubError::SerializationError { source: e }
    }
}

impl From<GitHubError> for GistError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::HttpError { source } => GistError::TransportError {
                source: source.into(),
            },
            GitHubError::Unauthorized => GistError::AuthenticationError,
            e => GistError::ImplementationError { source: e.into() },
        }
    }
}
