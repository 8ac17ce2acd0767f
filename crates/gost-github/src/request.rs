//! Request building and execution.

use gost_config::ApiConfig;
use http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use reqwest::{
    blocking::{Request, Response},
    Url,
};
use tracing::{debug, warn};

use crate::{errors::GitHubError, response::drain, transport::Transport};

/// Accept header sent with every request.
pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Build an API URL.
pub fn build_url(config: &ApiConfig, path: &str) -> Result<Url, GitHubError> {
    let url = format!("{}{}", config.root_url, path);
    Url::parse(&url).map_err(|e| GitHubError::InvalidUrl { url, source: e })
}

/// Build the fixed header set: accept and credential.
pub fn build_headers(config: &ApiConfig) -> Result<HeaderMap, GitHubError> {
    let mut authorization = HeaderValue::from_str(&format!("token {}", config.token))
        .map_err(|e| GitHubError::InvalidCredential { source: e })?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));
    headers.insert(header::AUTHORIZATION, authorization);

    Ok(headers)
}

/// Build a request addressed at `root_url + path`.
///
/// The header set is replaced as a whole by the fixed headers.
pub fn build_request(
    config: &ApiConfig,
    method: Method,
    path: &str,
    body: Option<Vec<u8>>,
) -> Result<Request, GitHubError> {
    let mut request = Request::new(method, build_url(config, path)?);
    *request.headers_mut() = build_headers(config)?;
    *request.body_mut() = body.map(Into::into);

    Ok(request)
}

/// Send a request, turning a 401 into [`GitHubError::Unauthorized`].
///
/// Any other status is handed back with an unread body.
pub fn execute_request(
    transport: &dyn Transport,
    request: Request,
) -> Result<Response, GitHubError> {
    let method = request.method().clone();
    let url = request.url().clone();

    let response = transport.execute(request)?;
    let status = response.status();
    debug!(%method, %url, %status, "Request executed");

    if status == StatusCode::UNAUTHORIZED {
        warn!(%method, %url, "Credential rejected");
        drain(response);
        return Err(GitHubError::Unauthorized);
    }

    Ok(response)
}
