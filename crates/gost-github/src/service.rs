//! GitHub gist service.

use std::sync::Arc;

use gost_config::Config;
use gost_interface::{
    types::{Gist, GistFile},
    GistService, Result,
};
use http::{Method, StatusCode};
use reqwest::blocking::Response;

use crate::{
    errors::GitHubError,
    request::{build_request, execute_request},
    response::{into_payload, into_status_match},
    transport::{build_transport, Transport},
};

/// GitHub gist service.
#[derive(Clone)]
pub struct GitHubGistService {
    config: Config,
    transport: Arc<dyn Transport>,
}

impl GitHubGistService {
    /// Creates a new service using the default transport.
    pub fn new(config: Config) -> Result<Self, GitHubError> {
        let transport = build_transport(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a new service over a custom transport.
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Response, GitHubError> {
        let request = build_request(&self.config.api, method, path, body)?;
        execute_request(self.transport.as_ref(), request)
    }

    fn fetch(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Vec<u8>> {
        let response = self.send(method, path, body)?;
        Ok(into_payload(response)?)
    }

    fn toggle(&self, method: Method, path: &str) -> Result<bool> {
        let response = self.send(method, path, None)?;
        Ok(into_status_match(StatusCode::NO_CONTENT, response))
    }
}

impl GistService for GitHubGistService {
    #[tracing::instrument(skip(self))]
    fn user_gists_list(&self, user: &str) -> Result<Vec<u8>> {
        self.fetch(Method::GET, &format!("/users/{user}/gists"), None)
    }

    #[tracing::instrument(skip(self))]
    fn public_gists_list(&self) -> Result<Vec<u8>> {
        self.fetch(Method::GET, "/gists/public", None)
    }

    #[tracing::instrument(skip(self))]
    fn starred_gists_list(&self) -> Result<Vec<u8>> {
        self.fetch(Method::GET, "/gists/starred", None)
    }

    #[tracing::instrument(skip(self))]
    fn gist_get(&self, id: &str) -> Result<Vec<u8>> {
        self.fetch(Method::GET, &format!("/gists/{id}"), None)
    }

    #[tracing::instrument(skip(self, files), fields(files = files.len()))]
    fn gist_create(
        &self,
        description: &str,
        public: bool,
        files: &[GistFile],
    ) -> Result<Vec<u8>> {
        let gist = Gist::from_files(description, public, files)?;
        let body = serde_json::to_vec(&gist).map_err(GitHubError::from)?;

        self.fetch(Method::POST, "/gists", Some(body))
    }

    #[tracing::instrument(skip(self, gist))]
    fn gist_edit(&self, id: &str, gist: &Gist) -> Result<Vec<u8>> {
        let body = serde_json::to_vec(gist).map_err(GitHubError::from)?;

        self.fetch(Method::PATCH, &format!("/gists/{id}"), Some(body))
    }

    #[tracing::instrument(skip(self))]
    fn gist_commits_list(&self, id: &str) -> Result<Vec<u8>> {
        self.fetch(Method::GET, &format!("/gists/{id}/commits"), None)
    }

    #[tracing::instrument(skip(self))]
    fn gist_fork(&self, id: &str) -> Result<Vec<u8>> {
        self.fetch(Method::POST, &format!("/gists/{id}/forks"), None)
    }

    #[tracing::instrument(skip(self))]
    fn gist_forks_list(&self, id: &str) -> Result<Vec<u8>> {
        self.fetch(Method::GET, &format!("/gists/{id}/forks"), None)
    }

    #[tracing::instrument(skip(self), ret)]
    fn gist_star(&self, id: &str) -> Result<bool> {
        self.toggle(Method::PUT, &format!("/gists/{id}/star"))
    }

    #[tracing::instrument(skip(self), ret)]
    fn gist_unstar(&self, id: &str) -> Result<bool> {
        self.toggle(Method::DELETE, &format!("/gists/{id}/star"))
    }

    #[tracing::instrument(skip(self), ret)]
    fn gist_star_check(&self, id: &str) -> Result<bool> {
        self.toggle(Method::GET, &format!("/gists/{id}/star"))
    }

    #[tracing::instrument(skip(self), ret)]
    fn gist_delete(&self, id: &str) -> Result<bool> {
        self.toggle(Method::DELETE, &format!("/gists/{id}"))
    }
}
