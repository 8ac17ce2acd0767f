use crate::{
    types::{Gist, GistFile},
    Result,
};

/// Gist API service.
///
/// Payload operations return the raw response body, whatever its status.
/// Toggle operations return `true` when the server answered `204 No Content`.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait GistService: Send + Sync {
    /// List gists of a user.
    fn user_gists_list(&self, user: &str) -> Result<Vec<u8>>;
    /// List public gists.
    fn public_gists_list(&self) -> Result<Vec<u8>>;
    /// List gists starred by the authenticated user.
    fn starred_gists_list(&self) -> Result<Vec<u8>>;
    /// Get a gist.
    fn gist_get(&self, id: &str) -> Result<Vec<u8>>;
    /// Create a gist.
    ///
    /// Fails with a validation error, without contacting the server, if a
    /// file has no filename.
    fn gist_create(&self, description: &str, public: bool, files: &[GistFile])
        -> Result<Vec<u8>>;
    /// Edit a gist.
    fn gist_edit(&self, id: &str, gist: &Gist) -> Result<Vec<u8>>;
    /// List commits of a gist.
    fn gist_commits_list(&self, id: &str) -> Result<Vec<u8>>;
    /// Fork a gist.
    fn gist_fork(&self, id: &str) -> Result<Vec<u8>>;
    /// List forks of a gist.
    fn gist_forks_list(&self, id: &str) -> Result<Vec<u8>>;
    /// Star a gist.
    fn gist_star(&self, id: &str) -> Result<bool>;
    /// Unstar a gist.
    fn gist_unstar(&self, id: &str) -> Result<bool>;
    /// Check if a gist is starred.
    fn gist_star_check(&self, id: &str) -> Result<bool>;
    /// Delete a gist.
    fn gist_delete(&self, id: &str) -> Result<bool>;
}
