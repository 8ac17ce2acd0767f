//! GitHub driver for the gist API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
pub mod request;
pub mod response;
mod service;
pub mod transport;

pub use errors::GitHubError;
pub use service::GitHubGistService;
pub use transport::Transport;
