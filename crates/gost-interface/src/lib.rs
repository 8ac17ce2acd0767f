//! Gist API interface.
//!
//! Contains the gist data model, the error taxonomy shared by every
//! implementation, and the [`GistService`] operation surface.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;
pub mod types;

pub use errors::{GistError, Result};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockGistService;
pub use interface::GistService;
