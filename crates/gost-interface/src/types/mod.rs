//! Gist types.

mod gist;
mod gist_file;

pub use gist::Gist;
pub use gist_file::GistFile;
