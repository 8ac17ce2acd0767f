use serde::Serialize;

/// Gist file.
///
/// The filename travels as the key of the `files` map, so it is not part of
/// the serialized object.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GistFile {
    /// Filename.
    #[serde(skip)]
    pub filename: String,
    /// Content.
    pub content: String,
}

impl GistFile {
    /// Build a gist file.
    pub fn new<F: Into<String>, C: Into<String>>(filename: F, content: C) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}
