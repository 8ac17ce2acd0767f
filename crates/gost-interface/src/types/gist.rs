use std::collections::HashMap;

use serde::Serialize;

use crate::{types::GistFile, GistError, Result};

/// Gist.
///
/// `description` and `public` are left out of the body when unset, so an
/// edit only touches what it carries.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Gist {
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Is the gist public?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// Files, by filename.
    pub files: HashMap<String, GistFile>,
    /// Display filename.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filename: String,
}

impl Gist {
    /// Build an empty gist.
    pub fn new<T: Into<String>>(description: T, public: bool) -> Self {
        Self::default().with_description(description).with_public(public)
    }

    /// Set the description.
    pub fn with_description<T: Into<String>>(mut self, description: T) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the visibility.
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    /// Build a gist from files, failing on the first file without a filename.
    pub fn from_files<T: Into<String>>(
        description: T,
        public: bool,
        files: &[GistFile],
    ) -> Result<Self> {
        let mut gist = Self::new(description, public);
        for file in files {
            if file.filename.is_empty() {
                return Err(GistError::ValidationError { file: file.clone() });
            }

            gist = gist.with_file(file.clone());
        }

        Ok(gist)
    }

    /// Add or replace a file, keyed by its filename.
    pub fn with_file(mut self, file: GistFile) -> Self {
        self.files.insert(file.filename.clone(), file);
        self
    }

    /// Set the display filename.
    pub fn with_filename<T: Into<String>>(mut self, filename: T) -> Self {
        self.filename = filename.into();
        self
    }
}
