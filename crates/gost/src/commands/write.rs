use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gost_interface::types::{Gist, GistFile};

use crate::commands::{Command, CommandContext};

/// Create a gist
#[derive(Parser)]
pub(crate) struct CreateCommand {
    /// Description
    #[arg(long, short, default_value = "")]
    description: String,
    /// Make the gist public
    #[arg(long)]
    public: bool,
    /// File to upload (repeatable)
    #[arg(long = "file", short, required = true)]
    files: Vec<PathBuf>,
}

impl Command for CreateCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        let files = read_files(&self.files)?;
        let payload = ctx
            .api_service
            .gist_create(&self.description, self.public, &files)?;
        ctx.write_payload(&payload)
    }
}

/// Edit a gist
#[derive(Parser)]
pub(crate) struct EditCommand {
    /// Gist ID
    id: String,
    /// New description (left unchanged when omitted)
    #[arg(long, short)]
    description: Option<String>,
    /// New visibility (left unchanged when omitted)
    #[arg(long)]
    public: Option<bool>,
    /// Display filename
    #[arg(long, default_value = "")]
    filename: String,
    /// File to upload (repeatable)
    #[arg(long = "file", short)]
    files: Vec<PathBuf>,
}

impl Command for EditCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        let mut gist = read_files(&self.files)?
            .into_iter()
            .fold(Gist::default(), Gist::with_file)
            .with_filename(self.filename);
        gist.description = self.description;
        gist.public = self.public;

        let payload = ctx.api_service.gist_edit(&self.id, &gist)?;
        ctx.write_payload(&payload)
    }
}

/// Paths without a file name yield an empty filename, rejected on create.
fn read_files(paths: &[PathBuf]) -> Result<Vec<GistFile>> {
    paths
        .iter()
        .map(|path| {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Could not read file {}", path.display()))?;
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            Ok(GistFile::new(filename, content))
        })
        .collect()
}
