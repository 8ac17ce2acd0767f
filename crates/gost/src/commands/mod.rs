//! Commands.

use std::{
    io::Write,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use anyhow::Result;
use clap::Subcommand;
use gost_interface::GistService;

use self::{
    gist::{CommitsCommand, ForkCommand, ForksCommand, GetCommand},
    list::{PublicCommand, StarredCommand, UserCommand},
    star::{DeleteCommand, IsStarredCommand, StarCommand, UnstarCommand},
    write::{CreateCommand, EditCommand},
};

mod gist;
mod list;
mod star;
mod write;

pub(crate) struct CommandContext {
    pub api_service: Box<dyn GistService>,
    pub writer: Arc<Mutex<dyn Write + Send>>,
}

impl CommandContext {
    pub fn writer(&self) -> MutexGuard<'_, dyn Write + Send + 'static> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write a raw payload, followed by a newline.
    pub fn write_payload(&self, payload: &[u8]) -> Result<()> {
        let mut writer = self.writer();
        writer.write_all(payload)?;
        writeln!(writer)?;

        Ok(())
    }

    pub fn write_flag(&self, flag: bool) -> Result<()> {
        writeln!(self.writer(), "{flag}")?;

        Ok(())
    }
}

pub(crate) trait Command {
    fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    User(UserCommand),
    Public(PublicCommand),
    Starred(StarredCommand),
    Get(GetCommand),
    Create(CreateCommand),
    Edit(EditCommand),
    Commits(CommitsCommand),
    Fork(ForkCommand),
    Forks(ForksCommand),
    Star(StarCommand),
    Unstar(UnstarCommand),
    IsStarred(IsStarredCommand),
    Delete(DeleteCommand),
}

impl Command for SubCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::User(sub) => sub.execute(ctx),
            Self::Public(sub) => sub.execute(ctx),
            Self::Starred(sub) => sub.execute(ctx),
            Self::Get(sub) => sub.execute(ctx),
            Self::Create(sub) => sub.execute(ctx),
            Self::Edit(sub) => sub.execute(ctx),
            Self::Commits(sub) => sub.execute(ctx),
            Self::Fork(sub) => sub.execute(ctx),
            Self::Forks(sub) => sub.execute(ctx),
            Self::Star(sub) => sub.execute(ctx),
            Self::Unstar(sub) => sub.execute(ctx),
            Self::IsStarred(sub) => sub.execute(ctx),
            Self::Delete(sub) => sub.execute(ctx),
        }
    }
}
