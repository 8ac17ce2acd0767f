use anyhow::Result;
use clap::Parser;

use crate::commands::{Command, CommandContext};

/// List gists of a user
#[derive(Parser)]
pub(crate) struct UserCommand {
    /// User login
    user: String,
}

impl Command for UserCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        let payload = ctx.api_service.user_gists_list(&self.user)?;
        ctx.write_payload(&payload)
    }
}

/// List public gists
#[derive(Parser)]
pub(crate) struct PublicCommand;

impl Command for PublicCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        let payload = ctx.api_service.public_gists_list()?;
        ctx.write_payload(&payload)
    }
}

/// List starred gists
#[derive(Parser)]
pub(crate) struct StarredCommand;

impl Command for StarredCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        let payload = ctx.api_service.starred_gists_list()?;
        ctx.write_payload(&payload)
    }
}
