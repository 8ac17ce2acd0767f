use anyhow::Result;
use clap::Parser;

use crate::commands::{Command, CommandContext};

/// Star a gist
#[derive(Parser)]
pub(crate) struct StarCommand {
    /// Gist ID
    id: String,
}

impl Command for StarCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        let starred = ctx.api_service.gist_star(&self.id)?;
        ctx.write_flag(starred)
    }
}

/// Unstar a gist
#[derive(Parser)]
pub(crate) struct UnstarCommand {
    /// Gist ID
    id: String,
}

impl Command for UnstarCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        let unstarred = ctx.api_service.gist_unstar(&self.id)?;
        ctx.write_flag(unstarred)
    }
}

/// Check if a gist is starred
#[derive(Parser)]
pub(crate) struct IsStarredCommand {
    /// Gist ID
    id: String,
}

impl Command for IsStarredCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        let starred = ctx.api_service.gist_star_check(&self.id)?;
        ctx.write_flag(starred)
    }
}

/// Delete a gist
#[derive(Parser)]
pub(crate) struct DeleteCommand {
    /// Gist ID
    id: String,
}

impl Command for DeleteCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        let deleted = ctx.api_service.gist_delete(&self.id)?;
        ctx.write_flag(deleted)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[test]
    fn test_star() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_gist_star()
            .once()
            .withf(|id| id == "42")
            .returning(|_| Ok(true));

        assert_eq!(test_command(ctx, &["star", "42"]), "true\n");
    }

    #[test]
    fn test_unstar() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_gist_unstar()
            .once()
            .returning(|_| Ok(true));

        assert_eq!(test_command(ctx, &["unstar", "42"]), "true\n");
    }

    #[test]
    fn test_is_starred() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_gist_star_check()
            .once()
            .returning(|_| Ok(false));

        assert_eq!(test_command(ctx, &["is-starred", "42"]), "false\n");
    }

    #[test]
    fn test_delete_missing_gist() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_gist_delete()
            .once()
            .withf(|id| id == "7")
            .returning(|_| Ok(false));

        assert_eq!(test_command(ctx, &["delete", "7"]), "false\n");
    }
}
