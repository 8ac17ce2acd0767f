use anyhow::Result;
use clap::Parser;

use crate::commands::{Command, CommandContext};

/// Show a gist
#[derive(Parser)]
pub(crate) struct GetCommand {
    /// Gist ID
    id: String,
}

impl Command for GetCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        let payload = ctx.api_service.gist_get(&self.id)?;
        ctx.write_payload(&payload)
    }
}

/// List commits of a gist
#[derive(Parser)]
pub(crate) struct CommitsCommand {
    /// Gist ID
    id: String,
}

impl Command for CommitsCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        let payload = ctx.api_service.gist_commits_list(&self.id)?;
        ctx.write_payload(&payload)
    }
}

/// Fork a gist
#[derive(Parser)]
pub(crate) struct ForkCommand {
    /// Gist ID
    id: String,
}

impl Command for ForkCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        let payload = ctx.api_service.gist_fork(&self.id)?;
        ctx.write_payload(&payload)
    }
}

/// List forks of a gist
#[derive(Parser)]
pub(crate) struct ForksCommand {
    /// Gist ID
    id: String,
}

impl Command for ForksCommand {
    fn execute(self, ctx: CommandContext) -> Result<()> {
        let payload = ctx.api_service.gist_forks_list(&self.id)?;
        ctx.write_payload(&payload)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[test]
    fn test_get() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_gist_get()
            .once()
            .withf(|id| id == "2")
            .returning(|_| Ok(br#"{"id":"2"}"#.to_vec()));

        assert_eq!(test_command(ctx, &["get", "2"]), "{\"id\":\"2\"}\n");
    }

    #[test]
    fn test_fork_then_forks() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_gist_fork()
            .once()
            .withf(|id| id == "2")
            .returning(|_| Ok(br#"{"id":"3"}"#.to_vec()));
        assert_eq!(test_command(ctx, &["fork", "2"]), "{\"id\":\"3\"}\n");

        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_gist_forks_list()
            .once()
            .withf(|id| id == "2")
            .returning(|_| Ok(br#"[{"id":"3"}]"#.to_vec()));
        assert_eq!(test_command(ctx, &["forks", "2"]), "[{\"id\":\"3\"}]\n");
    }

    #[test]
    fn test_commits() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_gist_commits_list()
            .once()
            .withf(|id| id == "2")
            .returning(|_| Ok(b"[]".to_vec()));

        assert_eq!(test_command(ctx, &["commits", "2"]), "[]\n");
    }
}
