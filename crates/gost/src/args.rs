use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::Parser;
use gost_config::Config;
use gost_github::GitHubGistService;
use tracing::debug;

use crate::commands::{Command, CommandContext, SubCommand};

#[derive(Parser)]
#[command(about = "Gist API client", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        debug!(root_url = %config.api.root_url, "Using GitHubGistService API driver");

        let ctx = CommandContext {
            api_service: Box::new(GitHubGistService::new(config)?),
            writer: Arc::new(Mutex::new(std::io::stdout())),
        };

        Self::execute(args, ctx)
    }

    pub(crate) fn execute(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx)
    }
}
