use std::{
    io::Write,
    sync::{Arc, Mutex},
};

use anyhow::Result;
use clap::Parser;
use gost_interface::MockGistService;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub api_service: MockGistService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            api_service: MockGistService::new(),
        }
    }

    pub fn into_context(self, writer: Arc<Mutex<dyn Write + Send>>) -> CommandContext {
        CommandContext {
            api_service: Box::new(self.api_service),
            writer,
        }
    }
}

pub(crate) fn try_test_command(ctx: CommandContextTest, command_args: &[&str]) -> Result<String> {
    let buf = Arc::new(Mutex::new(Vec::new()));

    let command_args = {
        let mut tmp_args = vec!["gost"];
        tmp_args.extend(command_args);
        tmp_args
    };

    let args = match Args::try_parse_from(command_args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            panic!("Parse error.")
        }
    };
    CommandExecutor::execute(args, ctx.into_context(buf.clone()))?;

    let vec = buf.lock().unwrap().to_vec();
    Ok(String::from_utf8(vec).unwrap())
}

pub(crate) fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    try_test_command(ctx, command_args).unwrap()
}
