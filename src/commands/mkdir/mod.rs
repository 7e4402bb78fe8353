// src/commands/mkdir/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput};

pub struct MkdirCommand;

#[async_trait]
impl Command for MkdirCommand {
    fn name(&self) -> &str {
        "mkdir"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandOutput {
        let Some(path) = ctx.args.first() else {
            return Ok("mkdir: missing operand".to_string());
        };

        match ctx.fs.lock().await.mkdir(path) {
            Ok(()) => Ok(String::new()),
            Err(e) => Ok(format!("mkdir: {}", e)),
        }
    }
}
