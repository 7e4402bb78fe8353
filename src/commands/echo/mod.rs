// src/commands/echo/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput};

pub struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    fn name(&self) -> &str {
        "echo"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandOutput {
        Ok(ctx.args.join(" "))
    }
}
