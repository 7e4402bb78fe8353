// src/commands/touch/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput};

pub struct TouchCommand;

#[async_trait]
impl Command for TouchCommand {
    fn name(&self) -> &str {
        "touch"
    }

    /// Creates the file, or truncates it if it already exists.
    async fn execute(&self, ctx: CommandContext) -> CommandOutput {
        let Some(path) = ctx.args.first() else {
            return Ok("touch: missing operand".to_string());
        };

        match ctx.fs.lock().await.write_file(path, "") {
            Ok(()) => Ok(String::new()),
            Err(e) => Ok(format!("touch: {}", e)),
        }
    }
}
