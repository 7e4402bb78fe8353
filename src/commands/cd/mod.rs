// src/commands/cd/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput};

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &str {
        "cd"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandOutput {
        let Some(path) = ctx.args.first() else {
            return Ok("cd: missing operand".to_string());
        };

        let result = ctx.fs.lock().await.cd(path);
        match result {
            Ok(new_dir) => {
                ctx.listeners.notify(&new_dir);
                Ok(String::new())
            }
            Err(e) => Ok(format!("cd: {}", e)),
        }
    }
}
