// src/commands/open/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput};
use crate::conversation::{is_conversation_path, Conversation};

pub struct OpenCommand;

#[async_trait]
impl Command for OpenCommand {
    fn name(&self) -> &str {
        "open"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandOutput {
        let Some(path) = ctx.args.first() else {
            return Ok("open: missing file".to_string());
        };

        if !is_conversation_path(path) {
            return Ok("open: can only open .chat files".to_string());
        }

        let content = match ctx.fs.lock().await.read_file(path) {
            Ok(content) => content,
            Err(e) => return Ok(format!("open: {}", e)),
        };

        match Conversation::parse(&content) {
            Ok(conv) => Ok(conv.render_highlighted()),
            Err(_) => Ok("open: invalid chat file format".to_string()),
        }
    }
}
