// src/commands/cat/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput};
use crate::conversation::{is_conversation_path, Conversation};

pub struct CatCommand;

/// Conversation files are shown formatted when they parse and carry a
/// title; everything else is shown as stored.
fn render(path: &str, content: String) -> String {
    if is_conversation_path(path) {
        if let Some(rendered) = Conversation::parse(&content)
            .ok()
            .and_then(|conv| conv.render_plain())
        {
            return rendered;
        }
    }
    content
}

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &str {
        "cat"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandOutput {
        let Some(path) = ctx.args.first() else {
            return Ok("cat: missing operand".to_string());
        };

        let content = ctx.fs.lock().await.read_file(path);
        match content {
            Ok(content) => Ok(render(path, content)),
            Err(e) => Ok(format!("cat: {}", e)),
        }
    }
}
