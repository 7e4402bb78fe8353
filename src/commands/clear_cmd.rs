use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput};

/// Output token asking the session to wipe its displayed history.
pub const CLEAR_SENTINEL: &str = "\x1b[clear]";

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &str {
        "clear"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandOutput {
        Ok(CLEAR_SENTINEL.to_string())
    }
}
