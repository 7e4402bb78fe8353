// src/commands/pwd/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput};

pub struct PwdCommand;

#[async_trait]
impl Command for PwdCommand {
    fn name(&self) -> &str {
        "pwd"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandOutput {
        Ok(ctx.fs.lock().await.pwd().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::make_ctx;
    use crate::fs::VirtualFs;

    #[tokio::test]
    async fn test_pwd_root() {
        let out = PwdCommand.execute(make_ctx(vec![], VirtualFs::new())).await.unwrap();
        assert_eq!(out, "/");
    }

    #[tokio::test]
    async fn test_pwd_ignores_args() {
        let mut fs = VirtualFs::new();
        fs.mkdir("/test").unwrap();
        fs.cd("/test").unwrap();
        let out = PwdCommand.execute(make_ctx(vec!["ignored", "args"], fs)).await.unwrap();
        assert_eq!(out, "/test");
    }
}
