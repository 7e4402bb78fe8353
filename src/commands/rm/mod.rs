// src/commands/rm/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput};

pub struct RmCommand;

#[async_trait]
impl Command for RmCommand {
    fn name(&self) -> &str {
        "rm"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandOutput {
        // Only a leading `-r` is a flag; anything else is the path.
        let recursive = ctx.args.first().is_some_and(|a| a == "-r");
        let path = if recursive { ctx.args.get(1) } else { ctx.args.first() };

        let Some(path) = path else {
            return Ok("rm: missing operand".to_string());
        };

        match ctx.fs.lock().await.rm(path, recursive) {
            Ok(()) => Ok(String::new()),
            Err(e) => Ok(format!("rm: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::make_ctx;
    use crate::fs::VirtualFs;

    fn fs_with_dir() -> VirtualFs {
        let mut fs = VirtualFs::new();
        fs.mkdir("/testdir").unwrap();
        fs.write_file("/testdir/file.txt", "content").unwrap();
        fs.write_file("/test.txt", "content").unwrap();
        fs
    }

    #[tokio::test]
    async fn test_rm_file() {
        let ctx = make_ctx(vec!["/test.txt"], fs_with_dir());
        let fs = ctx.fs.clone();
        assert_eq!(RmCommand.execute(ctx).await.unwrap(), "");
        assert!(!fs.lock().await.exists("/test.txt"));
    }

    #[tokio::test]
    async fn test_rm_nonexistent() {
        let out = RmCommand.execute(make_ctx(vec!["/nonexistent.txt"], fs_with_dir())).await.unwrap();
        assert_eq!(out, "rm: File or directory not found: /nonexistent.txt");
    }

    #[tokio::test]
    async fn test_rm_directory_without_r() {
        let out = RmCommand.execute(make_ctx(vec!["/testdir"], fs_with_dir())).await.unwrap();
        assert_eq!(out, "rm: Directory not empty: /testdir. Use -r flag to remove recursively.");
    }

    #[tokio::test]
    async fn test_rm_recursive() {
        let ctx = make_ctx(vec!["-r", "/testdir"], fs_with_dir());
        let fs = ctx.fs.clone();
        assert_eq!(RmCommand.execute(ctx).await.unwrap(), "");
        assert!(!fs.lock().await.exists("/testdir"));
    }

    #[tokio::test]
    async fn test_rm_missing_operand() {
        let out = RmCommand.execute(make_ctx(vec![], fs_with_dir())).await.unwrap();
        assert_eq!(out, "rm: missing operand");
        let out = RmCommand.execute(make_ctx(vec!["-r"], fs_with_dir())).await.unwrap();
        assert_eq!(out, "rm: missing operand");
    }

    #[tokio::test]
    async fn test_rm_root() {
        let out = RmCommand.execute(make_ctx(vec!["-r", "/"], fs_with_dir())).await.unwrap();
        assert_eq!(out, "rm: Cannot remove root directory");
    }
}
