// src/commands/find/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput};
use crate::fs::VirtualFs;

pub struct FindCommand;

fn join_path(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Depth-first walk from `dir`, collecting paths whose final segment
/// contains `pattern`. Directories that cannot be listed are skipped.
fn search_directory(fs: &VirtualFs, dir: &str, pattern: &str, results: &mut Vec<String>) {
    let Ok(entries) = fs.ls(Some(dir)) else {
        return;
    };

    for entry in entries {
        let path = join_path(dir, &entry.name);
        if entry.name.contains(pattern) {
            results.push(path.clone());
        }
        if entry.is_directory() {
            search_directory(fs, &path, pattern, results);
        }
    }
}

#[async_trait]
impl Command for FindCommand {
    fn name(&self) -> &str {
        "find"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandOutput {
        let Some(pattern) = ctx.args.first() else {
            return Ok("find: missing pattern".to_string());
        };

        let mut results = Vec::new();
        let fs = ctx.fs.lock().await;
        search_directory(&fs, "/", pattern, &mut results);

        if results.is_empty() {
            return Ok(format!("No files matching '{}' found", pattern));
        }
        Ok(results.join("\n"))
    }
}
