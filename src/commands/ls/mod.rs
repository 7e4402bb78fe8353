// src/commands/ls/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput};
use crate::fs::DirEntry;
use crate::style::{paint, BLUE, GREEN};

pub struct LsCommand;

/// Directories first, then by name.
fn sort_entries(entries: &mut [DirEntry]) {
    entries.sort_by(|a, b| {
        b.is_directory()
            .cmp(&a.is_directory())
            .then_with(|| a.name.cmp(&b.name))
    });
}

fn format_entry(entry: &DirEntry) -> String {
    if entry.is_directory() {
        paint(BLUE, &format!("{}/", entry.name))
    } else {
        paint(GREEN, &entry.name)
    }
}

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &str {
        "ls"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandOutput {
        let path = ctx.args.first().map(String::as_str);
        let mut entries = match ctx.fs.lock().await.ls(path) {
            Ok(entries) => entries,
            Err(e) => return Ok(format!("ls: {}", e)),
        };

        if entries.is_empty() {
            return Ok("Directory is empty".to_string());
        }

        sort_entries(&mut entries);
        Ok(entries.iter().map(format_entry).collect::<Vec<_>>().join("\n"))
    }
}
