use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput};

pub struct HelpCommand;

const USAGE: &str = "
Available commands:
  help                 Show this help message
  ls [path]            List directory contents
  cd <path>            Change directory
  pwd                  Print working directory
  mkdir <path>         Create directory
  rm [-r] <path>       Remove file or directory
  cat <file>           Display file contents
  touch <file>         Create empty file
  clear                Clear the terminal
  echo <text>          Display text
  find <pattern>       Find files matching pattern
  open <file>          Open chat file in viewer
  import               Import ChatGPT history
";

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str { "help" }

    async fn execute(&self, _ctx: CommandContext) -> CommandOutput {
        Ok(USAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::make_ctx;
    use crate::fs::VirtualFs;

    #[tokio::test]
    async fn test_lists_every_builtin() {
        let out = HelpCommand.execute(make_ctx(vec![], VirtualFs::new())).await.unwrap();
        assert!(out.contains("Available commands"));
        for name in ["ls [path]", "cd <path>", "rm [-r] <path>", "find <pattern>", "open <file>", "import"] {
            assert!(out.contains(name), "missing {}", name);
        }
    }

    #[tokio::test]
    async fn test_ignores_arguments() {
        let out = HelpCommand.execute(make_ctx(vec!["ls"], VirtualFs::new())).await.unwrap();
        assert_eq!(out, USAGE);
    }
}
