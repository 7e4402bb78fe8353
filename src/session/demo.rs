//! Default tree seeded when the saved snapshot cannot be loaded.

use crate::conversation::{Conversation, Message, Role};
use crate::fs::VirtualFs;
use crate::history::{ImportError, PROJECTS_DIR};

fn ensure_dir(fs: &mut VirtualFs, path: &str) -> Result<(), ImportError> {
    if !fs.exists(path) {
        fs.mkdir(path)?;
    }
    Ok(())
}

/// Create the demo projects and their conversations.
pub fn seed_demo_data(fs: &mut VirtualFs) -> Result<(), ImportError> {
    ensure_dir(fs, PROJECTS_DIR)?;
    ensure_dir(fs, "/projects/web-development")?;
    ensure_dir(fs, "/projects/ai-research")?;

    let nextjs = Conversation::new(
        "Next.js Application",
        vec![
            Message::new(Role::User, "How do I create a Next.js app?"),
            Message::new(Role::Assistant, "You can use create-next-app to start a new Next.js project..."),
        ],
    );
    fs.write_file("/projects/web-development/nextjs-app.chat", nextjs.to_json()?)?;

    let llm = Conversation::new(
        "LLM Models Discussion",
        vec![
            Message::new(Role::User, "What are the latest LLM models?"),
            Message::new(Role::Assistant, "The latest models include GPT-4o, Claude 3, and..."),
        ],
    );
    fs.write_file("/projects/ai-research/llm-models.chat", llm.to_json()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_on_fresh_tree() {
        let mut fs = VirtualFs::new();
        seed_demo_data(&mut fs).unwrap();
        let chat = Conversation::parse(&fs.read_file("/projects/ai-research/llm-models.chat").unwrap()).unwrap();
        assert_eq!(chat.title(), Some("LLM Models Discussion"));
        assert!(fs.exists("/projects/web-development/nextjs-app.chat"));
    }

    #[test]
    fn test_seed_keeps_existing_directories() {
        let mut fs = VirtualFs::new();
        fs.mkdir("/projects").unwrap();
        fs.write_file("/projects/keep.txt", "x").unwrap();
        seed_demo_data(&mut fs).unwrap();
        assert!(fs.exists("/projects/keep.txt"));
    }
}
