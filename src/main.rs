use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::error;

use chat_term::fs::STORAGE_KEY;
use chat_term::session::{Session, SessionOptions, Submission, TranscriptLine};
use chat_term::storage::{FileStorage, MemoryStorage, Storage};

/// Clears the real terminal when the session is cleared.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Clone, ValueEnum, Default)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    fn to_tracing_level(&self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[derive(Parser)]
#[command(name = "chat-term")]
#[command(about = "A terminal for browsing chat conversations as files")]
#[command(version)]
struct Cli {
    /// Run a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Directory to persist the file system in (in-memory when omitted)
    #[arg(long = "storage-dir")]
    storage_dir: Option<PathBuf>,

    /// Key the file system snapshot is saved under
    #[arg(long = "storage-key", default_value = STORAGE_KEY)]
    storage_key: String,

    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::default())]
    log_level: LogLevel,
}

fn setup_tracing(cli: &Cli) {
    if let Some(level) = cli.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .without_time()
            .compact()
            .with_writer(std::io::stderr)
            .init();
    }
}

fn render(submission: Submission) -> Option<String> {
    match submission {
        Submission::Empty => None,
        Submission::Cleared => Some(CLEAR_SCREEN.to_string()),
        Submission::Output(text) if text.is_empty() => None,
        Submission::Output(text) => Some(format!("{}\n", text)),
    }
}

async fn write_flushed<W>(output: &mut W, text: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await
}

/// Read lines from `input` until EOF, echoing prompts and output to `output`.
/// Stops at the first read or write failure.
async fn run_repl<R, W>(session: &mut Session, input: R, output: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut banner = String::new();
    for line in session.transcript() {
        if let TranscriptLine::Output(text) = line {
            banner.push_str(text);
            banner.push('\n');
        }
    }
    write_flushed(output, &banner).await?;

    let mut lines = input.lines();
    loop {
        write_flushed(output, &session.prompt()).await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if let Some(text) = render(session.submit(&line).await) {
            write_flushed(output, &text).await?;
        }
    }

    write_flushed(output, "\n").await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_tracing(&cli);

    let storage: Arc<dyn Storage> = match &cli.storage_dir {
        Some(dir) => Arc::new(FileStorage::new(dir.clone())),
        None => Arc::new(MemoryStorage::new()),
    };

    let mut session = Session::start(SessionOptions {
        storage: Some(storage),
        storage_key: cli.storage_key.clone(),
        welcome: cli.command.is_none(),
        ..Default::default()
    })
    .await;

    let mut stdout = tokio::io::stdout();
    let result = match cli.command {
        Some(line) => match render(session.submit(&line).await) {
            Some(text) => write_flushed(&mut stdout, &text).await,
            None => Ok(()),
        },
        None => run_repl(&mut session, BufReader::new(tokio::io::stdin()), &mut stdout).await,
    };

    let mut failed = false;
    if let Err(e) = result {
        error!("Terminal I/O failed: {}", e);
        failed = true;
    }
    if let Err(e) = session.save().await {
        error!("Failed to save file system: {}", e);
        failed = true;
    }
    if failed {
        std::process::exit(1);
    }
}
