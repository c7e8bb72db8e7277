use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use shotbook::export::{DocumentRenderer, MarkdownExporter};
use shotbook::SessionStore;

/// Edit and export screenshot sessions
#[derive(Parser)]
#[command(name = "shotbook", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a fresh timestamped session directory and print its path
    Init,
    /// List the records in a session
    List {
        /// Session directory
        session_dir: PathBuf,
    },
    /// Set the description of one record
    Describe {
        session_dir: PathBuf,
        /// Zero-based record index
        index: usize,
        /// New description text
        text: String,
    },
    /// Delete one record (the image file itself is kept)
    Remove {
        session_dir: PathBuf,
        /// Zero-based record index
        index: usize,
    },
    /// Revert the most recent edit
    Undo {
        session_dir: PathBuf,
    },
    /// Render the session to a Markdown manual
    Export {
        session_dir: PathBuf,
        /// Output file (defaults to manual.md inside the session)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Document title
        #[arg(long)]
        title: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> shotbook::Result<()> {
    match command {
        Command::Init => {
            let dir = shotbook::config::new_session_dir().map_err(|source| shotbook::Error::Io {
                path: shotbook::config::sessions_root(),
                source,
            })?;
            println!("{}", dir.display());
        }
        Command::List { session_dir } => {
            let store = SessionStore::open(&session_dir)?;
            if store.is_empty() {
                println!("(empty session)");
            }
            for record in store.records() {
                let annotation = if record.description.is_empty() {
                    "-"
                } else {
                    record.description.as_str()
                };
                println!("{:>3}  {}  {}", record.order, record.filepath, annotation);
            }
        }
        Command::Describe {
            session_dir,
            index,
            text,
        } => {
            let mut store = SessionStore::open(&session_dir)?;
            store.update_description(index, text)?;
        }
        Command::Remove { session_dir, index } => {
            let mut store = SessionStore::open(&session_dir)?;
            store.delete(index)?;
        }
        Command::Undo { session_dir } => {
            let mut store = SessionStore::open(&session_dir)?;
            if store.undo()? {
                println!("reverted last edit ({} records)", store.len());
            } else {
                println!("nothing to undo");
            }
        }
        Command::Export {
            session_dir,
            output,
            title,
        } => {
            let store = SessionStore::open(&session_dir)?;
            let output = output.unwrap_or_else(|| session_dir.join("manual.md"));
            let written =
                MarkdownExporter::new().render(store.records(), title.as_deref(), &output)?;
            println!("wrote {}", written.display());
        }
    }
    Ok(())
}
