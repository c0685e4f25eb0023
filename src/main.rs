mod model;
mod parser;
mod reader;

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cvparse", about = "Heuristic resume-to-JSON parser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a resume document (pdf, docx, doc)
    Parse {
        /// Path to the document
        path: PathBuf,
    },
    /// Parse already-extracted plain text (UTF-8 file, or "-" for stdin)
    Text {
        /// Path to the text file
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let resume = match cli.command {
        Commands::Parse { path } => parser::parse_document(&path)?,
        Commands::Text { path } => {
            let text = if path.as_os_str() == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                std::fs::read_to_string(&path)?
            };
            parser::parse(&text)
        }
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&resume)?
    } else {
        serde_json::to_string(&resume)?
    };
    println!("{json}");

    Ok(())
}
