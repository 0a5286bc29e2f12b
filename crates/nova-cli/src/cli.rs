use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nova, a conversational assistant backed by Gemini.
#[derive(Parser, Debug)]
#[command(name = "nova", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Gemini API key. Defaults to the environment variable named in config.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat session (default).
    Chat,
    /// Ask a single question and print the answer.
    Ask {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Generate an image from a description.
    Image {
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
        /// Write the generated image to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate code from a UI screenshot or mockup.
    Code { path: PathBuf },
    /// Generate a multiple-choice quiz.
    Quiz {
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,
        /// Number of questions (1-50).
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..=50))]
        count: Option<u32>,
        #[arg(long, value_parser = ["easy", "medium", "hard"])]
        difficulty: Option<String>,
    },
    /// Print the local analysis of a message as JSON. No network access.
    Analyze {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

impl Command {
    /// True for commands that talk to the model.
    pub fn needs_api_key(&self) -> bool {
        !matches!(self, Self::Analyze { .. })
    }
}

pub fn parse() -> Args {
    Args::parse()
}
