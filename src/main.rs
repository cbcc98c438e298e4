use std::path::PathBuf;

use clap::Parser;
use drop_quiz::dnd::BackendPreference;
use drop_quiz::logging::init_file_logging;
use drop_quiz::platform::detect_speaker;
use drop_quiz::{Question, Quiz};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the question from (defaults to the built-in question)
    #[arg(short, long)]
    question: Option<PathBuf>,

    /// Drag-and-drop input model
    #[arg(short, long, value_enum, default_value_t = BackendPreference::Auto)]
    backend: BackendPreference,

    /// Never read the question aloud, even if a speech engine is installed
    #[arg(long)]
    no_speech: bool,

    /// Append diagnostics to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = init_file_logging(path) {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let quiz = match &args.question {
        Some(path) => Quiz::from_json(path),
        None => Ok(Quiz::new(Question::seed())),
    };
    let mut quiz = match quiz {
        Ok(quiz) => quiz.with_backend(args.backend),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if !args.no_speech {
        if let Some(speaker) = detect_speaker() {
            quiz = quiz.with_speaker(speaker);
        }
    }

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
