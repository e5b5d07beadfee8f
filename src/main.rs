use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, ensure};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
use trivia::{ColorChoice, DEFAULT_QUESTIONS_PATH, DEFAULT_QUESTIONS_PER_ROUND, Quiz, QuizConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Answer a round of trivia questions", long_about = None)]
struct Args {
    /// File to load the questions from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Number of questions in the round
    #[arg(short = 'n', long, default_value_t = DEFAULT_QUESTIONS_PER_ROUND)]
    count: usize,

    /// Seed for a reproducible round
    #[arg(long)]
    seed: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// When to colour the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("trivia={level}")))
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    ensure!(args.count >= 1, "--count must be at least 1");

    let config = QuizConfig {
        questions_per_round: args.count,
        json: args.json,
        color: args.color,
        seed: args.seed,
    };

    let quiz = Quiz::from_file(&args.questions, config).context("could not load quiz")?;
    quiz.run().context("quiz aborted")?;
    Ok(())
}
