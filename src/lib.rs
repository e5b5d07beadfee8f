//! # trivia
//!
//! A command-line trivia quiz. Questions are read from a `~`-delimited text
//! file, a round of them is drawn at random, and the user answers each one by
//! number on standard input.
//!
//! ## Question format
//!
//! One question per line:
//!
//! ```text
//! Who sang Thriller?~Prince~Michael Jackson~Madonna~2
//! ```
//!
//! The last field is the 1-based position of the correct answer among the
//! answer fields. There is no escaping, so `~` cannot appear in question or
//! answer text.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia::{Quiz, QuizConfig, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_file("ConcertTriviaUTF8.dat", QuizConfig::default())?;
//!     let summary = quiz.run()?;
//!     println!("scored {}", summary.score);
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;

use std::io;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

pub use app::{
    InvalidInput, Phase, Selection, Session, Summary, check_sufficient_questions,
    prompt_and_validate, sample_round, summarize,
};
pub use config::{ColorChoice, DEFAULT_QUESTIONS_PER_ROUND, QuizConfig};
pub use data::{DEFAULT_QUESTIONS_PATH, load_questions, load_questions_from_path};
pub use models::{Answer, AnswerId, ParseError, Question, ShuffledQuestion};

/// Error type for quiz operations.
///
/// Every variant is fatal for a run. Bad answers typed at the prompt are
/// reported as [`InvalidInput`] and handled by re-prompting instead.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question source could not be read.
    #[error("failed to read questions from {}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A question line is malformed.
    #[error("invalid question on line {line}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// Fewer questions were loaded than a round needs.
    #[error("not enough questions: requested {required}, available {available}")]
    InsufficientQuestions { required: usize, available: usize },

    /// Standard input ended before every question was answered.
    #[error("input closed before the quiz finished")]
    InputClosed,

    /// IO error while talking to the user.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A loaded question set ready to be played in the terminal.
pub struct Quiz {
    questions: Vec<Question>,
    config: QuizConfig,
}

impl Quiz {
    pub fn new(questions: Vec<Question>, config: QuizConfig) -> Self {
        Self { questions, config }
    }

    /// Load a quiz from a question file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use trivia::{Quiz, QuizConfig};
    ///
    /// let quiz = Quiz::from_file("questions.dat", QuizConfig::default()).expect("Failed to load quiz");
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P, config: QuizConfig) -> Result<Self, QuizError> {
        let questions = load_questions_from_path(path)?;
        Ok(Self::new(questions, config))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Play one round on stdin/stdout.
    pub fn run(self) -> Result<Summary, QuizError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let mut session = Session::new(self.config);

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout().lock();
        session.run(&self.questions, &mut input, &mut output, &mut rng)
    }
}
