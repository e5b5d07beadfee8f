use clap::ValueEnum;

/// Number of questions in a round unless configured otherwise.
pub const DEFAULT_QUESTIONS_PER_ROUND: usize = 5;

/// When to emit ANSI colours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Settings for one run of the quiz.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Questions sampled for the round.
    pub questions_per_round: usize,
    /// Print the summary as JSON instead of the text block.
    pub json: bool,
    pub color: ColorChoice,
    /// Seed for reproducible sampling and shuffling.
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_per_round: DEFAULT_QUESTIONS_PER_ROUND,
            json: false,
            color: ColorChoice::Auto,
            seed: None,
        }
    }
}
