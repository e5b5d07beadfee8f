use std::io::{self, BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};

use rand::Rng;
use rand::seq::index;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::QuizError;
use crate::config::QuizConfig;
use crate::models::{Answer, Question, ShuffledQuestion};
use crate::ui::{self, Palette};

/// Where a session is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loaded,
    SufficientCheckPassed,
    /// Asking the question at this 0-based position in the round.
    Prompting(usize),
    Summarized,
    Done,
}

/// A rejected answer typed at the prompt. Always recovered by re-prompting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("{choice} is not between 1 and {max}")]
    OutOfRange { choice: String, max: usize },
}

/// An accepted answer and how many attempts were rejected before it.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    /// The 1-based number the user typed.
    pub choice: usize,
    /// The answer shown under that number.
    pub answer: &'a Answer,
    pub retries: usize,
}

/// Final result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub correct: usize,
    pub score: u32,
}

pub fn check_sufficient_questions(available: usize, required: usize) -> Result<(), QuizError> {
    if available < required {
        return Err(QuizError::InsufficientQuestions {
            required,
            available,
        });
    }
    Ok(())
}

/// Draw `n` distinct questions uniformly at random.
///
/// Asking for more questions than exist returns all of them in random order.
pub fn sample_round<'a, R: Rng + ?Sized>(
    questions: &'a [Question],
    n: usize,
    rng: &mut R,
) -> Vec<&'a Question> {
    let amount = n.min(questions.len());
    index::sample(rng, questions.len(), amount)
        .into_iter()
        .map(|i| &questions[i])
        .collect()
}

/// Score is the percentage of correct answers, rounded up.
pub fn summarize(correct: usize, total: usize) -> Summary {
    let score = if total == 0 {
        0
    } else {
        (correct * 100).div_ceil(total).min(100) as u32
    };
    Summary {
        total,
        correct,
        score,
    }
}

/// Interpret one line typed at the prompt as a 1-based answer number.
pub fn parse_choice(input: &str, answers: usize) -> Result<usize, InvalidInput> {
    let trimmed = input.trim();
    let out_of_range = || InvalidInput::OutOfRange {
        choice: trimmed.to_string(),
        max: answers,
    };

    let choice: i64 = trimmed.parse().map_err(|err: ParseIntError| {
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
            _ => InvalidInput::NotANumber(trimmed.to_string()),
        }
    })?;

    if choice < 1 || choice as u64 > answers as u64 {
        return Err(out_of_range());
    }
    Ok(choice as usize)
}

/// Ask for an answer number until a valid one is entered.
///
/// The question must already be on screen; only the prompt is repeated, and
/// `shown` keeps the same numbering for every attempt. Lines that are not
/// valid UTF-8 count as non-numeric input.
pub fn prompt_and_validate<'a, I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    palette: &Palette,
    shown: &ShuffledQuestion<'a>,
) -> Result<Selection<'a>, QuizError> {
    let mut retries = 0;
    let mut buf = Vec::new();

    loop {
        ui::render_prompt(output)?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(QuizError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);

        let picked = parse_choice(&line, shown.len()).and_then(|choice| {
            shown
                .answer_at(choice)
                .map(|answer| (choice, answer))
                .ok_or_else(|| InvalidInput::OutOfRange {
                    choice: choice.to_string(),
                    max: shown.len(),
                })
        });

        match picked {
            Ok((choice, answer)) => {
                return Ok(Selection {
                    choice,
                    answer,
                    retries,
                });
            }
            Err(err) => {
                debug!(error = %err, retries, "rejected answer");
                retries += 1;
                ui::render_invalid_answer(output, palette)?;
            }
        }
    }
}

/// Drives one round and keeps its score.
pub struct Session {
    config: QuizConfig,
    palette: Palette,
    phase: Phase,
    correct: usize,
    answered: usize,
}

impl Session {
    pub fn new(config: QuizConfig) -> Self {
        let palette = Palette::new(config.color);
        Self {
            config,
            palette,
            phase: Phase::Idle,
            correct: 0,
            answered: 0,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn correct_count(&self) -> usize {
        self.correct
    }

    pub fn answered_count(&self) -> usize {
        self.answered
    }

    fn enter(&mut self, phase: Phase) {
        debug!(from = ?self.phase, to = ?phase, "session phase");
        self.phase = phase;
    }

    /// Compare the chosen answer with the question's correct one and report it.
    pub fn record_answer<O: Write>(
        &mut self,
        output: &mut O,
        selected: &Answer,
        question: &Question,
    ) -> io::Result<bool> {
        let is_correct = question.is_correct(selected.id());
        self.answered += 1;
        if is_correct {
            self.correct += 1;
        }

        ui::render_verdict(output, &self.palette, is_correct, question.correct_answer())?;
        Ok(is_correct)
    }

    /// Play a full round over `questions` and print the summary.
    ///
    /// Fails before any prompt is written if there are not enough questions.
    pub fn run<I, O, R>(
        &mut self,
        questions: &[Question],
        input: &mut I,
        output: &mut O,
        rng: &mut R,
    ) -> Result<Summary, QuizError>
    where
        I: BufRead,
        O: Write,
        R: Rng + ?Sized,
    {
        let required = self.config.questions_per_round;
        self.correct = 0;
        self.answered = 0;
        self.enter(Phase::Loaded);

        check_sufficient_questions(questions.len(), required)?;
        self.enter(Phase::SufficientCheckPassed);

        let round = sample_round(questions, required, rng);
        debug!(available = questions.len(), sampled = round.len(), "sampled round");

        for (position, question) in round.iter().enumerate() {
            self.enter(Phase::Prompting(position));

            let shown = question.shuffle(rng);
            ui::render_question(output, position + 1, &shown)?;

            let selection = prompt_and_validate(input, output, &self.palette, &shown)?;
            self.record_answer(output, selection.answer, question)?;
            writeln!(output)?;
        }

        let summary = summarize(self.correct, round.len());
        self.enter(Phase::Summarized);
        info!(
            total = summary.total,
            correct = summary.correct,
            score = summary.score,
            "round finished"
        );

        if self.config.json {
            serde_json::to_writer(&mut *output, &summary).map_err(io::Error::from)?;
            writeln!(output)?;
        } else {
            ui::render_summary(output, &self.palette, &summary)?;
        }
        output.flush()?;

        self.enter(Phase::Done);
        Ok(summary)
    }
}
