//! Plain-text rendering of the quiz.
//!
//! Everything is written to a `Write` so the same code serves stdout and the
//! in-memory buffers used by tests.

mod quiz;
mod result;

use std::fmt::Display;
use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

use crate::config::ColorChoice;

pub use quiz::{
    ANSWER_PROMPT, INVALID_ANSWER, render_invalid_answer, render_prompt, render_question,
    render_verdict,
};
pub use result::{grade_color, render_summary};

/// Decides whether output gets ANSI styling.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(choice: ColorChoice) -> Self {
        let enabled = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        };
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn paint<T: Display>(&self, text: T, color: Color) -> String {
        if self.enabled {
            text.to_string().with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}
