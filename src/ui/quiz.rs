use std::io::{self, Write};

use crossterm::style::Color;

use crate::models::{Answer, ShuffledQuestion};

use super::Palette;

pub const ANSWER_PROMPT: &str = "Enter the number of the correct answer: ";
pub const INVALID_ANSWER: &str = "Invalid answer, try again!";

/// Write `number. question` followed by its numbered answers.
pub fn render_question<W: Write>(
    out: &mut W,
    number: usize,
    shown: &ShuffledQuestion<'_>,
) -> io::Result<()> {
    writeln!(out, "{}. {}", number, shown)
}

pub fn render_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", ANSWER_PROMPT)?;
    out.flush()
}

pub fn render_invalid_answer<W: Write>(out: &mut W, palette: &Palette) -> io::Result<()> {
    writeln!(out, "{}", palette.paint(INVALID_ANSWER, Color::Yellow))
}

/// Tell the user whether they picked the right answer.
pub fn render_verdict<W: Write>(
    out: &mut W,
    palette: &Palette,
    is_correct: bool,
    correct: &Answer,
) -> io::Result<()> {
    if is_correct {
        writeln!(out, "{}", palette.paint("Correct answer!", Color::Green))
    } else {
        writeln!(
            out,
            "{} The correct answer is {}",
            palette.paint("Incorrect answer!", Color::Red),
            correct
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::Question;

    #[test]
    fn test_render_question_is_numbered() {
        let q = Question::parse("Who?~a~b~1").unwrap();
        let shown = q.shuffle(&mut StdRng::seed_from_u64(3));
        let mut out = Vec::new();

        render_question(&mut out, 4, &shown).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("4. Who?\n\t1) "));
        assert!(text.contains("\t2) "));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_render_verdict_names_correct_answer() {
        let q = Question::parse("Who?~Alice~Bob~2").unwrap();
        let mut out = Vec::new();

        render_verdict(&mut out, &Palette::plain(), false, q.correct_answer()).unwrap();
        render_verdict(&mut out, &Palette::plain(), true, q.correct_answer()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Incorrect answer! The correct answer is Bob\nCorrect answer!\n"
        );
    }
}
