use std::io::{self, Write};

use crossterm::style::Color;

use crate::app::Summary;

use super::Palette;

pub fn render_summary<W: Write>(
    out: &mut W,
    palette: &Palette,
    summary: &Summary,
) -> io::Result<()> {
    writeln!(out, "Game over! Summary:")?;
    writeln!(out, "    Total questions: {}", summary.total)?;
    writeln!(out, "    Correct answers: {}", summary.correct)?;
    writeln!(
        out,
        "    Score: {}",
        palette.paint(summary.score, grade_color(summary.score))
    )?;
    out.flush()
}

pub fn grade_color(score: u32) -> Color {
    match score {
        90.. => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}
