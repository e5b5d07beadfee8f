use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::QuizError;
use crate::models::Question;

/// Question file looked up in the working directory when none is given.
pub const DEFAULT_QUESTIONS_PATH: &str = "ConcertTriviaUTF8.dat";

/// Parse every non-blank line of `reader` into a question.
///
/// The first malformed line aborts the load with its 1-based line number.
pub fn load_questions<R: BufRead>(reader: R) -> Result<Vec<Question>, QuizError> {
    let mut questions = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            debug!(line = index + 1, "skipping blank line");
            continue;
        }

        let question = Question::parse(&line).map_err(|source| QuizError::Parse {
            line: index + 1,
            source,
        })?;
        questions.push(question);
    }

    Ok(questions)
}

pub fn load_questions_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, QuizError> {
    let path = path.as_ref();
    let file_error = |source| QuizError::File {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(file_error)?;
    let questions = load_questions(BufReader::new(file)).map_err(|err| match err {
        QuizError::Io(source) => file_error(source),
        other => other,
    })?;

    info!(
        path = %path.display(),
        count = questions.len(),
        "loaded questions"
    );
    Ok(questions)
}
