use std::fmt;
use std::num::{IntErrorKind, ParseIntError};

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;
use uuid::Uuid;

/// Field separator used by question files.
pub const DELIMITER: char = '~';

/// Minimum number of answers a question must offer.
pub const MIN_ANSWERS: usize = 2;

/// Stable identifier assigned to an answer when its line is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnswerId(Uuid);

impl AnswerId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reasons a question line can be rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected at least 2 answers, found {found}")]
    TooFewAnswers { found: usize },

    #[error("correct-answer index `{value}` is not an integer")]
    InvalidIndex { value: String },

    #[error("correct-answer index {index} is outside 1..={answers}")]
    IndexOutOfRange { index: String, answers: usize },
}

#[derive(Debug, Clone)]
pub struct Answer {
    id: AnswerId,
    text: String,
    is_correct: bool,
}

impl Answer {
    pub fn id(&self) -> AnswerId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A parsed question with exactly one correct answer.
#[derive(Debug, Clone)]
pub struct Question {
    text: String,
    answers: Vec<Answer>,
    correct: AnswerId,
}

impl Question {
    /// Parse one `question~answer~...~answer~index` line.
    ///
    /// The trailing index is 1-based and refers to the answers in the order
    /// they appear on the line.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.strip_prefix('\u{feff}').unwrap_or(line);
        let fields: Vec<&str> = line.split(DELIMITER).collect();

        let found = fields.len().saturating_sub(2);
        if found < MIN_ANSWERS {
            return Err(ParseError::TooFewAnswers { found });
        }

        let raw_index = fields[fields.len() - 1].trim();
        let out_of_range = || ParseError::IndexOutOfRange {
            index: raw_index.to_string(),
            answers: found,
        };
        let index: i64 = raw_index.parse().map_err(|err: ParseIntError| {
            match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
                _ => ParseError::InvalidIndex {
                    value: raw_index.to_string(),
                },
            }
        })?;
        if index < 1 || index > found as i64 {
            return Err(out_of_range());
        }
        let correct_position = (index - 1) as usize;

        let answers: Vec<Answer> = fields[1..fields.len() - 1]
            .iter()
            .enumerate()
            .map(|(position, text)| Answer {
                id: AnswerId::new(),
                text: text.to_string(),
                is_correct: position == correct_position,
            })
            .collect();
        let correct = answers[correct_position].id;

        Ok(Self {
            text: fields[0].to_string(),
            answers,
            correct,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Answers in file order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn number_of_answers(&self) -> usize {
        self.answers.len()
    }

    pub fn correct_answer(&self) -> &Answer {
        self.answers
            .iter()
            .find(|a| a.id == self.correct)
            .unwrap_or(&self.answers[0])
    }

    pub fn is_correct(&self, id: AnswerId) -> bool {
        self.correct == id
    }

    /// Fix a random ordering of the answers for one prompt cycle.
    pub fn shuffle<R: Rng + ?Sized>(&self, rng: &mut R) -> ShuffledQuestion<'_> {
        let mut order: Vec<usize> = (0..self.answers.len()).collect();
        order.shuffle(rng);
        ShuffledQuestion {
            question: self,
            order,
        }
    }
}

/// A question as it is shown to the user.
///
/// The permutation is chosen once, so the numbers printed by `Display` and the
/// numbers accepted by [`ShuffledQuestion::answer_at`] always agree.
#[derive(Debug, Clone)]
pub struct ShuffledQuestion<'a> {
    question: &'a Question,
    order: Vec<usize>,
}

impl<'a> ShuffledQuestion<'a> {
    pub fn question(&self) -> &'a Question {
        self.question
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Answer shown under the 1-based `choice`, if any.
    pub fn answer_at(&self, choice: usize) -> Option<&'a Answer> {
        let position = *self.order.get(choice.checked_sub(1)?)?;
        self.question.answers.get(position)
    }

    /// Answers in display order.
    pub fn answers(&self) -> impl Iterator<Item = &'a Answer> + '_ {
        let answers = &self.question.answers;
        self.order.iter().map(move |&i| &answers[i])
    }

    /// The 1-based number under which the correct answer is shown.
    pub fn correct_choice(&self) -> usize {
        self.answers()
            .position(|a| self.question.is_correct(a.id))
            .map_or(0, |i| i + 1)
    }
}

impl fmt::Display for ShuffledQuestion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.question.text)?;
        for (i, answer) in self.answers().enumerate() {
            write!(f, "\n\t{}) {}", i + 1, answer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_parse_marks_exactly_one_correct() {
        let q = Question::parse("Who sang Thriller?~Prince~Michael Jackson~Madonna~2").unwrap();

        assert_eq!(q.text(), "Who sang Thriller?");
        assert_eq!(q.number_of_answers(), 3);
        assert_eq!(q.answers().iter().filter(|a| a.is_correct()).count(), 1);
        assert!(q.answers()[1].is_correct());
        assert_eq!(q.correct_answer().text(), "Michael Jackson");
        assert!(q.is_correct(q.answers()[1].id()));
        assert!(!q.is_correct(q.answers()[0].id()));
    }

    #[test]
    fn test_parse_every_valid_index() {
        for k in 1..=4 {
            let q = Question::parse(&format!("Q~a~b~c~d~{}", k)).unwrap();
            assert_eq!(q.number_of_answers(), 4);
            for (i, answer) in q.answers().iter().enumerate() {
                assert_eq!(answer.is_correct(), i == k - 1);
            }
        }
    }

    #[test]
    fn test_parse_trims_index_field() {
        let q = Question::parse("Q~a~b~ 1 \r\n").unwrap();
        assert_eq!(q.correct_answer().text(), "a");
    }

    #[test]
    fn test_parse_ignores_byte_order_mark() {
        let q = Question::parse("\u{feff}Q~a~b~2").unwrap();
        assert_eq!(q.text(), "Q");
    }

    #[test]
    fn test_answer_ids_are_unique() {
        let q = Question::parse("Q~a~a~a~1").unwrap();
        let ids: HashSet<_> = q.answers().iter().map(Answer::id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_parse_rejects_non_integer_index() {
        assert_eq!(
            Question::parse("Q~a~b~two").unwrap_err(),
            ParseError::InvalidIndex {
                value: "two".to_string()
            }
        );
        assert!(matches!(
            Question::parse("Q~a~b~"),
            Err(ParseError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_index() {
        assert_eq!(
            Question::parse("Q~a~b~3").unwrap_err(),
            ParseError::IndexOutOfRange {
                index: "3".to_string(),
                answers: 2
            }
        );
        assert!(matches!(
            Question::parse("Q~a~b~0"),
            Err(ParseError::IndexOutOfRange { index, .. }) if index == "0"
        ));
        assert!(matches!(
            Question::parse("Q~a~b~-1"),
            Err(ParseError::IndexOutOfRange { index, .. }) if index == "-1"
        ));
    }

    #[test]
    fn test_parse_overflowing_index_is_out_of_range() {
        assert_eq!(
            Question::parse("Q~a~b~123456789012345678901234").unwrap_err(),
            ParseError::IndexOutOfRange {
                index: "123456789012345678901234".to_string(),
                answers: 2
            }
        );
    }

    #[test]
    fn test_parse_rejects_too_few_answers() {
        assert_eq!(
            Question::parse("Q~a~1").unwrap_err(),
            ParseError::TooFewAnswers { found: 1 }
        );
        assert_eq!(
            Question::parse("Q~1").unwrap_err(),
            ParseError::TooFewAnswers { found: 0 }
        );
        assert_eq!(
            Question::parse("just some text").unwrap_err(),
            ParseError::TooFewAnswers { found: 0 }
        );
    }

    #[test]
    fn test_shuffle_keeps_the_same_answers() {
        let q = Question::parse("Q~a~b~c~d~e~3").unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut expected: Vec<&str> = q.answers().iter().map(Answer::text).collect();
        expected.sort();
        for _ in 0..20 {
            let shown = q.shuffle(&mut rng);
            let mut texts: Vec<&str> = shown.answers().map(Answer::text).collect();
            texts.sort();
            assert_eq!(texts, expected);
        }
    }

    #[test]
    fn test_display_numbering_matches_answer_at() {
        let q = Question::parse("Capital of France?~Berlin~Paris~Rome~Madrid~2").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let shown = q.shuffle(&mut rng);
        let rendered = shown.to_string();

        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("Capital of France?"));
        for (i, line) in lines.enumerate() {
            let answer = shown.answer_at(i + 1).unwrap();
            assert_eq!(line, format!("\t{}) {}", i + 1, answer.text()));
        }
        assert!(shown.answer_at(0).is_none());
        assert!(shown.answer_at(5).is_none());
    }

    #[test]
    fn test_correct_choice_points_at_correct_answer() {
        let q = Question::parse("Q~a~b~c~d~4").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            let shown = q.shuffle(&mut rng);
            let answer = shown.answer_at(shown.correct_choice()).unwrap();
            assert_eq!(answer.text(), "d");
            assert!(answer.is_correct());
        }
    }
}
