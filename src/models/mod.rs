mod question;

pub use question::{
    Answer, AnswerId, DELIMITER, MIN_ANSWERS, ParseError, Question, ShuffledQuestion,
};
