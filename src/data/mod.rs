mod loader;

pub use loader::{DEFAULT_QUESTIONS_PATH, load_questions, load_questions_from_path};
