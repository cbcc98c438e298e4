mod loader;

pub use loader::{load_question_from_json, LoadError};
