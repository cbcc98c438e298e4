use serde::{Deserialize, Serialize};

/// One answer card. `id` is unique within its question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
}

impl AnswerOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub correct_answer: String,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// The built-in question used when no file is given.
    pub fn seed() -> Self {
        Self {
            text: "What is the capital of France?".to_string(),
            correct_answer: "Paris".to_string(),
            options: vec![
                AnswerOption::new("1", "Paris"),
                AnswerOption::new("2", "London"),
                AnswerOption::new("3", "Berlin"),
                AnswerOption::new("4", "Madrid"),
            ],
        }
    }

    pub fn is_correct(&self, option: &AnswerOption) -> bool {
        option.text == self.correct_answer
    }

    /// The first option carrying the correct text; the one revealed after a drop.
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|option| self.is_correct(option))
    }
}
