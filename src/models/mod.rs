mod interaction;
mod question;

pub use interaction::InteractionState;
pub use question::{AnswerOption, Question};
