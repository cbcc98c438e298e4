/// Transient state of one mounted quiz view.
///
/// `dropped_answer_text` and `is_correct` are always both set or both unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub dropped_answer_text: Option<String>,
    pub is_correct: Option<bool>,
    pub reveal_correct_answer: bool,
}

impl InteractionState {
    pub fn has_dropped(&self) -> bool {
        self.dropped_answer_text.is_some()
    }
}
