use crate::models::{AnswerOption, InteractionState, Question};
use crate::platform::Speaker;

/// Language tag used when reading the question aloud.
pub const SPEECH_LANG: &str = "en-US";

/// What the drop zone shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZoneMode {
    /// Nothing dropped yet.
    Empty,
    /// An accepted card is over the zone. Content and background stay as
    /// they were: placeholder before the first drop, last verdict after.
    Hovering,
    Correct,
    Incorrect,
}

/// The quiz view: one question plus the state of the current mount.
pub struct App {
    question: Question,
    interaction: InteractionState,
    focused_option: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::with_question(Question::seed())
    }

    pub fn with_question(question: Question) -> Self {
        let mut app = Self {
            question,
            interaction: InteractionState::default(),
            focused_option: 0,
            should_quit: false,
        };
        app.mount();
        app
    }

    /// Reset the interaction state. Safe to call any number of times.
    pub fn mount(&mut self) {
        self.interaction = InteractionState::default();
        self.focused_option = 0;
        tracing::debug!("quiz view mounted");
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn options(&self) -> &[AnswerOption] {
        &self.question.options
    }

    /// Record a card landing on the drop zone.
    pub fn on_option_dropped(&mut self, option: &AnswerOption) {
        let correct = self.question.is_correct(option);
        self.interaction.dropped_answer_text = Some(option.text.clone());
        self.interaction.is_correct = Some(correct);
        self.interaction.reveal_correct_answer = true;
        tracing::info!(option = %option.id, text = %option.text, correct, "answer dropped");
    }

    /// Drop the card at `index`, as if dragged. Returns false if there is none.
    pub fn drop_option_at(&mut self, index: usize) -> bool {
        match self.question.options.get(index).cloned() {
            Some(option) => {
                self.focused_option = index;
                self.on_option_dropped(&option);
                true
            }
            None => false,
        }
    }

    pub fn drop_focused_option(&mut self) -> bool {
        self.drop_option_at(self.focused_option)
    }

    pub fn focused_option(&self) -> usize {
        self.focused_option
    }

    pub fn focus_next_option(&mut self) {
        let count = self.question.options.len();
        if count > 0 {
            self.focused_option = (self.focused_option + 1) % count;
        }
    }

    pub fn focus_previous_option(&mut self) {
        let count = self.question.options.len();
        if count > 0 {
            self.focused_option = (self.focused_option + count - 1) % count;
        }
    }

    /// Whether this card gets the success treatment.
    pub fn is_revealed_correct(&self, option: &AnswerOption) -> bool {
        self.interaction.reveal_correct_answer
            && self
                .question
                .correct_option()
                .is_some_and(|correct| correct.id == option.id)
    }

    pub fn drop_zone_mode(&self, hovering: bool) -> DropZoneMode {
        if hovering {
            DropZoneMode::Hovering
        } else if !self.interaction.has_dropped() {
            DropZoneMode::Empty
        } else if self.interaction.is_correct == Some(true) {
            DropZoneMode::Correct
        } else {
            DropZoneMode::Incorrect
        }
    }

    pub fn previous_enabled(&self) -> bool {
        true
    }

    pub fn next_enabled(&self) -> bool {
        self.interaction.has_dropped()
    }

    /// Placeholder: there is no earlier question.
    pub fn go_previous(&self) {
        tracing::debug!("previous pressed");
    }

    /// Placeholder: there is no later question.
    pub fn go_next(&self) {
        if self.next_enabled() {
            tracing::debug!("next pressed");
        }
    }

    /// Read the question aloud if a speaker is available.
    pub fn pronounce_question(&self, speaker: Option<&dyn Speaker>) {
        let Some(speaker) = speaker else {
            tracing::debug!("pronounce requested without a speech engine");
            return;
        };
        if let Err(err) = speaker.speak(&self.question.text, SPEECH_LANG) {
            tracing::warn!("speech failed: {}", err);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::platform::SpeechError;

    #[derive(Default)]
    struct RecordingSpeaker {
        spoken: RefCell<Vec<(String, String)>>,
    }

    impl Speaker for RecordingSpeaker {
        fn speak(&self, text: &str, lang: &str) -> Result<(), SpeechError> {
            self.spoken
                .borrow_mut()
                .push((text.to_string(), lang.to_string()));
            Ok(())
        }
    }

    struct BrokenSpeaker;

    impl Speaker for BrokenSpeaker {
        fn speak(&self, _text: &str, _lang: &str) -> Result<(), SpeechError> {
            Err(SpeechError::Spawn {
                engine: "espeak",
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }
    }

    fn option(app: &App, text: &str) -> AnswerOption {
        app.options()
            .iter()
            .find(|o| o.text == text)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let app = App::new();
        assert_eq!(app.interaction(), &InteractionState::default());
        assert_eq!(app.drop_zone_mode(false), DropZoneMode::Empty);
        assert!(app.previous_enabled());
        assert!(!app.next_enabled());
    }

    #[test]
    fn test_every_drop_records_text_and_correctness() {
        let mut app = App::new();
        for option in app.options().to_vec() {
            app.on_option_dropped(&option);
            let state = app.interaction();
            assert_eq!(state.dropped_answer_text.as_deref(), Some(option.text.as_str()));
            assert_eq!(state.is_correct, Some(option.text == "Paris"));
            assert!(state.reveal_correct_answer);
        }
    }

    #[test]
    fn test_correct_and_incorrect_modes() {
        let mut app = App::new();

        let paris = option(&app, "Paris");
        app.on_option_dropped(&paris);
        assert_eq!(app.drop_zone_mode(false), DropZoneMode::Correct);

        for text in ["London", "Berlin", "Madrid"] {
            let wrong = option(&app, text);
            app.on_option_dropped(&wrong);
            assert_eq!(app.interaction().is_correct, Some(false));
            assert_eq!(app.drop_zone_mode(false), DropZoneMode::Incorrect);
        }
    }

    #[test]
    fn test_no_lockout_after_wrong_answer() {
        let mut app = App::new();
        let london = option(&app, "London");
        let paris = option(&app, "Paris");

        app.on_option_dropped(&london);
        app.on_option_dropped(&paris);
        assert_eq!(app.interaction().is_correct, Some(true));

        let before = app.interaction().clone();
        app.on_option_dropped(&paris);
        assert_eq!(app.interaction(), &before);
    }

    #[test]
    fn test_only_correct_option_revealed() {
        let mut app = App::new();
        assert!(app.options().iter().all(|o| !app.is_revealed_correct(o)));

        let berlin = option(&app, "Berlin");
        app.on_option_dropped(&berlin);

        let revealed: Vec<_> = app
            .options()
            .iter()
            .filter(|o| app.is_revealed_correct(o))
            .map(|o| o.text.as_str())
            .collect();
        assert_eq!(revealed, vec!["Paris"]);
    }

    #[test]
    fn test_repeated_correct_text_reveals_one_card() {
        let mut app = App::with_question(Question {
            text: "Red planet?".into(),
            correct_answer: "Mars".into(),
            options: vec![
                AnswerOption::new("1", "Mars"),
                AnswerOption::new("2", "Venus"),
                AnswerOption::new("3", "Mars"),
            ],
        });
        app.drop_option_at(1);

        let revealed: Vec<_> = app
            .options()
            .iter()
            .filter(|o| app.is_revealed_correct(o))
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(revealed, vec!["1"]);
    }

    #[test]
    fn test_next_enabled_after_first_drop() {
        let mut app = App::new();
        assert!(!app.next_enabled());

        assert!(app.drop_option_at(1));
        assert!(app.next_enabled());
        assert!(app.drop_option_at(0));
        assert!(app.next_enabled());
        assert!(app.previous_enabled());
    }

    #[test]
    fn test_hover_precedence() {
        let mut app = App::new();
        // Hover highlights the zone before the first drop too.
        assert_eq!(app.drop_zone_mode(true), DropZoneMode::Hovering);
        assert_eq!(app.drop_zone_mode(false), DropZoneMode::Empty);

        app.drop_option_at(0);
        assert_eq!(app.drop_zone_mode(true), DropZoneMode::Hovering);
        assert_eq!(app.drop_zone_mode(false), DropZoneMode::Correct);
    }

    #[test]
    fn test_pronounce_without_speaker_is_noop() {
        let mut app = App::new();
        app.drop_option_at(2);
        let before = app.interaction().clone();

        app.pronounce_question(None);
        app.pronounce_question(Some(&BrokenSpeaker));

        assert_eq!(app.interaction(), &before);
    }

    #[test]
    fn test_pronounce_uses_question_text_and_lang() {
        let app = App::new();
        let speaker = RecordingSpeaker::default();
        app.pronounce_question(Some(&speaker));

        let spoken = speaker.spoken.borrow();
        assert_eq!(
            spoken.as_slice(),
            &[(
                "What is the capital of France?".to_string(),
                "en-US".to_string()
            )]
        );
    }

    #[test]
    fn test_remount_resets_interaction() {
        let mut app = App::new();
        app.drop_option_at(3);
        app.focus_next_option();
        assert!(app.interaction().has_dropped());

        app.mount();
        assert_eq!(app.interaction(), &InteractionState::default());
        assert_eq!(app.focused_option(), 0);
        assert!(!app.next_enabled());

        app.mount();
        assert_eq!(app.interaction(), &InteractionState::default());
    }

    #[test]
    fn test_focus_wraps_and_handles_empty_options() {
        let mut app = App::new();
        app.focus_previous_option();
        assert_eq!(app.focused_option(), 3);
        app.focus_next_option();
        assert_eq!(app.focused_option(), 0);

        let mut empty = App::with_question(Question {
            text: "Q?".into(),
            correct_answer: "A".into(),
            options: Vec::new(),
        });
        empty.focus_next_option();
        assert!(!empty.drop_focused_option());
        assert!(!empty.next_enabled());
    }
}
