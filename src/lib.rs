//! # drop-quiz
//!
//! A terminal quiz where the answer is dragged onto a drop zone.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use drop_quiz::{Question, Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // One question, mouse or touch drag-and-drop picked automatically
//!     let quiz = Quiz::new(Question::seed());
//!
//!     // Run the quiz in the terminal
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
pub mod dnd;
pub mod logging;
mod models;
pub mod platform;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures_util::StreamExt;
use ratatui::Frame;
use thiserror::Error;
use tokio::sync::oneshot;

pub use app::{App, DropZoneMode, SPEECH_LANG};
pub use data::{load_question_from_json, LoadError};
pub use models::{AnswerOption, InteractionState, Question};

use dnd::{BackendPreference, BackendSelector, DndBackend, DndEvent, DragPayload, ANSWER};
use platform::{CapabilityProbe, EnvProbe, Speaker};
use ui::{ClickAction, Regions};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading the question file.
    #[error("Failed to load question: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
    backend: BackendPreference,
    speaker: Option<Box<dyn Speaker>>,
    probe: Box<dyn CapabilityProbe>,
}

impl Quiz {
    /// Create a quiz for one question, without speech.
    pub fn new(question: Question) -> Self {
        Self {
            app: App::with_question(question),
            backend: BackendPreference::Auto,
            speaker: None,
            probe: Box::new(EnvProbe::new()),
        }
    }

    /// Load the question from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use drop_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("question.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let question = load_question_from_json(path)?;
        Ok(Self::new(question))
    }

    pub fn with_backend(mut self, backend: BackendPreference) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_speaker<S: Speaker + 'static>(mut self, speaker: S) -> Self {
        self.speaker = Some(Box::new(speaker));
        self
    }

    pub fn with_probe<P: CapabilityProbe>(mut self, probe: P) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub async fn run(self) -> Result<(), QuizError> {
        let (mut session, probe) = self.into_session();

        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut session, probe).await;
        terminal::restore()?;
        result
    }

    fn into_session(self) -> (Session, Box<dyn CapabilityProbe>) {
        let Quiz {
            app,
            backend,
            speaker,
            probe,
        } = self;
        let session = Session::new(app, BackendSelector::new(backend), speaker);
        (session, probe)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

/// Everything the event loop mutates.
struct Session {
    app: App,
    selector: BackendSelector,
    speaker: Option<Box<dyn Speaker>>,
    regions: Regions,
}

impl Session {
    fn new(app: App, selector: BackendSelector, speaker: Option<Box<dyn Speaker>>) -> Self {
        Self {
            app,
            selector,
            speaker,
            regions: Regions::default(),
        }
    }

    fn render(&self, frame: &mut Frame) -> Regions {
        ui::render(
            frame,
            &self.app,
            self.selector.backend(),
            self.speaker.is_some(),
        )
    }

    /// Re-register drag sources and the drop target at their drawn positions.
    fn register_regions(&mut self, regions: Regions) {
        let backend = self.selector.backend_mut();
        backend.clear_registrations();
        backend.register_drop_target(regions.drop_zone, ANSWER);
        for (option, rect) in self.app.options().iter().zip(&regions.options) {
            backend.register_drag_source(
                *rect,
                DragPayload::answer(option.id.clone(), option.text.clone()),
            );
        }
        self.regions = regions;
    }

    fn apply_probe(&mut self, is_touch: bool) {
        self.selector.apply_probe(is_touch);
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.app.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
                self.app.focus_previous_option();
            }
            KeyCode::Down
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::Char('j')
            | KeyCode::Char('l') => {
                self.app.focus_next_option();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.app.drop_focused_option();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                self.app.drop_option_at(index);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.click(ClickAction::Pronounce),
            KeyCode::Char('p') | KeyCode::Char('P') => self.click(ClickAction::Previous),
            KeyCode::Char('n') | KeyCode::Char('N') => self.click(ClickAction::Next),
            KeyCode::Char('r') | KeyCode::Char('R') => self.remount(),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.app.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match self.selector.backend_mut().handle_mouse(mouse) {
            DndEvent::Dropped(payload) => {
                let option = AnswerOption::new(payload.id, payload.text);
                self.app.on_option_dropped(&option);
            }
            DndEvent::Started(payload) => {
                tracing::debug!(option = %payload.id, "drag started");
            }
            DndEvent::Cancelled => tracing::debug!("drag cancelled"),
            DndEvent::Moved => {}
            DndEvent::Ignored => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    if let Some(action) = self.regions.action_at(mouse.column, mouse.row) {
                        self.click(action);
                    }
                }
            }
        }
    }

    /// Start the view afresh, dropping any card still in flight.
    fn remount(&mut self) {
        self.selector.backend_mut().cancel_drag();
        self.app.mount();
    }

    fn click(&mut self, action: ClickAction) {
        match action {
            ClickAction::Pronounce => self.app.pronounce_question(self.speaker.as_deref()),
            ClickAction::Previous => self.app.go_previous(),
            ClickAction::Next => self.app.go_next(),
        }
    }
}

/// Run the capability probe once, off the render path.
fn spawn_probe(probe: Box<dyn CapabilityProbe>) -> oneshot::Receiver<bool> {
    let (probe_tx, probe_rx) = oneshot::channel();
    tokio::task::spawn_blocking(move || {
        let _ = probe_tx.send(probe.is_touch_device());
    });
    probe_rx
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    session: &mut Session,
    probe: Box<dyn CapabilityProbe>,
) -> Result<(), QuizError> {
    let mut events = EventStream::new();

    let mut probe_pending = session.selector.needs_probe();
    let mut probe_rx = if probe_pending {
        spawn_probe(probe)
    } else {
        oneshot::channel::<bool>().1
    };

    while !session.app.should_quit {
        let mut regions = Regions::default();
        terminal.draw(|frame| regions = session.render(frame))?;
        session.register_regions(regions);

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => session.handle_event(event),
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            probed = &mut probe_rx, if probe_pending => {
                probe_pending = false;
                match probed {
                    Ok(is_touch) => session.apply_probe(is_touch),
                    Err(_) => tracing::warn!("capability probe ended without a result"),
                }
            }
        }
    }

    Ok(())
}
