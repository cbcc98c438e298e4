//! Drag-and-drop over terminal mouse events.
//!
//! Views register drag sources and drop targets on the active [`DndBackend`]
//! every frame; the event loop feeds mouse events to it and receives
//! [`DndEvent::Dropped`] when a payload lands on a target that accepts it.
//!
//! # Backends
//!
//! - [`PointerBackend`] - press, drag, release (desktop mouse)
//! - [`TouchBackend`] - tap to pick up, tap to drop (touch screens)
//!
//! [`BackendSelector`] picks one at start-up and switches at most once.

mod pointer;
mod registry;
mod selector;
mod touch;

use crossterm::event::MouseEvent;
use ratatui::layout::Rect;

pub use pointer::PointerBackend;
pub use registry::{DragSession, Registry};
pub use selector::{BackendPreference, BackendSelector};
pub use touch::TouchBackend;

/// Item type carried by answer cards.
pub const ANSWER: &str = "answer";

/// Data carried from a drag source to a drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub item_type: &'static str,
    pub id: String,
    pub text: String,
}

impl DragPayload {
    pub fn answer(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            item_type: ANSWER,
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Outcome of feeding one mouse event to a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DndEvent {
    /// The event did not concern drag-and-drop.
    Ignored,
    Started(DragPayload),
    /// Pointer moved during a drag; hover state may have changed.
    Moved,
    Dropped(DragPayload),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Pointer,
    Touch,
}

impl BackendKind {
    pub fn label(self) -> &'static str {
        match self {
            BackendKind::Pointer => "mouse",
            BackendKind::Touch => "touch",
        }
    }
}

/// Transport for drag-and-drop.
///
/// Views only use the registration and monitor methods, so they behave the
/// same under any backend.
pub trait DndBackend {
    fn kind(&self) -> BackendKind;

    fn registry(&self) -> &Registry;

    fn registry_mut(&mut self) -> &mut Registry;

    /// Interpret a mouse event in this backend's gesture model.
    fn handle_mouse(&mut self, event: MouseEvent) -> DndEvent;

    /// Forget all sources and targets. Called before every frame.
    fn clear_registrations(&mut self) {
        self.registry_mut().clear();
    }

    fn register_drag_source(&mut self, rect: Rect, payload: DragPayload) {
        self.registry_mut().register_source(rect, payload);
    }

    fn register_drop_target(&mut self, rect: Rect, accept: &'static str) {
        self.registry_mut().register_target(rect, accept);
    }

    /// Abandon any drag in progress.
    fn cancel_drag(&mut self) {
        self.registry_mut().finish();
    }

    /// Whether the source with this id is being dragged.
    fn is_dragging(&self, source_id: &str) -> bool {
        self.registry().is_dragging(source_id)
    }

    /// Whether an accepted payload is hovering the drop target.
    fn is_over(&self) -> bool {
        self.registry().is_over()
    }
}
