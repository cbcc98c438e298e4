//! Registered drag sources, the drop target, and the live drag session.

use ratatui::layout::Rect;

use super::DragPayload;

#[derive(Debug, Clone)]
struct DragSource {
    rect: Rect,
    payload: DragPayload,
}

#[derive(Debug, Clone)]
struct DropTarget {
    rect: Rect,
    accept: &'static str,
}

/// A payload currently in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub payload: DragPayload,
    /// Set once the pointer moved with the button held.
    pub travelled: bool,
}

/// Hit-testing state shared by every backend.
///
/// Sources and the target are re-registered each frame; the session and
/// hover flag survive re-registration so a drag can span frames.
#[derive(Debug, Default)]
pub struct Registry {
    sources: Vec<DragSource>,
    target: Option<DropTarget>,
    session: Option<DragSession>,
    over: bool,
}

#[inline]
fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.sources.clear();
        self.target = None;
    }

    pub fn register_source(&mut self, rect: Rect, payload: DragPayload) {
        self.sources.push(DragSource { rect, payload });
    }

    /// There is a single drop target; registering again replaces it.
    pub fn register_target(&mut self, rect: Rect, accept: &'static str) {
        self.target = Some(DropTarget { rect, accept });
    }

    /// Topmost source under the point. Later registrations win.
    pub fn source_at(&self, x: u16, y: u16) -> Option<DragPayload> {
        self.sources
            .iter()
            .rev()
            .find(|source| contains(source.rect, x, y))
            .map(|source| source.payload.clone())
    }

    /// Whether the target lies under the point and takes this payload's type.
    pub fn accepts_at(&self, x: u16, y: u16, payload: &DragPayload) -> bool {
        self.target
            .as_ref()
            .is_some_and(|target| target.accept == payload.item_type && contains(target.rect, x, y))
    }

    pub fn begin(&mut self, payload: DragPayload) {
        self.session = Some(DragSession {
            payload,
            travelled: false,
        });
        self.over = false;
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Follow the pointer during a drag. `pressed` marks a button-held move.
    pub fn track(&mut self, x: u16, y: u16, pressed: bool) {
        let over = match &self.session {
            Some(session) => self.accepts_at(x, y, &session.payload),
            None => return,
        };
        self.over = over;
        if let Some(session) = self.session.as_mut() {
            session.travelled |= pressed;
        }
    }

    /// End the drag, returning what was carried.
    pub fn finish(&mut self) -> Option<DragSession> {
        self.over = false;
        self.session.take()
    }

    pub fn is_dragging(&self, source_id: &str) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.payload.id == source_id)
    }

    pub fn is_over(&self) -> bool {
        self.over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dnd::ANSWER;

    #[test]
    fn test_source_at_prefers_latest_registration() {
        let mut registry = Registry::new();
        registry.register_source(Rect::new(0, 0, 10, 3), DragPayload::answer("1", "Paris"));
        registry.register_source(Rect::new(5, 0, 10, 3), DragPayload::answer("2", "London"));

        assert_eq!(registry.source_at(2, 1).unwrap().id, "1");
        assert_eq!(registry.source_at(7, 1).unwrap().id, "2");
        assert!(registry.source_at(20, 1).is_none());
    }

    #[test]
    fn test_target_rejects_other_item_types() {
        let mut registry = Registry::new();
        registry.register_target(Rect::new(0, 0, 10, 3), ANSWER);

        let answer = DragPayload::answer("1", "Paris");
        let other = DragPayload {
            item_type: "image",
            id: "x".into(),
            text: "x".into(),
        };
        assert!(registry.accepts_at(1, 1, &answer));
        assert!(!registry.accepts_at(1, 1, &other));
        assert!(!registry.accepts_at(11, 1, &answer));
    }

    #[test]
    fn test_session_survives_clear() {
        let mut registry = Registry::new();
        registry.begin(DragPayload::answer("1", "Paris"));
        registry.clear();
        assert!(registry.is_dragging("1"));
        assert!(!registry.is_dragging("2"));
    }

    #[test]
    fn test_track_updates_hover() {
        let mut registry = Registry::new();
        registry.register_target(Rect::new(0, 0, 10, 3), ANSWER);
        registry.begin(DragPayload::answer("1", "Paris"));

        registry.track(2, 2, true);
        assert!(registry.is_over());
        assert!(registry.session().unwrap().travelled);

        registry.track(2, 8, true);
        assert!(!registry.is_over());

        registry.finish();
        assert!(!registry.is_active());
    }
}
