use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{BackendKind, DndBackend, DndEvent, Registry};

/// Tap a card to pick it up, tap the target to drop it.
///
/// Touch terminals usually turn a tap into a press/release pair at one cell
/// and rarely report motion, so a carried card stays lifted between taps. A
/// press-drag-release gesture that ends on the target drops as well.
#[derive(Debug, Default)]
pub struct TouchBackend {
    registry: Registry,
}

impl TouchBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn tap(&mut self, x: u16, y: u16) -> DndEvent {
        let Some(carried) = self.registry.session().map(|s| s.payload.clone()) else {
            return match self.registry.source_at(x, y) {
                Some(payload) => {
                    self.registry.begin(payload.clone());
                    DndEvent::Started(payload)
                }
                None => DndEvent::Ignored,
            };
        };

        if self.registry.accepts_at(x, y, &carried) {
            self.registry.finish();
            return DndEvent::Dropped(carried);
        }

        match self.registry.source_at(x, y) {
            Some(payload) if payload.id != carried.id => {
                self.registry.begin(payload.clone());
                DndEvent::Started(payload)
            }
            _ => {
                self.registry.finish();
                DndEvent::Cancelled
            }
        }
    }
}

impl DndBackend for TouchBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Touch
    }

    fn registry(&self) -> &Registry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    fn handle_mouse(&mut self, event: MouseEvent) -> DndEvent {
        let (x, y) = (event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.tap(x, y),
            MouseEventKind::Drag(MouseButton::Left) if self.registry.is_active() => {
                self.registry.track(x, y, true);
                DndEvent::Moved
            }
            MouseEventKind::Moved if self.registry.is_active() => {
                self.registry.track(x, y, false);
                DndEvent::Moved
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let swiped_onto_target = self.registry.session().is_some_and(|session| {
                    session.travelled && self.registry.accepts_at(x, y, &session.payload)
                });
                match self.registry.finish() {
                    Some(session) if swiped_onto_target => DndEvent::Dropped(session.payload),
                    Some(session) => {
                        // Keep carrying after a plain tap.
                        self.registry.begin(session.payload);
                        DndEvent::Ignored
                    }
                    None => DndEvent::Ignored,
                }
            }
            _ => DndEvent::Ignored,
        }
    }
}
