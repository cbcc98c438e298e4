use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{BackendKind, DndBackend, DndEvent, Registry};

/// Press on a card, drag, release on the target.
#[derive(Debug, Default)]
pub struct PointerBackend {
    registry: Registry,
}

impl PointerBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DndBackend for PointerBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Pointer
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
            MouseEventKind::Down(MouseButton::Left) => match self.registry.source_at(x, y) {
                Some(payload) => {
                    self.registry.begin(payload.clone());
                    DndEvent::Started(payload)
                }
                None => DndEvent::Ignored,
            },
            MouseEventKind::Drag(MouseButton::Left) if self.registry.is_active() => {
                self.registry.track(x, y, true);
                DndEvent::Moved
            }
            MouseEventKind::Up(MouseButton::Left) => match self.registry.finish() {
                Some(session) if self.registry.accepts_at(x, y, &session.payload) => {
                    DndEvent::Dropped(session.payload)
                }
                Some(_) => DndEvent::Cancelled,
                None => DndEvent::Ignored,
            },
            _ => DndEvent::Ignored,
        }
    }
}
