use clap::ValueEnum;

use super::{BackendKind, DndBackend, PointerBackend, TouchBackend};

/// Which drag-and-drop backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BackendPreference {
    /// Start with the mouse backend and switch if a touch device is detected.
    #[default]
    Auto,
    Pointer,
    Touch,
}

/// Owns the active backend and applies the capability probe at most once.
pub struct BackendSelector {
    backend: Box<dyn DndBackend>,
    settled: bool,
}

impl BackendSelector {
    pub fn new(preference: BackendPreference) -> Self {
        let (backend, settled): (Box<dyn DndBackend>, bool) = match preference {
            BackendPreference::Auto => (Box::new(PointerBackend::new()), false),
            BackendPreference::Pointer => (Box::new(PointerBackend::new()), true),
            BackendPreference::Touch => (Box::new(TouchBackend::new()), true),
        };
        Self { backend, settled }
    }

    /// True until a probe result has been applied (or a backend was forced).
    pub fn needs_probe(&self) -> bool {
        !self.settled
    }

    /// Apply the probe outcome. Returns whether the backend changed.
    pub fn apply_probe(&mut self, is_touch: bool) -> bool {
        if self.settled {
            tracing::debug!(is_touch, "backend already selected, ignoring probe result");
            return false;
        }
        self.settled = true;

        if is_touch && self.backend.kind() != BackendKind::Touch {
            self.backend = Box::new(TouchBackend::new());
            tracing::info!("touch device detected, switched to touch drag-and-drop");
            true
        } else {
            tracing::debug!(backend = self.backend.kind().label(), "keeping backend");
            false
        }
    }

    pub fn kind(&self) -> BackendKind {
        self.backend.kind()
    }

    pub fn backend(&self) -> &dyn DndBackend {
        self.backend.as_ref()
    }

    pub fn backend_mut(&mut self) -> &mut dyn DndBackend {
        self.backend.as_mut()
    }
}

impl Default for BackendSelector {
    fn default() -> Self {
        Self::new(BackendPreference::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_starts_on_pointer() {
        let selector = BackendSelector::new(BackendPreference::Auto);
        assert_eq!(selector.kind(), BackendKind::Pointer);
        assert!(selector.needs_probe());
    }

    #[test]
    fn test_probe_switches_to_touch_once() {
        let mut selector = BackendSelector::default();
        assert!(selector.apply_probe(true));
        assert_eq!(selector.kind(), BackendKind::Touch);
        assert!(!selector.needs_probe());

        // No oscillation on a contradicting second result.
        assert!(!selector.apply_probe(false));
        assert_eq!(selector.kind(), BackendKind::Touch);
    }

    #[test]
    fn test_probe_negative_keeps_pointer() {
        let mut selector = BackendSelector::default();
        assert!(!selector.apply_probe(false));
        assert_eq!(selector.kind(), BackendKind::Pointer);
        assert!(!selector.apply_probe(true));
        assert_eq!(selector.kind(), BackendKind::Pointer);
    }

    #[test]
    fn test_forced_backend_skips_probe() {
        let mut selector = BackendSelector::new(BackendPreference::Pointer);
        assert!(!selector.needs_probe());
        assert!(!selector.apply_probe(true));
        assert_eq!(selector.kind(), BackendKind::Pointer);

        let selector = BackendSelector::new(BackendPreference::Touch);
        assert_eq!(selector.kind(), BackendKind::Touch);
    }
}
