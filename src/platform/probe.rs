use std::env;

/// One-shot check for a touch-driven environment.
pub trait CapabilityProbe: Send + 'static {
    fn is_touch_device(&self) -> bool;
}

/// Variables set by terminal emulators that run on touch screens.
const TOUCH_MARKERS: [&str; 2] = ["TERMUX_VERSION", "ANDROID_ROOT"];

/// Probes the process environment.
pub struct EnvProbe {
    lookup: Box<dyn Fn(&str) -> Option<String> + Send>,
}

impl EnvProbe {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a probe over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + 'static,
    {
        Self {
            lookup: Box::new(lookup),
        }
    }
}

impl Default for EnvProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityProbe for EnvProbe {
    fn is_touch_device(&self) -> bool {
        TOUCH_MARKERS
            .iter()
            .any(|key| (self.lookup)(key).is_some_and(|value| !value.is_empty()))
    }
}

/// Probe with a predetermined answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub bool);

impl CapabilityProbe for FixedProbe {
    fn is_touch_device(&self) -> bool {
        self.0
    }
}
