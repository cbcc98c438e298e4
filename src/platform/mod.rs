//! Environment capabilities consumed by the quiz view.
//!
//! Both are narrow traits so tests can substitute fakes:
//!
//! - [`CapabilityProbe`] - detects a touch-driven terminal
//! - [`Speaker`] - text-to-speech

mod probe;
mod speech;

pub use probe::{CapabilityProbe, EnvProbe, FixedProbe};
pub use speech::{detect_speaker, CommandSpeaker, SpeechError, Speaker};
