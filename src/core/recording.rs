//! # Voice Recording
//!
//! The input bar's recording sub-state. Pure state machine; the event loop
//! drives it with capture results and one-second ticks.
//!
//! ```text
//!          request()            opened(stream)
//!   Idle ───────────► Requesting ──────────────► Recording { elapsed }
//!    ▲                    │ failed()                  │ tick() → elapsed + 1
//!    └────────────────────┴───────────────────────────┘ stop() → placeholder
//! ```
//!
//! No transcription happens: `stop()` discards the stream and hands back a
//! fixed marker that the input box appends to the draft.

use log::{debug, info};

use crate::core::capture::CaptureStream;

/// Inserted into the draft in place of a transcription.
pub const VOICE_PLACEHOLDER: &str = "[Voice message]";

#[derive(Debug, Default)]
pub enum Recorder {
    #[default]
    Idle,
    /// Waiting for the capture device.
    Requesting,
    Recording {
        stream: CaptureStream,
        elapsed_secs: u32,
    },
}

impl Recorder {
    pub fn new() -> Self {
        Self::Idle
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Recorder::Recording { .. })
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self, Recorder::Requesting)
    }

    pub fn elapsed_secs(&self) -> u32 {
        match self {
            Recorder::Recording { elapsed_secs, .. } => *elapsed_secs,
            _ => 0,
        }
    }

    /// Start asking for the device. Returns false if already busy.
    pub fn request(&mut self) -> bool {
        if matches!(self, Recorder::Idle) {
            *self = Recorder::Requesting;
            true
        } else {
            false
        }
    }

    /// The device was acquired. A stream nobody asked for is dropped.
    pub fn opened(&mut self, stream: CaptureStream) -> bool {
        if self.is_requesting() {
            info!("Recording started on {}", stream.device());
            *self = Recorder::Recording {
                stream,
                elapsed_secs: 0,
            };
            true
        } else {
            debug!("Discarding unrequested capture stream {}", stream.id());
            false
        }
    }

    pub fn failed(&mut self) {
        if self.is_requesting() {
            *self = Recorder::Idle;
        }
    }

    pub fn tick(&mut self) {
        if let Recorder::Recording { elapsed_secs, .. } = self {
            *elapsed_secs += 1;
        }
    }

    /// Ends the recording and returns the placeholder to insert.
    /// A request still waiting on the device is abandoned and yields nothing.
    pub fn stop(&mut self) -> Option<&'static str> {
        match std::mem::take(self) {
            Recorder::Recording { stream, elapsed_secs } => {
                info!("Recording stopped after {}s", elapsed_secs);
                drop(stream);
                Some(VOICE_PLACEHOLDER)
            }
            _ => None,
        }
    }

    /// Elapsed time as `m:ss`.
    pub fn elapsed_label(&self) -> String {
        format_elapsed(self.elapsed_secs())
    }
}

pub fn format_elapsed(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording() -> Recorder {
        let mut rec = Recorder::new();
        assert!(rec.request());
        assert!(rec.opened(CaptureStream::new("test")));
        rec
    }

    #[test]
    fn five_ticks_read_five_seconds() {
        let mut rec = recording();
        for _ in 0..5 {
            rec.tick();
        }
        assert_eq!(rec.elapsed_label(), "0:05");
        assert_eq!(rec.stop(), Some(VOICE_PLACEHOLDER));
        assert_eq!(rec.elapsed_label(), "0:00");
        assert!(!rec.is_recording());
    }

    #[test]
    fn format_elapsed_rolls_minutes() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(59), "0:59");
        assert_eq!(format_elapsed(61), "1:01");
        assert_eq!(format_elapsed(600), "10:00");
    }

    #[test]
    fn request_only_from_idle() {
        let mut rec = Recorder::new();
        assert!(rec.request());
        assert!(!rec.request());
        assert!(rec.is_requesting());
    }

    #[test]
    fn failure_returns_to_idle() {
        let mut rec = Recorder::new();
        rec.request();
        rec.failed();
        assert!(matches!(rec, Recorder::Idle));
    }

    #[test]
    fn unrequested_stream_is_discarded() {
        let mut rec = Recorder::new();
        assert!(!rec.opened(CaptureStream::new("late")));
        assert!(!rec.is_recording());
    }

    #[test]
    fn ticks_ignored_when_not_recording() {
        let mut rec = Recorder::new();
        rec.tick();
        assert_eq!(rec.elapsed_secs(), 0);
    }

    #[test]
    fn stop_while_requesting_yields_nothing() {
        let mut rec = Recorder::new();
        rec.request();
        assert_eq!(rec.stop(), None);
        assert!(matches!(rec, Recorder::Idle));
    }
}
