//! # Microphone Capture
//!
//! The voice button needs a capture stream to exist while recording, but the
//! audio itself is never read: stopping a recording inserts a placeholder
//! instead of a transcription.
//!
//! Devices are behind the `CaptureDevice` trait so the event loop can open
//! them on a background task and tests can inject failing devices.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::core::config::{ResolvedConfig, VoiceDevice};

/// Errors that can occur while acquiring a capture device.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureError {
    /// The user (or OS) refused microphone access.
    PermissionDenied,
    /// No capture device is present.
    NoDevice,
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::PermissionDenied => write!(f, "microphone permission denied"),
            CaptureError::NoDevice => write!(f, "no microphone available"),
        }
    }
}

impl std::error::Error for CaptureError {}

static NEXT_STREAM_ID: AtomicU64 = AtomicU64::new(1);

/// An open capture stream. Dropping it releases the device.
#[derive(Debug, PartialEq)]
pub struct CaptureStream {
    device: String,
    id: u64,
}

impl CaptureStream {
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            id: NEXT_STREAM_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for CaptureStream {
    fn drop(&mut self) {
        debug!("Closed capture stream {} on {}", self.id, self.device);
    }
}

#[async_trait]
pub trait CaptureDevice: Send + Sync {
    /// Returns the name of the device.
    fn name(&self) -> &str;

    /// Acquires the device. May take a while (permission prompts) and may fail.
    async fn open(&self) -> Result<CaptureStream, CaptureError>;
}

/// Pretend microphone that always grants access after a short latency.
pub struct SimulatedMicrophone {
    latency: Duration,
}

impl SimulatedMicrophone {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedMicrophone {
    fn default() -> Self {
        Self::new(Duration::from_millis(150))
    }
}

#[async_trait]
impl CaptureDevice for SimulatedMicrophone {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn open(&self) -> Result<CaptureStream, CaptureError> {
        tokio::time::sleep(self.latency).await;
        Ok(CaptureStream::new(self.name()))
    }
}

/// Used when voice input is disabled; every open fails with `NoDevice`.
pub struct UnavailableMicrophone;

#[async_trait]
impl CaptureDevice for UnavailableMicrophone {
    fn name(&self) -> &str {
        "none"
    }

    async fn open(&self) -> Result<CaptureStream, CaptureError> {
        Err(CaptureError::NoDevice)
    }
}

/// Build a capture device from the resolved config.
pub fn build_device(config: &ResolvedConfig) -> Arc<dyn CaptureDevice> {
    match config.voice_device {
        VoiceDevice::Simulated => Arc::new(SimulatedMicrophone::default()),
        VoiceDevice::None => Arc::new(UnavailableMicrophone),
    }
}
