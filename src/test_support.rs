//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::capture::{CaptureDevice, CaptureError, CaptureStream};
use crate::core::language::Language;
use crate::core::responses::ReplyPicker;
use crate::core::state::App;

/// Seed used by `test_app` so reply selection is reproducible.
pub const TEST_SEED: u64 = 1234;

/// A microphone that always refuses access.
pub struct DeniedMicrophone;

#[async_trait]
impl CaptureDevice for DeniedMicrophone {
    fn name(&self) -> &str {
        "denied"
    }

    async fn open(&self) -> Result<CaptureStream, CaptureError> {
        Err(CaptureError::PermissionDenied)
    }
}

/// Creates an English test App with a seeded reply picker.
pub fn test_app() -> App {
    App::new(Language::En, ReplyPicker::seeded(TEST_SEED))
}
