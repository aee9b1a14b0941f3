use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::CaptureOutcome;

#[async_trait]
pub trait CameraCapturer: Send + Sync {
    async fn capture_to(&self, target: &Path) -> Result<CaptureOutcome>;
}
