use anyhow::Result;
use async_trait::async_trait;
use image::DynamicImage;

use crate::core::models::RecognitionResult;

#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize_blocks(&self, image: &DynamicImage) -> Result<RecognitionResult>;
}
