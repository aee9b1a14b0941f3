use async_trait::async_trait;

use crate::core::models::ImageReference;

#[async_trait]
pub trait GalleryPicker: Send + Sync {
    /// `None` when the user dismissed the picker.
    async fn pick_image(&self) -> Option<ImageReference>;
}
