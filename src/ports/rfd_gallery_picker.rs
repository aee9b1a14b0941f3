use async_trait::async_trait;
use rfd::AsyncFileDialog;

use crate::core::interfaces::ports::GalleryPicker;
use crate::core::models::ImageReference;
use crate::global_constants::{
    GALLERY_DIALOG_TITLE, GALLERY_FILTER_NAME, IMAGE_FILE_EXTENSIONS, LOG_TAG_GALLERY,
};

pub struct RfdGalleryPicker;

impl RfdGalleryPicker {
    pub fn initialize() -> Self {
        log::debug!("{} initializing native image picker", LOG_TAG_GALLERY);
        Self
    }
}

#[async_trait]
impl GalleryPicker for RfdGalleryPicker {
    async fn pick_image(&self) -> Option<ImageReference> {
        let picked = AsyncFileDialog::new()
            .set_title(GALLERY_DIALOG_TITLE)
            .add_filter(GALLERY_FILTER_NAME, IMAGE_FILE_EXTENSIONS)
            .pick_file()
            .await;

        match picked {
            Some(handle) => {
                let path = handle.path().to_path_buf();
                log::info!("{} picked {:?}", LOG_TAG_GALLERY, path);
                Some(ImageReference::GalleryFile(path))
            }
            None => {
                log::debug!("{} picker dismissed", LOG_TAG_GALLERY);
                None
            }
        }
    }
}
