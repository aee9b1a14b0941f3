use anyhow::{anyhow, Result};

use super::{ImageReference, SelectedImage};
use crate::global_constants::LOG_TAG_DISPLAY;

/// Owns the image currently on screen, which is also the one sent to OCR.
#[derive(Debug, Default)]
pub struct DisplaySurface {
    current_image: Option<SelectedImage>,
    last_error: Option<String>,
}

impl DisplaySurface {
    /// Makes the decoded `reference` the current image. A failed decode
    /// keeps the previous image and records the error for display.
    pub fn set_image(
        &mut self,
        reference: &ImageReference,
        decoded: Result<SelectedImage, String>,
    ) -> Result<()> {
        match decoded {
            Ok(selected) => {
                if let Some(previous) = self.current_image.replace(selected) {
                    log::debug!("{} replaced previous image {}", LOG_TAG_DISPLAY, previous.source);
                }
                log::info!("{} showing {}", LOG_TAG_DISPLAY, reference);
                self.last_error = None;
                Ok(())
            }
            Err(error) => {
                log::error!("{} failed to decode {}: {}", LOG_TAG_DISPLAY, reference, error);
                self.last_error = Some(error.clone());
                Err(anyhow!(error))
            }
        }
    }

    pub fn current_image(&self) -> Option<&SelectedImage> {
        self.current_image.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
