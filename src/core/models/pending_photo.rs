use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use uuid::Uuid;

use super::ImageReference;
use crate::global_constants::{
    LOG_TAG_CAMERA, PHOTO_FILE_EXTENSION, PHOTO_FILE_PREFIX, PHOTO_TIMESTAMP_FORMAT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    Completed,
    Cancelled,
}

/// Output location of a single camera request. Travels with the request and
/// is consumed when the capture resolves, so two captures never share a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPhoto {
    request_id: Uuid,
    path: PathBuf,
}

impl PendingPhoto {
    pub fn allocate_in(directory: &Path) -> Result<Self> {
        std::fs::create_dir_all(directory)
            .with_context(|| format!("Failed to create photo directory {:?}", directory))?;

        let request_id = Uuid::new_v4();
        let timestamp = Local::now().format(PHOTO_TIMESTAMP_FORMAT).to_string();
        let path = directory.join(Self::build_file_name(&timestamp, &request_id));

        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("Failed to create photo file {:?}", path))?;

        log::debug!("{} allocated photo path {:?}", LOG_TAG_CAMERA, path);
        Ok(Self { request_id, path })
    }

    fn build_file_name(timestamp: &str, request_id: &Uuid) -> String {
        let suffix = request_id.simple().to_string();
        format!(
            "{}{}_{}{}",
            PHOTO_FILE_PREFIX,
            timestamp,
            &suffix[..8],
            PHOTO_FILE_EXTENSION
        )
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_reference(self) -> ImageReference {
        ImageReference::CapturedPhoto(self.path)
    }

    pub fn discard(self) {
        self.into_reference().discard_if_captured();
    }
}
