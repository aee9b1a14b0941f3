use std::fmt;
use std::path::{Path, PathBuf};

use crate::global_constants::LOG_TAG_CAMERA;

/// Handle to image bytes that have not been decoded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageReference {
    GalleryFile(PathBuf),
    CapturedPhoto(PathBuf),
}

impl ImageReference {
    pub fn path(&self) -> &Path {
        match self {
            ImageReference::GalleryFile(path) => path,
            ImageReference::CapturedPhoto(path) => path,
        }
    }

    /// Deletes the file behind a camera photo. Gallery files belong to the
    /// user and are never touched.
    pub fn discard_if_captured(&self) {
        let ImageReference::CapturedPhoto(path) = self else {
            return;
        };

        match std::fs::remove_file(path) {
            Ok(()) => log::debug!("{} removed unused photo {:?}", LOG_TAG_CAMERA, path),
            Err(error) => log::warn!(
                "{} failed to remove unused photo {:?}: {}",
                LOG_TAG_CAMERA,
                path,
                error
            ),
        }
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageReference::GalleryFile(path) => write!(f, "gallery:{}", path.display()),
            ImageReference::CapturedPhoto(path) => write!(f, "camera:{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_returns_inner_path_for_both_sources() {
        let gallery = ImageReference::GalleryFile(PathBuf::from("/tmp/a.png"));
        let camera = ImageReference::CapturedPhoto(PathBuf::from("/tmp/b.jpg"));

        assert_eq!(gallery.path(), Path::new("/tmp/a.png"));
        assert_eq!(camera.path(), Path::new("/tmp/b.jpg"));
    }

    #[test]
    fn test_display_prefixes_source_kind() {
        let camera = ImageReference::CapturedPhoto(PathBuf::from("/tmp/b.jpg"));

        assert_eq!(camera.to_string(), "camera:/tmp/b.jpg");
    }

    #[test]
    fn test_discard_if_captured_only_removes_camera_photos() {
        let directory = std::env::temp_dir().join(format!("leitura-reference-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&directory).unwrap();
        let gallery_path = directory.join("kept.png");
        let camera_path = directory.join("JPEG_photo.jpg");
        std::fs::write(&gallery_path, b"user file").unwrap();
        std::fs::write(&camera_path, b"photo").unwrap();

        ImageReference::GalleryFile(gallery_path.clone()).discard_if_captured();
        ImageReference::CapturedPhoto(camera_path.clone()).discard_if_captured();

        assert!(gallery_path.exists());
        assert!(!camera_path.exists());
        std::fs::remove_dir_all(&directory).ok();
    }
}
