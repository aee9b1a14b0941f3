use std::sync::Arc;

use anyhow::{Context, Result};
use iced::widget::image::Handle;
use image::DynamicImage;

use super::ImageReference;

#[derive(Clone)]
pub struct SelectedImage {
    pub image_handle: Handle,
    pub width: u32,
    pub height: u32,
    pub source: ImageReference,
    bitmap: Arc<DynamicImage>,
}

impl std::fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedImage")
            .field("source", &self.source)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl SelectedImage {
    pub fn build_from_bitmap(source: ImageReference, bitmap: DynamicImage) -> Self {
        let rgba = bitmap.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::debug!(
            "[SELECTED_IMAGE] building image from {}: {}x{}",
            source,
            width,
            height
        );

        Self {
            image_handle: Handle::from_rgba(width, height, rgba.into_raw()),
            width,
            height,
            source,
            bitmap: Arc::new(bitmap),
        }
    }

    /// Decodes whatever format the bytes behind `reference` are in. The
    /// extension is not trusted; the format is sniffed from the content.
    pub fn decode_from_reference(reference: &ImageReference) -> Result<Self> {
        let bitmap = image::ImageReader::open(reference.path())
            .with_context(|| format!("Failed to open image {}", reference))?
            .with_guessed_format()
            .context("Failed to detect image format")?
            .decode()
            .with_context(|| format!("Failed to decode image {}", reference))?;

        Ok(Self::build_from_bitmap(reference.clone(), bitmap))
    }

    /// Same as `decode_from_reference`, but on the blocking pool so a large
    /// photo does not stall the UI thread.
    pub async fn decode_in_background(reference: ImageReference) -> Result<Self> {
        tokio::task::spawn_blocking(move || Self::decode_from_reference(&reference))
            .await
            .context("Image decoding worker stopped unexpectedly")?
    }

    pub fn bitmap(&self) -> Arc<DynamicImage> {
        Arc::clone(&self.bitmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("leitura-selected-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn test_build_from_bitmap_records_dimensions() {
        let bitmap = DynamicImage::ImageRgba8(RgbaImage::new(40, 25));
        let source = ImageReference::GalleryFile(PathBuf::from("memory.png"));

        let selected = SelectedImage::build_from_bitmap(source.clone(), bitmap);

        assert_eq!(selected.width, 40);
        assert_eq!(selected.height, 25);
        assert_eq!(selected.source, source);
        assert_eq!(selected.bitmap().width(), 40);
    }

    #[test]
    fn test_decode_from_reference_reads_png_with_wrong_extension() {
        let path = scratch_path("photo.jpg");
        let pixels = RgbaImage::from_pixel(8, 6, Rgba([10, 20, 30, 255]));
        pixels.save_with_format(&path, ImageFormat::Png).unwrap();

        let selected =
            SelectedImage::decode_from_reference(&ImageReference::CapturedPhoto(path.clone()))
                .unwrap();

        assert_eq!((selected.width, selected.height), (8, 6));
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_decode_from_reference_fails_for_non_image_bytes() {
        let path = scratch_path("notes.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let result = SelectedImage::decode_from_reference(&ImageReference::GalleryFile(path.clone()));

        assert!(result.is_err());
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[tokio::test]
    async fn test_decode_in_background_matches_synchronous_decode() {
        let path = scratch_path("page.png");
        RgbaImage::from_pixel(7, 3, Rgba([0, 0, 0, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();
        let reference = ImageReference::GalleryFile(path.clone());

        let selected = SelectedImage::decode_in_background(reference.clone()).await.unwrap();

        assert_eq!((selected.width, selected.height), (7, 3));
        assert_eq!(selected.source, reference);
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_decode_from_reference_fails_for_missing_file() {
        let path = scratch_path("missing.png");

        let result = SelectedImage::decode_from_reference(&ImageReference::GalleryFile(path));

        assert!(result.is_err());
    }
}
