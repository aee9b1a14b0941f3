mod display_surface;
mod image_reference;
mod pending_photo;
mod recognition;
mod selected_image;
mod ui_visibility;
mod user_settings;

pub use display_surface::DisplaySurface;
pub use image_reference::ImageReference;
pub use pending_photo::{CaptureOutcome, PendingPhoto};
pub use recognition::{RecognitionOutcome, RecognitionResult, TextBlock};
pub use selected_image::SelectedImage;
pub use ui_visibility::{LifecycleEvent, UiVisibility};
pub use user_settings::{ThemeMode, UserSettings};
