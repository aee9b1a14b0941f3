mod camera_capturer;
mod camera_permission_prompt;
mod gallery_picker;

pub use camera_capturer::CameraCapturer;
pub use camera_permission_prompt::{CameraPermissionPrompt, PermissionDecision};
pub use gallery_picker::GalleryPicker;
