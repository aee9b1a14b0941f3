mod command_camera_capturer;
mod dialog_camera_permission_prompt;
mod rfd_gallery_picker;

pub use command_camera_capturer::CommandCameraCapturer;
pub use dialog_camera_permission_prompt::DialogCameraPermissionPrompt;
pub use rfd_gallery_picker::RfdGalleryPicker;
