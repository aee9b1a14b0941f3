pub const APPLICATION_NAME: &str = "Leitura Descomplicada";
pub const APPLICATION_TITLE: &str = "Leitura Descomplicada";
pub const APPLICATION_DIRECTORY_NAME: &str = "leitura-descomplicada";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_CAMERA: &str = "[CAMERA]";
pub const LOG_TAG_GALLERY: &str = "[GALLERY]";
pub const LOG_TAG_PERMISSIONS: &str = "[PERMISSIONS]";
pub const LOG_TAG_DISPLAY: &str = "[DISPLAY]";
pub const LOG_TAG_RECOGNITION: &str = "[RECOGNITION]";
pub const LOG_TAG_TESSERACT: &str = "[TESSERACT_OCR]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";

pub const TEXT_DATA_NOT_FOUND: &str = "Data not found";
pub const TEXT_RECOGNITION_FAILED: &str = "Failed to Recognize Text";

pub const TOAST_CAMERA_PERMISSION_DENIED: &str = "Camera permission denied";
pub const TOAST_NO_IMAGE_SELECTED: &str = "No image selected!";
pub const TOAST_IMAGE_DECODE_FAILED: &str = "Could not open the selected image";
pub const TOAST_CAPTURE_FAILED: &str = "Could not capture photo";

pub const STATUS_INITIALIZING: &str = "Initializing text recognition...";
pub const STATUS_READY: &str = "Ready";
pub const STATUS_IMAGE_LOADED: &str = "Image loaded";
pub const STATUS_READING: &str = "Reading text...";
pub const STATUS_READ_COMPLETE: &str = "Text read";
pub const STATUS_READ_FAILED: &str = "Text recognition failed";

pub const PROMPT_CHOOSE_IMAGE: &str = "Choose an image to read its text";
pub const PLACEHOLDER_TEXT_REGION: &str = "The text read from the image will appear here";
pub const LABEL_GALLERY_BUTTON: &str = "Gallery";
pub const LABEL_CAMERA_BUTTON: &str = "Camera";
pub const LABEL_READ_TEXT_BUTTON: &str = "Read text";
pub const LABEL_CLEAR_TEXT_BUTTON: &str = "Clear";

pub const GALLERY_DIALOG_TITLE: &str = "Choose an image";
pub const GALLERY_FILTER_NAME: &str = "Images";
pub const IMAGE_FILE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp"];

pub const PERMISSION_DIALOG_TITLE: &str = "Camera access";
pub const PERMISSION_DIALOG_DESCRIPTION: &str =
    "Leitura Descomplicada wants to use the camera to take a photo of the text you want to read. Allow access?";

pub const CAMERA_OUTPUT_PLACEHOLDER: &str = "{output}";
pub const PHOTO_FILE_PREFIX: &str = "JPEG_";
pub const PHOTO_FILE_EXTENSION: &str = ".jpg";
pub const PHOTO_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub const DEFAULT_OCR_LANGUAGE: &str = "eng";
pub const DEFAULT_TOAST_DURATION_MS: u64 = 2000;
pub const MAX_VISIBLE_TOASTS: usize = 3;

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const WINDOW_WIDTH: f32 = 480.0;
pub const WINDOW_HEIGHT: f32 = 820.0;
