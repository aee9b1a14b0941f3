use std::sync::Arc;

use iced::{Element, Task, Theme};

use crate::adapters::TesseractTextRecognizer;
use crate::core::interfaces::adapters::TextRecognizer;
use crate::core::models::{RecognitionResult, UserSettings};
use crate::core::orchestrators::reader_orchestrator::{ReaderMessage, ReaderOrchestrator};
use crate::global_constants::LOG_TAG_APP;
use crate::ports::{CommandCameraCapturer, DialogCameraPermissionPrompt, RfdGalleryPicker};

/// Stands in until tesseract has been located, so early reads fail cleanly.
struct PendingTextRecognizer;

#[async_trait::async_trait]
impl TextRecognizer for PendingTextRecognizer {
    async fn recognize_blocks(
        &self,
        _image: &image::DynamicImage,
    ) -> anyhow::Result<RecognitionResult> {
        anyhow::bail!("Text recognizer not initialized yet")
    }
}

pub struct ReaderApp {
    orchestrator: ReaderOrchestrator,
}

impl ReaderApp {
    pub fn build() -> (Self, Task<ReaderMessage>) {
        log::info!("{} Initializing application", LOG_TAG_APP);

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("{} Failed to load settings: {}, using defaults", LOG_TAG_APP, e);
            UserSettings::default()
        });

        let ocr_language = settings.ocr_language.clone();

        let orchestrator = ReaderOrchestrator::build(
            Arc::new(RfdGalleryPicker::initialize()),
            Arc::new(CommandCameraCapturer::initialize(settings.camera_command.clone())),
            Arc::new(DialogCameraPermissionPrompt::initialize(
                settings.camera_permission_preapproved,
            )),
            Arc::new(PendingTextRecognizer),
            settings,
        );

        let startup = Task::future(async move {
            match TesseractTextRecognizer::build_in_background(ocr_language).await {
                Ok(recognizer) => {
                    log::info!("{} Tesseract text recognizer initialized", LOG_TAG_APP);
                    ReaderMessage::RecognizerReady(Arc::new(recognizer) as Arc<dyn TextRecognizer>)
                }
                Err(e) => {
                    log::error!(
                        "{} Failed to initialize Tesseract text recognizer: {:#}",
                        LOG_TAG_APP,
                        e
                    );
                    ReaderMessage::RecognizerFailed(e.to_string())
                }
            }
        });

        (Self { orchestrator }, startup)
    }

    pub fn handle_update(&mut self, message: ReaderMessage) -> Task<ReaderMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, ReaderMessage> {
        self.orchestrator.render_view()
    }

    pub fn theme(&self) -> Theme {
        self.orchestrator.theme()
    }
}
