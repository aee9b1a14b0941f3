use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use iced::{Element, Task};
use uuid::Uuid;

use crate::core::interfaces::adapters::TextRecognizer;
use crate::core::interfaces::ports::{
    CameraCapturer, CameraPermissionPrompt, GalleryPicker, PermissionDecision,
};
use crate::core::models::{
    CaptureOutcome, DisplaySurface, ImageReference, LifecycleEvent, PendingPhoto,
    RecognitionOutcome, SelectedImage, UiVisibility, UserSettings,
};
use crate::core::orchestrators::TextRecognitionAdapter;
use crate::global_constants::{
    LOG_TAG_ORCHESTRATOR, STATUS_IMAGE_LOADED, STATUS_INITIALIZING, STATUS_READING,
    STATUS_READY, STATUS_READ_COMPLETE, STATUS_READ_FAILED, TOAST_CAMERA_PERMISSION_DENIED,
    TOAST_CAPTURE_FAILED, TOAST_IMAGE_DECODE_FAILED, TOAST_NO_IMAGE_SELECTED,
};
use crate::presentation::app_theme;
use crate::presentation::{ReaderScreen, ToastQueue};

pub struct ReaderOrchestrator {
    gallery_picker: Arc<dyn GalleryPicker>,
    camera_capturer: Arc<dyn CameraCapturer>,
    permission_prompt: Arc<dyn CameraPermissionPrompt>,
    recognition_adapter: TextRecognitionAdapter,
    display_surface: DisplaySurface,
    visibility: UiVisibility,
    displayed_text: String,
    toasts: ToastQueue,
    status: String,
    settings: UserSettings,
    active_selection: Option<Uuid>,
    active_capture: Option<Uuid>,
    active_recognition: Option<Uuid>,
}

#[derive(Clone)]
pub enum ReaderMessage {
    PickFromGallery,
    GalleryPicked(Option<ImageReference>),
    ImageDecoded(Uuid, ImageReference, Result<SelectedImage, String>),
    CapturePhoto,
    CameraPermissionResolved(PermissionDecision),
    PhotoCaptured(PendingPhoto, Result<CaptureOutcome, String>),
    ReadText,
    RecognitionFinished(Uuid, RecognitionOutcome),
    ClearText,
    RecognizerReady(Arc<dyn TextRecognizer>),
    RecognizerFailed(String),
    DismissToast(u64),
}

impl std::fmt::Debug for ReaderMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReaderMessage::PickFromGallery => write!(f, "PickFromGallery"),
            ReaderMessage::GalleryPicked(reference) => write!(f, "GalleryPicked({:?})", reference),
            ReaderMessage::ImageDecoded(id, reference, result) => write!(
                f,
                "ImageDecoded({}, {}, ok={})",
                id,
                reference,
                result.is_ok()
            ),
            ReaderMessage::CapturePhoto => write!(f, "CapturePhoto"),
            ReaderMessage::CameraPermissionResolved(decision) => {
                write!(f, "CameraPermissionResolved({:?})", decision)
            }
            ReaderMessage::PhotoCaptured(photo, result) => write!(
                f,
                "PhotoCaptured({}, {:?})",
                photo.request_id(),
                result
            ),
            ReaderMessage::ReadText => write!(f, "ReadText"),
            ReaderMessage::RecognitionFinished(id, outcome) => {
                write!(f, "RecognitionFinished({}, failed={})", id, outcome.is_failure())
            }
            ReaderMessage::ClearText => write!(f, "ClearText"),
            ReaderMessage::RecognizerReady(_) => write!(f, "RecognizerReady"),
            ReaderMessage::RecognizerFailed(e) => write!(f, "RecognizerFailed({})", e),
            ReaderMessage::DismissToast(id) => write!(f, "DismissToast({})", id),
        }
    }
}

impl ReaderOrchestrator {
    pub fn build(
        gallery_picker: Arc<dyn GalleryPicker>,
        camera_capturer: Arc<dyn CameraCapturer>,
        permission_prompt: Arc<dyn CameraPermissionPrompt>,
        recognizer: Arc<dyn TextRecognizer>,
        settings: UserSettings,
    ) -> Self {
        Self {
            gallery_picker,
            camera_capturer,
            permission_prompt,
            recognition_adapter: TextRecognitionAdapter::build(recognizer),
            display_surface: DisplaySurface::default(),
            visibility: UiVisibility::default(),
            displayed_text: String::new(),
            toasts: ToastQueue::default(),
            status: STATUS_INITIALIZING.to_string(),
            settings,
            active_selection: None,
            active_capture: None,
            active_recognition: None,
        }
    }

    pub fn update(&mut self, message: ReaderMessage) -> Task<ReaderMessage> {
        log::info!("{} Received message: {:?}", LOG_TAG_ORCHESTRATOR, message);

        match message {
            ReaderMessage::PickFromGallery => self.handle_pick_from_gallery(),
            ReaderMessage::GalleryPicked(Some(reference)) => self.handle_image_reference(reference),
            ReaderMessage::GalleryPicked(None) => {
                log::debug!("{} Gallery selection cancelled", LOG_TAG_ORCHESTRATOR);
                Task::none()
            }
            ReaderMessage::ImageDecoded(request_id, reference, decoded) => {
                self.handle_image_decoded(request_id, reference, decoded)
            }
            ReaderMessage::CapturePhoto => self.handle_capture_photo(),
            ReaderMessage::CameraPermissionResolved(decision) => {
                self.handle_camera_permission_resolved(decision)
            }
            ReaderMessage::PhotoCaptured(photo, result) => self.handle_photo_captured(photo, result),
            ReaderMessage::ReadText => self.handle_read_text(),
            ReaderMessage::RecognitionFinished(request_id, outcome) => {
                self.handle_recognition_finished(request_id, outcome)
            }
            ReaderMessage::ClearText => {
                self.displayed_text.clear();
                self.visibility = self.visibility.transition(LifecycleEvent::TextCleared);
                Task::none()
            }
            ReaderMessage::RecognizerReady(recognizer) => {
                log::info!("{} Text recognizer is ready", LOG_TAG_ORCHESTRATOR);
                self.recognition_adapter.replace_recognizer(recognizer);
                self.status = STATUS_READY.to_string();
                Task::none()
            }
            ReaderMessage::RecognizerFailed(error) => {
                log::error!(
                    "{} Text recognizer initialization failed: {}",
                    LOG_TAG_ORCHESTRATOR,
                    error
                );
                self.status = format!("Text recognition unavailable: {}", error);
                Task::none()
            }
            ReaderMessage::DismissToast(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
        }
    }

    pub fn render_view(&self) -> Element<'_, ReaderMessage> {
        ReaderScreen {
            visibility: self.visibility,
            image: self.display_surface.current_image(),
            image_error: self.display_surface.last_error(),
            displayed_text: &self.displayed_text,
            status: &self.status,
            toasts: self.toasts.visible(),
            theme: self.theme(),
            on_pick_from_gallery: ReaderMessage::PickFromGallery,
            on_capture_photo: ReaderMessage::CapturePhoto,
            on_read_text: ReaderMessage::ReadText,
            on_clear_text: ReaderMessage::ClearText,
        }
        .render_ui()
    }

    pub fn theme(&self) -> iced::Theme {
        app_theme::get_theme(&self.settings.theme_mode)
    }

    fn handle_pick_from_gallery(&mut self) -> Task<ReaderMessage> {
        log::info!("{} Opening gallery picker", LOG_TAG_ORCHESTRATOR);
        let gallery_picker = Arc::clone(&self.gallery_picker);

        Task::future(async move { ReaderMessage::GalleryPicked(gallery_picker.pick_image().await) })
    }

    fn handle_image_reference(&mut self, reference: ImageReference) -> Task<ReaderMessage> {
        Task::future(self.start_image_decode(reference))
    }

    fn start_image_decode(
        &mut self,
        reference: ImageReference,
    ) -> impl Future<Output = ReaderMessage> + Send + 'static {
        let request_id = Uuid::new_v4();
        self.active_selection = Some(request_id);
        log::info!(
            "{} Decoding {} as request {}",
            LOG_TAG_ORCHESTRATOR,
            reference,
            request_id
        );

        Self::decode_image(request_id, reference)
    }

    async fn decode_image(request_id: Uuid, reference: ImageReference) -> ReaderMessage {
        let decoded = SelectedImage::decode_in_background(reference.clone())
            .await
            .map_err(|error| format!("{:#}", error));
        ReaderMessage::ImageDecoded(request_id, reference, decoded)
    }

    fn handle_image_decoded(
        &mut self,
        request_id: Uuid,
        reference: ImageReference,
        decoded: Result<SelectedImage, String>,
    ) -> Task<ReaderMessage> {
        if self.active_selection != Some(request_id) {
            log::warn!(
                "{} Ignoring superseded selection {}",
                LOG_TAG_ORCHESTRATOR,
                reference
            );
            reference.discard_if_captured();
            return Task::none();
        }
        self.active_selection = None;

        match self.display_surface.set_image(&reference, decoded) {
            Ok(()) => {
                log::info!("{} Image selected: {}", LOG_TAG_ORCHESTRATOR, reference);
                self.visibility = self.visibility.transition(LifecycleEvent::ImageSelected);
                self.status = match self.display_surface.current_image() {
                    Some(image) => format!("{} ({}x{})", STATUS_IMAGE_LOADED, image.width, image.height),
                    None => STATUS_IMAGE_LOADED.to_string(),
                };
                Task::none()
            }
            Err(_) => {
                reference.discard_if_captured();
                self.show_toast(TOAST_IMAGE_DECODE_FAILED)
            }
        }
    }

    fn handle_capture_photo(&mut self) -> Task<ReaderMessage> {
        if self.permission_prompt.is_granted() {
            log::debug!("{} Camera permission already granted", LOG_TAG_ORCHESTRATOR);
            return self.open_camera();
        }

        log::info!("{} Requesting camera permission", LOG_TAG_ORCHESTRATOR);
        let permission_prompt = Arc::clone(&self.permission_prompt);

        Task::future(async move {
            ReaderMessage::CameraPermissionResolved(permission_prompt.request().await)
        })
    }

    fn handle_camera_permission_resolved(
        &mut self,
        decision: PermissionDecision,
    ) -> Task<ReaderMessage> {
        match decision {
            PermissionDecision::Granted => self.open_camera(),
            PermissionDecision::Denied => {
                log::warn!("{} Camera permission denied", LOG_TAG_ORCHESTRATOR);
                self.show_toast(TOAST_CAMERA_PERMISSION_DENIED)
            }
        }
    }

    fn open_camera(&mut self) -> Task<ReaderMessage> {
        let photo_directory = self.settings.resolve_photo_directory();

        let photo = match PendingPhoto::allocate_in(&photo_directory) {
            Ok(photo) => photo,
            Err(error) => {
                log::error!(
                    "{} Could not prepare photo file: {:#}",
                    LOG_TAG_ORCHESTRATOR,
                    error
                );
                return self.show_toast(TOAST_CAPTURE_FAILED);
            }
        };

        log::info!(
            "{} Opening camera for request {} at {:?}",
            LOG_TAG_ORCHESTRATOR,
            photo.request_id(),
            photo.path()
        );

        self.active_capture = Some(photo.request_id());
        let camera_capturer = Arc::clone(&self.camera_capturer);

        Task::future(async move {
            let result = camera_capturer
                .capture_to(photo.path())
                .await
                .map_err(|error| format!("{:#}", error));
            ReaderMessage::PhotoCaptured(photo, result)
        })
    }

    fn handle_photo_captured(
        &mut self,
        photo: PendingPhoto,
        result: Result<CaptureOutcome, String>,
    ) -> Task<ReaderMessage> {
        if self.active_capture != Some(photo.request_id()) {
            log::warn!(
                "{} Ignoring superseded capture {}",
                LOG_TAG_ORCHESTRATOR,
                photo.request_id()
            );
            photo.discard();
            return Task::none();
        }
        self.active_capture = None;

        match result {
            Ok(CaptureOutcome::Completed) => self.handle_image_reference(photo.into_reference()),
            Ok(CaptureOutcome::Cancelled) => {
                log::debug!("{} Photo capture cancelled", LOG_TAG_ORCHESTRATOR);
                photo.discard();
                Task::none()
            }
            Err(error) => {
                log::error!("{} Photo capture failed: {}", LOG_TAG_ORCHESTRATOR, error);
                photo.discard();
                self.show_toast(TOAST_CAPTURE_FAILED)
            }
        }
    }

    fn handle_read_text(&mut self) -> Task<ReaderMessage> {
        match self.start_recognition() {
            Some(recognition) => Task::future(recognition),
            None => {
                log::warn!("{} Read requested without an image", LOG_TAG_ORCHESTRATOR);
                self.show_toast(TOAST_NO_IMAGE_SELECTED)
            }
        }
    }

    /// `None` when there is no image, in which case the recognizer is never called.
    fn start_recognition(
        &mut self,
    ) -> Option<impl Future<Output = ReaderMessage> + Send + 'static> {
        let submission = self
            .recognition_adapter
            .submit(self.display_surface.current_image()?);

        self.visibility = self.visibility.transition(LifecycleEvent::RecognitionStarted);
        self.displayed_text.clear();
        self.status = STATUS_READING.to_string();

        let request_id = Uuid::new_v4();
        self.active_recognition = Some(request_id);
        log::info!(
            "{} Starting text recognition {}",
            LOG_TAG_ORCHESTRATOR,
            request_id
        );

        Some(async move { ReaderMessage::RecognitionFinished(request_id, submission.await) })
    }

    fn handle_recognition_finished(
        &mut self,
        request_id: Uuid,
        outcome: RecognitionOutcome,
    ) -> Task<ReaderMessage> {
        if self.active_recognition != Some(request_id) {
            log::warn!(
                "{} Ignoring superseded recognition {}",
                LOG_TAG_ORCHESTRATOR,
                request_id
            );
            return Task::none();
        }
        self.active_recognition = None;

        let event = if outcome.is_failure() {
            self.status = STATUS_READ_FAILED.to_string();
            LifecycleEvent::RecognitionFailed
        } else {
            self.status = STATUS_READ_COMPLETE.to_string();
            LifecycleEvent::RecognitionFinished
        };

        self.displayed_text = outcome.display_text().to_string();
        self.visibility = self.visibility.transition(event);
        Task::none()
    }

    fn show_toast(&mut self, message: &str) -> Task<ReaderMessage> {
        let id = self.toasts.push(message);
        let duration = Duration::from_millis(self.settings.toast_duration_ms);

        Task::future(async move {
            tokio::time::sleep(duration).await;
            ReaderMessage::DismissToast(id)
        })
    }
}
