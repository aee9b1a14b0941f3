use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

use crate::core::interfaces::ports::{CameraPermissionPrompt, PermissionDecision};
use crate::global_constants::{
    LOG_TAG_PERMISSIONS, PERMISSION_DIALOG_DESCRIPTION, PERMISSION_DIALOG_TITLE,
};

/// Asks with a native yes/no dialog. A grant lasts until the process exits.
pub struct DialogCameraPermissionPrompt {
    granted: AtomicBool,
}

impl DialogCameraPermissionPrompt {
    pub fn initialize(preapproved: bool) -> Self {
        if preapproved {
            log::info!("{} Camera access preapproved in settings", LOG_TAG_PERMISSIONS);
        }

        Self {
            granted: AtomicBool::new(preapproved),
        }
    }

    fn decision_from_answer(answer: &MessageDialogResult) -> PermissionDecision {
        match answer {
            MessageDialogResult::Yes | MessageDialogResult::Ok => PermissionDecision::Granted,
            _ => PermissionDecision::Denied,
        }
    }
}

#[async_trait]
impl CameraPermissionPrompt for DialogCameraPermissionPrompt {
    fn is_granted(&self) -> bool {
        self.granted.load(Ordering::SeqCst)
    }

    async fn request(&self) -> PermissionDecision {
        log::info!("{} Asking for camera permission", LOG_TAG_PERMISSIONS);

        let answer = AsyncMessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(PERMISSION_DIALOG_TITLE)
            .set_description(PERMISSION_DIALOG_DESCRIPTION)
            .set_buttons(MessageButtons::YesNo)
            .show()
            .await;

        let decision = Self::decision_from_answer(&answer);
        match decision {
            PermissionDecision::Granted => {
                log::info!("{} Camera permission granted", LOG_TAG_PERMISSIONS);
                self.granted.store(true, Ordering::SeqCst);
            }
            PermissionDecision::Denied => {
                log::warn!("{} Camera permission not granted", LOG_TAG_PERMISSIONS);
            }
        }

        decision
    }
}
