use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::ports::CameraCapturer;
use crate::core::models::CaptureOutcome;
use crate::global_constants::{CAMERA_OUTPUT_PLACEHOLDER, LOG_TAG_CAMERA};

/// Runs an external capture tool that writes a photo to the given path.
/// An empty file after a successful run means the user backed out.
pub struct CommandCameraCapturer {
    command_template: Vec<String>,
}

impl CommandCameraCapturer {
    pub fn initialize(command_template: Vec<String>) -> Self {
        log::debug!(
            "{} initializing command camera capturer: {:?}",
            LOG_TAG_CAMERA,
            command_template
        );
        Self { command_template }
    }

    fn build_command_line(&self, target: &Path) -> Result<(String, Vec<String>)> {
        let (program, template_args) = self
            .command_template
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("No camera command configured"))?;

        let target = target.to_string_lossy();
        let mut args: Vec<String> = template_args
            .iter()
            .map(|arg| arg.replace(CAMERA_OUTPUT_PLACEHOLDER, &target))
            .collect();

        if !template_args
            .iter()
            .any(|arg| arg.contains(CAMERA_OUTPUT_PLACEHOLDER))
        {
            args.push(target.into_owned());
        }

        Ok((program.clone(), args))
    }
}

#[async_trait]
impl CameraCapturer for CommandCameraCapturer {
    async fn capture_to(&self, target: &Path) -> Result<CaptureOutcome> {
        let (program, args) = self.build_command_line(target)?;
        log::info!("{} running {} {:?}", LOG_TAG_CAMERA, program, args);

        let status = tokio::process::Command::new(&program)
            .args(&args)
            .status()
            .await
            .with_context(|| format!("Failed to launch camera command '{}'", program))?;

        if !status.success() {
            anyhow::bail!("Camera command '{}' exited with {}", program, status);
        }

        let written = tokio::fs::metadata(target)
            .await
            .map(|metadata| metadata.len())
            .unwrap_or(0);

        if written == 0 {
            log::info!("{} no photo written to {:?}", LOG_TAG_CAMERA, target);
            return Ok(CaptureOutcome::Cancelled);
        }

        log::info!("{} captured {} bytes to {:?}", LOG_TAG_CAMERA, written, target);
        Ok(CaptureOutcome::Completed)
    }
}
