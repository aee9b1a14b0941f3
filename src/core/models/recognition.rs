use iced::Rectangle;

use crate::global_constants::{TEXT_DATA_NOT_FOUND, TEXT_RECOGNITION_FAILED};

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct TextBlock {
    pub content: String,
    pub bounds: Rectangle,
    pub confidence: f32,
}

impl TextBlock {
    pub fn new(content: String, x: f32, y: f32, width: f32, height: f32, confidence: f32) -> Self {
        Self {
            content,
            bounds: Rectangle {
                x,
                y,
                width,
                height,
            },
            confidence,
        }
    }
}

/// Blocks in the order the recognizer reported them.
#[derive(Debug, Clone, Default)]
pub struct RecognitionResult {
    pub text_blocks: Vec<TextBlock>,
}

impl RecognitionResult {
    pub fn from_blocks(text_blocks: Vec<TextBlock>) -> Self {
        Self { text_blocks }
    }

    pub fn flatten_to_display_text(&self) -> String {
        if self.text_blocks.is_empty() {
            return TEXT_DATA_NOT_FOUND.to_string();
        }

        self.text_blocks
            .iter()
            .map(|block| block.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionOutcome {
    Text(String),
    Failed,
}

impl RecognitionOutcome {
    pub fn from_result(result: Result<RecognitionResult, String>) -> Self {
        match result {
            Ok(recognition) => RecognitionOutcome::Text(recognition.flatten_to_display_text()),
            Err(_) => RecognitionOutcome::Failed,
        }
    }

    pub fn display_text(&self) -> &str {
        match self {
            RecognitionOutcome::Text(text) => text,
            RecognitionOutcome::Failed => TEXT_RECOGNITION_FAILED,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RecognitionOutcome::Failed)
    }
}
