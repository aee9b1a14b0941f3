use std::future::Future;
use std::sync::Arc;

use crate::core::interfaces::adapters::TextRecognizer;
use crate::core::models::{RecognitionOutcome, SelectedImage};
use crate::global_constants::LOG_TAG_RECOGNITION;

pub struct TextRecognitionAdapter {
    recognizer: Arc<dyn TextRecognizer>,
}

impl TextRecognitionAdapter {
    pub fn build(recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self { recognizer }
    }

    pub fn replace_recognizer(&mut self, recognizer: Arc<dyn TextRecognizer>) {
        self.recognizer = recognizer;
    }

    /// The returned future resolves exactly once, with either the flattened
    /// text or a failure. It owns everything it needs, so the caller can hand
    /// it straight to the runtime.
    pub fn submit(
        &self,
        image: &SelectedImage,
    ) -> impl Future<Output = RecognitionOutcome> + Send + 'static {
        let recognizer = Arc::clone(&self.recognizer);
        let bitmap = image.bitmap();
        let source = image.source.clone();

        async move {
            log::debug!("{} submitting {} to recognizer", LOG_TAG_RECOGNITION, source);

            let result = recognizer
                .recognize_blocks(&bitmap)
                .await
                .map_err(|error| format!("{:#}", error));

            match &result {
                Ok(recognition) => log::info!(
                    "{} recognized {} text blocks in {}",
                    LOG_TAG_RECOGNITION,
                    recognition.text_blocks.len(),
                    source
                ),
                Err(error) => log::error!(
                    "{} recognition failed for {}: {}",
                    LOG_TAG_RECOGNITION,
                    source,
                    error
                ),
            }

            RecognitionOutcome::from_result(result)
        }
    }
}
