use anyhow::{Context, Result};
use async_trait::async_trait;
use image::DynamicImage;
use rusty_tesseract::{Args, Image as TesseractImage};

use crate::core::interfaces::adapters::TextRecognizer;
use crate::core::models::{RecognitionResult, TextBlock};
use crate::global_constants::LOG_TAG_TESSERACT;

const WORD_LEVEL: i32 = 5;

/// One word row of tesseract's TSV output.
#[derive(Debug, Clone, PartialEq)]
struct RecognizedWord {
    page_num: i32,
    block_num: i32,
    left: i32,
    top: i32,
    width: i32,
    height: i32,
    confidence: f32,
    text: String,
}

pub struct TesseractTextRecognizer {
    args: Args,
}

impl TesseractTextRecognizer {
    /// Fails when the tesseract binary or the requested language data is missing.
    pub fn build(language: &str) -> Result<Self> {
        log::info!("{} Initializing Tesseract text recognizer", LOG_TAG_TESSERACT);

        let version = rusty_tesseract::get_tesseract_version()
            .context("Tesseract is not installed or not on PATH")?;
        log::info!("{} Found tesseract {}", LOG_TAG_TESSERACT, version.trim());

        let languages = rusty_tesseract::get_tesseract_langs()
            .context("Failed to list Tesseract languages")?;
        if !languages.iter().any(|installed| installed == language) {
            anyhow::bail!("Tesseract language data '{}' is not installed", language);
        }

        Ok(Self {
            args: Args {
                lang: language.to_string(),
                ..Args::default()
            },
        })
    }

    /// Runs `build` on the blocking pool; locating tesseract spawns subprocesses.
    pub async fn build_in_background(language: String) -> Result<Self> {
        tokio::task::spawn_blocking(move || Self::build(&language))
            .await
            .context("Tesseract initialization worker stopped unexpectedly")?
    }

    /// rusty-tesseract owns the temporary file it hands to the binary.
    fn prepare_input(image: &DynamicImage) -> Result<TesseractImage> {
        TesseractImage::from_dynamic_image(image).context("Failed to create Tesseract image")
    }

    fn extract_words(output: &rusty_tesseract::DataOutput) -> Vec<RecognizedWord> {
        output
            .data
            .iter()
            .filter(|row| row.level == WORD_LEVEL)
            .map(|row| RecognizedWord {
                page_num: row.page_num,
                block_num: row.block_num,
                left: row.left,
                top: row.top,
                width: row.width,
                height: row.height,
                confidence: row.conf,
                text: row.text.clone(),
            })
            .collect()
    }

    /// Groups words by (page, block) in first-seen order. Blank words and
    /// rows tesseract marks with a negative confidence are dropped.
    fn group_words_into_blocks(words: &[RecognizedWord]) -> Vec<TextBlock> {
        let mut grouped: Vec<((i32, i32), Vec<&RecognizedWord>)> = Vec::new();

        for word in words {
            if word.text.trim().is_empty() || word.confidence < 0.0 {
                continue;
            }

            let key = (word.page_num, word.block_num);
            match grouped.iter_mut().find(|(existing, _)| *existing == key) {
                Some((_, members)) => members.push(word),
                None => grouped.push((key, vec![word])),
            }
        }

        grouped
            .into_iter()
            .map(|(_, members)| {
                let content = members
                    .iter()
                    .map(|word| word.text.trim())
                    .collect::<Vec<_>>()
                    .join(" ");

                let left = members.iter().map(|word| word.left).min().unwrap_or(0);
                let top = members.iter().map(|word| word.top).min().unwrap_or(0);
                let right = members
                    .iter()
                    .map(|word| word.left + word.width)
                    .max()
                    .unwrap_or(left);
                let bottom = members
                    .iter()
                    .map(|word| word.top + word.height)
                    .max()
                    .unwrap_or(top);
                let confidence =
                    members.iter().map(|word| word.confidence).sum::<f32>() / members.len() as f32;

                TextBlock::new(
                    content,
                    left as f32,
                    top as f32,
                    (right - left) as f32,
                    (bottom - top) as f32,
                    confidence,
                )
            })
            .collect()
    }
}

#[async_trait]
impl TextRecognizer for TesseractTextRecognizer {
    async fn recognize_blocks(&self, image: &DynamicImage) -> Result<RecognitionResult> {
        log::info!("{} Starting text extraction", LOG_TAG_TESSERACT);
        log::debug!(
            "{} Image dimensions: {}x{}",
            LOG_TAG_TESSERACT,
            image.width(),
            image.height()
        );

        let tesseract_image = Self::prepare_input(image)?;
        let args = self.args.clone();

        let output = tokio::task::spawn_blocking(move || {
            rusty_tesseract::image_to_data(&tesseract_image, &args)
        })
        .await
        .context("Tesseract worker stopped unexpectedly")?
        .context("Failed to extract text from image")?;
        let text_blocks = Self::group_words_into_blocks(&Self::extract_words(&output));

        log::info!(
            "{} Text extraction complete. Found {} text blocks",
            LOG_TAG_TESSERACT,
            text_blocks.len()
        );

        Ok(RecognitionResult::from_blocks(text_blocks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(block_num: i32, left: i32, text: &str, confidence: f32) -> RecognizedWord {
        RecognizedWord {
            page_num: 1,
            block_num,
            left,
            top: 10,
            width: 20,
            height: 12,
            confidence,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_words_of_same_block_are_joined_in_order() {
        let words = vec![word(1, 0, "Hello", 95.0), word(1, 25, "World", 91.0)];

        let blocks = TesseractTextRecognizer::group_words_into_blocks(&words);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "Hello World");
        assert_eq!(blocks[0].bounds.x, 0.0);
        assert_eq!(blocks[0].bounds.width, 45.0);
        assert_eq!(blocks[0].confidence, 93.0);
    }

    #[test]
    fn test_blocks_keep_first_seen_order() {
        let words = vec![
            word(2, 0, "second", 90.0),
            word(1, 0, "first", 90.0),
            word(2, 30, "again", 90.0),
        ];

        let blocks = TesseractTextRecognizer::group_words_into_blocks(&words);

        let contents: Vec<&str> = blocks.iter().map(|block| block.content.as_str()).collect();
        assert_eq!(contents, vec!["second again", "first"]);
    }

    #[test]
    fn test_blank_and_unconfident_words_are_skipped() {
        let words = vec![
            word(1, 0, "   ", 90.0),
            word(1, 10, "noise", -1.0),
            word(3, 0, "kept", 80.0),
        ];

        let blocks = TesseractTextRecognizer::group_words_into_blocks(&words);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "kept");
    }

    #[test]
    fn test_no_words_yield_no_blocks() {
        assert!(TesseractTextRecognizer::group_words_into_blocks(&[]).is_empty());
    }

    #[test]
    fn test_prepare_input_accepts_in_memory_bitmap() {
        let image = DynamicImage::ImageRgba8(image::RgbaImage::new(16, 8));

        assert!(TesseractTextRecognizer::prepare_input(&image).is_ok());
    }

    #[tokio::test]
    async fn test_build_in_background_rejects_unknown_language() {
        let result =
            TesseractTextRecognizer::build_in_background("zz-not-a-language".to_string()).await;

        assert!(result.is_err());
    }
}
