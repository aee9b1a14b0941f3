mod tesseract_text_recognizer;

pub use tesseract_text_recognizer::TesseractTextRecognizer;
