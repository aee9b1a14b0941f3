mod text_recognizer;

pub use text_recognizer::TextRecognizer;
