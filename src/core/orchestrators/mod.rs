pub mod reader_orchestrator;
mod text_recognition_adapter;

pub use text_recognition_adapter::TextRecognitionAdapter;
