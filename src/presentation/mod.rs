pub mod app_theme;
mod reader_view;
pub mod toast;

pub use reader_view::ReaderScreen;
pub use toast::ToastQueue;
