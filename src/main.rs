#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;


use iced::Size;

use crate::global_constants::{APPLICATION_TITLE, WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", APPLICATION_TITLE);

    iced::application(
        app::ReaderApp::build,
        app::ReaderApp::handle_update,
        app::ReaderApp::render_view,
    )
    .title(APPLICATION_TITLE)
    .theme(app::ReaderApp::theme)
    .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
    .run()
}
