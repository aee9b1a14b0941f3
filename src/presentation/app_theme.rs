use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.08, 0.08, 0.1),
                text: Color::from_rgb(0.95, 0.95, 0.95),
                primary: Color::from_rgb(0.0, 0.588, 0.533),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.97, 0.97, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.0, 0.475, 0.42),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn filled_button(background: Color, text_color: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

fn disabled_button() -> button::Style {
    button::Style {
        border: Border {
            color: Color::from_rgb(0.4, 0.4, 0.4),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..filled_button(Color::from_rgb(0.3, 0.3, 0.3), Color::from_rgb(0.5, 0.5, 0.5), false)
    }
}

/// Teal, used for the "read text" trigger.
pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled_button(Color::from_rgb(0.0, 0.588, 0.533), Color::WHITE, false),
        button::Status::Hovered => filled_button(Color::from_rgb(0.149, 0.651, 0.604), Color::WHITE, false),
        button::Status::Pressed => filled_button(Color::from_rgb(0.0, 0.475, 0.42), Color::WHITE, true),
        button::Status::Disabled => disabled_button(),
    }
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled_button(
            Color::from_rgb(0.25, 0.25, 0.25),
            Color::from_rgb(0.85, 0.85, 0.85),
            false,
        ),
        button::Status::Hovered => filled_button(
            Color::from_rgb(0.35, 0.35, 0.35),
            Color::from_rgb(0.95, 0.95, 0.95),
            false,
        ),
        button::Status::Pressed => filled_button(
            Color::from_rgb(0.2, 0.2, 0.2),
            Color::from_rgb(0.8, 0.8, 0.8),
            true,
        ),
        button::Status::Disabled => disabled_button(),
    }
}

pub fn text_region_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: 0.06,
            ..palette.text
        })),
        text_color: Some(palette.text),
        border: Border {
            color: Color::from_rgba(0.5, 0.5, 0.5, 0.4),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn error_banner_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: 0.15,
            ..palette.danger
        })),
        text_color: Some(palette.danger),
        border: Border {
            color: palette.danger,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

pub fn toast_container_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.15, 0.15, 0.15, 0.92))),
        text_color: Some(Color::WHITE),
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            width: 1.0,
            radius: 18.0.into(),
        },
        ..Default::default()
    }
}
