use iced::widget::{button, column, container, image, row, scrollable, stack, text, Space};
use iced::{Alignment, Background, Color, ContentFit, Element, Length};

use crate::core::models::{SelectedImage, UiVisibility};
use crate::global_constants::{
    APPLICATION_NAME, LABEL_CAMERA_BUTTON, LABEL_CLEAR_TEXT_BUTTON, LABEL_GALLERY_BUTTON,
    LABEL_READ_TEXT_BUTTON, PLACEHOLDER_TEXT_REGION, PROMPT_CHOOSE_IMAGE,
};
use crate::presentation::app_theme;
use crate::presentation::toast::{render_toasts, Toast};

/// Everything the single screen needs to draw itself.
pub struct ReaderScreen<'a, Message> {
    pub visibility: UiVisibility,
    pub image: Option<&'a SelectedImage>,
    pub image_error: Option<&'a str>,
    pub displayed_text: &'a str,
    pub status: &'a str,
    pub toasts: &'a [Toast],
    pub theme: iced::Theme,
    pub on_pick_from_gallery: Message,
    pub on_capture_photo: Message,
    pub on_read_text: Message,
    pub on_clear_text: Message,
}

impl<'a, Message: Clone + 'a> ReaderScreen<'a, Message> {
    pub fn render_ui(self) -> Element<'a, Message> {
        let mut content = column![].spacing(16).padding(24).align_x(Alignment::Center);

        if self.visibility.app_name_visible {
            content = content.push(text(APPLICATION_NAME).size(30));
        }

        content = content.push(self.render_image_area());

        if let Some(error) = self.image_error {
            content = content.push(
                container(text(error).size(13))
                    .padding([8, 12])
                    .width(Length::Fill)
                    .style(app_theme::error_banner_style),
            );
        }

        content = content.push(self.render_source_buttons());

        if self.visibility.read_trigger_visible {
            content = content.push(
                button(text(LABEL_READ_TEXT_BUTTON).size(18))
                    .padding([14, 48])
                    .style(|theme, status| app_theme::primary_button_style(theme, status))
                    .on_press(self.on_read_text.clone()),
            );
        }

        content = content.push(self.render_text_region());
        content = content.push(
            text(self.status)
                .size(12)
                .style(|_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
                }),
        );

        let theme = self.theme.clone();
        let screen = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            });

        stack![screen, render_toasts(self.toasts)].into()
    }

    fn render_image_area(&self) -> Element<'a, Message> {
        let area: Element<'a, Message> = match self.image {
            Some(selected) => image(selected.image_handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None if self.visibility.choose_prompt_visible => {
                text(PROMPT_CHOOSE_IMAGE).size(16).into()
            }
            None => Space::new().into(),
        };

        container(area)
            .width(Length::Fill)
            .height(Length::FillPortion(3))
            .center_x(Length::Fill)
            .center_y(Length::FillPortion(3))
            .style(app_theme::text_region_style)
            .into()
    }

    fn render_source_buttons(&self) -> Element<'a, Message> {
        let gallery_btn = button(text(LABEL_GALLERY_BUTTON).size(15))
            .padding([10, 24])
            .style(|theme, status| app_theme::secondary_button_style(theme, status))
            .on_press(self.on_pick_from_gallery.clone());

        let camera_btn = button(text(LABEL_CAMERA_BUTTON).size(15))
            .padding([10, 24])
            .style(|theme, status| app_theme::secondary_button_style(theme, status))
            .on_press(self.on_capture_photo.clone());

        row![gallery_btn, camera_btn]
            .spacing(12)
            .align_y(Alignment::Center)
            .into()
    }

    fn render_text_region(&self) -> Element<'a, Message> {
        let body = if self.displayed_text.is_empty() {
            text(PLACEHOLDER_TEXT_REGION)
                .size(14)
                .style(|_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(Color::from_rgba(0.5, 0.5, 0.5, 1.0)),
                })
        } else {
            text(self.displayed_text).size(16)
        };

        let clear_btn = button(text(LABEL_CLEAR_TEXT_BUTTON).size(13))
            .padding([6, 16])
            .style(|theme, status| app_theme::secondary_button_style(theme, status))
            .on_press(self.on_clear_text.clone());

        let region = column![
            scrollable(container(body).padding(12).width(Length::Fill)).height(Length::Fill),
            container(clear_btn).width(Length::Fill).align_right(Length::Fill),
        ]
        .spacing(8);

        container(region)
            .width(Length::Fill)
            .height(Length::FillPortion(2))
            .padding(8)
            .style(app_theme::text_region_style)
            .into()
    }
}
