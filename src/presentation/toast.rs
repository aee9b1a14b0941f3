use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::global_constants::MAX_VISIBLE_TOASTS;
use crate::presentation::app_theme;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Short-lived notices stacked at the bottom of the screen. Each one is
/// dismissed by id once its timer fires.
#[derive(Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push(Toast {
            id,
            message: message.into(),
        });

        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            self.toasts.remove(0);
        }

        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }
}

pub fn render_toasts<'a, Message: 'a>(toasts: &'a [Toast]) -> Element<'a, Message> {
    let mut stack = column![].spacing(8).align_x(Alignment::Center);

    for toast in toasts {
        stack = stack.push(
            container(text(toast.message.as_str()).size(14))
                .padding([10, 18])
                .style(app_theme::toast_container_style),
        );
    }

    container(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(24)
        .align_x(Alignment::Center)
        .align_y(Alignment::End)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();

        let first = queue.push("one");
        let second = queue.push("two");

        assert!(second > first);
        assert_eq!(queue.visible().len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_matching_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push("one");
        queue.push("two");

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.visible().len(), 1);
        assert_eq!(queue.visible()[0].message, "two");
    }

    #[test]
    fn test_queue_drops_oldest_beyond_limit() {
        let mut queue = ToastQueue::default();

        for index in 0..(MAX_VISIBLE_TOASTS + 2) {
            queue.push(format!("toast {}", index));
        }

        assert_eq!(queue.visible().len(), MAX_VISIBLE_TOASTS);
        assert_eq!(queue.visible()[0].message, "toast 2");
    }
}
