#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    ImageSelected,
    RecognitionStarted,
    RecognitionFinished,
    RecognitionFailed,
    TextCleared,
}

/// Which optional parts of the screen are shown. Every flag only ever moves
/// one way during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiVisibility {
    pub choose_prompt_visible: bool,
    pub read_trigger_visible: bool,
    pub app_name_visible: bool,
}

impl Default for UiVisibility {
    fn default() -> Self {
        Self {
            choose_prompt_visible: true,
            read_trigger_visible: false,
            app_name_visible: true,
        }
    }
}

impl UiVisibility {
    pub fn transition(self, event: LifecycleEvent) -> Self {
        match event {
            LifecycleEvent::ImageSelected => Self {
                choose_prompt_visible: false,
                read_trigger_visible: true,
                ..self
            },
            LifecycleEvent::RecognitionStarted => Self {
                app_name_visible: false,
                ..self
            },
            LifecycleEvent::RecognitionFinished
            | LifecycleEvent::RecognitionFailed
            | LifecycleEvent::TextCleared => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_shows_prompt_and_title_only() {
        let visibility = UiVisibility::default();

        assert!(visibility.choose_prompt_visible);
        assert!(!visibility.read_trigger_visible);
        assert!(visibility.app_name_visible);
    }

    #[test]
    fn test_image_selected_hides_prompt_and_reveals_read_trigger() {
        let visibility = UiVisibility::default().transition(LifecycleEvent::ImageSelected);

        assert!(!visibility.choose_prompt_visible);
        assert!(visibility.read_trigger_visible);
        assert!(visibility.app_name_visible);
    }

    #[test]
    fn test_recognition_started_hides_title_for_good() {
        let visibility = UiVisibility::default()
            .transition(LifecycleEvent::ImageSelected)
            .transition(LifecycleEvent::RecognitionStarted)
            .transition(LifecycleEvent::RecognitionFailed)
            .transition(LifecycleEvent::TextCleared)
            .transition(LifecycleEvent::ImageSelected);

        assert!(!visibility.app_name_visible);
    }

    #[test]
    fn test_prompt_never_returns_after_first_selection() {
        let events = [
            LifecycleEvent::TextCleared,
            LifecycleEvent::RecognitionStarted,
            LifecycleEvent::RecognitionFinished,
            LifecycleEvent::ImageSelected,
        ];

        let visibility = events.iter().fold(
            UiVisibility::default().transition(LifecycleEvent::ImageSelected),
            |state, event| state.transition(*event),
        );

        assert!(!visibility.choose_prompt_visible);
        assert!(visibility.read_trigger_visible);
    }

    #[test]
    fn test_text_cleared_changes_nothing() {
        let before = UiVisibility::default().transition(LifecycleEvent::ImageSelected);

        assert_eq!(before.transition(LifecycleEvent::TextCleared), before);
    }
}
