/// Toast visual variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastSeverity {
    #[default]
    Success,
    Error,
}

impl ToastSeverity {
    /// BEM modifier for `.toast`
    pub fn css_modifier(&self) -> &'static str {
        match self {
            ToastSeverity::Success => "toast--success",
            ToastSeverity::Error => "toast--error",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ToastSeverity::Success => "check-circle",
            ToastSeverity::Error => "alert-circle",
        }
    }
}

/// State of a single toast host. At most one message is visible at a time:
/// `show` overwrites whatever is displayed (last write wins, no queue).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    pub visible: bool,
    pub message: String,
    pub severity: ToastSeverity,
    /// Bumped on every `show`; lets a delayed dismiss target only its own toast
    pub generation: u64,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current message and returns its generation
    pub fn show(&mut self, message: impl Into<String>, severity: ToastSeverity) -> u64 {
        self.message = message.into();
        self.severity = severity;
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Timeout dismissal: no-op when a newer toast replaced `generation`
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.visible && self.generation == generation {
            self.visible = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let state = ToastState::new();
        assert!(!state.visible);
        assert!(state.message.is_empty());
    }

    #[test]
    fn test_second_show_overwrites_first() {
        let mut state = ToastState::new();
        state.show("Saved", ToastSeverity::Success);
        state.show("Update failed", ToastSeverity::Error);

        assert!(state.visible);
        assert_eq!(state.message, "Update failed");
        assert_eq!(state.severity, ToastSeverity::Error);
    }

    #[test]
    fn test_dismiss_hides() {
        let mut state = ToastState::new();
        state.show("Saved", ToastSeverity::Success);
        state.dismiss();
        assert!(!state.visible);
    }

    #[test]
    fn test_stale_timeout_keeps_newer_toast() {
        let mut state = ToastState::new();
        let first = state.show("one", ToastSeverity::Success);
        let second = state.show("two", ToastSeverity::Success);

        assert!(!state.expire(first));
        assert!(state.visible);
        assert!(state.expire(second));
        assert!(!state.visible);
        assert!(!state.expire(second));
    }
}
