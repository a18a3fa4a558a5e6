use leptos::prelude::*;
use web_sys::window;

/// Viewports narrower than this start with the sidebar hidden
pub const NARROW_VIEWPORT_PX: f64 = 1024.0;

/// Shell state shared by the header and the sidebar
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(!is_narrow_viewport()),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn close_left(&self) {
        self.left_open.set(false);
    }

    /// Called after a sidebar link is followed: on narrow viewports the
    /// sidebar overlays the content, so it is hidden again.
    pub fn on_navigate(&self) {
        if is_narrow_viewport() {
            self.close_left();
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

fn viewport_width() -> Option<f64> {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

pub fn is_narrow_viewport() -> bool {
    viewport_width().map_or(false, is_narrow)
}

fn is_narrow(width: f64) -> bool {
    width < NARROW_VIEWPORT_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_threshold() {
        assert!(is_narrow(375.0));
        assert!(is_narrow(1023.9));
        assert!(!is_narrow(1024.0));
        assert!(!is_narrow(1920.0));
    }
}
