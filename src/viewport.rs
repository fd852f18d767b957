use leptos::*;

/// Narrower windows get the mobile shell.
pub const DESKTOP_MIN_WIDTH_PX: f64 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Desktop,
    Mobile,
}

impl Layout {
    pub fn for_width(width_px: f64, breakpoint_px: f64) -> Self {
        if width_px < breakpoint_px {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }
}

/// Current `window.innerWidth`, or `None` outside a browser.
fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Layout signal that follows window resizes.
///
/// Without a window (or a readable width) the desktop shell is used.
pub fn use_layout(breakpoint_px: f64) -> ReadSignal<Layout> {
    let current = move || {
        window_width()
            .map(|w| Layout::for_width(w, breakpoint_px))
            .unwrap_or(Layout::Desktop)
    };

    let (layout, set_layout) = create_signal(current());

    let handle = window_event_listener(ev::resize, move |_| {
        let next = current();
        if layout.get_untracked() != next {
            set_layout.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_breakpoint_is_mobile() {
        assert_eq!(Layout::for_width(375.0, DESKTOP_MIN_WIDTH_PX), Layout::Mobile);
        assert_eq!(Layout::for_width(1023.9, DESKTOP_MIN_WIDTH_PX), Layout::Mobile);
    }

    #[test]
    fn test_breakpoint_and_above_is_desktop() {
        assert_eq!(Layout::for_width(1024.0, DESKTOP_MIN_WIDTH_PX), Layout::Desktop);
        assert_eq!(Layout::for_width(1920.0, DESKTOP_MIN_WIDTH_PX), Layout::Desktop);
    }

    #[test]
    fn test_custom_breakpoint() {
        assert_eq!(Layout::for_width(800.0, 768.0), Layout::Desktop);
        assert_eq!(Layout::for_width(700.0, 768.0), Layout::Mobile);
    }
}
