//! Browser viewport side effects for view changes.
//!
//! TRADE-OFFS
//! ==========
//! Switching panels swaps the whole page body, so the window is scrolled back
//! to the top. SSR and native test builds have no window and no-op.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::state::ui::PageView;

/// Scroll the window to its origin. Returns whether a window was found.
pub fn scroll_to_top() -> bool {
    #[cfg(feature = "hydrate")]
    {
        match web_sys::window() {
            Some(window) => {
                window.scroll_to_with_x_and_y(0.0, 0.0);
                true
            }
            None => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Log a view change and reset the scroll position. Returns whether the
/// window was scrolled.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn announce_view(view: PageView) -> bool {
    #[cfg(feature = "hydrate")]
    log::debug!("navigate: {}", view.label());
    scroll_to_top()
}
