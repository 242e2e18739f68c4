#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn scroll_to_top_has_no_window_outside_browser() {
    assert!(!scroll_to_top());
}

#[test]
fn announce_view_never_scrolls_outside_browser() {
    for view in PageView::ALL {
        assert!(!announce_view(view));
    }
}
