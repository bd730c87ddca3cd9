//! UI helper functions

use ratatui::layout::Rect;

/// Width of the contact panel overlay in columns
pub const CONTACT_PANEL_WIDTH: u16 = 36;

/// Gap kept between the window strip and the right edge (or the panel)
const RIGHT_MARGIN: u16 = 2;

/// Area left for chat windows once the right offset is applied
///
/// With the contact panel open the windows shift left so the panel never
/// covers them.
pub fn window_strip_area(area: Rect, panel_open: bool) -> Rect {
    let offset = if panel_open {
        CONTACT_PANEL_WIDTH + RIGHT_MARGIN
    } else {
        RIGHT_MARGIN
    };

    Rect {
        width: area.width.saturating_sub(offset),
        ..area
    }
}

/// Presence marker shown next to a contact name
pub fn online_marker(is_online: bool) -> &'static str {
    if is_online { "●" } else { "○" }
}

/// Rectangle of `width` x `height` anchored to the bottom-right of `area`
pub fn bottom_right(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}
