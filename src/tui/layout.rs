//! Layout definitions for the TUI
//!
//! Step indicator sidebar on the left, the active page on the right, and a
//! status bar along the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Step indicator
    pub sidebar: Rect,
    /// Active page
    pub main: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(40)])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout of a page: heading, body, navigation buttons
pub struct PageLayout {
    pub header: Rect,
    pub body: Rect,
    pub nav: Rect,
}

impl PageLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title and subtitle
                Constraint::Min(3),    // Step content
                Constraint::Length(1), // Buttons
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            nav: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Toast area in the top-right corner of the main panel
pub fn toast_rect(r: Rect) -> Rect {
    let width = 40.min(r.width);
    let height = 4.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

/// Shift a page horizontally during a slide
///
/// Positive offsets push the content right (entering forward), negative
/// offsets push it left (entering backward).
pub fn slide_rect(area: Rect, offset: i16) -> Rect {
    let shift = offset.unsigned_abs().min(area.width);
    if offset >= 0 {
        Rect::new(area.x + shift, area.y, area.width - shift, area.height)
    } else {
        Rect::new(area.x, area.y, area.width - shift, area.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_splits() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.sidebar.width, 24);
        assert_eq!(layout.main.width, 76);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 29);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let area = centered_rect_fixed(50, 7, Rect::new(0, 0, 30, 5));
        assert_eq!(area, Rect::new(0, 0, 30, 5));
    }

    #[test]
    fn test_slide_rect() {
        let area = Rect::new(10, 0, 40, 10);
        assert_eq!(slide_rect(area, 0), area);
        assert_eq!(slide_rect(area, 8), Rect::new(18, 0, 32, 10));
        assert_eq!(slide_rect(area, -8), Rect::new(10, 0, 32, 10));
        assert_eq!(slide_rect(area, 100).width, 0);
    }
}
