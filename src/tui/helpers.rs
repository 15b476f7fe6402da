// Layout and unit helpers shared by the renderers and input handling
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Approximate width of a terminal cell in pixels
pub const CELL_WIDTH_PX: f64 = 8.0;
/// Approximate height of a terminal cell in pixels
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// Converts a cell delta into a pixel offset.
pub fn cells_to_px(cols: i32, rows: i32) -> (f64, f64) {
    (cols as f64 * CELL_WIDTH_PX, rows as f64 * CELL_HEIGHT_PX)
}

/// Converts a pixel offset into the nearest cell delta.
pub fn px_to_cells(x: f64, y: f64) -> (i32, i32) {
    (
        (x / CELL_WIDTH_PX).round() as i32,
        (y / CELL_HEIGHT_PX).round() as i32,
    )
}

/// Whether the cell at (`col`, `row`) lies inside `area`
pub fn contains(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
}

/// Moves `rect` by a cell offset, keeping it inside `bounds`.
pub fn offset_rect(rect: Rect, dx: i32, dy: i32, bounds: Rect) -> Rect {
    let width = rect.width.min(bounds.width);
    let height = rect.height.min(bounds.height);

    let max_x = (bounds.x + bounds.width - width) as i32;
    let max_y = (bounds.y + bounds.height - height) as i32;
    let x = (rect.x as i32 + dx).clamp(bounds.x as i32, max_x);
    let y = (rect.y as i32 + dy).clamp(bounds.y as i32, max_y);

    Rect::new(x as u16, y as u16, width, height)
}

/// Shrinks `rect` horizontally by `scale`, keeping it centered.
pub fn scale_width(rect: Rect, scale: f64) -> Rect {
    let width = ((rect.width as f64) * scale.clamp(0.0, 1.0)).round() as u16;
    let x = rect.x + (rect.width - width) / 2;
    Rect::new(x, rect.y, width, rect.height)
}

/// Fraction of `done` over `total`, 0.0 when there is nothing to do
pub fn calculate_progress(done: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (done as f64 / total as f64).min(1.0)
    }
}

/// Helper to create a centered rect
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_px_conversion() {
        assert_eq!(cells_to_px(-19, 2), (-152.0, 32.0));
        assert_eq!(px_to_cells(-152.0, 32.0), (-19, 2));
        assert_eq!(px_to_cells(3.0, 7.0), (0, 0));
    }

    #[test]
    fn test_contains() {
        let area = Rect::new(10, 5, 20, 10);
        assert!(contains(area, 10, 5));
        assert!(contains(area, 29, 14));
        assert!(!contains(area, 30, 14));
        assert!(!contains(area, 9, 5));
    }

    #[test]
    fn test_offset_rect_clamps_to_bounds() {
        let bounds = Rect::new(0, 0, 80, 20);
        let card = Rect::new(20, 5, 40, 10);

        assert_eq!(offset_rect(card, 5, 1, bounds), Rect::new(25, 6, 40, 10));
        assert_eq!(offset_rect(card, -100, 0, bounds), Rect::new(0, 5, 40, 10));
        assert_eq!(offset_rect(card, 100, 100, bounds), Rect::new(40, 10, 40, 10));
    }

    #[test]
    fn test_scale_width_centers() {
        let rect = Rect::new(10, 2, 40, 8);
        assert_eq!(scale_width(rect, 1.0), rect);
        assert_eq!(scale_width(rect, 0.9), Rect::new(12, 2, 36, 8));
    }

    #[test]
    fn test_calculate_progress() {
        assert_eq!(calculate_progress(0, 0), 0.0);
        assert_eq!(calculate_progress(5, 10), 0.5);
        assert_eq!(calculate_progress(12, 10), 1.0);
    }
}
