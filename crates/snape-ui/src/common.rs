use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Text,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

// Helper function to draw a bordered box over whatever is behind it
pub fn render_popup<'a>(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: impl Into<Text<'a>>,
    style: Style,
    alignment: Alignment,
) {
    // Clear the area behind the popup
    f.render_widget(Clear, area);

    let popup = Paragraph::new(content)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title.to_owned()))
        .alignment(alignment);

    f.render_widget(popup, area);
}

// Helper function to create a centered rect
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

/// A rect of at most `width` x `height` cells centered in `r`.
pub fn sized_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

/// Whether the cell at `column`, `row` lies inside `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sized_rect_is_centered_and_clamped() {
        let screen = Rect::new(0, 0, 100, 40);
        assert_eq!(sized_rect(50, 20, screen), Rect::new(25, 10, 50, 20));
        assert_eq!(sized_rect(200, 80, screen), screen);
    }

    #[test]
    fn contains_excludes_the_far_edges() {
        let area = Rect::new(2, 3, 4, 2);
        assert!(contains(area, 2, 3));
        assert!(contains(area, 5, 4));
        assert!(!contains(area, 6, 4));
        assert!(!contains(area, 5, 5));
    }
}
