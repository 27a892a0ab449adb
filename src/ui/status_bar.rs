//! Status bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(crate) fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    seed: u64,
    colors: &ThemeColors,
) {
    let text = format!("seed {} | {}", seed, status);

    let style = if status.starts_with("Not drawn") {
        Style::default().fg(colors.red).bg(colors.bg1)
    } else {
        Style::default().fg(colors.fg0).bg(colors.bg1)
    };

    f.render_widget(Paragraph::new(text).style(style), area);
}
