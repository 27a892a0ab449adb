//! User interface rendering.

mod chart_view;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use chart_view::{draw_chart, equal_aspect_bounds, format_axis_label};
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Chart
            Constraint::Length(1), // Status
            Constraint::Length(1), // Keymap
        ])
        .split(f.area());

    if let Some(surface) = app.chart.surface() {
        draw_chart(f, chunks[0], surface, &app.layout, &colors);
    }
    status_bar::draw_status(f, chunks[1], &app.status, app.seed, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}
