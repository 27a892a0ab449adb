//! Chart area - paints a [`CanvasSurface`] into the terminal.

use crate::colormap::Colormap;
use crate::config::LayoutConfig;
use crate::surface::{
    AxesStyle, CanvasSurface, ColorLimits, DrawingSurface, EdgeColorMode, PathPrimitive,
};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// One colored piece of the path in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Segment {
    pub(crate) from: [f64; 2],
    pub(crate) to: [f64; 2],
    pub(crate) color: Color,
}

/// Draw the chart surface into `area`.
pub fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    surface: &CanvasSurface,
    layout: &LayoutConfig,
    colors: &ThemeColors,
) {
    let style = surface.axes_style();

    let mut block = Block::default().style(Style::default().bg(colors.bg0));
    if style.border_visible {
        block = block
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.bg2));
    }
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 4 || inner.height < 4 {
        return;
    }

    let has_titles = !surface.title().is_empty() || !surface.subtitle().is_empty();
    let has_colorbar = surface.colorbar_visible();

    let mut constraints = Vec::new();
    if has_titles {
        constraints.push(Constraint::Length(layout.canvas.title_height));
    }
    constraints.push(Constraint::Min(2));
    if has_colorbar {
        constraints.push(Constraint::Length(layout.colorbar.height));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut idx = 0;
    if has_titles {
        draw_titles(f, chunks[idx], surface, colors);
        idx += 1;
    }
    draw_canvas(f, chunks[idx], surface, style, layout, colors);
    idx += 1;
    if has_colorbar {
        draw_colorbar(f, chunks[idx], surface, layout, colors);
    }
}

fn draw_titles(f: &mut Frame<'_>, area: Rect, surface: &CanvasSurface, colors: &ThemeColors) {
    let mut lines = Vec::new();
    if !surface.title().is_empty() {
        lines.push(Line::from(Span::styled(
            surface.title().to_string(),
            Style::default()
                .fg(colors.yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }
    if !surface.subtitle().is_empty() {
        lines.push(Line::from(Span::styled(
            surface.subtitle().to_string(),
            Style::default().fg(colors.fg0),
        )));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_canvas(
    f: &mut Frame<'_>,
    area: Rect,
    surface: &CanvasSurface,
    style: AxesStyle,
    layout: &LayoutConfig,
    colors: &ThemeColors,
) {
    let visible = surface.path().filter(|p| p.visible);
    let drawable = visible.and_then(|p| p.bounds().map(|b| (p, b)));
    let Some((path, (x_bounds, y_bounds))) = drawable else {
        let para = Paragraph::new("No data to draw")
            .style(Style::default().fg(colors.fg0))
            .alignment(Alignment::Center);
        f.render_widget(para, area);
        return;
    };

    let (x_bounds, y_bounds) = if style.tight_limits {
        (x_bounds, y_bounds)
    } else {
        (pad(x_bounds, 0.05), pad(y_bounds, 0.05))
    };
    let (x_bounds, y_bounds) = if style.equal_aspect {
        equal_aspect_bounds(x_bounds, y_bounds, area, layout.canvas.cell_aspect)
    } else {
        (x_bounds, y_bounds)
    };

    let segments = path_segments(path, surface.colormap(), surface.color_limits());
    let ticks_visible = style.ticks_visible;
    let tick_color = colors.fg0;

    let canvas = Canvas::default()
        .background_color(colors.bg0)
        .marker(marker_for(path.line_width))
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            for s in &segments {
                ctx.draw(&CanvasLine::new(
                    s.from[0], s.from[1], s.to[0], s.to[1], s.color,
                ));
            }
            if ticks_visible {
                ctx.print(
                    x_bounds[0],
                    y_bounds[0],
                    Span::styled(
                        format!(
                            "({}, {})",
                            format_axis_label(x_bounds[0]),
                            format_axis_label(y_bounds[0])
                        ),
                        Style::default().fg(tick_color),
                    ),
                );
            }
        });

    f.render_widget(canvas, area);
}

fn draw_colorbar(
    f: &mut Frame<'_>,
    area: Rect,
    surface: &CanvasSurface,
    layout: &LayoutConfig,
    colors: &ThemeColors,
) {
    let limits = surface.color_limits();
    let colormap = surface.colormap();

    let width = layout
        .colorbar
        .max_width
        .min((area.width as usize).saturating_sub(20));
    if width == 0 {
        return;
    }
    let start = area.x + ((area.width as usize).saturating_sub(width) / 2) as u16;
    let right = area.x + area.width;

    for i in 0..width {
        let value = limits.lo() + (i as f64 + 0.5) / width as f64 * (limits.hi() - limits.lo());
        let x = start + i as u16;
        if let Some(rgb) = colormap.color_for(value, limits) {
            if let Some(cell) = f.buffer_mut().cell_mut((x, area.y)) {
                cell.set_char('█').set_fg(rgb.to_color());
            }
        }
    }

    let min_label = format_axis_label(limits.lo());
    let max_label = format_axis_label(limits.hi());
    let min_x = start.saturating_sub(min_label.width() as u16 + 1);
    put_str(f, min_x, area.y, right, &min_label, colors.green);
    put_str(f, start + width as u16 + 1, area.y, right, &max_label, colors.green);

    let label = surface.colorbar_label();
    if !label.is_empty() && area.height > 1 {
        let label_x = area.x + (area.width / 2).saturating_sub(label.width() as u16 / 2);
        put_str(f, label_x, area.y + 1, right, label, colors.aqua);
    }
}

fn put_str(f: &mut Frame<'_>, x: u16, y: u16, right: u16, text: &str, color: Color) {
    let mut col = x;
    for ch in text.chars() {
        if col >= right {
            break;
        }
        if let Some(cell) = f.buffer_mut().cell_mut((col, y)) {
            cell.set_char(ch).set_fg(color);
        }
        col += 1;
    }
}

/// Canvas marker for a line width in points.
fn marker_for(line_width: f64) -> Marker {
    if line_width < 1.0 {
        Marker::Braille
    } else if line_width < 2.0 {
        Marker::HalfBlock
    } else {
        Marker::Block
    }
}

fn pad(bounds: [f64; 2], fraction: f64) -> [f64; 2] {
    let margin = (bounds[1] - bounds[0]) * fraction;
    [bounds[0] - margin, bounds[1] + margin]
}

/// Widen one axis so a data unit spans the same physical length on both.
///
/// `cell_aspect` is terminal cell height over width.
pub fn equal_aspect_bounds(
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    area: Rect,
    cell_aspect: f64,
) -> ([f64; 2], [f64; 2]) {
    let cols = f64::from(area.width.max(1));
    let rows = f64::from(area.height.max(1)) * cell_aspect;

    let x_span = (x_bounds[1] - x_bounds[0]).max(f64::EPSILON);
    let y_span = (y_bounds[1] - y_bounds[0]).max(f64::EPSILON);
    let scale = (x_span / cols).max(y_span / rows);

    let center = |b: [f64; 2]| (b[0] + b[1]) / 2.0;
    let (cx, cy) = (center(x_bounds), center(y_bounds));
    let (half_x, half_y) = (scale * cols / 2.0, scale * rows / 2.0);

    ([cx - half_x, cx + half_x], [cy - half_y, cy + half_y])
}

/// Split the path into colored segments.
///
/// Interpolated edges are drawn as two halves, each in its own vertex's color.
/// Edges touching a non-finite vertex are skipped.
pub(crate) fn path_segments(
    path: &PathPrimitive,
    colormap: &Colormap,
    limits: ColorLimits,
) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(path.faces.len() * 2);
    let vertex = |i: usize| {
        path.vertices
            .get(i)
            .copied()
            .filter(|[x, y]| x.is_finite() && y.is_finite())
    };
    let color = |i: usize| {
        path.vertex_colors
            .get(i)
            .and_then(|&v| colormap.color_for(v, limits))
            .map(|rgb| rgb.to_color())
    };

    for pair in path.faces.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let (Some(from), Some(to)) = (vertex(a), vertex(b)) else {
            continue;
        };
        let Some(ca) = color(a) else {
            continue;
        };

        match path.edge_color {
            EdgeColorMode::Flat => segments.push(Segment {
                from,
                to,
                color: ca,
            }),
            EdgeColorMode::Interp => {
                let mid = [(from[0] + to[0]) / 2.0, (from[1] + to[1]) / 2.0];
                segments.push(Segment {
                    from,
                    to: mid,
                    color: ca,
                });
                segments.push(Segment {
                    from: mid,
                    to,
                    color: color(b).unwrap_or(ca),
                });
            }
        }
    }

    segments
}

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::Rgb;
    use crate::surface::FillMode;

    fn two_tone() -> Colormap {
        Colormap::new(vec![Rgb::new(0.0, 0.0, 0.0), Rgb::new(1.0, 1.0, 1.0)]).unwrap()
    }

    fn path(edge: EdgeColorMode) -> PathPrimitive {
        let mut p = PathPrimitive::new(FillMode::None, edge);
        p.vertices = vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [f64::NAN, f64::NAN]];
        p.faces = vec![0, 1, 2, 3];
        p.vertex_colors = vec![0.0, 1.0, 1.0, f64::NAN];
        p
    }

    #[test]
    fn interpolated_edges_split_at_midpoint() {
        let limits = ColorLimits::new(0.0, 1.0).unwrap();
        let segs = path_segments(&path(EdgeColorMode::Interp), &two_tone(), limits);
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[0].to, [1.0, 0.0]);
        assert_eq!(segs[0].color, Color::Rgb(0, 0, 0));
        assert_eq!(segs[1].color, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn flat_edges_and_sentinel() {
        let limits = ColorLimits::new(0.0, 1.0).unwrap();
        let segs = path_segments(&path(EdgeColorMode::Flat), &two_tone(), limits);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[1].from, [2.0, 0.0]);
    }

    #[test]
    fn equal_aspect_widens_short_axis() {
        let area = Rect::new(0, 0, 40, 10);
        // 40 cols vs 10 rows * 2 = 20 physical rows
        let (xb, yb) = equal_aspect_bounds([0.0, 10.0], [0.0, 10.0], area, 2.0);
        assert_eq!(yb, [0.0, 10.0]);
        assert_eq!(xb, [-5.0, 15.0]);
    }

    #[test]
    fn marker_tracks_line_width() {
        assert_eq!(marker_for(0.5), Marker::Braille);
        assert_eq!(marker_for(1.5), Marker::HalfBlock);
        assert_eq!(marker_for(3.0), Marker::Block);
    }

    #[test]
    fn axis_label_precision() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(150.0), "150");
        assert_eq!(format_axis_label(3.14159), "3.1");
        assert_eq!(format_axis_label(0.5), "0.50");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }
}
