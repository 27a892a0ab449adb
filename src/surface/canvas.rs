//! In-memory drawing surface painted by the terminal UI.

use super::{AxesStyle, ColorLimits, DrawingSurface, PathPrimitive, PropertyMode};
use crate::colormap::Colormap;

/// Surface state for one terminal chart area.
///
/// Holds the primitive and axis properties; `ui::chart_view` turns them into
/// canvas draw calls.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    style: AxesStyle,
    path: Option<PathPrimitive>,
    colormap: Colormap,
    colormap_mode: PropertyMode,
    manual_limits: ColorLimits,
    limits_mode: PropertyMode,
    title: String,
    subtitle: String,
    colorbar_visible: bool,
    colorbar_label: String,
}

impl CanvasSurface {
    /// Create a fresh surface whose automatic colormap is `default_colormap`.
    pub fn new(default_colormap: Colormap) -> Self {
        Self {
            style: AxesStyle::default(),
            path: None,
            colormap: default_colormap,
            colormap_mode: PropertyMode::Auto,
            manual_limits: ColorLimits::default(),
            limits_mode: PropertyMode::Auto,
            title: String::new(),
            subtitle: String::new(),
            colorbar_visible: false,
            colorbar_label: String::new(),
        }
    }
}

/// Collapse line breaks so the text fits a single terminal row.
fn single_line(text: &str) -> String {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl DrawingSurface for CanvasSurface {
    fn configure(&mut self, style: AxesStyle) {
        self.style = style;
    }

    fn axes_style(&self) -> AxesStyle {
        self.style
    }

    fn create_path(&mut self, path: PathPrimitive) {
        self.path = Some(path);
    }

    fn path(&self) -> Option<&PathPrimitive> {
        self.path.as_ref()
    }

    fn path_mut(&mut self) -> Option<&mut PathPrimitive> {
        self.path.as_mut()
    }

    fn colormap(&self) -> &Colormap {
        &self.colormap
    }

    fn set_colormap(&mut self, colormap: Colormap) {
        self.colormap = colormap;
        self.colormap_mode = PropertyMode::Manual;
    }

    fn colormap_mode(&self) -> PropertyMode {
        self.colormap_mode
    }

    fn color_limits(&self) -> ColorLimits {
        match self.limits_mode {
            PropertyMode::Manual => self.manual_limits,
            PropertyMode::Auto => self
                .path
                .as_ref()
                .filter(|p| p.visible)
                .map(|p| ColorLimits::covering(&p.vertex_colors))
                .unwrap_or_default(),
        }
    }

    fn set_color_limits(&mut self, limits: ColorLimits) {
        self.manual_limits = limits;
        self.limits_mode = PropertyMode::Manual;
    }

    fn color_limits_mode(&self) -> PropertyMode {
        self.limits_mode
    }

    fn set_color_limits_mode(&mut self, mode: PropertyMode) {
        if mode == PropertyMode::Manual && self.limits_mode == PropertyMode::Auto {
            // Freeze whatever is currently displayed
            self.manual_limits = self.color_limits();
        }
        self.limits_mode = mode;
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, text: &str) {
        self.title = single_line(text);
    }

    fn subtitle(&self) -> &str {
        &self.subtitle
    }

    fn set_subtitle(&mut self, text: &str) {
        self.subtitle = single_line(text);
    }

    fn colorbar_visible(&self) -> bool {
        self.colorbar_visible
    }

    fn set_colorbar_visible(&mut self, visible: bool) {
        self.colorbar_visible = visible;
    }

    fn colorbar_label(&self) -> &str {
        &self.colorbar_label
    }

    fn set_colorbar_label(&mut self, text: &str) {
        self.colorbar_label = single_line(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{EdgeColorMode, FillMode};

    fn surface() -> CanvasSurface {
        CanvasSurface::new(Colormap::viridis())
    }

    #[test]
    fn auto_limits_follow_path_colors() {
        let mut s = surface();
        assert_eq!(s.color_limits().as_pair(), (0.0, 1.0));

        let mut path = PathPrimitive::new(FillMode::None, EdgeColorMode::Interp);
        path.vertex_colors = vec![2.0, 5.0, f64::NAN];
        s.create_path(path);
        assert_eq!(s.color_limits().as_pair(), (2.0, 5.0));
        assert_eq!(s.color_limits_mode(), PropertyMode::Auto);
    }

    #[test]
    fn setting_limits_or_colormap_goes_manual() {
        let mut s = surface();
        s.set_color_limits(ColorLimits::new(-1.0, 1.0).unwrap());
        assert_eq!(s.color_limits_mode(), PropertyMode::Manual);
        assert_eq!(s.color_limits().as_pair(), (-1.0, 1.0));

        assert_eq!(s.colormap_mode(), PropertyMode::Auto);
        s.set_colormap(Colormap::from_palette(crate::colormap::ColorPalette::Plasma, 8));
        assert_eq!(s.colormap_mode(), PropertyMode::Manual);
    }

    #[test]
    fn switching_to_manual_freezes_current_limits() {
        let mut s = surface();
        let mut path = PathPrimitive::new(FillMode::None, EdgeColorMode::Interp);
        path.vertex_colors = vec![10.0, 20.0];
        s.create_path(path);
        s.set_color_limits_mode(PropertyMode::Manual);
        if let Some(p) = s.path_mut() {
            p.vertex_colors = vec![0.0, 1.0];
        }
        assert_eq!(s.color_limits().as_pair(), (10.0, 20.0));
    }

    #[test]
    fn titles_are_single_line() {
        let mut s = surface();
        s.set_title("Random walk\n  20000 steps ");
        assert_eq!(s.title(), "Random walk 20000 steps");
        s.set_colorbar_label("heat\r\n");
        assert_eq!(s.colorbar_label(), "heat");
    }
}
