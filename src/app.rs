//! Application state and logic.

use crate::chart::{ChartData, RenderOutcome, TrajectoryChart};
use crate::clipboard;
use crate::colormap::{ColorPalette, Colormap, DEFAULT_COLORMAP_SIZE};
use crate::config::{ChartDefaults, LayoutConfig};
use crate::surface::CanvasSurface;
use crate::walk::{self, Walk, WalkParams};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The chart being viewed.
    pub chart: TrajectoryChart<CanvasSurface>,
    /// Parameters for new walks.
    pub params: WalkParams,
    /// Seed of the current walk.
    pub seed: u64,
    /// Defaults used for fresh surfaces.
    pub defaults: ChartDefaults,
    /// Terminal layout.
    pub layout: LayoutConfig,
    /// Palette applied by the last palette cycle.
    pub palette: ColorPalette,
    /// Color by point index instead of heat.
    pub index_coloring: bool,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
    /// Number of surface rebuilds so far.
    pub rebuilds: usize,
    walk: Walk,
}

impl App {
    /// Create the application around a chart showing `walk`.
    ///
    /// Attaches a fresh surface if the chart has none yet.
    pub fn new(
        mut chart: TrajectoryChart<CanvasSurface>,
        walk: Walk,
        params: WalkParams,
        seed: u64,
        defaults: ChartDefaults,
    ) -> Self {
        if !chart.is_attached() {
            chart.attach(CanvasSurface::new(defaults.colormap.clone()));
        }
        let index_coloring = chart.color_data().is_empty();
        Self {
            chart,
            params,
            seed,
            defaults,
            layout: LayoutConfig::default(),
            palette: ColorPalette::default(),
            index_coloring,
            theme: Theme::GruvboxDark,
            status: "Ready".to_string(),
            rebuilds: 0,
            walk,
        }
    }

    /// The walk currently shown.
    pub fn walk(&self) -> &Walk {
        &self.walk
    }

    fn chart_data(&self) -> ChartData {
        if self.index_coloring {
            ChartData::xy(self.walk.x.clone(), self.walk.y.clone())
        } else {
            ChartData::xyc(
                self.walk.x.clone(),
                self.walk.y.clone(),
                self.walk.c.clone(),
            )
        }
    }

    fn report(&mut self, outcome: RenderOutcome, ok: String) {
        self.status = match outcome {
            RenderOutcome::Hidden(mismatch) => format!("Not drawn: {}", mismatch),
            _ => ok,
        };
    }

    /// Generate the next walk (seed + 1).
    pub fn new_walk(&mut self) {
        let seed = self.seed.wrapping_add(1);
        match walk::generate_seeded(&self.params, seed) {
            Ok(walk) => {
                self.seed = seed;
                self.walk = walk;
                let data = self.chart_data();
                let outcome = self.chart.set_data(data);
                self.report(outcome, format!("Walk seed {}", seed));
            }
            Err(e) => self.status = format!("Walk failed: {}", e),
        }
    }

    /// Switch to the next preset colormap.
    pub fn cycle_palette(&mut self) {
        self.palette = self.palette.next();
        self.chart
            .set_colormap(Colormap::from_palette(self.palette, DEFAULT_COLORMAP_SIZE));
        self.status = format!("Palette: {}", self.palette.name());
    }

    /// Show or hide the colorbar.
    pub fn toggle_colorbar(&mut self) {
        let visible = !self.chart.colorbar_visible();
        let outcome = self.chart.set_colorbar_visible(visible);
        let label = if visible { "Colorbar on" } else { "Colorbar off" };
        self.report(outcome, label.to_string());
    }

    /// Switch between heat and index coloring.
    pub fn toggle_index_coloring(&mut self) {
        self.index_coloring = !self.index_coloring;
        let data = self.chart_data();
        let outcome = self.chart.set_data(data);
        let label = if self.index_coloring {
            "Coloring: point index"
        } else {
            "Coloring: heat"
        };
        self.report(outcome, label.to_string());
    }

    /// Toggle color limits between auto and manual.
    pub fn toggle_limits_mode(&mut self) {
        let mode = self.chart.color_limits_mode().toggle();
        self.chart.set_color_limits_mode(mode);
        self.status = format!("Color limits: {} {}", mode, self.chart.color_limits());
    }

    /// Change line width by `delta`, keeping it positive.
    pub fn adjust_line_width(&mut self, delta: f64) {
        let width = (self.chart.line_width() + delta).max(0.5);
        match self.chart.set_line_width(width) {
            Ok(outcome) => self.report(outcome, format!("Line width: {:.1}", width)),
            Err(e) => self.status = e.to_string(),
        }
    }

    /// Replace the surface with a fresh one, carrying axis state across.
    pub fn rebuild_surface(&mut self) {
        self.chart
            .rebuild_surface(CanvasSurface::new(self.defaults.colormap.clone()));
        self.rebuilds += 1;
        self.status = format!("Surface rebuilt ({})", self.rebuilds);
    }

    /// Cycle the UI theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Copy the chart summary to the clipboard.
    pub fn copy_summary(&mut self) {
        match clipboard::copy_to_clipboard(&self.chart.to_string()) {
            Ok(()) => self.status = "Summary copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawingSurface, PropertyMode};

    fn app() -> App {
        let params = WalkParams {
            steps: 50,
            ..WalkParams::default()
        };
        let walk = walk::generate_seeded(&params, 1).unwrap();
        let chart = TrajectoryChart::from_xyc(walk.x.clone(), walk.y.clone(), walk.c.clone())
            .unwrap();
        App::new(chart, walk, params, 1, ChartDefaults::default())
    }

    #[test]
    fn new_app_attaches_surface() {
        let app = app();
        assert!(app.chart.is_attached());
        assert!(!app.index_coloring);
    }

    #[test]
    fn new_walk_advances_seed() {
        let mut app = app();
        let before = app.walk().x.clone();
        app.new_walk();
        assert_eq!(app.seed, 2);
        assert_ne!(app.walk().x, before);
        assert_eq!(app.chart.x_data(), &app.walk().x);
    }

    #[test]
    fn palette_and_limits_survive_rebuild() {
        let mut app = app();
        app.cycle_palette();
        app.toggle_limits_mode();
        let limits = app.chart.color_limits();
        app.rebuild_surface();
        let surface = app.chart.surface().unwrap();
        assert_eq!(surface.colormap_mode(), PropertyMode::Manual);
        assert_eq!(
            surface.colormap(),
            &Colormap::from_palette(ColorPalette::Plasma, DEFAULT_COLORMAP_SIZE)
        );
        assert_eq!(surface.color_limits(), limits);
    }

    #[test]
    fn index_coloring_toggle() {
        let mut app = app();
        app.toggle_index_coloring();
        assert!(app.chart.color_data().is_empty());
        let colors = &app.chart.surface().unwrap().path().unwrap().vertex_colors;
        assert_eq!(colors[0], 1.0);
        assert_eq!(colors[49], 50.0);
    }
}
