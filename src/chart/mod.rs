//! Trajectory chart: one poly-line colored along its length.
//!
//! The chart owns its data columns and display text. Axis-level properties
//! (colormap, color limits and their mode, colorbar visibility) live on the
//! attached [`DrawingSurface`]; accessors here read and write the surface
//! directly instead of caching.
//!
//! # Lifecycle
//!
//! A chart may be built without a surface. [`TrajectoryChart::attach`] runs
//! setup and a first render. [`TrajectoryChart::detach`] captures an
//! [`AxisStateSnapshot`] that the next `attach` restores exactly once.

mod build;
mod snapshot;
mod summary;

pub use build::{ChartBuilder, ChartData, ChartOptions};
pub use snapshot::{AxisStateSnapshot, SnapshotState};

use crate::colormap::Colormap;
use crate::config::ChartDefaults;
use crate::error::{LengthMismatch, Result};
use crate::surface::{
    AxesStyle, ColorLimits, DrawingSurface, EdgeColorMode, FillMode, PathPrimitive, PropertyMode,
};
use build::{check_lengths, validate_line_width};
use ndarray::Array1;
use snapshot::AxisOverrides;
use tracing::{debug, trace, warn};

/// Result of a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Path geometry was rebuilt from `points` data points.
    Drawn {
        /// Number of data points drawn.
        points: usize,
    },
    /// Data columns disagree; the path was hidden.
    Hidden(LengthMismatch),
    /// No surface is attached.
    Detached,
}

impl RenderOutcome {
    /// True when the path is visible after this pass.
    pub fn is_drawn(&self) -> bool {
        matches!(self, Self::Drawn { .. })
    }
}

/// A 2D trajectory drawn as a single color-varying line.
#[derive(Debug)]
pub struct TrajectoryChart<S> {
    surface: Option<S>,
    x: Array1<f64>,
    y: Array1<f64>,
    c: Array1<f64>,
    title: String,
    subtitle: String,
    colorbar_label: String,
    line_width: f64,
    defaults: ChartDefaults,
    snapshot: SnapshotState,
    overrides: AxisOverrides,
    warnings: Vec<LengthMismatch>,
}

impl<S: DrawingSurface> TrajectoryChart<S> {
    /// Start building a chart.
    pub fn builder() -> ChartBuilder<S> {
        ChartBuilder::default()
    }

    /// Detached chart of `(x, y)` colored by index.
    pub fn from_xy(x: impl Into<Array1<f64>>, y: impl Into<Array1<f64>>) -> Result<Self> {
        Self::builder().data(ChartData::xy(x, y)).build()
    }

    /// Detached chart of `(x, y)` colored by `c`.
    pub fn from_xyc(
        x: impl Into<Array1<f64>>,
        y: impl Into<Array1<f64>>,
        c: impl Into<Array1<f64>>,
    ) -> Result<Self> {
        Self::builder().data(ChartData::xyc(x, y, c)).build()
    }

    pub(crate) fn empty(defaults: ChartDefaults) -> Self {
        Self {
            surface: None,
            x: Array1::zeros(0),
            y: Array1::zeros(0),
            c: Array1::zeros(0),
            title: String::new(),
            subtitle: String::new(),
            colorbar_label: String::new(),
            line_width: defaults.line_width,
            defaults,
            snapshot: SnapshotState::Idle,
            overrides: AxisOverrides::default(),
            warnings: Vec::new(),
        }
    }

    // Surface lifecycle

    /// Attach to `surface`, run setup and render.
    ///
    /// A previously attached surface is returned without capturing a
    /// snapshot, as if it had been destroyed externally.
    pub fn attach(&mut self, surface: S) -> Option<S> {
        let previous = self.surface.replace(surface);
        debug!(replaced = previous.is_some(), "Attaching chart to surface");
        self.setup();
        self.render();
        previous
    }

    /// Capture the axis snapshot and release the surface.
    pub fn detach(&mut self) -> Option<S> {
        let surface = self.surface.take()?;
        let snapshot = AxisStateSnapshot::capture(&surface);
        debug!(
            colormap = snapshot.colormap.is_some(),
            color_limits = snapshot.color_limits.is_some(),
            "Captured axis snapshot"
        );
        self.snapshot = SnapshotState::Pending(snapshot);
        Some(surface)
    }

    /// Tear down the current surface and move onto `fresh`.
    pub fn rebuild_surface(&mut self, fresh: S) -> Option<S> {
        let old = self.detach();
        self.attach(fresh);
        old
    }

    /// Snapshot of the attached surface without changing any state.
    pub fn capture_snapshot(&self) -> Option<AxisStateSnapshot> {
        self.surface.as_ref().map(AxisStateSnapshot::capture)
    }

    /// Snapshot lifecycle state.
    pub fn snapshot_state(&self) -> &SnapshotState {
        &self.snapshot
    }

    /// Whether a surface is attached.
    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// The attached surface.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutable access to the attached surface.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    fn setup(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.configure(AxesStyle {
            equal_aspect: true,
            ticks_visible: false,
            border_visible: true,
            tight_limits: true,
            replace_on_plot: true,
        });
        surface.create_path(Self::new_path());

        if let Some(snapshot) = self.snapshot.take_pending() {
            debug!("Restoring axis snapshot");
            snapshot.restore(surface);
        }
        std::mem::take(&mut self.overrides).apply(surface);
    }

    fn new_path() -> PathPrimitive {
        PathPrimitive::new(FillMode::None, EdgeColorMode::Interp)
    }

    // Rendering

    /// Push data and display text to the surface.
    ///
    /// Mismatched columns hide the path and record a warning instead of
    /// failing.
    pub fn render(&mut self) -> RenderOutcome {
        let Some(surface) = self.surface.as_mut() else {
            trace!("Render skipped: no surface");
            return RenderOutcome::Detached;
        };

        if let Err(mismatch) = check_lengths(&self.x, &self.y, &self.c) {
            if let Some(path) = surface.path_mut() {
                path.visible = false;
            }
            warn!(%mismatch, "Data length mismatch, path hidden");
            self.warnings.push(mismatch);
            return RenderOutcome::Hidden(mismatch);
        }

        let n = self.x.len();
        // NaN terminator ends the line without closing it
        let vertices: Vec<[f64; 2]> = self
            .x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| [x, y])
            .chain(std::iter::once([f64::NAN, f64::NAN]))
            .collect();
        let mut vertex_colors: Vec<f64> = if self.c.is_empty() {
            (1..=n).map(|i| i as f64).collect()
        } else {
            self.c.to_vec()
        };
        vertex_colors.push(f64::NAN);

        if surface.path().is_none() {
            surface.create_path(Self::new_path());
        }
        if let Some(path) = surface.path_mut() {
            path.vertices = vertices;
            path.faces = (0..=n).collect();
            path.vertex_colors = vertex_colors;
            path.line_width = self.line_width;
            path.visible = true;
        }

        surface.set_title(&self.title);
        surface.set_subtitle(&self.subtitle);
        if surface.colorbar_visible() {
            surface.set_colorbar_label(&self.colorbar_label);
        }

        self.warnings.clear();
        trace!(points = n, "Rendered trajectory");
        RenderOutcome::Drawn { points: n }
    }

    /// Render-time warnings recorded since the last successful render.
    pub fn warnings(&self) -> &[LengthMismatch] {
        &self.warnings
    }

    /// Drain recorded warnings.
    pub fn take_warnings(&mut self) -> Vec<LengthMismatch> {
        std::mem::take(&mut self.warnings)
    }

    // Data

    /// X coordinates.
    pub fn x_data(&self) -> &Array1<f64> {
        &self.x
    }

    /// Y coordinates.
    pub fn y_data(&self) -> &Array1<f64> {
        &self.y
    }

    /// Color values; empty means index coloring.
    pub fn color_data(&self) -> &Array1<f64> {
        &self.c
    }

    /// Replace the X coordinates and render.
    pub fn set_x_data(&mut self, x: impl Into<Array1<f64>>) -> RenderOutcome {
        self.x = x.into();
        self.render()
    }

    /// Replace the Y coordinates and render.
    pub fn set_y_data(&mut self, y: impl Into<Array1<f64>>) -> RenderOutcome {
        self.y = y.into();
        self.render()
    }

    /// Replace the color values and render. Pass an empty array for index coloring.
    pub fn set_color_data(&mut self, c: impl Into<Array1<f64>>) -> RenderOutcome {
        self.c = c.into();
        self.render()
    }

    /// Replace all columns at once and render a single time.
    pub fn set_data(&mut self, data: ChartData) -> RenderOutcome {
        let (x, y, c) = data.into_columns();
        self.x = x;
        self.y = y;
        self.c = c;
        self.render()
    }

    // Display text

    /// Title text.
    pub fn title_text(&self) -> &str {
        &self.title
    }

    /// Set the title text and render.
    pub fn set_title_text(&mut self, text: impl Into<String>) -> RenderOutcome {
        self.title = text.into();
        self.render()
    }

    /// Subtitle text.
    pub fn subtitle_text(&self) -> &str {
        &self.subtitle
    }

    /// Set the subtitle text and render.
    pub fn set_subtitle_text(&mut self, text: impl Into<String>) -> RenderOutcome {
        self.subtitle = text.into();
        self.render()
    }

    /// Set the title through the surface and mirror what it displays.
    pub fn title(&mut self, text: &str) -> &str {
        self.title = match self.surface.as_mut() {
            Some(surface) => {
                surface.set_title(text);
                surface.title().to_string()
            }
            None => text.to_string(),
        };
        &self.title
    }

    /// Set the subtitle through the surface and mirror what it displays.
    pub fn subtitle(&mut self, text: &str) -> &str {
        self.subtitle = match self.surface.as_mut() {
            Some(surface) => {
                surface.set_subtitle(text);
                surface.subtitle().to_string()
            }
            None => text.to_string(),
        };
        &self.subtitle
    }

    /// Colorbar label text.
    pub fn colorbar_label(&self) -> &str {
        &self.colorbar_label
    }

    /// Set the colorbar label and render.
    pub fn set_colorbar_label(&mut self, text: impl Into<String>) -> RenderOutcome {
        self.colorbar_label = text.into();
        self.render()
    }

    /// Path line width.
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Set the line width and render.
    pub fn set_line_width(&mut self, width: f64) -> Result<RenderOutcome> {
        validate_line_width(width)?;
        self.line_width = width;
        Ok(self.render())
    }

    // Axis properties, delegated to the surface

    /// Current colormap.
    pub fn colormap(&self) -> &Colormap {
        match self.surface.as_ref() {
            Some(surface) => surface.colormap(),
            None => self
                .overrides
                .colormap
                .as_ref()
                .unwrap_or(&self.defaults.colormap),
        }
    }

    /// Set the colormap.
    pub fn set_colormap(&mut self, colormap: Colormap) {
        match self.surface.as_mut() {
            Some(surface) => surface.set_colormap(colormap),
            None => self.overrides.colormap = Some(colormap),
        }
    }

    /// Whether the colormap was set explicitly.
    pub fn colormap_mode(&self) -> PropertyMode {
        match self.surface.as_ref() {
            Some(surface) => surface.colormap_mode(),
            None if self.overrides.colormap.is_some() => PropertyMode::Manual,
            None => PropertyMode::Auto,
        }
    }

    /// Effective color limits.
    pub fn color_limits(&self) -> ColorLimits {
        match self.surface.as_ref() {
            Some(surface) => surface.color_limits(),
            None => self.overrides.color_limits.unwrap_or_default(),
        }
    }

    /// Pin the color limits; `hi` must exceed `lo`.
    pub fn set_color_limits(&mut self, lo: f64, hi: f64) -> Result<()> {
        let limits = ColorLimits::new(lo, hi)?;
        match self.surface.as_mut() {
            Some(surface) => surface.set_color_limits(limits),
            None => {
                self.overrides.color_limits = Some(limits);
                self.overrides.color_limits_mode = None;
            }
        }
        Ok(())
    }

    /// Current color limits mode.
    pub fn color_limits_mode(&self) -> PropertyMode {
        match self.surface.as_ref() {
            Some(surface) => surface.color_limits_mode(),
            None => match (self.overrides.color_limits_mode, self.overrides.color_limits) {
                (Some(mode), _) => mode,
                (None, Some(_)) => PropertyMode::Manual,
                (None, None) => PropertyMode::Auto,
            },
        }
    }

    /// Set the color limits mode.
    pub fn set_color_limits_mode(&mut self, mode: PropertyMode) {
        match self.surface.as_mut() {
            Some(surface) => surface.set_color_limits_mode(mode),
            None => self.overrides.color_limits_mode = Some(mode),
        }
    }

    /// Set the color limits mode by name (`"auto"` or `"manual"`).
    pub fn set_color_limits_mode_name(&mut self, name: &str) -> Result<()> {
        let mode: PropertyMode = name.parse()?;
        self.set_color_limits_mode(mode);
        Ok(())
    }

    /// Whether the colorbar is shown.
    pub fn colorbar_visible(&self) -> bool {
        match self.surface.as_ref() {
            Some(surface) => surface.colorbar_visible(),
            None => self.overrides.colorbar_visible.unwrap_or(false),
        }
    }

    /// Show or hide the colorbar and render.
    pub fn set_colorbar_visible(&mut self, visible: bool) -> RenderOutcome {
        match self.surface.as_mut() {
            Some(surface) => surface.set_colorbar_visible(visible),
            None => self.overrides.colorbar_visible = Some(visible),
        }
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CanvasSurface;

    fn surface() -> CanvasSurface {
        CanvasSurface::new(Colormap::viridis())
    }

    #[test]
    fn detached_chart_renders_nothing() {
        let mut chart = TrajectoryChart::<CanvasSurface>::from_xy(vec![1.0], vec![2.0]).unwrap();
        assert_eq!(chart.render(), RenderOutcome::Detached);
        assert!(chart.warnings().is_empty());
    }

    #[test]
    fn setup_configures_surface() {
        let mut chart = TrajectoryChart::from_xy(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap();
        chart.attach(surface());
        let s = chart.surface().unwrap();
        let style = s.axes_style();
        assert!(style.equal_aspect && style.border_visible && style.tight_limits);
        assert!(!style.ticks_visible);
        let path = s.path().unwrap();
        assert_eq!(path.fill, FillMode::None);
        assert_eq!(path.edge_color, EdgeColorMode::Interp);
        assert_eq!(path.faces, vec![0, 1, 2]);
        assert_eq!(path.line_width, 0.5);
    }

    #[test]
    fn detached_axis_writes_apply_on_attach() {
        let mut chart = TrajectoryChart::from_xy(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap();
        chart.set_color_limits(-1.0, 1.0).unwrap();
        assert_eq!(chart.color_limits_mode(), PropertyMode::Manual);
        chart.set_colorbar_visible(true);
        chart.attach(surface());
        assert_eq!(chart.color_limits().as_pair(), (-1.0, 1.0));
        assert!(chart.colorbar_visible());
    }

    #[test]
    fn title_mirrors_surface_text() {
        let mut chart = TrajectoryChart::from_xy(vec![0.0], vec![0.0]).unwrap();
        chart.attach(surface());
        assert_eq!(chart.title("Walk\nseed 3"), "Walk seed 3");
        assert_eq!(chart.title_text(), "Walk seed 3");
        chart.subtitle(" heat ");
        assert_eq!(chart.subtitle_text(), "heat");
    }

    #[test]
    fn colorbar_label_only_applied_when_visible() {
        let mut chart = TrajectoryChart::from_xy(vec![0.0], vec![0.0]).unwrap();
        chart.attach(surface());
        chart.set_colorbar_label("heat");
        assert_eq!(chart.surface().unwrap().colorbar_label(), "");
        chart.set_colorbar_visible(true);
        assert_eq!(chart.surface().unwrap().colorbar_label(), "heat");
    }

    #[test]
    fn invalid_line_width_leaves_chart_unchanged() {
        let mut chart = TrajectoryChart::<CanvasSurface>::from_xy(vec![0.0], vec![0.0]).unwrap();
        assert!(chart.set_line_width(-2.0).is_err());
        assert_eq!(chart.line_width(), 0.5);
    }
}
