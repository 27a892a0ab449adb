//! Drawing surface abstraction.
//!
//! The chart never draws anything itself. It describes one path primitive and a
//! handful of axis-level properties, and a [`DrawingSurface`] holds them. The
//! terminal UI paints a [`CanvasSurface`]; tests inspect it directly.

mod canvas;

pub use canvas::CanvasSurface;

use crate::colormap::Colormap;
use crate::error::{ColorpathError, Result};
use std::fmt;
use std::str::FromStr;

/// Whether an axis property is derived automatically or pinned by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyMode {
    /// Derived by the surface.
    #[default]
    Auto,
    /// Set explicitly.
    Manual,
}

impl PropertyMode {
    /// Get the other mode.
    pub fn toggle(self) -> Self {
        match self {
            Self::Auto => Self::Manual,
            Self::Manual => Self::Auto,
        }
    }

    /// Get mode name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for PropertyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PropertyMode {
    type Err = ColorpathError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(Self::Auto),
            "manual" => Ok(Self::Manual),
            other => Err(ColorpathError::InvalidLimitsMode(other.to_string())),
        }
    }
}

/// Strictly increasing pair of finite color limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorLimits {
    lo: f64,
    hi: f64,
}

impl ColorLimits {
    /// Validate and build a limits pair.
    pub fn new(lo: f64, hi: f64) -> Result<Self> {
        if !lo.is_finite() || !hi.is_finite() || hi <= lo {
            return Err(ColorpathError::invalid_limits(lo, hi));
        }
        Ok(Self { lo, hi })
    }

    /// Lower limit.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper limit.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Limits as a `(lo, hi)` tuple.
    pub fn as_pair(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }

    /// Limits covering the finite values of `values`.
    ///
    /// A single distinct value widens to `v ± 0.5` (a few ulps for large `v`);
    /// no finite values give `[0, 1]`.
    pub fn covering(values: &[f64]) -> Self {
        let (min, max) = values
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if !min.is_finite() {
            Self { lo: 0.0, hi: 1.0 }
        } else if max > min {
            Self { lo: min, hi: max }
        } else {
            // Half a unit vanishes next to large magnitudes; widen by a few ulps instead
            let half = 0.5_f64.max(min.abs() * f64::EPSILON * 4.0);
            let (lo, hi) = (min - half, min + half);
            Self {
                lo: if lo.is_finite() { lo } else { min },
                hi: if hi.is_finite() { hi } else { min },
            }
        }
    }
}

impl Default for ColorLimits {
    fn default() -> Self {
        Self { lo: 0.0, hi: 1.0 }
    }
}

impl fmt::Display for ColorLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.lo, self.hi)
    }
}

/// How the path interior is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    /// Interior is not drawn.
    #[default]
    None,
    /// Interior uses a flat color.
    Flat,
}

/// How edge color is derived from per-vertex color data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeColorMode {
    /// One color per edge, taken from its first vertex.
    #[default]
    Flat,
    /// Color interpolated between the two vertices of each edge.
    Interp,
}

/// Axis-level presentation set up once per surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxesStyle {
    /// Lock the data aspect ratio to 1:1.
    pub equal_aspect: bool,
    /// Show tick marks and tick labels.
    pub ticks_visible: bool,
    /// Draw the border around the plot area.
    pub border_visible: bool,
    /// Fit axis limits tightly to the content.
    pub tight_limits: bool,
    /// New plots replace existing content instead of adding to it.
    pub replace_on_plot: bool,
}

impl Default for AxesStyle {
    fn default() -> Self {
        Self {
            equal_aspect: false,
            ticks_visible: true,
            border_visible: false,
            tight_limits: false,
            replace_on_plot: true,
        }
    }
}

/// A renderable poly-line with per-vertex scalar colors.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    /// Vertex positions; a NaN vertex ends the path without closing it.
    pub vertices: Vec<[f64; 2]>,
    /// Vertex indices in drawing order.
    pub faces: Vec<usize>,
    /// One scalar per vertex, mapped through the colormap.
    pub vertex_colors: Vec<f64>,
    /// Line width in points.
    pub line_width: f64,
    /// Interior fill.
    pub fill: FillMode,
    /// Edge coloring.
    pub edge_color: EdgeColorMode,
    /// Whether the primitive is drawn.
    pub visible: bool,
}

impl PathPrimitive {
    /// Empty primitive with the given styling.
    pub fn new(fill: FillMode, edge_color: EdgeColorMode) -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            vertex_colors: Vec::new(),
            line_width: 0.5,
            fill,
            edge_color,
            visible: true,
        }
    }

    /// Finite bounds of the vertices as `([xmin, xmax], [ymin, ymax])`.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut xs = [f64::INFINITY, f64::NEG_INFINITY];
        let mut ys = [f64::INFINITY, f64::NEG_INFINITY];
        for [x, y] in self.vertices.iter().copied() {
            if x.is_finite() && y.is_finite() {
                xs = [xs[0].min(x), xs[1].max(x)];
                ys = [ys[0].min(y), ys[1].max(y)];
            }
        }
        if xs[0].is_finite() {
            Some((xs, ys))
        } else {
            None
        }
    }
}

/// Host graphics environment the chart draws into.
///
/// Every getter reads live surface state; the chart caches nothing that a
/// surface owns.
pub trait DrawingSurface {
    /// Apply axis-level presentation.
    fn configure(&mut self, style: AxesStyle);

    /// Current axis-level presentation.
    fn axes_style(&self) -> AxesStyle;

    /// Create the path primitive, replacing any existing one.
    fn create_path(&mut self, path: PathPrimitive);

    /// The path primitive, if one was created.
    fn path(&self) -> Option<&PathPrimitive>;

    /// Mutable access to the path primitive.
    fn path_mut(&mut self) -> Option<&mut PathPrimitive>;

    /// Current colormap.
    fn colormap(&self) -> &Colormap;

    /// Set the colormap; switches the colormap mode to manual.
    fn set_colormap(&mut self, colormap: Colormap);

    /// Whether the colormap was set explicitly.
    fn colormap_mode(&self) -> PropertyMode;

    /// Effective color limits.
    fn color_limits(&self) -> ColorLimits;

    /// Pin color limits; switches the limits mode to manual.
    fn set_color_limits(&mut self, limits: ColorLimits);

    /// Current color limits mode.
    fn color_limits_mode(&self) -> PropertyMode;

    /// Set the color limits mode.
    fn set_color_limits_mode(&mut self, mode: PropertyMode);

    /// Title text as displayed.
    fn title(&self) -> &str;

    /// Set the title text.
    fn set_title(&mut self, text: &str);

    /// Subtitle text as displayed.
    fn subtitle(&self) -> &str;

    /// Set the subtitle text.
    fn set_subtitle(&mut self, text: &str);

    /// Whether a colorbar is shown.
    fn colorbar_visible(&self) -> bool;

    /// Show or hide the colorbar.
    fn set_colorbar_visible(&mut self, visible: bool);

    /// Colorbar label text.
    fn colorbar_label(&self) -> &str;

    /// Set the colorbar label text.
    fn set_colorbar_label(&mut self, text: &str);
}
