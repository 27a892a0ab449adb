//! Default values and terminal layout constants.

use crate::colormap::Colormap;

/// Default line width for new charts.
pub const DEFAULT_LINE_WIDTH: f64 = 0.5;

/// Defaults handed to every chart and surface at construction.
///
/// There is no global graphics root to inherit from; callers pass this
/// explicitly.
#[derive(Debug, Clone)]
pub struct ChartDefaults {
    /// Colormap a fresh surface starts with.
    pub colormap: Colormap,
    /// Line width of a fresh chart.
    pub line_width: f64,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            colormap: Colormap::viridis(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// Configuration for the chart canvas.
#[derive(Debug, Clone)]
pub struct CanvasLayoutConfig {
    /// Terminal cell height divided by width, used for 1:1 aspect correction.
    pub cell_aspect: f64,
    /// Rows reserved for title and subtitle.
    pub title_height: u16,
}

impl Default for CanvasLayoutConfig {
    fn default() -> Self {
        Self {
            cell_aspect: 2.0, // 2:1 aspect ratio correction
            title_height: 2,
        }
    }
}

/// Configuration for the colorbar strip.
#[derive(Debug, Clone)]
pub struct ColorbarLayoutConfig {
    /// Height reserved for colorbar and its label.
    pub height: u16,
    /// Maximum width of the color strip in characters.
    pub max_width: usize,
}

impl Default for ColorbarLayoutConfig {
    fn default() -> Self {
        Self {
            height: 2,
            max_width: 50,
        }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Canvas settings.
    pub canvas: CanvasLayoutConfig,
    /// Colorbar settings.
    pub colorbar: ColorbarLayoutConfig,
}
