//! Construction options for [`TrajectoryChart`].

use super::TrajectoryChart;
use crate::colormap::Colormap;
use crate::config::ChartDefaults;
use crate::error::{ColorpathError, LengthMismatch, Result};
use crate::surface::{ColorLimits, DrawingSurface, PropertyMode};
use ndarray::Array1;

/// Positional data a chart is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ChartData {
    /// No positional data; the chart starts empty.
    #[default]
    Empty,
    /// Coordinates only; the path is colored by point index.
    Xy {
        /// X coordinates.
        x: Array1<f64>,
        /// Y coordinates.
        y: Array1<f64>,
    },
    /// Coordinates plus one color value per point.
    Xyc {
        /// X coordinates.
        x: Array1<f64>,
        /// Y coordinates.
        y: Array1<f64>,
        /// Color values.
        c: Array1<f64>,
    },
}

impl ChartData {
    /// Coordinates colored by index.
    pub fn xy(x: impl Into<Array1<f64>>, y: impl Into<Array1<f64>>) -> Self {
        Self::Xy {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Coordinates with an explicit color series.
    pub fn xyc(
        x: impl Into<Array1<f64>>,
        y: impl Into<Array1<f64>>,
        c: impl Into<Array1<f64>>,
    ) -> Self {
        Self::Xyc {
            x: x.into(),
            y: y.into(),
            c: c.into(),
        }
    }

    /// Resolve a list of positional columns.
    ///
    /// Two columns are `(x, y)`, three are `(x, y, c)`, none is empty. Anything
    /// else has no valid pairing.
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self> {
        let count = columns.len();
        let mut it = columns.into_iter();
        match (count, it.next(), it.next(), it.next()) {
            (0, ..) => Ok(Self::Empty),
            (2, Some(x), Some(y), None) => Ok(Self::xy(x, y)),
            (3, Some(x), Some(y), Some(c)) => Ok(Self::xyc(x, y, c)),
            _ => Err(ColorpathError::InvalidSyntax { columns: count }),
        }
    }

    /// Check that every column has the length of `x`.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Empty => Ok(()),
            Self::Xy { x, y } => check_lengths(x, y, &Array1::zeros(0)).map_err(Into::into),
            Self::Xyc { x, y, c } => {
                // An explicit color column must match even when it is empty
                if c.len() != x.len() {
                    return Err(LengthMismatch {
                        x_len: x.len(),
                        y_len: y.len(),
                        color_len: c.len(),
                    }
                    .into());
                }
                check_lengths(x, y, c).map_err(Into::into)
            }
        }
    }

    pub(crate) fn into_columns(self) -> (Array1<f64>, Array1<f64>, Array1<f64>) {
        match self {
            Self::Empty => (Array1::zeros(0), Array1::zeros(0), Array1::zeros(0)),
            Self::Xy { x, y } => (x, y, Array1::zeros(0)),
            Self::Xyc { x, y, c } => (x, y, c),
        }
    }
}

/// `y` must match `x`; `c` must be empty or match `x`.
pub(crate) fn check_lengths(
    x: &Array1<f64>,
    y: &Array1<f64>,
    c: &Array1<f64>,
) -> std::result::Result<(), LengthMismatch> {
    if y.len() != x.len() || (!c.is_empty() && c.len() != x.len()) {
        return Err(LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
            color_len: c.len(),
        });
    }
    Ok(())
}

/// Named overrides applied after positional data.
#[derive(Debug, Clone, Default)]
pub struct ChartOptions {
    /// Title text.
    pub title: Option<String>,
    /// Subtitle text.
    pub subtitle: Option<String>,
    /// Colorbar label text.
    pub colorbar_label: Option<String>,
    /// Path line width.
    pub line_width: Option<f64>,
    /// Colormap.
    pub colormap: Option<Colormap>,
    /// Color limits as `(lo, hi)`.
    pub color_limits: Option<(f64, f64)>,
    /// Color limits mode.
    pub color_limits_mode: Option<PropertyMode>,
    /// Colorbar visibility.
    pub colorbar_visible: Option<bool>,
}

impl ChartOptions {
    fn validate(&self) -> Result<Option<ColorLimits>> {
        if let Some(width) = self.line_width {
            validate_line_width(width)?;
        }
        self.color_limits
            .map(|(lo, hi)| ColorLimits::new(lo, hi))
            .transpose()
    }
}

pub(crate) fn validate_line_width(width: f64) -> Result<()> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(ColorpathError::InvalidLineWidth(width))
    }
}

/// Builder for [`TrajectoryChart`].
///
/// Everything is validated in [`build`](Self::build) before a chart exists.
#[derive(Debug)]
pub struct ChartBuilder<S> {
    parent: Option<S>,
    data: ChartData,
    options: ChartOptions,
    defaults: ChartDefaults,
}

impl<S: DrawingSurface> Default for ChartBuilder<S> {
    fn default() -> Self {
        Self {
            parent: None,
            data: ChartData::Empty,
            options: ChartOptions::default(),
            defaults: ChartDefaults::default(),
        }
    }
}

impl<S: DrawingSurface> ChartBuilder<S> {
    /// Attach to `surface` as soon as the chart is built.
    pub fn parent(mut self, surface: S) -> Self {
        self.parent = Some(surface);
        self
    }

    /// Positional data.
    pub fn data(mut self, data: ChartData) -> Self {
        self.data = data;
        self
    }

    /// Replace all named options.
    pub fn options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Defaults for properties neither data nor options set.
    pub fn defaults(mut self, defaults: ChartDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Title text.
    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.options.title = Some(text.into());
        self
    }

    /// Subtitle text.
    pub fn subtitle(mut self, text: impl Into<String>) -> Self {
        self.options.subtitle = Some(text.into());
        self
    }

    /// Colorbar label text.
    pub fn colorbar_label(mut self, text: impl Into<String>) -> Self {
        self.options.colorbar_label = Some(text.into());
        self
    }

    /// Path line width.
    pub fn line_width(mut self, width: f64) -> Self {
        self.options.line_width = Some(width);
        self
    }

    /// Colormap.
    pub fn colormap(mut self, colormap: Colormap) -> Self {
        self.options.colormap = Some(colormap);
        self
    }

    /// Color limits.
    pub fn color_limits(mut self, lo: f64, hi: f64) -> Self {
        self.options.color_limits = Some((lo, hi));
        self
    }

    /// Color limits mode.
    pub fn color_limits_mode(mut self, mode: PropertyMode) -> Self {
        self.options.color_limits_mode = Some(mode);
        self
    }

    /// Colorbar visibility.
    pub fn colorbar(mut self, visible: bool) -> Self {
        self.options.colorbar_visible = Some(visible);
        self
    }

    /// Validate and build the chart.
    pub fn build(self) -> Result<TrajectoryChart<S>> {
        self.data.validate()?;
        let limits = self.options.validate()?;

        let (x, y, c) = self.data.into_columns();
        let mut chart = TrajectoryChart::empty(self.defaults);
        chart.x = x;
        chart.y = y;
        chart.c = c;

        let ChartOptions {
            title,
            subtitle,
            colorbar_label,
            line_width,
            colormap,
            color_limits_mode,
            colorbar_visible,
            ..
        } = self.options;
        if let Some(text) = title {
            chart.title = text;
        }
        if let Some(text) = subtitle {
            chart.subtitle = text;
        }
        if let Some(text) = colorbar_label {
            chart.colorbar_label = text;
        }
        if let Some(width) = line_width {
            chart.line_width = width;
        }
        chart.overrides.colormap = colormap;
        chart.overrides.color_limits = limits;
        chart.overrides.color_limits_mode = color_limits_mode;
        chart.overrides.colorbar_visible = colorbar_visible;

        if let Some(surface) = self.parent {
            chart.attach(surface);
        }
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_resolve_by_count() {
        assert_eq!(ChartData::from_columns(vec![]).unwrap(), ChartData::Empty);
        assert!(matches!(
            ChartData::from_columns(vec![vec![1.0], vec![2.0]]).unwrap(),
            ChartData::Xy { .. }
        ));
        assert!(matches!(
            ChartData::from_columns(vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap(),
            ChartData::Xyc { .. }
        ));
        assert!(matches!(
            ChartData::from_columns(vec![vec![1.0, 2.0]]),
            Err(ColorpathError::InvalidSyntax { columns: 1 })
        ));
        assert!(matches!(
            ChartData::from_columns(vec![vec![]; 4]),
            Err(ColorpathError::InvalidSyntax { columns: 4 })
        ));
    }

    #[test]
    fn explicit_color_column_must_match() {
        assert!(ChartData::xyc(vec![1.0, 2.0], vec![1.0, 2.0], vec![0.5, 0.5])
            .validate()
            .is_ok());
        assert!(matches!(
            ChartData::xyc(vec![1.0, 2.0], vec![1.0, 2.0], Vec::<f64>::new()).validate(),
            Err(ColorpathError::DataLengthMismatch(_))
        ));
        assert!(matches!(
            ChartData::xy(vec![1.0, 2.0], vec![1.0]).validate(),
            Err(ColorpathError::DataLengthMismatch(LengthMismatch { y_len: 1, .. }))
        ));
    }

    #[test]
    fn render_check_allows_empty_color() {
        let x = Array1::from(vec![1.0, 2.0]);
        assert!(check_lengths(&x, &x, &Array1::zeros(0)).is_ok());
        assert!(check_lengths(&x, &x, &Array1::zeros(1)).is_err());
    }

    #[test]
    fn line_width_must_be_positive() {
        assert!(validate_line_width(0.5).is_ok());
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(validate_line_width(bad).is_err());
        }
    }
}
