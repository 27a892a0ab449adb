//! Error types for Colorpath.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::fmt;
use thiserror::Error;

/// Result type alias for Colorpath operations.
pub type Result<T> = std::result::Result<T, ColorpathError>;

/// Lengths of the chart's data columns at the moment they disagreed.
///
/// Kept separate from [`ColorpathError`] so render-time warnings can be
/// cloned and retained by the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    /// Length of the X data.
    pub x_len: usize,
    /// Length of the Y data.
    pub y_len: usize,
    /// Length of the color data (0 when index coloring is used).
    pub color_len: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.y_len != self.x_len {
            write!(
                f,
                "YData has {} values but XData has {}",
                self.y_len, self.x_len
            )
        } else {
            write!(
                f,
                "ColorData has {} values but XData has {}; it must be empty or match",
                self.color_len, self.x_len
            )
        }
    }
}

/// Errors that can occur in Colorpath.
#[derive(Debug, Error)]
pub enum ColorpathError {
    /// Coordinate and color columns do not line up.
    #[error("Data length mismatch: {0}")]
    DataLengthMismatch(LengthMismatch),

    /// Positional data could not be resolved into (x, y) or (x, y, c).
    #[error("Invalid syntax: expected 2 or 3 data columns, got {columns}")]
    InvalidSyntax {
        /// Number of columns supplied.
        columns: usize,
    },

    /// Color limits must be finite and strictly increasing.
    #[error("Invalid color limits [{lo}, {hi}]: upper limit must exceed lower limit")]
    InvalidLimits {
        /// Requested lower limit.
        lo: f64,
        /// Requested upper limit.
        hi: f64,
    },

    /// Limits mode string was neither `auto` nor `manual`.
    #[error("Invalid limits mode '{0}': expected 'auto' or 'manual'")]
    InvalidLimitsMode(String),

    /// Colormap was empty or had a channel outside [0, 1].
    #[error("Invalid colormap: {0}")]
    InvalidColormap(String),

    /// Line width must be positive and finite.
    #[error("Invalid line width: {0}")]
    InvalidLineWidth(f64),

    /// Unknown palette name.
    #[error("Unknown palette: {0}")]
    InvalidPalette(String),

    /// Random walk parameters out of range.
    #[error("Invalid walk parameters: {0}")]
    InvalidWalkParams(String),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ColorpathError {
    /// Create an InvalidLimits error.
    pub fn invalid_limits(lo: f64, hi: f64) -> Self {
        Self::InvalidLimits { lo, hi }
    }

    /// Create an InvalidColormap error.
    pub fn invalid_colormap(reason: impl Into<String>) -> Self {
        Self::InvalidColormap(reason.into())
    }

    /// Create an InvalidWalkParams error.
    pub fn invalid_walk_params(reason: impl Into<String>) -> Self {
        Self::InvalidWalkParams(reason.into())
    }
}

impl From<LengthMismatch> for ColorpathError {
    fn from(mismatch: LengthMismatch) -> Self {
        Self::DataLengthMismatch(mismatch)
    }
}
