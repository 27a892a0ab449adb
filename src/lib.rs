//! Colorpath - a terminal trajectory viewer.
//!
//! Colorpath draws a 2D trajectory as a single poly-line whose color varies
//! along its length, either by point index or by a supplied scalar series.
//!
//! # Features
//!
//! - `TrajectoryChart` view-model over a pluggable `DrawingSurface`
//! - Axis state (colormap, color limits, colorbar) carried across surface rebuilds
//! - Bounded random-walk generator with a hot-spot heat signal for demo data
//! - Braille canvas rendering with colorbar and Gruvbox themes
//!
//! # Example
//!
//! ```
//! use colorpath::chart::TrajectoryChart;
//! use colorpath::colormap::Colormap;
//! use colorpath::surface::CanvasSurface;
//!
//! let mut chart = TrajectoryChart::from_xy(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0])?;
//! chart.attach(CanvasSurface::new(Colormap::viridis()));
//! chart.set_color_limits(0.0, 4.0)?;
//! assert!(chart.render().is_drawn());
//! # Ok::<(), colorpath::ColorpathError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod clipboard;
pub mod colormap;
pub mod config;
pub mod error;
pub mod surface;
pub mod ui;
pub mod walk;

pub use error::{ColorpathError, Result};
