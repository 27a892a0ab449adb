//! Colormaps for per-vertex path coloring.
//!
//! A [`Colormap`] is an ordered, non-empty list of RGB triples with channels in
//! `[0, 1]`. Scalars are mapped onto it through a pair of color limits.

use crate::error::{ColorpathError, Result};
use crate::surface::ColorLimits;
use ratatui::style::Color;
use std::fmt;
use std::str::FromStr;

/// Number of entries in the preset colormaps.
pub const DEFAULT_COLORMAP_SIZE: usize = 64;

/// A single colormap entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel in `[0, 1]`.
    pub r: f64,
    /// Green channel in `[0, 1]`.
    pub g: f64,
    /// Blue channel in `[0, 1]`.
    pub b: f64,
}

impl Rgb {
    /// Create an entry from three channels.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    fn from_bytes(r: f64, g: f64, b: f64) -> Self {
        Self::new(r / 255.0, g / 255.0, b / 255.0)
    }

    fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    /// Convert to a terminal color.
    pub fn to_color(self) -> Color {
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color::Rgb(byte(self.r), byte(self.g), byte(self.b))
    }

    /// Linear blend towards `other` (`t = 0` is `self`).
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        Rgb::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
}

/// Validated colormap.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    entries: Vec<Rgb>,
}

impl Colormap {
    /// Build a colormap, rejecting empty lists and out-of-range channels.
    pub fn new(entries: Vec<Rgb>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ColorpathError::invalid_colormap("colormap has no entries"));
        }
        if let Some(i) = entries.iter().position(|e| !e.is_valid()) {
            return Err(ColorpathError::invalid_colormap(format!(
                "entry {} has a channel outside [0, 1]",
                i
            )));
        }
        Ok(Self { entries })
    }

    /// Sample a preset palette at `size` evenly spaced points.
    pub fn from_palette(palette: ColorPalette, size: usize) -> Self {
        let size = size.max(1);
        let entries = (0..size)
            .map(|i| {
                let t = if size == 1 {
                    0.0
                } else {
                    i as f64 / (size - 1) as f64
                };
                palette.sample(t)
            })
            .collect();
        Self { entries }
    }

    /// Default Viridis colormap.
    pub fn viridis() -> Self {
        Self::from_palette(ColorPalette::Viridis, DEFAULT_COLORMAP_SIZE)
    }

    /// Colormap entries.
    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; an empty colormap cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for `value` scaled through `limits`.
    ///
    /// Values outside the limits clamp to the first or last entry. Non-finite
    /// values have no color.
    pub fn color_for(&self, value: f64, limits: ColorLimits) -> Option<Rgb> {
        if !value.is_finite() {
            return None;
        }
        let t = ((value - limits.lo()) / (limits.hi() - limits.lo())).clamp(0.0, 1.0);
        let m = self.entries.len();
        let idx = ((t * m as f64).floor() as usize).min(m - 1);
        Some(self.entries[idx])
    }
}

impl Default for Colormap {
    fn default() -> Self {
        Self::viridis()
    }
}

/// Named colormap presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPalette {
    /// Viridis colormap (perceptually uniform, colorblind-friendly).
    #[default]
    Viridis,
    /// Plasma colormap (perceptually uniform).
    Plasma,
    /// Rainbow/Spectral colormap (traditional, high contrast).
    Rainbow,
    /// Blue-White-Red diverging colormap.
    BlueRed,
}

impl ColorPalette {
    /// Get the next palette in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Viridis => Self::Plasma,
            Self::Plasma => Self::Rainbow,
            Self::Rainbow => Self::BlueRed,
            Self::BlueRed => Self::Viridis,
        }
    }

    /// Get palette name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
            Self::Rainbow => "Rainbow",
            Self::BlueRed => "Blue-Red",
        }
    }

    /// Map a normalized value (0.0 to 1.0) to an RGB entry.
    pub fn sample(self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Viridis => viridis(t),
            Self::Plasma => plasma(t),
            Self::Rainbow => rainbow(t),
            Self::BlueRed => bluered(t),
        }
    }
}

impl fmt::Display for ColorPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorPalette {
    type Err = ColorpathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "viridis" => Ok(Self::Viridis),
            "plasma" => Ok(Self::Plasma),
            "rainbow" | "spectral" => Ok(Self::Rainbow),
            "bluered" | "blue-red" => Ok(Self::BlueRed),
            _ => Err(ColorpathError::InvalidPalette(s.to_string())),
        }
    }
}

/// Two-segment piecewise linear ramp through `lo`, `mid` and `hi` (byte values).
fn ramp(t: f64, lo: [f64; 3], mid: [f64; 3], hi: [f64; 3]) -> Rgb {
    let channel = |k: usize| {
        if t < 0.5 {
            lo[k] + t * 2.0 * (mid[k] - lo[k])
        } else {
            mid[k] + (t - 0.5) * 2.0 * (hi[k] - mid[k])
        }
    };
    Rgb::from_bytes(channel(0), channel(1), channel(2))
}

fn viridis(t: f64) -> Rgb {
    ramp(t, [68.0, 1.0, 84.0], [33.0, 104.0, 109.0], [253.0, 231.0, 37.0])
}

fn plasma(t: f64) -> Rgb {
    ramp(t, [13.0, 8.0, 135.0], [180.0, 54.0, 121.0], [240.0, 175.0, 12.0])
}

fn rainbow(t: f64) -> Rgb {
    // HSV with H sweeping from 240° (blue) down to 0° (red), full S and V
    let h = (1.0 - t) * 240.0;
    let x = 1.0 - ((h / 60.0) % 2.0 - 1.0).abs();

    let (r, g, b) = if h < 60.0 {
        (1.0, x, 0.0)
    } else if h < 120.0 {
        (x, 1.0, 0.0)
    } else if h < 180.0 {
        (0.0, 1.0, x)
    } else {
        (0.0, x, 1.0)
    };
    Rgb::new(r, g, b)
}

fn bluered(t: f64) -> Rgb {
    if t < 0.5 {
        let t2 = t * 2.0;
        Rgb::new(t2, t2, 1.0)
    } else {
        let t2 = (t - 0.5) * 2.0;
        Rgb::new(1.0, 1.0 - t2, 1.0 - t2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(lo: f64, hi: f64) -> ColorLimits {
        ColorLimits::new(lo, hi).unwrap()
    }

    #[test]
    fn rejects_empty_and_out_of_range() {
        assert!(matches!(
            Colormap::new(vec![]),
            Err(ColorpathError::InvalidColormap(_))
        ));
        assert!(Colormap::new(vec![Rgb::new(0.0, 1.2, 0.0)]).is_err());
        assert!(Colormap::new(vec![Rgb::new(f64::NAN, 0.0, 0.0)]).is_err());
        assert!(Colormap::new(vec![Rgb::new(0.0, 0.5, 1.0)]).is_ok());
    }

    #[test]
    fn presets_stay_in_unit_range() {
        for palette in [
            ColorPalette::Viridis,
            ColorPalette::Plasma,
            ColorPalette::Rainbow,
            ColorPalette::BlueRed,
        ] {
            let map = Colormap::from_palette(palette, 17);
            assert_eq!(map.len(), 17);
            assert!(Colormap::new(map.entries().to_vec()).is_ok(), "{}", palette);
        }
    }

    #[test]
    fn lookup_clamps_to_ends() {
        let map = Colormap::new(vec![
            Rgb::new(0.0, 0.0, 0.0),
            Rgb::new(0.5, 0.5, 0.5),
            Rgb::new(1.0, 1.0, 1.0),
        ])
        .unwrap();
        let l = limits(0.0, 3.0);
        assert_eq!(map.color_for(-10.0, l), Some(map.entries()[0]));
        assert_eq!(map.color_for(1.5, l), Some(map.entries()[1]));
        assert_eq!(map.color_for(3.0, l), Some(map.entries()[2]));
        assert_eq!(map.color_for(99.0, l), Some(map.entries()[2]));
        assert_eq!(map.color_for(f64::NAN, l), None);
    }

    #[test]
    fn palette_names_parse_back() {
        let mut p = ColorPalette::default();
        for _ in 0..4 {
            assert_eq!(p.name().parse::<ColorPalette>().unwrap(), p);
            p = p.next();
        }
        assert_eq!(p, ColorPalette::Viridis);
        assert!("jet".parse::<ColorPalette>().is_err());
    }
}
