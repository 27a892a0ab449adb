//! Bounded random walk generator.
//!
//! Produces a damped, normally driven walk confined to a square of half-width
//! `w` by elastic reflection, plus a "heat" signal that peaks near one random
//! hot spot. Used as demo data for the trajectory chart.

use crate::error::{ColorpathError, Result};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::debug;

/// Parameters of the walk.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkParams {
    /// Number of points.
    pub steps: usize,
    /// Half-width of the reflecting square boundary.
    pub half_width: f64,
    /// Velocity damping factor applied each step.
    pub damping: f64,
    /// Hot spot is placed uniformly within `±hotspot_extent` on each axis.
    pub hotspot_extent: f64,
    /// Per-axis Gaussian spread of the heat signal, drawn from `[lo, hi)`.
    pub spread: (f64, f64),
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            steps: 20_000,
            half_width: 100.0,
            damping: 0.7,
            hotspot_extent: 100.0,
            spread: (10.0, 20.0),
        }
    }
}

impl WalkParams {
    /// Check that the parameters describe a walk that can be generated.
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(ColorpathError::invalid_walk_params("steps must be at least 1"));
        }
        if !(self.half_width.is_finite() && self.half_width > 0.0) {
            return Err(ColorpathError::invalid_walk_params(format!(
                "half-width must be positive, got {}",
                self.half_width
            )));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(ColorpathError::invalid_walk_params(format!(
                "damping must lie in [0, 1], got {}",
                self.damping
            )));
        }
        if !(self.hotspot_extent.is_finite() && self.hotspot_extent >= 0.0) {
            return Err(ColorpathError::invalid_walk_params(
                "hot spot extent must be non-negative",
            ));
        }
        let (lo, hi) = self.spread;
        if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && hi > lo) {
            return Err(ColorpathError::invalid_walk_params(format!(
                "spread range [{}, {}) is empty or not positive",
                lo, hi
            )));
        }
        Ok(())
    }
}

/// Generated walk: positions and heat signal, all of length `steps`.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    /// X positions.
    pub x: Array1<f64>,
    /// Y positions.
    pub y: Array1<f64>,
    /// Heat signal in `(0, 1]`.
    pub c: Array1<f64>,
    /// Location of the hot spot.
    pub hotspot: [f64; 2],
    /// Per-axis spread of the heat signal.
    pub spread: [f64; 2],
}

impl Walk {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when the walk has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Fold `p` back inside `[-w, w]`, returning whether the direction flipped.
///
/// Repeated reflection is periodic in `4w`: the first half of each period
/// maps straight through, the second half comes back mirrored.
fn reflect(p: &mut f64, w: f64) -> bool {
    if p.is_nan() || p.abs() <= w {
        return false;
    }
    if p.is_infinite() {
        *p = p.signum() * w;
        return true;
    }
    let m = (*p + w).rem_euclid(4.0 * w);
    if m <= 2.0 * w {
        *p = m - w;
        false
    } else {
        *p = 3.0 * w - m;
        true
    }
}

/// Generate a walk drawing randomness from `rng`.
pub fn generate<R: Rng>(params: &WalkParams, rng: &mut R) -> Result<Walk> {
    params.validate()?;

    let n = params.steps;
    let w = params.half_width;
    let d = params.damping;

    let mut x = Array1::<f64>::zeros(n);
    let mut y = Array1::<f64>::zeros(n);

    let mut pos = [0.0_f64, 0.0];
    let mut vel: [f64; 2] = [rng.sample(StandardNormal), rng.sample(StandardNormal)];
    let mut acc: [f64; 2] = [rng.sample(StandardNormal), rng.sample(StandardNormal)];

    for i in 1..n {
        for k in 0..2 {
            pos[k] += vel[k] + 0.5 * acc[k];
            vel[k] = d * vel[k] + acc[k];
        }
        acc = [rng.sample(StandardNormal), rng.sample(StandardNormal)];

        for k in 0..2 {
            if reflect(&mut pos[k], w) {
                vel[k] = -vel[k];
            }
        }

        x[i] = pos[0];
        y[i] = pos[1];
    }

    let e = params.hotspot_extent;
    let hotspot = [rng.gen_range(-e..=e), rng.gen_range(-e..=e)];
    let (lo, hi) = params.spread;
    let spread = [rng.gen_range(lo..hi), rng.gen_range(lo..hi)];

    let c = ndarray::Zip::from(&x).and(&y).map_collect(|&px, &py| {
        let gx = (-(px - hotspot[0]).powi(2) / (2.0 * spread[0].powi(2))).exp();
        let gy = (-(py - hotspot[1]).powi(2) / (2.0 * spread[1].powi(2))).exp();
        // Far from the hot spot the product underflows; keep it strictly positive
        (gx * gy).max(f64::MIN_POSITIVE)
    });

    debug!(
        steps = n,
        half_width = w,
        hotspot_x = hotspot[0],
        hotspot_y = hotspot[1],
        "Generated random walk"
    );

    Ok(Walk {
        x,
        y,
        c,
        hotspot,
        spread,
    })
}

/// Generate a reproducible walk from `seed`.
pub fn generate_seeded(params: &WalkParams, seed: u64) -> Result<Walk> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(params, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_walk_has_expected_shape() {
        let walk = generate_seeded(&WalkParams::default(), 7).unwrap();
        assert_eq!(walk.len(), 20_000);
        assert_eq!(walk.y.len(), 20_000);
        assert_eq!(walk.c.len(), 20_000);
        assert_eq!((walk.x[0], walk.y[0]), (0.0, 0.0));
    }

    #[test]
    fn reflection_folds_back_inside() {
        let mut p = 103.0;
        assert!(reflect(&mut p, 100.0));
        assert_eq!(p, 97.0);

        let mut q = -350.0;
        // Two folds restore the original direction
        assert!(!reflect(&mut q, 100.0));
        assert_eq!(q, 50.0);

        let mut r = 42.0;
        assert!(!reflect(&mut r, 100.0));
        assert_eq!(r, 42.0);

        let mut edge = 100.0;
        assert!(!reflect(&mut edge, 100.0));
        assert_eq!(edge, 100.0);
    }

    #[test]
    fn reflection_handles_non_finite_positions() {
        let mut p = f64::INFINITY;
        assert!(reflect(&mut p, 100.0));
        assert_eq!(p, 100.0);

        let mut q = f64::NEG_INFINITY;
        assert!(reflect(&mut q, 100.0));
        assert_eq!(q, -100.0);
    }

    proptest::proptest! {
        #[test]
        fn reflection_lands_inside_for_far_positions(
            p in -1.0e15_f64..1.0e15,
            w in 0.5_f64..1.0e3,
        ) {
            let mut folded = p;
            reflect(&mut folded, w);
            proptest::prop_assert!(folded.abs() <= w * (1.0 + 1e-9));
        }
    }

    #[test]
    fn heat_peaks_at_hotspot() {
        let params = WalkParams {
            steps: 1,
            ..WalkParams::default()
        };
        let walk = generate_seeded(&params, 3).unwrap();
        let [hx, hy] = walk.hotspot;
        let [sx, sy] = walk.spread;
        let expected = (-(hx * hx) / (2.0 * sx * sx)).exp() * (-(hy * hy) / (2.0 * sy * sy)).exp();
        assert!((walk.c[0] - expected.max(f64::MIN_POSITIVE)).abs() < 1e-12);
        assert!((10.0..20.0).contains(&sx) && (10.0..20.0).contains(&sy));
    }

    #[test]
    fn rejects_bad_params() {
        let bad = [
            WalkParams {
                steps: 0,
                ..WalkParams::default()
            },
            WalkParams {
                half_width: 0.0,
                ..WalkParams::default()
            },
            WalkParams {
                spread: (5.0, 5.0),
                ..WalkParams::default()
            },
            WalkParams {
                damping: 1.5,
                ..WalkParams::default()
            },
            WalkParams {
                damping: -0.1,
                ..WalkParams::default()
            },
            WalkParams {
                damping: f64::NAN,
                ..WalkParams::default()
            },
        ];
        for params in bad {
            assert!(matches!(
                generate_seeded(&params, 1),
                Err(ColorpathError::InvalidWalkParams(_))
            ));
        }
    }
}
