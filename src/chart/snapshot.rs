//! Axis state carried across a surface rebuild.

use crate::colormap::Colormap;
use crate::surface::{ColorLimits, DrawingSurface, PropertyMode};
use std::mem;

/// Axis properties captured when a surface is torn down.
///
/// Colormap and limits are only recorded when they were set explicitly, so a
/// fresh surface keeps its own automatic values. Colorbar visibility is always
/// recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisStateSnapshot {
    /// Manual colormap, if any.
    pub colormap: Option<Colormap>,
    /// Manual color limits, if any.
    pub color_limits: Option<ColorLimits>,
    /// Colorbar visibility.
    pub colorbar_visible: Option<bool>,
}

impl AxisStateSnapshot {
    /// Read the snapshot from a live surface.
    pub fn capture<S: DrawingSurface>(surface: &S) -> Self {
        Self {
            colormap: (surface.colormap_mode() == PropertyMode::Manual)
                .then(|| surface.colormap().clone()),
            color_limits: (surface.color_limits_mode() == PropertyMode::Manual)
                .then(|| surface.color_limits()),
            colorbar_visible: Some(surface.colorbar_visible()),
        }
    }

    /// Apply every recorded property to `surface`.
    pub fn restore<S: DrawingSurface>(&self, surface: &mut S) {
        if let Some(ref colormap) = self.colormap {
            surface.set_colormap(colormap.clone());
        }
        if let Some(limits) = self.color_limits {
            surface.set_color_limits(limits);
        }
        if let Some(visible) = self.colorbar_visible {
            surface.set_colorbar_visible(visible);
        }
    }
}

/// Lifecycle of the teardown snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SnapshotState {
    /// Nothing has been captured yet.
    #[default]
    Idle,
    /// Captured and waiting for the next surface.
    Pending(AxisStateSnapshot),
    /// Applied to a surface; never applied again.
    Consumed,
}

impl SnapshotState {
    /// Take the pending snapshot, moving to `Consumed`.
    ///
    /// Returns `None` in every other state and leaves it unchanged.
    pub fn take_pending(&mut self) -> Option<AxisStateSnapshot> {
        match mem::take(self) {
            Self::Pending(snapshot) => {
                *self = Self::Consumed;
                Some(snapshot)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// True when a snapshot is waiting to be applied.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

/// Axis writes made while no surface is attached.
///
/// Applied once at setup, after the teardown snapshot.
#[derive(Debug, Clone, Default)]
pub(crate) struct AxisOverrides {
    pub(crate) colormap: Option<Colormap>,
    pub(crate) color_limits: Option<ColorLimits>,
    pub(crate) color_limits_mode: Option<PropertyMode>,
    pub(crate) colorbar_visible: Option<bool>,
}

impl AxisOverrides {
    pub(crate) fn apply<S: DrawingSurface>(self, surface: &mut S) {
        if let Some(colormap) = self.colormap {
            surface.set_colormap(colormap);
        }
        if let Some(limits) = self.color_limits {
            surface.set_color_limits(limits);
        }
        if let Some(mode) = self.color_limits_mode {
            surface.set_color_limits_mode(mode);
        }
        if let Some(visible) = self.colorbar_visible {
            surface.set_colorbar_visible(visible);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::ColorPalette;
    use crate::surface::CanvasSurface;

    #[test]
    fn capture_skips_auto_properties() {
        let mut surface = CanvasSurface::new(Colormap::viridis());
        let snap = AxisStateSnapshot::capture(&surface);
        assert_eq!(snap.colormap, None);
        assert_eq!(snap.color_limits, None);
        assert_eq!(snap.colorbar_visible, Some(false));

        surface.set_colormap(Colormap::from_palette(ColorPalette::Rainbow, 4));
        surface.set_color_limits(ColorLimits::new(0.0, 2.0).unwrap());
        let snap = AxisStateSnapshot::capture(&surface);
        assert_eq!(snap.colormap.as_ref().map(Colormap::len), Some(4));
        assert_eq!(snap.color_limits.map(|l| l.as_pair()), Some((0.0, 2.0)));
    }

    #[test]
    fn pending_is_taken_once() {
        let snap = AxisStateSnapshot {
            colormap: None,
            color_limits: None,
            colorbar_visible: Some(true),
        };
        let mut state = SnapshotState::Pending(snap.clone());
        assert!(state.is_pending());
        assert_eq!(state.take_pending(), Some(snap));
        assert_eq!(state, SnapshotState::Consumed);
        assert_eq!(state.take_pending(), None);
        assert_eq!(state, SnapshotState::Consumed);

        let mut idle = SnapshotState::Idle;
        assert_eq!(idle.take_pending(), None);
        assert_eq!(idle, SnapshotState::Idle);
    }
}
