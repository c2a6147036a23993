// src/physics/geometry.rs
//
// Bohr-model layout: concentric shell radii, evenly spaced electrons and a
// nucleus sized by nucleon count. Everything here is a pure function of its
// inputs; the animation clock lives in the GUI.

use super::shells::ShellConfiguration;
use crate::error::{PtableError, Result};
use nalgebra::{Point2, Rotation2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Fraction of the half-extent available to the outermost shell.
pub const MARGIN_FACTOR: f64 = 0.85;
pub const NUCLEUS_MIN_RADIUS: f64 = 40.0;
/// Nucleus never grows past this fraction of `max_radius`.
pub const NUCLEUS_MAX_FRACTION: f64 = 0.4;
/// rad/s of the innermost shell at `rotation_speed == 1.0`.
pub const BASE_ANGULAR_SPEED: f64 = 0.8;

/// Container size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
  pub width: f64,
  pub height: f64,
}

impl Viewport {
  pub fn new(width: f64, height: f64) -> Self {
    Self { width, height }
  }

  fn validate(&self) -> Result<()> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(self.width) && ok(self.height) {
      Ok(())
    } else {
      Err(PtableError::InvalidInput(format!(
        "container size must be positive, got {}x{}",
        self.width, self.height
      )))
    }
  }

  pub fn center(&self) -> Point2<f64> {
    Point2::new(self.width / 2.0, self.height / 2.0)
  }

  /// `min(w, h) / 2 * 0.85`
  pub fn max_radius(&self) -> f64 {
    self.width.min(self.height) / 2.0 * MARGIN_FACTOR
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spin {
  pub spinning: bool,
  /// Multiplier on [`BASE_ANGULAR_SPEED`].
  pub rotation_speed: f64,
}

impl Default for Spin {
  fn default() -> Self {
    Self {
      spinning: true,
      rotation_speed: 1.0,
    }
  }
}

impl Spin {
  pub fn stopped() -> Self {
    Self {
      spinning: false,
      rotation_speed: 0.0,
    }
  }

  /// Outer shells turn slower than inner ones.
  pub fn angular_velocity(&self, shell_index: usize) -> f64 {
    if !self.spinning || !self.rotation_speed.is_finite() {
      return 0.0;
    }
    self.rotation_speed * BASE_ANGULAR_SPEED / (shell_index as f64 + 1.0)
  }
}

/// Radius of shell `index` out of `shell_count`, scaled to `max_radius`.
///
/// `(i + 1) / (k + 0.5)` is strictly increasing in `i` and stays below 1.
pub fn shell_radius(index: usize, shell_count: usize, max_radius: f64) -> f64 {
  ((index as f64 + 1.0) / (shell_count as f64 + 0.5)) * max_radius
}

/// `n` angles spaced `2π / n` apart, starting at 0.
pub fn electron_angles(n: u64) -> Vec<f64> {
  if n == 0 {
    return Vec::new();
  }
  let step = TAU / n as f64;
  (0..n).map(|j| j as f64 * step).collect()
}

/// `(protons + neutrons) / 4 + 20`, kept in `[40, max_radius * 0.4]`.
///
/// When the container is so small that the upper bound falls under 40 the
/// upper bound wins, so the nucleus still fits.
///
/// This does not keep the nucleus inside the first shell: Og in a 400px view
/// gets a 68px nucleus under a 26px inner ring. Painters draw shells last.
pub fn nucleus_radius(protons: u32, neutrons: u32, max_radius: f64) -> f64 {
  let raw = (protons as f64 + neutrons as f64) / 4.0 + 20.0;
  raw.max(NUCLEUS_MIN_RADIUS).min(max_radius * NUCLEUS_MAX_FRACTION)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellGeometry {
  pub index: usize,
  pub radius: f64,
  pub angles: Vec<f64>,
  /// Relative to the atom center.
  pub positions: Vec<Point2<f64>>,
  /// rad/s, 0 when not spinning.
  pub angular_velocity: f64,
}

impl ShellGeometry {
  pub fn electron_count(&self) -> usize {
    self.positions.len()
  }

  /// Electron positions after `elapsed` seconds of rotation.
  pub fn positions_at(&self, elapsed: f64) -> Vec<Point2<f64>> {
    let rot = Rotation2::new(self.angular_velocity * elapsed);
    self.positions.iter().map(|p| rot * p).collect()
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AtomGeometry {
  pub center: Point2<f64>,
  pub max_radius: f64,
  pub nucleus_radius: f64,
  pub shells: Vec<ShellGeometry>,
}

impl AtomGeometry {
  /// Container coordinates of a center-relative point.
  pub fn to_screen(&self, p: &Point2<f64>) -> Point2<f64> {
    self.center + Vector2::new(p.x, p.y)
  }

  pub fn outer_radius(&self) -> f64 {
    self.shells.last().map_or(0.0, |s| s.radius)
  }
}

/// Lays out the atom for the given shells and container.
pub fn resolve(
  config: &ShellConfiguration,
  protons: u32,
  neutrons: u32,
  viewport: Viewport,
  spin: Spin,
) -> Result<AtomGeometry> {
  viewport.validate()?;

  let max_radius = viewport.max_radius();
  let k = config.shell_count();

  let shells = config
    .shells()
    .iter()
    .enumerate()
    .map(|(i, &n)| {
      let radius = shell_radius(i, k, max_radius);
      let angles = electron_angles(n);
      let positions = angles
        .iter()
        .map(|a| Point2::new(radius * a.cos(), radius * a.sin()))
        .collect();
      ShellGeometry {
        index: i,
        radius,
        angles,
        positions,
        angular_velocity: spin.angular_velocity(i),
      }
    })
    .collect();

  Ok(AtomGeometry {
    center: viewport.center(),
    max_radius,
    nucleus_radius: nucleus_radius(protons, neutrons, max_radius),
    shells,
  })
}
