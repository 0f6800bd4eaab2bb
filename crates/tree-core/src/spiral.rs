//! The ribbon spiral wound around the tree.
//!
//! A pure mapping from normalized progress `t ∈ [0, 1]` to a world-space
//! point. Height rises linearly, radius shrinks linearly toward the apex and
//! the angle sweeps a whole number of turns.

use crate::config::{ConfigError, SpiralParams};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpiralPath {
    params: SpiralParams,
}

impl SpiralPath {
    pub fn new(params: SpiralParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &SpiralParams {
        &self.params
    }

    #[inline]
    pub fn height_at(&self, t: f32) -> f32 {
        let t = clamp_unit(t);
        let h = self.params.height;
        t * h - h / 2.0 + self.params.y_offset
    }

    /// Linear blend between two strictly positive bounds, so never zero.
    #[inline]
    pub fn radius_at(&self, t: f32) -> f32 {
        let t = clamp_unit(t);
        self.params.max_radius * (1.0 - t * self.params.radius_shrink) + self.params.min_radius
    }

    #[inline]
    pub fn angle_at(&self, t: f32) -> f32 {
        clamp_unit(t) * self.params.turns as f32 * TAU
    }

    pub fn sample(&self, t: f32) -> Vec3 {
        let r = self.radius_at(t);
        let a = self.angle_at(t);
        Vec3::new(a.cos() * r, self.height_at(t), a.sin() * r)
    }

    pub fn apex(&self) -> Vec3 {
        self.sample(1.0)
    }

    /// Brute-force search over `sample_steps + 1` evenly spaced parameters.
    ///
    /// Returns the earliest `t` on ties. Never fails: a non-finite `point`
    /// simply keeps the first sample.
    pub fn nearest_parameter(&self, point: Vec3) -> f32 {
        let steps = self.params.sample_steps.max(1);
        let mut best_t = 0.0;
        let mut best_d = f32::INFINITY;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let d = self.sample(t).distance_squared(point);
            if d < best_d {
                best_d = d;
                best_t = t;
            }
        }
        best_t
    }

    /// `count` evenly spaced points from base to apex, for drawing the ribbon.
    pub fn points(&self, count: usize) -> Vec<Vec3> {
        match count {
            0 => Vec::new(),
            1 => vec![self.sample(0.0)],
            n => (0..n)
                .map(|i| self.sample(i as f32 / (n - 1) as f32))
                .collect(),
        }
    }

    /// Ease factor used to shape speed along the curve: 0 at both ends, 1 mid-way.
    #[inline]
    pub fn ease(t: f32) -> f32 {
        (clamp_unit(t) * PI).sin()
    }
}

#[inline]
fn clamp_unit(t: f32) -> f32 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}
