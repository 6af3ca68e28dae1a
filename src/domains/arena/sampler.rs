use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::types::{Circle, Scene};
use crate::common::{DomainError, DomainResult};

/// Tunables for scene generation. `Default` yields the standard fixture set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerParams {
    pub widths: Vec<u32>,
    pub heights: Vec<u32>,
    /// Arena center band as fractions of width / height.
    pub center_band: (f64, f64),
    /// Arena radius as fractions of `min(width, height)`.
    pub arena_radius_fraction: (f64, f64),
    pub min_obstacles: usize,
    pub max_obstacles: usize,
    /// Obstacle radius as fractions of the arena radius.
    pub obstacle_radius_fraction: (f64, f64),
    /// Per-axis scale applied to the scatter distance.
    pub axis_scale: (f64, f64),
    /// Inset subtracted from the scatter range (`R - r - inset`).
    pub scatter_inset: f64,
    /// Gap kept between an obstacle and the arena boundary after clamping.
    pub safety_margin: f64,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            widths: vec![700, 800, 900, 1000],
            heights: vec![700, 800, 900],
            center_band: (0.35, 0.65),
            arena_radius_fraction: (0.25, 0.42),
            min_obstacles: 2,
            max_obstacles: 5,
            obstacle_radius_fraction: (0.08, 0.18),
            axis_scale: (0.8, 1.0),
            scatter_inset: 10.0,
            safety_margin: 5.0,
        }
    }
}

impl SamplerParams {
    pub fn validate(&self) -> DomainResult<()> {
        let invalid =
            |reason: &str| Err(DomainError::InvalidParameters { reason: reason.to_string() });

        if self.widths.is_empty() || self.heights.is_empty() {
            return invalid("canvas size sets must not be empty");
        }
        if self.widths.iter().chain(self.heights.iter()).any(|v| *v == 0) {
            return invalid("canvas sizes must be positive");
        }
        if self.min_obstacles > self.max_obstacles {
            return invalid("min_obstacles exceeds max_obstacles");
        }
        if self.max_obstacles > i64::MAX as usize {
            return invalid("max_obstacles out of range");
        }
        let (r_lo, r_hi) = self.arena_radius_fraction;
        if !(r_lo > 0.0 && r_lo <= r_hi) {
            return invalid("arena radius fraction must be positive and ordered");
        }
        let (o_lo, o_hi) = self.obstacle_radius_fraction;
        if !(o_lo > 0.0 && o_lo <= o_hi && o_hi < 1.0) {
            return invalid("obstacle radius fraction must lie in (0, 1) and be ordered");
        }
        let (c_lo, c_hi) = self.center_band;
        if !(0.0..=1.0).contains(&c_lo) || !(0.0..=1.0).contains(&c_hi) || c_lo > c_hi {
            return invalid("center band must be an ordered range within [0, 1]");
        }
        if self.axis_scale.0 > self.axis_scale.1 || self.axis_scale.0 < 0.0 {
            return invalid("axis scale must be a non-negative ordered range");
        }
        if self.scatter_inset < 0.0 || self.safety_margin < 0.0 {
            return invalid("scatter inset and safety margin must be non-negative");
        }
        // Smallest arena with the largest obstacle must still leave room for the margin.
        let short_side = self.widths.iter().chain(self.heights.iter()).min().copied().unwrap_or(0);
        if f64::from(short_side) * r_lo * (1.0 - o_hi) < self.safety_margin {
            return invalid("smallest arena cannot hold an obstacle inside the safety margin");
        }
        Ok(())
    }
}

/// Guard against rescaling a vector of (near) zero length.
const MIN_CLAMP_DISTANCE: f64 = 1e-6;

/// Produces scenes whose obstacles sit inside the arena with a safety margin.
#[derive(Debug, Clone, Default)]
pub struct SceneSampler {
    params: SamplerParams,
}

impl SceneSampler {
    pub fn new(params: SamplerParams) -> DomainResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &SamplerParams {
        &self.params
    }

    /// Draws one scene. Draw order is part of the reproducibility contract:
    /// width, height, cx, cy, R, n, then per obstacle r, distance,
    /// x scale/sign/unit factor, y scale/sign/unit factor.
    pub fn sample<R: RandomSource>(&self, rng: &mut R) -> Scene {
        let p = &self.params;

        let width = rng.choose(&p.widths);
        let height = rng.choose(&p.heights);
        let (w, h) = (f64::from(width), f64::from(height));

        let cx = rng.uniform(w * p.center_band.0, w * p.center_band.1);
        let cy = rng.uniform(h * p.center_band.0, h * p.center_band.1);

        let short_side = w.min(h);
        let arena_radius = rng.uniform(
            short_side * p.arena_radius_fraction.0,
            short_side * p.arena_radius_fraction.1,
        );

        let count = rng.int_inclusive(p.min_obstacles as i64, p.max_obstacles as i64) as usize;
        let obstacles = (0..count)
            .map(|_| self.place_obstacle(rng, cx, cy, arena_radius))
            .collect();

        Scene::new(width, height, Circle::new(cx, cy, arena_radius), obstacles)
    }

    fn place_obstacle<R: RandomSource>(
        &self,
        rng: &mut R,
        cx: f64,
        cy: f64,
        arena_radius: f64,
    ) -> Circle {
        let p = &self.params;

        let r = rng.uniform(
            arena_radius * p.obstacle_radius_fraction.0,
            arena_radius * p.obstacle_radius_fraction.1,
        );
        // Small arenas can push the upper bound below zero.
        let d = rng.uniform(0.0, (arena_radius - r - p.scatter_inset).max(0.0));

        let (scale_x, sign_x, unit_x) = Self::axis_factors(rng, p.axis_scale);
        let (scale_y, sign_y, unit_y) = Self::axis_factors(rng, p.axis_scale);

        let mut ox = cx + d * scale_x * sign_x * unit_x;
        let mut oy = cy + d * scale_y * sign_y * unit_y;

        let (vx, vy) = (ox - cx, oy - cy);
        let dist = (vx * vx + vy * vy).sqrt();
        let ring = arena_radius - r - p.safety_margin;
        if dist > ring && dist > MIN_CLAMP_DISTANCE {
            let scale = ring / dist;
            ox = cx + vx * scale;
            oy = cy + vy * scale;
        }

        Circle::new(ox, oy, r)
    }

    /// Scale, sign and unit factor for one axis, drawn in that order.
    fn axis_factors<R: RandomSource>(rng: &mut R, scale: (f64, f64)) -> (f64, f64, f64) {
        let scale = rng.uniform(scale.0, scale.1);
        let sign = if rng.coin() { 1.0 } else { -1.0 };
        let unit = rng.uniform(0.0, 1.0).abs();
        (scale, sign, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::arena::random::seeded_source;

    #[test]
    fn default_params_are_valid() {
        assert!(SamplerParams::default().validate().is_ok());
    }

    fn expect_invalid(params: SamplerParams, fragment: &str) {
        match SceneSampler::new(params) {
            Err(DomainError::InvalidParameters { reason }) => assert!(reason.contains(fragment)),
            other => panic!("expected InvalidParameters, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn rejects_inverted_obstacle_range() {
        let params =
            SamplerParams { min_obstacles: 6, max_obstacles: 2, ..SamplerParams::default() };
        expect_invalid(params, "min_obstacles");
    }

    #[test]
    fn rejects_empty_size_set() {
        let params = SamplerParams { widths: Vec::new(), ..SamplerParams::default() };
        assert!(SceneSampler::new(params).is_err());
    }

    #[test]
    fn rejects_canvas_too_small_for_safety_margin() {
        // 20 * 0.25 * (1 - 0.18) = 4.1 < 5
        let params =
            SamplerParams { widths: vec![20], heights: vec![20], ..SamplerParams::default() };
        expect_invalid(params, "safety margin");

        let params =
            SamplerParams { widths: vec![25], heights: vec![25], ..SamplerParams::default() };
        assert!(SceneSampler::new(params).is_ok());
    }

    #[test]
    fn sampled_scene_respects_ranges() {
        let sampler = SceneSampler::default();
        let mut rng = seeded_source(1234);
        for _ in 0..200 {
            let scene = sampler.sample(&mut rng);
            assert!([700, 800, 900, 1000].contains(&scene.width));
            assert!([700, 800, 900].contains(&scene.height));

            let (w, h) = (f64::from(scene.width), f64::from(scene.height));
            assert!(scene.arena.center_x >= 0.35 * w && scene.arena.center_x <= 0.65 * w);
            assert!(scene.arena.center_y >= 0.35 * h && scene.arena.center_y <= 0.65 * h);
            assert!((2..=5).contains(&scene.obstacles.len()));
        }
    }
}
