use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl Circle {
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self { center_x, center_y, radius }
    }

    pub fn distance_to(&self, other: &Circle) -> f64 {
        let dx = other.center_x - self.center_x;
        let dy = other.center_y - self.center_y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when `other` lies entirely inside this circle (boundary contact counts).
    pub fn contains_circle(&self, other: &Circle) -> bool {
        let max_dist = self.radius - other.radius;
        if max_dist < 0.0 {
            return false;
        }
        let dx = other.center_x - self.center_x;
        let dy = other.center_y - self.center_y;
        dx * dx + dy * dy <= max_dist * max_dist
    }
}

/// One generated fixture: canvas size, the arena and its obstacles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub arena: Circle,
    pub obstacles: Vec<Circle>,
}

impl Scene {
    pub fn new(width: u32, height: u32, arena: Circle, obstacles: Vec<Circle>) -> Self {
        Self { width, height, arena, obstacles }
    }

    /// Smallest gap between an obstacle's far edge and the arena boundary.
    /// `None` for a scene without obstacles.
    pub fn max_containment_slack(&self) -> Option<f64> {
        self.obstacles
            .iter()
            .map(|o| self.arena.radius - (self.arena.distance_to(o) + o.radius))
            .reduce(f64::min)
    }

    /// Every obstacle keeps at least `margin` units (minus `tolerance`) to the arena boundary.
    pub fn obstacles_within(&self, margin: f64, tolerance: f64) -> bool {
        self.obstacles
            .iter()
            .all(|o| self.arena.distance_to(o) + o.radius <= self.arena.radius - margin + tolerance)
    }
}
