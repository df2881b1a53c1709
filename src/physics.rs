//! The bird and its per-tick integrator.

use crate::config::Config;
use crate::geometry::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Centre of the bird.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity in units per tick (positive = down).
    pub velocity: f64,
    pub lift: f64,
    /// Set by a flap, consumed by the next integration step.
    flapped: bool,
}

impl Bird {
    pub fn new(config: &Config) -> Self {
        Self {
            x: config.bird_x,
            y: config.bird_y,
            width: config.bird_width,
            height: config.bird_height,
            velocity: 0.0,
            lift: config.lift,
            flapped: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.x, self.y, self.width, self.height)
    }

    /// Velocity is replaced, not accumulated, so mashing gives no extra height.
    pub fn flap(&mut self) {
        self.velocity = self.lift;
        self.flapped = true;
    }

    /// One fixed-timestep step. The tick right after a flap flies at exactly
    /// the lift velocity; gravity resumes on the following tick.
    pub fn integrate(&mut self, gravity: f64) {
        if self.flapped {
            self.flapped = false;
        } else {
            self.velocity += gravity;
        }
        self.y += self.velocity;
    }
}
