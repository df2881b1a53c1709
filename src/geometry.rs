//! Axis-aligned rectangles and the collision tests built on them.

/// A rectangle in playfield coordinates; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centred on `(cx, cy)`.
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.left() && px <= self.right() && py >= self.top() && py <= self.bottom()
    }
}

/// Strict overlap: rectangles that only share an edge do not collide.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.right() > b.left() && a.left() < b.right() && a.bottom() > b.top() && a.top() < b.bottom()
}

/// True once `r` touches or crosses the ceiling (y = 0) or the floor.
pub fn out_of_bounds(r: &Rect, playfield_height: f64) -> bool {
    r.bottom() >= playfield_height || r.top() <= 0.0
}
