//! Pipe pairs and the difficulty profiles that shape them.

use rand::Rng;

use crate::config::Config;
use crate::geometry::Rect;

/// How the vertical gap of a new pipe pair is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GapPolicy {
    /// Gap size and position both drawn uniformly.
    Randomized { min_gap: u32, max_gap: u32 },
    /// Constant gap, centred on the playfield and nudged by up to `jitter`.
    Fixed { gap: f64, jitter: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DifficultyProfile {
    Easy,
    Hard,
}

impl DifficultyProfile {
    pub const ALL: [DifficultyProfile; 2] = [Self::Easy, Self::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Hard => "Hard",
        }
    }

    /// Ticks between two spawns.
    pub fn spawn_interval(&self) -> u64 {
        match self {
            Self::Easy => 100,
            Self::Hard => 80,
        }
    }

    pub fn gap_policy(&self) -> GapPolicy {
        match self {
            Self::Easy => GapPolicy::Randomized {
                min_gap: 300,
                max_gap: 400,
            },
            Self::Hard => GapPolicy::Fixed {
                gap: 220.0,
                jitter: 150.0,
            },
        }
    }
}

/// A top pipe and a bottom pipe sharing one x position.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub top: Rect,
    pub bottom: Rect,
}

impl Obstacle {
    /// Builds the pair at `x` with the gap spanning `gap_start..gap_start + gap_size`.
    pub fn new(x: f64, width: f64, gap_start: f64, gap_size: f64, playfield_height: f64) -> Self {
        let gap_end = gap_start + gap_size;
        Self {
            top: Rect::new(x, 0.0, width, gap_start),
            bottom: Rect::new(x, gap_end, width, playfield_height - gap_end),
        }
    }

    pub fn x(&self) -> f64 {
        self.top.x
    }

    pub fn gap_start(&self) -> f64 {
        self.top.bottom()
    }

    pub fn gap_size(&self) -> f64 {
        self.bottom.top() - self.top.bottom()
    }

    /// Right edge; once this is left of zero the pair is off screen.
    pub fn trailing_edge(&self) -> f64 {
        self.top.right()
    }

    pub fn advance(&mut self, dx: f64) {
        self.top.x -= dx;
        self.bottom.x -= dx;
    }

    pub fn rects(&self) -> [&Rect; 2] {
        [&self.top, &self.bottom]
    }
}

/// Generates a new pipe pair just past the right edge of the playfield.
///
/// Heights are clamped so that both pipes are at least `min_pipe_height`
/// tall whatever the policy draws. On a playfield shorter than two minimum
/// pipes the minimum shrinks to half the height and the gap closes.
pub fn generate<R: Rng>(profile: DifficultyProfile, config: &Config, rng: &mut R) -> Obstacle {
    let height = config.height.max(0.0);
    let min_pipe = min_pipe_height(config);
    // Largest gap that still leaves room for two minimum-height pipes.
    let room = (height - 2.0 * min_pipe).max(0.0);

    let (top_height, gap) = match profile.gap_policy() {
        GapPolicy::Randomized { min_gap, max_gap } => {
            let hi = max_gap.max(min_gap);
            let gap = (rng.gen_range(min_gap..=hi) as f64).min(room);
            let max_top = (height - gap - min_pipe).max(min_pipe);
            let (first, last) = (min_pipe.ceil() as i64, max_top.floor() as i64);
            // No whole number fits between the bounds.
            let top = if first <= last {
                rng.gen_range(first..=last) as f64
            } else {
                min_pipe
            };
            (top, gap)
        }
        GapPolicy::Fixed { gap, jitter } => {
            let gap = gap.min(room);
            let jitter = jitter.abs();
            let offset = if jitter > 0.0 {
                rng.gen_range(-jitter..=jitter)
            } else {
                0.0
            };
            let top = (height - gap) / 2.0 + offset;
            let max_top = (height - gap - min_pipe).max(min_pipe);
            (top.clamp(min_pipe, max_top), gap)
        }
    };

    Obstacle::new(config.width, config.pipe_width, top_height, gap, height)
}

/// The configured minimum, capped at half the playfield.
pub fn min_pipe_height(config: &Config) -> f64 {
    config
        .min_pipe_height
        .min(config.height / 2.0)
        .max(0.0)
}
