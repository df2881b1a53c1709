//! Tuning constants for the simulation.
//!
//! Everything is expressed in logical playfield units (the playfield is
//! 400×600 regardless of how big the terminal is) and in ticks, where one
//! tick is one frame.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: f64,
    pub height: f64,

    /// Centre of the bird at round start.
    pub bird_x: f64,
    pub bird_y: f64,
    pub bird_width: f64,
    pub bird_height: f64,

    /// Added to the bird's velocity every tick.
    pub gravity: f64,
    /// Velocity the bird is set to on a flap (negative = up).
    pub lift: f64,

    pub pipe_width: f64,
    /// Leftward pipe movement per tick.
    pub pipe_speed: f64,
    /// Neither pipe of a pair is ever shorter than this.
    pub min_pipe_height: f64,

    /// How long the game-over screen ignores dismissal.
    pub game_over_cooldown: Duration,
    /// How long a taunt stays on screen.
    pub taunt_duration: Duration,
    /// Horizontal gap between the bird's right edge and its taunt bubble.
    pub taunt_offset: f64,
}

impl Default for Config {
    fn default() -> Self {
        // 16×16 sprite drawn at 4×.
        let sprite = 16.0 * 4.0;
        Self {
            width: 400.0,
            height: 600.0,
            bird_x: 50.0,
            bird_y: 150.0,
            bird_width: sprite,
            bird_height: sprite,
            gravity: 0.4,
            lift: -8.0 * 0.7,
            pipe_width: 50.0,
            pipe_speed: 2.0,
            min_pipe_height: 50.0,
            game_over_cooldown: Duration::from_millis(2000),
            taunt_duration: Duration::from_millis(3000),
            taunt_offset: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_feel() {
        let c = Config::default();
        assert_eq!(c.width, 400.0);
        assert_eq!(c.height, 600.0);
        assert_eq!(c.bird_width, 64.0);
        assert!((c.lift - (-5.6)).abs() < 1e-9);
        assert!((c.gravity - 0.4).abs() < f64::EPSILON);
        assert_eq!(c.game_over_cooldown, Duration::from_secs(2));
        assert_eq!(c.taunt_duration, Duration::from_secs(3));
    }

    #[test]
    fn test_bird_starts_inside_playfield() {
        let c = Config::default();
        assert!(c.bird_y - c.bird_height / 2.0 > 0.0);
        assert!(c.bird_y + c.bird_height / 2.0 < c.height);
    }
}
