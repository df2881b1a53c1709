//! Simulation core for a Flappy Bird clone with a mean streak.
//!
//! The bird falls, the pipes scroll, and every pipe pair that leaves the
//! screen earns half a point and a taunt that gets nastier every ten pipes.
//! This crate holds the rules only; drawing, sound and raw input live in the
//! `roast-flap` binary.

pub mod config;
pub mod geometry;
pub mod insults;
pub mod obstacle;
pub mod physics;
pub mod round;
pub mod snapshot;

pub use config::Config;
pub use obstacle::{DifficultyProfile, GapPolicy, Obstacle};
pub use round::{Intent, Phase, RoundState, TickReport};
pub use snapshot::WorldSnapshot;
