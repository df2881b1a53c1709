//! Read-only view of a round handed to the renderer once per frame.

use std::collections::VecDeque;
use std::time::Duration;

use crate::obstacle::{DifficultyProfile, Obstacle};
use crate::round::Phase;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub velocity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TauntView {
    pub text: &'static str,
    /// Top-left corner of the speech bubble.
    pub anchor: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOverInfo {
    pub elapsed_play_time: Duration,
    /// The cooldown has run out and a dismiss would be accepted.
    pub can_dismiss: bool,
}

impl GameOverInfo {
    pub fn elapsed_minutes(&self) -> f64 {
        self.elapsed_play_time.as_secs_f64() / 60.0
    }
}

#[derive(Debug, Clone)]
pub struct WorldSnapshot<'a> {
    pub phase: Phase,
    pub profile: Option<DifficultyProfile>,
    pub bird: BirdView,
    pub obstacles: &'a VecDeque<Obstacle>,
    pub score: f64,
    pub best_score: f64,
    pub taunt: Option<TauntView>,
    pub game_over: Option<GameOverInfo>,
    pub playfield: (f64, f64),
}

impl WorldSnapshot<'_> {
    /// What the score readout shows; half points stay hidden.
    pub fn displayed_score(&self) -> u32 {
        self.score.floor() as u32
    }
}
