//! The round state machine: menu, playing, game over.
//!
//! [`RoundState`] is the only thing that mutates the bird, the pipes and the
//! taunt. The shell feeds it [`Intent`]s and calls [`RoundState::tick`] once
//! per frame; both take `now`, the wall-clock time since the shell started,
//! which is only used for the round timer, the taunt lifetime and the
//! game-over cooldown. Motion itself advances one fixed step per tick.

use std::collections::VecDeque;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, trace};

use crate::config::Config;
use crate::geometry::{out_of_bounds, overlaps};
use crate::insults;
use crate::obstacle::{self, DifficultyProfile, Obstacle};
use crate::physics::Bird;
use crate::snapshot::{BirdView, GameOverInfo, TauntView, WorldSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Playing,
    GameOver,
}

/// Abstract player input, already stripped of keys and coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Flap,
    Select(DifficultyProfile),
    Dismiss,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTaunt {
    pub text: &'static str,
    pub created_at: Duration,
}

/// What happened during one tick, for sound effects and the like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub retired: u32,
    pub ended: bool,
}

#[derive(Debug, Clone)]
pub struct RoundState {
    config: Config,
    phase: Phase,
    profile: Option<DifficultyProfile>,
    bird: Bird,
    /// Front = oldest = leftmost.
    obstacles: VecDeque<Obstacle>,
    pipes_crossed: u32,
    tick_count: u64,
    started_at: Duration,
    ended_at: Option<Duration>,
    taunt: Option<ActiveTaunt>,
    best: f64,
}

impl RoundState {
    pub fn new(config: Config) -> Self {
        Self {
            bird: Bird::new(&config),
            config,
            phase: Phase::Menu,
            profile: None,
            obstacles: VecDeque::new(),
            pipes_crossed: 0,
            tick_count: 0,
            started_at: Duration::ZERO,
            ended_at: None,
            taunt: None,
            best: 0.0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn profile(&self) -> Option<DifficultyProfile> {
        self.profile
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn obstacles(&self) -> &VecDeque<Obstacle> {
        &self.obstacles
    }

    pub fn pipes_crossed(&self) -> u32 {
        self.pipes_crossed
    }

    /// Half a point per retired pipe pair.
    pub fn score(&self) -> f64 {
        f64::from(self.pipes_crossed) * 0.5
    }

    /// Highest score seen since the process started.
    pub fn best_score(&self) -> f64 {
        self.best
    }

    pub fn taunt(&self) -> Option<&ActiveTaunt> {
        self.taunt.as_ref()
    }

    pub fn round_started_at(&self) -> Duration {
        self.started_at
    }

    pub fn round_ended_at(&self) -> Option<Duration> {
        self.ended_at
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Applies an intent if the current phase accepts it. Returns whether it did.
    pub fn apply(&mut self, intent: Intent, now: Duration) -> bool {
        match (self.phase, intent) {
            (Phase::Menu, Intent::Select(profile)) => {
                self.start(profile, now);
                true
            }
            (Phase::Playing, Intent::Flap) => {
                self.bird.flap();
                true
            }
            (Phase::GameOver, Intent::Dismiss) if self.can_dismiss(now) => {
                debug!("back to menu");
                self.phase = Phase::Menu;
                true
            }
            _ => false,
        }
    }

    pub fn can_dismiss(&self, now: Duration) -> bool {
        match (self.phase, self.ended_at) {
            (Phase::GameOver, Some(end)) => now.saturating_sub(end) >= self.config.game_over_cooldown,
            _ => false,
        }
    }

    fn start(&mut self, profile: DifficultyProfile, now: Duration) {
        self.bird = Bird::new(&self.config);
        self.obstacles.clear();
        self.pipes_crossed = 0;
        self.tick_count = 0;
        self.taunt = None;
        self.profile = Some(profile);
        self.started_at = now;
        self.ended_at = None;
        self.phase = Phase::Playing;
        info!(profile = profile.name(), "round started");
    }

    fn end(&mut self, now: Duration, cause: &str) {
        self.phase = Phase::GameOver;
        self.ended_at = Some(now);
        self.best = self.best.max(self.score());
        info!(
            cause,
            score = self.score(),
            pipes = self.pipes_crossed,
            ticks = self.tick_count,
            played_ms = now.saturating_sub(self.started_at).as_millis() as u64,
            "round over"
        );
    }

    /// Advances the round by one frame. Does nothing outside [`Phase::Playing`].
    pub fn tick<R: Rng>(&mut self, now: Duration, rng: &mut R) -> TickReport {
        let mut report = TickReport::default();
        if self.phase != Phase::Playing {
            return report;
        }
        let Some(profile) = self.profile else {
            return report;
        };

        self.bird.integrate(self.config.gravity);

        if out_of_bounds(&self.bird.bounds(), self.config.height) {
            self.end(now, "boundary");
            report.ended = true;
            return report;
        }

        if self.tick_count % profile.spawn_interval() == 0 {
            let o = obstacle::generate(profile, &self.config, rng);
            debug!(gap_start = o.gap_start(), gap = o.gap_size(), "pipe spawned");
            self.obstacles.push_back(o);
        }

        for o in &mut self.obstacles {
            o.advance(self.config.pipe_speed);
        }

        while self
            .obstacles
            .front()
            .is_some_and(|o| o.trailing_edge() < 0.0)
        {
            self.obstacles.pop_front();
            self.pipes_crossed += 1;
            report.retired += 1;
            let tier = insults::tier_for(self.pipes_crossed);
            let text = insults::pick(tier, rng);
            trace!(tier, pipes = self.pipes_crossed, text, "taunt");
            self.taunt = Some(ActiveTaunt {
                text,
                created_at: now,
            });
        }

        if self
            .taunt
            .as_ref()
            .is_some_and(|t| now.saturating_sub(t.created_at) >= self.config.taunt_duration)
        {
            self.taunt = None;
        }

        let bird = self.bird.bounds();
        let hit = self
            .obstacles
            .iter()
            .flat_map(Obstacle::rects)
            .any(|r| overlaps(&bird, r));

        self.tick_count += 1;

        if hit {
            self.end(now, "pipe");
            report.ended = true;
        }
        report
    }

    pub fn snapshot(&self, now: Duration) -> WorldSnapshot<'_> {
        let bird = &self.bird;
        let taunt = self.taunt.as_ref().map(|t| TauntView {
            text: t.text,
            anchor: (
                bird.x + bird.width / 2.0 + self.config.taunt_offset,
                bird.y - bird.height / 2.0,
            ),
        });
        let game_over = match (self.phase, self.ended_at) {
            (Phase::GameOver, Some(end)) => Some(GameOverInfo {
                elapsed_play_time: end.saturating_sub(self.started_at),
                can_dismiss: self.can_dismiss(now),
            }),
            _ => None,
        };
        WorldSnapshot {
            phase: self.phase,
            profile: self.profile,
            bird: BirdView {
                x: bird.x,
                y: bird.y,
                width: bird.width,
                height: bird.height,
                velocity: bird.velocity,
            },
            obstacles: &self.obstacles,
            score: self.score(),
            best_score: self.best,
            taunt,
            game_over,
            playfield: (self.config.width, self.config.height),
        }
    }
}
