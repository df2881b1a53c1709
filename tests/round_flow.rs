use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use roast_flap::geometry::{Rect, overlaps};
use roast_flap::insults;
use roast_flap::physics::Bird;
use roast_flap::{Config, DifficultyProfile, Intent, Phase, RoundState};

const FRAME: Duration = Duration::from_millis(16);

fn frame(n: u64) -> Duration {
    FRAME * n as u32
}

#[test]
fn hard_round_without_flaps_falls_out_once() {
    let mut round = RoundState::new(Config::default());
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    assert!(round.apply(Intent::Select(DifficultyProfile::Hard), Duration::ZERO));

    let mut ended_on = None;
    for n in 1..=200 {
        let report = round.tick(frame(n), &mut rng);
        if report.ended {
            assert!(ended_on.is_none(), "round ended twice");
            ended_on = Some(n);
        }
    }

    let n = ended_on.expect("bird never hit the floor");
    assert_eq!(round.phase(), Phase::GameOver);
    assert_eq!(round.round_ended_at(), Some(frame(n)));
    let bird = round.bird().bounds();
    assert!(bird.bottom() >= round.config().height);

    // Further ticks leave everything frozen.
    let y = round.bird().y;
    let xs: Vec<f64> = round.obstacles().iter().map(|o| o.x()).collect();
    round.tick(frame(500), &mut rng);
    assert_eq!(round.bird().y, y);
    assert_eq!(
        round.obstacles().iter().map(|o| o.x()).collect::<Vec<_>>(),
        xs
    );
    assert_eq!(round.round_ended_at(), Some(frame(n)));
}

#[test]
fn flapping_keeps_the_bird_alive_and_scoring() {
    let mut round = RoundState::new(Config::default());
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    round.apply(Intent::Select(DifficultyProfile::Easy), Duration::ZERO);

    let mut last_crossed = 0;
    let mut retired_total = 0;
    for n in 1..=2_000u64 {
        let now = frame(n);
        // Aim for the middle of the next gap ahead of the bird.
        let bird = round.bird().clone();
        let target = round
            .obstacles()
            .iter()
            .find(|o| o.trailing_edge() > bird.x - bird.width / 2.0)
            .map(|o| o.gap_start() + o.gap_size() / 2.0)
            .unwrap_or(round.config().height / 2.0);
        if bird.y > target + 10.0 && bird.velocity > 0.0 {
            round.apply(Intent::Flap, now);
        }
        let report = round.tick(now, &mut rng);
        retired_total += report.retired;

        assert!(round.pipes_crossed() >= last_crossed);
        last_crossed = round.pipes_crossed();
        if round.phase() != Phase::Playing {
            break;
        }
    }

    assert_eq!(retired_total, round.pipes_crossed());
    assert_eq!(round.score(), f64::from(round.pipes_crossed()) * 0.5);
    assert!(round.pipes_crossed() > 0, "autopilot never cleared a pipe");
}

#[test]
fn obstacles_stay_in_spawn_order() {
    let mut round = RoundState::new(Config::default());
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    round.apply(Intent::Select(DifficultyProfile::Hard), Duration::ZERO);

    for n in 1..=400u64 {
        let bird = round.bird();
        if bird.y > 300.0 && bird.velocity > 0.0 {
            round.apply(Intent::Flap, frame(n));
        }
        round.tick(frame(n), &mut rng);
        let xs: Vec<f64> = round.obstacles().iter().map(|o| o.x()).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]), "out of order: {xs:?}");
        if round.phase() != Phase::Playing {
            break;
        }
    }
}

#[test]
fn full_cycle_menu_play_game_over_menu() {
    let config = Config::default();
    let cooldown = config.game_over_cooldown;
    let mut round = RoundState::new(config);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    round.apply(Intent::Select(DifficultyProfile::Easy), Duration::ZERO);
    let mut n = 0;
    while round.phase() == Phase::Playing {
        n += 1;
        round.tick(frame(n), &mut rng);
    }
    let end = round.round_ended_at().expect("round ended");

    assert!(!round.apply(Intent::Dismiss, end + cooldown / 2));
    assert_eq!(round.phase(), Phase::GameOver);
    let snap = round.snapshot(end + cooldown / 2);
    assert!(snap.game_over.is_some_and(|g| !g.can_dismiss));

    assert!(round.apply(Intent::Dismiss, end + cooldown));
    assert_eq!(round.phase(), Phase::Menu);
    assert!(round.snapshot(end + cooldown).game_over.is_none());

    round.apply(Intent::Select(DifficultyProfile::Hard), end + cooldown * 2);
    assert_eq!(round.phase(), Phase::Playing);
    assert_eq!(round.pipes_crossed(), 0);
    assert!(round.obstacles().is_empty());
    assert!(round.taunt().is_none());
}

#[test]
fn edge_to_edge_contact_is_not_a_collision() {
    let bird = Bird::new(&Config::default()).bounds();
    let top_pipe = Rect::new(bird.left(), 0.0, 50.0, bird.top());
    assert!(!overlaps(&bird, &top_pipe));

    let nudged = Rect::new(bird.left(), 0.0, 50.0, bird.top() + 0.01);
    assert!(overlaps(&bird, &nudged));
}

#[test]
fn taunt_tiers_escalate_every_ten_pipes() {
    let expected = [(0, 0), (9, 0), (10, 1), (19, 1), (20, 2), (29, 2), (30, 3), (300, 3)];
    for (pipes, tier) in expected {
        assert_eq!(insults::tier_for(pipes), tier, "pipes = {pipes}");
    }
}
