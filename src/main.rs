mod input;
mod render;
mod sound;

use anyhow::Context;
use clap::Parser;
use crossterm::{cursor, event, execute, terminal};
use rand::{SeedableRng, rngs::StdRng};
use roast_flap::{Config, Intent, RoundState};
use std::fs::File;
use std::io::{self, Stdout, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use input::{Command, InputRouter};
use render::Renderer;
use sound::{Effect, Sounds};

#[derive(Parser, Debug)]
#[command(name = "roast-flap")]
#[command(about = "Flap between the pipes while the game tells you how bad you are")]
struct Args {
    /// Seed for pipes and taunts (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Disable sound effects
    #[arg(long)]
    mute: bool,

    /// Write diagnostics here (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Frames per second; the simulation advances one step per frame
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,
}

// ── Logging ─────────────────────────────────────────────────────────────────

/// The screen belongs to the game, so logs go to a file or nowhere.
fn init_logging(path: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::sink).init(),
    }
    Ok(())
}

// ── Terminal ────────────────────────────────────────────────────────────────

/// Raw mode plus alternate screen, undone on drop so errors and panics
/// unwinding through `main` still leave a usable shell.
struct Terminal {
    out: Stdout,
}

impl Terminal {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            event::EnableMouseCapture,
        )?;
        Ok(Self { out })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
    }
}

// ── Main ────────────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, fps = args.fps, mute = args.mute, "starting");
    let mut rng = StdRng::seed_from_u64(seed);

    let sounds = if args.mute {
        None
    } else {
        match Sounds::open() {
            Ok(s) => Some(s),
            Err(err) => {
                warn!("sound disabled: {err:#}");
                None
            }
        }
    };
    let play = |effect: Effect| {
        if let Some(s) = &sounds {
            s.play(effect);
        }
    };

    let config = Config::default();
    let playfield = (config.width, config.height);
    let mut round = RoundState::new(config);
    let mut router = InputRouter::new();

    let mut term = Terminal::enter().context("cannot set up the terminal")?;
    let (cols, rows) = terminal::size()?;
    let mut renderer = Renderer::new(cols, rows, playfield);

    let frame_dur = Duration::from_secs(1) / args.fps;
    let clock = Instant::now();

    loop {
        let frame_start = Instant::now();

        // Input
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            match router.route(&ev, round.phase(), renderer.viewport()) {
                Some(Command::Quit) => {
                    info!("quit");
                    return Ok(());
                }
                Some(Command::Resize(c, r)) => renderer.resize(c, r),
                Some(Command::Intent(intent)) => {
                    if round.apply(intent, clock.elapsed()) && intent == Intent::Flap {
                        play(Effect::Flap);
                    }
                }
                None => {}
            }
        }

        // Update
        let now = clock.elapsed();
        let report = round.tick(now, &mut rng);
        if report.retired > 0 {
            play(Effect::Point);
        }
        if report.ended {
            play(Effect::Crash);
        }

        // Render
        renderer.draw(&round.snapshot(now), router.highlighted(), &mut term.out)?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
}
