use anyhow::Context;
use fundsp::prelude::*;
use rodio::{OutputStream, OutputStreamHandle, Sink, buffer::SamplesBuffer};
use tracing::warn;

// fundsp oscillators run at 44.1 kHz unless told otherwise.
const SAMPLE_RATE: u32 = 44_100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Flap,
    Point,
    Crash,
}

/// Frequency and gain ramps for one effect.
#[derive(Debug, Clone, Copy)]
struct Sweep {
    from_hz: f32,
    to_hz: f32,
    sweep_secs: f32,
    gain: f32,
    fade_secs: f32,
}

impl Sweep {
    fn len(&self) -> usize {
        (self.sweep_secs.max(self.fade_secs) * SAMPLE_RATE as f32) as usize
    }

    /// Drives `voice` (frequency in, sample out) through both ramps.
    fn render(&self, mut voice: impl FnMut(f32) -> f32) -> Vec<f32> {
        (0..self.len())
            .map(|i| {
                let t = i as f32 / SAMPLE_RATE as f32;
                let hz = lerp(self.from_hz, self.to_hz, (t / self.sweep_secs).min(1.0));
                let gain = lerp(self.gain, 0.0, (t / self.fade_secs).min(1.0));
                voice(hz) * gain
            })
            .collect()
    }
}

fn synth(effect: Effect) -> Vec<f32> {
    match effect {
        // Short rising chirp.
        Effect::Flap => {
            let mut osc = sine::<f32>();
            Sweep {
                from_hz: 300.0,
                to_hz: 620.0,
                sweep_secs: 0.08,
                gain: 0.10,
                fade_secs: 0.10,
            }
            .render(|hz| osc.filter_mono(hz))
        }
        Effect::Point => {
            let mut osc = square();
            Sweep {
                from_hz: 880.0,
                to_hz: 1320.0,
                sweep_secs: 0.05,
                gain: 0.06,
                fade_secs: 0.15,
            }
            .render(|hz| osc.filter_mono(hz))
        }
        // Falling sawtooth: 400 Hz to 80 Hz over 0.4 s, fading out over 0.5 s.
        Effect::Crash => {
            let mut osc = saw();
            Sweep {
                from_hz: 400.0,
                to_hz: 80.0,
                sweep_secs: 0.4,
                gain: 0.15,
                fade_secs: 0.5,
            }
            .render(|hz| osc.filter_mono(hz))
        }
    }
}

/// Pre-rendered effects plus the output device they play on.
pub struct Sounds {
    // Dropping the stream silences everything.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    flap: Vec<f32>,
    point: Vec<f32>,
    crash: Vec<f32>,
}

impl Sounds {
    pub fn open() -> anyhow::Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("no audio output device")?;
        Ok(Self {
            _stream: stream,
            handle,
            flap: synth(Effect::Flap),
            point: synth(Effect::Point),
            crash: synth(Effect::Crash),
        })
    }

    pub fn play(&self, effect: Effect) {
        let samples = match effect {
            Effect::Flap => &self.flap,
            Effect::Point => &self.point,
            Effect::Crash => &self.crash,
        };
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples.clone()));
                sink.detach(); // Play in background
            }
            Err(err) => warn!(?effect, %err, "could not play sound"),
        }
    }
}
