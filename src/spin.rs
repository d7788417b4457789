use std::f64::consts::TAU;

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wheel::winner_index;

pub const MIN_SPIN_DURATION_MS: f64 = 800.0;
pub const MAX_SPIN_DURATION_MS: f64 = 15_000.0;

pub const MIN_SPIN_NAMES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpinRejected {
    #[error("need at least 2 names to spin, found {found}")]
    TooFewNames { found: usize },
    #[error("a spin is already in progress")]
    AlreadySpinning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    pub min_duration_ms: f64,
    pub max_duration_ms: f64,
    pub duration_override_ms: Option<f64>,
    pub min_extra_turns: f64,
    pub max_extra_turns: f64,
    pub fast_tick_ms: f64,
    pub slow_tick_ms: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            min_duration_ms: 2200.0,
            max_duration_ms: 3100.0,
            duration_override_ms: None,
            min_extra_turns: 6.0,
            max_extra_turns: 10.0,
            fast_tick_ms: 45.0,
            slow_tick_ms: 190.0,
        }
    }
}

impl SpinConfig {
    fn draw_duration<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let raw = match self.duration_override_ms {
            Some(ms) => ms,
            None => sample_between(rng, self.min_duration_ms, self.max_duration_ms),
        };
        clamp_duration(raw)
    }

    fn draw_extra_turns<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        sample_between(rng, self.min_extra_turns, self.max_extra_turns).max(1.0)
    }
}

pub fn clamp_duration(ms: f64) -> f64 {
    if ms.is_nan() {
        return MIN_SPIN_DURATION_MS;
    }
    ms.clamp(MIN_SPIN_DURATION_MS, MAX_SPIN_DURATION_MS)
}

fn sample_between<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if hi - lo > f64::EPSILON {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

pub fn tick_interval(fast_ms: f64, slow_ms: f64, eased: f64) -> f64 {
    fast_ms + (slow_ms - fast_ms) * eased
}

// The entrant list is frozen at start; edits mid-spin cannot change who wins.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinSession {
    names: Vec<String>,
    start_ms: f64,
    duration_ms: f64,
    start_rotation: f64,
    target_rotation: f64,
    fast_tick_ms: f64,
    slow_tick_ms: f64,
    last_tick_ms: f64,
}

impl SpinSession {
    pub fn start<R: Rng + ?Sized>(
        clean_names: &[String],
        rotation: f64,
        now: f64,
        config: &SpinConfig,
        rng: &mut R,
    ) -> Result<Self, SpinRejected> {
        if clean_names.len() < MIN_SPIN_NAMES {
            return Err(SpinRejected::TooFewNames {
                found: clean_names.len(),
            });
        }

        let duration_ms = config.draw_duration(rng);
        // Turns are cosmetic; the offset alone decides the winner.
        let extra_turns = config.draw_extra_turns(rng);
        let offset = rng.gen_range(0.0..TAU);
        let target_rotation = rotation + extra_turns * TAU + offset;

        debug!(
            "spin started: {} names, {:.0} ms, {:.2} turns",
            clean_names.len(),
            duration_ms,
            extra_turns + offset / TAU
        );

        Ok(Self {
            names: clean_names.to_vec(),
            start_ms: now,
            duration_ms,
            start_rotation: rotation,
            target_rotation,
            fast_tick_ms: config.fast_tick_ms,
            slow_tick_ms: config.slow_tick_ms,
            last_tick_ms: now,
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn start_rotation(&self) -> f64 {
        self.start_rotation
    }

    pub fn target_rotation(&self) -> f64 {
        self.target_rotation
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn progress(&self, now: f64) -> f64 {
        ((now - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn rotation_at(&self, now: f64) -> f64 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.target_rotation;
        }
        let travelled = (self.target_rotation - self.start_rotation) * ease_out_cubic(t);
        (self.start_rotation + travelled).min(self.target_rotation)
    }

    fn tick_due(&mut self, now: f64) -> bool {
        let eased = ease_out_cubic(self.progress(now));
        let interval = tick_interval(self.fast_tick_ms, self.slow_tick_ms, eased);
        if now - self.last_tick_ms >= interval {
            self.last_tick_ms = now;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub winner_index: usize,
    pub winner: String,
    pub rotation: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinFrame {
    pub rotation: f64,
    pub tick: bool,
    pub completed: Option<SpinOutcome>,
}

// Kept until the names change so the highlight stays on the winner.
#[derive(Debug, Clone, PartialEq)]
pub struct Landing {
    names: Vec<String>,
    winner_index: usize,
}

impl Landing {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn winner_index(&self) -> usize {
        self.winner_index
    }
}

#[derive(Debug, Clone, Default)]
pub struct Spinner {
    rotation: f64,
    session: Option<SpinSession>,
    landing: Option<Landing>,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&SpinSession> {
        self.session.as_ref()
    }

    pub fn landing(&self) -> Option<&Landing> {
        self.landing.as_ref()
    }

    pub fn shown_names(&self) -> Option<&[String]> {
        match (&self.session, &self.landing) {
            (Some(session), _) => Some(session.names()),
            (None, Some(landing)) => Some(landing.names()),
            (None, None) => None,
        }
    }

    pub fn start<R: Rng + ?Sized>(
        &mut self,
        clean_names: &[String],
        now: f64,
        config: &SpinConfig,
        rng: &mut R,
    ) -> Result<&SpinSession, SpinRejected> {
        if self.session.is_some() {
            return Err(SpinRejected::AlreadySpinning);
        }
        let session = SpinSession::start(clean_names, self.rotation, now, config, rng)?;
        self.landing = None;
        Ok(self.session.insert(session))
    }

    // `now` must not go backwards between calls.
    pub fn advance(&mut self, now: f64) -> SpinFrame {
        let Some(session) = self.session.as_mut() else {
            return SpinFrame {
                rotation: self.rotation,
                tick: false,
                completed: None,
            };
        };

        self.rotation = session.rotation_at(now);
        let tick = session.tick_due(now);

        if session.progress(now) < 1.0 {
            return SpinFrame {
                rotation: self.rotation,
                tick,
                completed: None,
            };
        }

        let completed = match self.session.take() {
            Some(finished) => self.land(finished),
            None => None,
        };

        SpinFrame {
            rotation: self.rotation,
            tick,
            completed,
        }
    }

    fn land(&mut self, finished: SpinSession) -> Option<SpinOutcome> {
        let resolved = winner_index(&finished.names, self.rotation)
            .and_then(|index| finished.names.get(index).map(|name| (index, name.clone())));
        let Some((index, winner)) = resolved else {
            warn!("spin finished with {} entrants, no winner", finished.names.len());
            return None;
        };

        info!("spin finished on \"{}\" (slice {})", winner, index);
        self.landing = Some(Landing {
            names: finished.names,
            winner_index: index,
        });
        Some(SpinOutcome {
            winner_index: index,
            winner,
            rotation: self.rotation,
        })
    }

    pub fn settle(&mut self) -> bool {
        self.landing.take().is_some()
    }

    pub fn reset(&mut self) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.rotation = 0.0;
        self.landing = None;
        true
    }
}
