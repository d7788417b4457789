use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorType};

use crate::storage::{SpinSound, WinSound};

// Exponential ramps cannot reach zero.
const SILENCE: f32 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

impl Waveform {
    fn oscillator_type(self) -> OscillatorType {
        match self {
            Waveform::Sine => OscillatorType::Sine,
            Waveform::Square => OscillatorType::Square,
            Waveform::Triangle => OscillatorType::Triangle,
        }
    }
}

// Times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub wave: Waveform,
    pub freq: f32,
    pub dur: f64,
    pub gain: f32,
    pub attack: f64,
    pub release: f64,
    pub detune: f32,
}

impl Tone {
    pub fn stop_after(&self) -> f64 {
        self.dur + self.release + 0.02
    }

    // (peak, silent, stop) on the context clock for a tone starting at `t0`.
    pub fn envelope_times(&self, t0: f64) -> (f64, f64, f64) {
        (
            t0 + self.attack,
            t0 + self.dur + self.release,
            t0 + self.stop_after(),
        )
    }
}

const TICK: [Tone; 1] = [Tone {
    wave: Waveform::Square,
    freq: 1200.0,
    dur: 0.02,
    gain: 0.20,
    attack: 0.002,
    release: 0.03,
    detune: 0.0,
}];

const ROULETTE: [Tone; 1] = [Tone {
    wave: Waveform::Triangle,
    freq: 860.0,
    dur: 0.03,
    gain: 0.20,
    attack: 0.003,
    release: 0.05,
    detune: -20.0,
}];

const CHIME: [Tone; 2] = [
    Tone {
        wave: Waveform::Sine,
        freq: 880.0,
        dur: 0.10,
        gain: 0.25,
        attack: 0.005,
        release: 0.14,
        detune: 0.0,
    },
    Tone {
        wave: Waveform::Sine,
        freq: 1320.0,
        dur: 0.10,
        gain: 0.18,
        attack: 0.005,
        release: 0.18,
        detune: 0.0,
    },
];

const POP: [Tone; 2] = [
    Tone {
        wave: Waveform::Sine,
        freq: 260.0,
        dur: 0.05,
        gain: 0.28,
        attack: 0.001,
        release: 0.08,
        detune: 0.0,
    },
    Tone {
        wave: Waveform::Square,
        freq: 520.0,
        dur: 0.02,
        gain: 0.10,
        attack: 0.001,
        release: 0.05,
        detune: 0.0,
    },
];

pub fn spin_tones(sound: SpinSound) -> &'static [Tone] {
    match sound {
        SpinSound::Tick => &TICK,
        SpinSound::Roulette => &ROULETTE,
        SpinSound::None => &[],
    }
}

pub fn win_tones(sound: WinSound) -> &'static [Tone] {
    match sound {
        WinSound::Chime => &CHIME,
        WinSound::Pop => &POP,
        WinSound::None => &[],
    }
}

// Browsers only start audio after a user gesture; call `unlock` from a click.
pub struct SoundBoard {
    graph: Option<(AudioContext, GainNode)>,
    volume: f32,
}

impl SoundBoard {
    pub fn new(volume: f64) -> Self {
        Self {
            graph: None,
            volume: volume.clamp(0.0, 1.0) as f32,
        }
    }

    pub fn unlock(&mut self) {
        if let Err(err) = self.ensure_graph() {
            warn!("Audio unavailable: {:?}", err);
        }
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0) as f32;
        if let Some((_, master)) = &self.graph {
            master.gain().set_value(self.volume);
        }
    }

    pub fn play_spin(&mut self, sound: SpinSound) {
        self.play(spin_tones(sound), 0.0);
    }

    pub fn play_win(&mut self, sound: WinSound) {
        self.play(win_tones(sound), 0.0);
    }

    pub fn play_win_after(&mut self, sound: WinSound, delay_s: f64) {
        self.play(win_tones(sound), delay_s.max(0.0));
    }

    fn play(&mut self, tones: &[Tone], delay_s: f64) {
        if tones.is_empty() || self.volume <= 0.0 {
            return;
        }
        let result = self.ensure_graph().and_then(|(ctx, master)| {
            tones
                .iter()
                .try_for_each(|tone| schedule_tone(ctx, master, tone, delay_s))
        });
        if let Err(err) = result {
            warn!("Failed to play sound: {:?}", err);
        }
    }

    fn ensure_graph(&mut self) -> Result<(&AudioContext, &GainNode), JsValue> {
        if self.graph.is_none() {
            let ctx = AudioContext::new()?;
            let master = ctx.create_gain()?;
            master.gain().set_value(self.volume);
            master.connect_with_audio_node(&ctx.destination())?;
            self.graph = Some((ctx, master));
        }
        let (ctx, master) = self
            .graph
            .as_ref()
            .ok_or_else(|| JsValue::from_str("audio graph missing"))?;
        if ctx.state() == AudioContextState::Suspended {
            // The returned promise only reports failure; nothing to await.
            let _ = ctx.resume();
        }
        Ok((ctx, master))
    }
}

fn schedule_tone(
    ctx: &AudioContext,
    master: &GainNode,
    tone: &Tone,
    delay_s: f64,
) -> Result<(), JsValue> {
    let t0 = ctx.current_time() + delay_s;
    let (peak_at, silent_at, stop_at) = tone.envelope_times(t0);
    let osc = ctx.create_oscillator()?;
    let envelope = ctx.create_gain()?;

    osc.set_type(tone.wave.oscillator_type());
    osc.frequency().set_value(tone.freq);
    osc.detune().set_value(tone.detune);

    let gain = envelope.gain();
    gain.set_value_at_time(SILENCE, t0)?;
    gain.linear_ramp_to_value_at_time(tone.gain.max(SILENCE), peak_at)?;
    gain.exponential_ramp_to_value_at_time(SILENCE, silent_at)?;

    osc.connect_with_audio_node(&envelope)?;
    envelope.connect_with_audio_node(master)?;

    osc.start_with_when(t0)?;
    osc.stop_with_when(stop_at)?;
    Ok(())
}
