use gloo_storage::{LocalStorage, Storage};
use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::names::{clean_names, MAX_NAMES};
use crate::spin::SpinConfig;
use crate::teams::clamp_team_size;

const STORAGE_KEY: &str = "name_wheel_storage_v1";
const STORAGE_VERSION: u32 = 1;
const DEFAULT_WHEEL_TITLE: &str = "Wheel";
const DEFAULT_VOLUME: u8 = 65;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredAppState {
    pub version: u32,
    pub wheels: Vec<SavedWheel>,
    pub settings: Settings,
}

impl Default for StoredAppState {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            wheels: Vec::new(),
            settings: Settings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedWheel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub updated_at: f64,
}

impl SavedWheel {
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "(untitled)"
        } else {
            trimmed
        }
    }

    pub fn loadable_names(&self) -> Vec<String> {
        self.names.iter().take(MAX_NAMES).cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinSound {
    #[default]
    Tick,
    Roulette,
    None,
}

impl SpinSound {
    pub const ALL: [SpinSound; 3] = [SpinSound::Tick, SpinSound::Roulette, SpinSound::None];

    pub fn key(self) -> &'static str {
        match self {
            SpinSound::Tick => "tick",
            SpinSound::Roulette => "roulette",
            SpinSound::None => "none",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpinSound::Tick => "Tick",
            SpinSound::Roulette => "Roulette",
            SpinSound::None => "None",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sound| sound.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinSound {
    #[default]
    Chime,
    Pop,
    None,
}

impl WinSound {
    pub const ALL: [WinSound; 3] = [WinSound::Chime, WinSound::Pop, WinSound::None];

    pub fn key(self) -> &'static str {
        match self {
            WinSound::Chime => "chime",
            WinSound::Pop => "pop",
            WinSound::None => "none",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WinSound::Chime => "Chime (ding)",
            WinSound::Pop => "Pop",
            WinSound::None => "None",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sound| sound.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Names,
    Teams,
    Sound,
    Saved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelState {
    pub names: bool,
    pub teams: bool,
    pub sound: bool,
    pub saved: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            names: true,
            teams: true,
            sound: true,
            saved: true,
        }
    }
}

impl PanelState {
    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Names => self.names,
            Panel::Teams => self.teams,
            Panel::Sound => self.sound,
            Panel::Saved => self.saved,
        }
    }

    fn slot(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::Names => &mut self.names,
            Panel::Teams => &mut self.teams,
            Panel::Sound => &mut self.sound,
            Panel::Saved => &mut self.saved,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub spin_sound: SpinSound,
    pub win_sound: WinSound,
    pub volume: u8,
    pub spin: SpinConfig,
    pub team_size: usize,
    pub panels: PanelState,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spin_sound: SpinSound::default(),
            win_sound: WinSound::default(),
            volume: DEFAULT_VOLUME,
            spin: SpinConfig::default(),
            team_size: 2,
            panels: PanelState::default(),
        }
    }
}

impl Settings {
    pub fn gain(&self) -> f64 {
        f64::from(self.volume.min(100)) / 100.0
    }

    pub fn normalize(&mut self) {
        self.volume = self.volume.min(100);
        self.team_size = clamp_team_size(self.team_size);
    }
}

pub fn load_state() -> StoredAppState {
    match LocalStorage::get::<StoredAppState>(STORAGE_KEY) {
        Ok(mut state) => {
            state.settings.normalize();
            state
        }
        Err(err) => {
            warn!("Falling back to default app state: {}", err);
            StoredAppState::default()
        }
    }
}

pub fn save_state(state: &StoredAppState) {
    if let Err(err) = LocalStorage::set(STORAGE_KEY, state) {
        warn!("Failed to persist state: {}", err);
    }
}

pub fn new_wheel_id<R: Rng + ?Sized>(rng: &mut R, now_ms: f64) -> String {
    format!("{:012x}{:x}", rng.gen::<u64>() & 0xffff_ffff_ffff, now_ms.max(0.0) as u64)
}

// Upserts by case-insensitive title. `None` when there was nothing to save.
pub fn save_wheel(
    state: &mut StoredAppState,
    title: &str,
    raw_names: &[String],
    now_ms: f64,
    new_id: impl FnOnce() -> String,
) -> Option<String> {
    let names = clean_names(raw_names);
    if names.is_empty() {
        return None;
    }

    let title = match title.trim() {
        "" => DEFAULT_WHEEL_TITLE.to_owned(),
        trimmed => trimmed.to_owned(),
    };
    let key = title.to_lowercase();

    if let Some(existing) = state
        .wheels
        .iter_mut()
        .find(|wheel| wheel.name.trim().to_lowercase() == key)
    {
        existing.names = names;
        existing.updated_at = now_ms;
        info!("Updated saved wheel '{}'", existing.name);
        return Some(existing.id.clone());
    }

    let id = new_id();
    info!("Saved new wheel '{}'", title);
    state.wheels.push(SavedWheel {
        id: id.clone(),
        name: title,
        names,
        updated_at: now_ms,
    });
    Some(id)
}

pub fn delete_wheel(state: &mut StoredAppState, id: &str) -> bool {
    let before = state.wheels.len();
    state.wheels.retain(|wheel| wheel.id != id);
    state.wheels.len() != before
}

pub fn clear_wheels(state: &mut StoredAppState) {
    state.wheels.clear();
}

pub fn find_wheel<'a>(state: &'a StoredAppState, id: &str) -> Option<&'a SavedWheel> {
    state.wheels.iter().find(|wheel| wheel.id == id)
}

pub fn sorted_wheels(state: &StoredAppState) -> Vec<&SavedWheel> {
    let mut wheels: Vec<&SavedWheel> = state.wheels.iter().collect();
    wheels.sort_by(|a, b| {
        b.updated_at
            .partial_cmp(&a.updated_at)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    wheels
}

pub fn latest_wheel(state: &StoredAppState) -> Option<&SavedWheel> {
    sorted_wheels(state)
        .into_iter()
        .find(|wheel| !wheel.names.is_empty())
}

pub fn toggle_panel(state: &mut StoredAppState, panel: Panel) -> bool {
    let slot = state.settings.panels.slot(panel);
    *slot = !*slot;
    *slot
}
