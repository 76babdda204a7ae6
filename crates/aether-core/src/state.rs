use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::mood::derive_mood;
use crate::pet::{PetMood, PetStage, PetType};
use crate::stats::Stats;

/// Minutes of game time per in-game day.
pub const MINUTES_PER_DAY: u64 = 1440;

/// The care interactions whose timestamps are remembered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// Feeding.
    Feed,
    /// Playing.
    Play,
    /// Cleaning.
    Clean,
    /// Going to sleep or waking up.
    Sleep,
}

impl std::fmt::Display for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Feed => write!(f, "feed"),
            Self::Play => write!(f, "play"),
            Self::Clean => write!(f, "clean"),
            Self::Sleep => write!(f, "sleep"),
        }
    }
}

/// When each interaction last happened. Serialized as ISO-8601 text or null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastInteraction {
    /// Last feeding.
    pub feed: Option<DateTime<Utc>>,
    /// Last play session.
    pub play: Option<DateTime<Utc>>,
    /// Last cleaning.
    pub clean: Option<DateTime<Utc>>,
    /// Last sleep toggle, in either direction.
    pub sleep: Option<DateTime<Utc>>,
}

impl LastInteraction {
    /// Read the timestamp for an interaction.
    pub fn get(&self, interaction: Interaction) -> Option<DateTime<Utc>> {
        match interaction {
            Interaction::Feed => self.feed,
            Interaction::Play => self.play,
            Interaction::Clean => self.clean,
            Interaction::Sleep => self.sleep,
        }
    }

    /// Record that an interaction happened at `at`.
    pub fn record(&mut self, interaction: Interaction, at: DateTime<Utc>) {
        let slot = match interaction {
            Interaction::Feed => &mut self.feed,
            Interaction::Play => &mut self.play,
            Interaction::Clean => &mut self.clean,
            Interaction::Sleep => &mut self.sleep,
        };
        *slot = Some(at);
    }
}

/// The whole state of one pet. Field names serialize in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetState {
    /// Display name, empty until onboarding sets it.
    pub pet_name: String,
    /// Growth phase.
    pub pet_stage: PetStage,
    /// Elemental affinity.
    pub pet_type: PetType,
    /// Age in in-game days.
    pub pet_age: u64,
    /// Well-being gauges.
    pub stats: Stats,
    /// Timestamps of the last care interactions.
    pub last_interaction: LastInteraction,
    /// Derived from `stats` and `is_sleeping`.
    pub mood: PetMood,
    /// Whether the pet is asleep.
    pub is_sleeping: bool,
    /// True until onboarding completes.
    pub show_intro: bool,
    /// Elapsed game minutes.
    pub game_time: u64,
}

impl Default for PetState {
    fn default() -> Self {
        Self {
            pet_name: String::new(),
            pet_stage: PetStage::Egg,
            pet_type: PetType::None,
            pet_age: 0,
            stats: Stats::default(),
            last_interaction: LastInteraction::default(),
            mood: PetMood::Neutral,
            is_sleeping: false,
            show_intro: true,
            game_time: 0,
        }
    }
}

impl PetState {
    /// Overlay every field present in `partial` onto this state.
    pub fn apply_partial(&mut self, partial: PartialState) {
        if let Some(v) = partial.pet_name {
            self.pet_name = v;
        }
        if let Some(v) = partial.pet_stage {
            self.pet_stage = v;
        }
        if let Some(v) = partial.pet_type {
            self.pet_type = v;
        }
        if let Some(v) = partial.pet_age {
            self.pet_age = v;
        }
        if let Some(v) = partial.stats {
            self.stats = v;
        }
        if let Some(v) = partial.last_interaction {
            self.last_interaction = v;
        }
        if let Some(v) = partial.mood {
            self.mood = v;
        }
        if let Some(v) = partial.is_sleeping {
            self.is_sleeping = v;
        }
        if let Some(v) = partial.show_intro {
            self.show_intro = v;
        }
        if let Some(v) = partial.game_time {
            self.game_time = v;
        }
    }

    /// Recompute [`PetState::mood`]. Returns the previous mood if it changed.
    pub fn recompute_mood(&mut self) -> Option<PetMood> {
        let next = derive_mood(&self.stats, self.is_sleeping);
        if next == self.mood {
            None
        } else {
            Some(std::mem::replace(&mut self.mood, next))
        }
    }

    /// Whether the pet has hatched.
    pub fn is_hatched(&self) -> bool {
        self.pet_stage != PetStage::Egg
    }

    /// Minutes elapsed in the current in-game day.
    pub fn minute_of_day(&self) -> u64 {
        self.game_time % MINUTES_PER_DAY
    }
}

/// A possibly incomplete [`PetState`], as read from a save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialState {
    /// See [`PetState::pet_name`].
    pub pet_name: Option<String>,
    /// See [`PetState::pet_stage`].
    pub pet_stage: Option<PetStage>,
    /// See [`PetState::pet_type`].
    pub pet_type: Option<PetType>,
    /// See [`PetState::pet_age`].
    pub pet_age: Option<u64>,
    /// See [`PetState::stats`].
    pub stats: Option<Stats>,
    /// See [`PetState::last_interaction`].
    pub last_interaction: Option<LastInteraction>,
    /// See [`PetState::mood`].
    pub mood: Option<PetMood>,
    /// See [`PetState::is_sleeping`].
    pub is_sleeping: Option<bool>,
    /// See [`PetState::show_intro`].
    pub show_intro: Option<bool>,
    /// See [`PetState::game_time`].
    pub game_time: Option<u64>,
}

impl From<PetState> for PartialState {
    fn from(state: PetState) -> Self {
        Self {
            pet_name: Some(state.pet_name),
            pet_stage: Some(state.pet_stage),
            pet_type: Some(state.pet_type),
            pet_age: Some(state.pet_age),
            stats: Some(state.stats),
            last_interaction: Some(state.last_interaction),
            mood: Some(state.mood),
            is_sleeping: Some(state.is_sleeping),
            show_intro: Some(state.show_intro),
            game_time: Some(state.game_time),
        }
    }
}

/// Result of decoding a saved document field by field.
#[derive(Debug, Clone, Default)]
pub struct LenientDecode {
    /// Every field that decoded.
    pub state: PartialState,
    /// Keys that were present but could not be decoded.
    pub rejected: Vec<String>,
}

impl PartialState {
    /// Decode each top-level field of a JSON object independently.
    ///
    /// A field that fails to decode (an unknown enum name, a string where a
    /// number belongs) is left out and its key reported in
    /// [`LenientDecode::rejected`]. Returns `None` if `value` is not an object.
    pub fn decode_lenient(value: &Value) -> Option<LenientDecode> {
        let obj = value.as_object()?;
        let mut rejected = Vec::new();

        let state = PartialState {
            pet_name: field(obj, "petName", &mut rejected),
            pet_stage: field(obj, "petStage", &mut rejected),
            pet_type: field(obj, "petType", &mut rejected),
            pet_age: field(obj, "petAge", &mut rejected),
            stats: field(obj, "stats", &mut rejected),
            last_interaction: field(obj, "lastInteraction", &mut rejected),
            mood: field(obj, "mood", &mut rejected),
            is_sleeping: field(obj, "isSleeping", &mut rejected),
            show_intro: field(obj, "showIntro", &mut rejected),
            game_time: field(obj, "gameTime", &mut rejected),
        };

        Some(LenientDecode { state, rejected })
    }
}

fn field<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    key: &str,
    rejected: &mut Vec<String>,
) -> Option<T> {
    let raw = obj.get(key)?;
    if raw.is_null() {
        return None;
    }
    match serde_json::from_value(raw.clone()) {
        Ok(v) => Some(v),
        Err(_) => {
            rejected.push(key.to_string());
            None
        }
    }
}
