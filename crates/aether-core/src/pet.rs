use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Growth phase of the pet.
///
/// Only the egg to baby transition is ever produced (when a type is
/// assigned). The later stages exist so saves and renderers can name them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStage {
    /// Not yet hatched.
    #[default]
    Egg,
    /// Hatched.
    Baby,
    /// Unreachable by the engine.
    Child,
    /// Unreachable by the engine.
    Teen,
    /// Unreachable by the engine.
    Adult,
}

impl PetStage {
    /// All stages in growth order.
    pub const ALL: [PetStage; 5] = [
        PetStage::Egg,
        PetStage::Baby,
        PetStage::Child,
        PetStage::Teen,
        PetStage::Adult,
    ];

    /// Lowercase name as stored in saves.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Egg => "egg",
            Self::Baby => "baby",
            Self::Child => "child",
            Self::Teen => "teen",
            Self::Adult => "adult",
        }
    }
}

impl std::fmt::Display for PetStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetStage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == lower)
            .ok_or_else(|| CoreError::UnknownPetStage(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Type
// ---------------------------------------------------------------------------

/// Elemental affinity chosen during onboarding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    /// No type chosen yet.
    #[default]
    None,
    /// Fire affinity.
    Fire,
    /// Water affinity.
    Water,
    /// Forest affinity.
    Forest,
    /// Electric affinity.
    Electric,
}

impl PetType {
    /// All types including [`PetType::None`].
    pub const ALL: [PetType; 5] = [
        PetType::None,
        PetType::Fire,
        PetType::Water,
        PetType::Forest,
        PetType::Electric,
    ];

    /// Lowercase name as stored in saves.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Forest => "forest",
            Self::Electric => "electric",
        }
    }

    /// Whether an actual element has been chosen.
    pub fn is_chosen(&self) -> bool {
        *self != Self::None
    }
}

impl std::fmt::Display for PetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == lower)
            .ok_or_else(|| CoreError::UnknownPetType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// Categorical summary of the pet's well-being. Always derived, see
/// [`crate::mood::derive_mood`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetMood {
    /// Every gauge is comfortably high.
    Happy,
    /// Hunger is low.
    Hungry,
    /// Energy is low.
    Tired,
    /// Hygiene is low.
    Dirty,
    /// Never produced by the mood derivation.
    Sick,
    /// Nothing stands out, or the pet is asleep.
    #[default]
    Neutral,
    /// Happiness is low.
    Sad,
}

impl PetMood {
    /// Lowercase name as stored in saves.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Hungry => "hungry",
            Self::Tired => "tired",
            Self::Dirty => "dirty",
            Self::Sick => "sick",
            Self::Neutral => "neutral",
            Self::Sad => "sad",
        }
    }
}

impl std::fmt::Display for PetMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
