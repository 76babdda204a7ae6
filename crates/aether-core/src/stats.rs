use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lower bound of every gauge.
pub const STAT_MIN: f64 = 0.0;
/// Upper bound of every gauge.
pub const STAT_MAX: f64 = 100.0;
/// Starting value of every gauge.
pub const STAT_DEFAULT: f64 = 70.0;

/// One of the four stat gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    /// Fullness. High is good.
    Hunger,
    /// Contentment.
    Happiness,
    /// Rest.
    Energy,
    /// Cleanliness.
    Hygiene,
}

impl StatKind {
    /// All gauges in display order.
    pub const ALL: [StatKind; 4] = [
        StatKind::Hunger,
        StatKind::Happiness,
        StatKind::Energy,
        StatKind::Hygiene,
    ];
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hunger => write!(f, "hunger"),
            Self::Happiness => write!(f, "happiness"),
            Self::Energy => write!(f, "energy"),
            Self::Hygiene => write!(f, "hygiene"),
        }
    }
}

impl FromStr for StatKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hunger" => Ok(Self::Hunger),
            "happiness" => Ok(Self::Happiness),
            "energy" => Ok(Self::Energy),
            "hygiene" => Ok(Self::Hygiene),
            _ => Err(CoreError::UnknownStat(s.to_string())),
        }
    }
}

/// Coarse reading of a gauge, used by renderers to pick a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatLevel {
    /// Above 70.
    Good,
    /// Above 40.
    Fair,
    /// 40 or below.
    Low,
}

impl StatLevel {
    /// Classify a gauge value.
    pub fn of(value: f64) -> Self {
        if value > 70.0 {
            Self::Good
        } else if value > 40.0 {
            Self::Fair
        } else {
            Self::Low
        }
    }
}

/// The four well-being gauges. Each value stays within 0.0..=100.0.
///
/// Missing gauges in a saved document deserialize to their default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    /// Fullness.
    pub hunger: f64,
    /// Contentment.
    pub happiness: f64,
    /// Rest.
    pub energy: f64,
    /// Cleanliness.
    pub hygiene: f64,
}

impl Default for Stats {
    fn default() -> Self {
        Self::uniform(STAT_DEFAULT)
    }
}

impl Stats {
    /// All four gauges at the same value (clamped).
    pub fn uniform(value: f64) -> Self {
        let v = clamp_stat(value);
        Self {
            hunger: v,
            happiness: v,
            energy: v,
            hygiene: v,
        }
    }

    /// Read a gauge.
    pub fn get(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Hunger => self.hunger,
            StatKind::Happiness => self.happiness,
            StatKind::Energy => self.energy,
            StatKind::Hygiene => self.hygiene,
        }
    }

    /// Overwrite a gauge, clamping to the valid range.
    pub fn set(&mut self, kind: StatKind, value: f64) {
        *self.slot(kind) = clamp_stat(value);
    }

    /// Increase a gauge by `amount`, clamping to 100.
    pub fn raise(&mut self, kind: StatKind, amount: f64) {
        let slot = self.slot(kind);
        *slot = clamp_stat(*slot + amount);
    }

    /// Decrease a gauge by `amount`, never going below `floor`.
    ///
    /// The floor itself is clamped to the valid range.
    pub fn lower(&mut self, kind: StatKind, amount: f64, floor: f64) {
        let slot = self.slot(kind);
        *slot = clamp_stat((*slot - amount).max(floor));
    }

    /// Clamp every gauge into range. Replaces NaN with the minimum.
    pub fn clamped(self) -> Self {
        Self {
            hunger: clamp_stat(self.hunger),
            happiness: clamp_stat(self.happiness),
            energy: clamp_stat(self.energy),
            hygiene: clamp_stat(self.hygiene),
        }
    }

    /// Whether every gauge is within range.
    pub fn in_range(&self) -> bool {
        StatKind::ALL
            .iter()
            .all(|k| (STAT_MIN..=STAT_MAX).contains(&self.get(*k)))
    }

    fn slot(&mut self, kind: StatKind) -> &mut f64 {
        match kind {
            StatKind::Hunger => &mut self.hunger,
            StatKind::Happiness => &mut self.happiness,
            StatKind::Energy => &mut self.energy,
            StatKind::Hygiene => &mut self.hygiene,
        }
    }
}

fn clamp_stat(value: f64) -> f64 {
    if value.is_nan() {
        STAT_MIN
    } else {
        value.clamp(STAT_MIN, STAT_MAX)
    }
}
