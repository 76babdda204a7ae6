use std::time::Duration;

/// Per-tick gauge changes.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayRates {
    /// Hunger lost per awake tick.
    pub hunger: f64,
    /// Happiness lost per awake tick.
    pub happiness: f64,
    /// Hygiene lost per awake tick.
    pub hygiene: f64,
    /// Energy lost per awake tick, and gained per sleeping tick.
    pub energy: f64,
    /// Factor applied to hunger, happiness and hygiene decay while asleep.
    pub sleep_multiplier: f64,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            hunger: 0.5,
            happiness: 0.3,
            hygiene: 0.2,
            energy: 0.5,
            sleep_multiplier: 0.3,
        }
    }
}

/// Immediate gauge changes applied by care actions.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEffects {
    /// Hunger restored by feeding.
    pub feed_hunger: f64,
    /// Happiness gained by playing.
    pub play_happiness: f64,
    /// Energy spent by playing.
    pub play_energy_cost: f64,
    /// Playing never drops energy below this.
    pub play_energy_floor: f64,
    /// Hygiene restored by cleaning.
    pub clean_hygiene: f64,
    /// Energy gained on falling asleep.
    pub sleep_energy_boost: f64,
}

impl Default for ActionEffects {
    fn default() -> Self {
        Self {
            feed_hunger: 30.0,
            play_happiness: 30.0,
            play_energy_cost: 10.0,
            play_energy_floor: 5.0,
            clean_hygiene: 40.0,
            sleep_energy_boost: 10.0,
        }
    }
}

/// Event log capacity used by [`SimConfig::default`].
pub const DEFAULT_MAX_EVENTS: usize = 1000;

/// Configuration for an engine and its runtime.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Real time between ticks when running live.
    pub tick_interval: Duration,
    /// Whether ticks advance the pet while onboarding is still showing.
    pub tick_during_intro: bool,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
    /// Per-tick decay.
    pub decay: DecayRates,
    /// Care action effects.
    pub effects: ActionEffects,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            tick_during_intro: true,
            max_events: DEFAULT_MAX_EVENTS,
            decay: DecayRates::default(),
            effects: ActionEffects::default(),
        }
    }
}

impl SimConfig {
    /// Set the real time between live ticks.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Choose whether time passes before onboarding completes.
    pub fn with_tick_during_intro(mut self, enabled: bool) -> Self {
        self.tick_during_intro = enabled;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Replace the decay rates.
    pub fn with_decay(mut self, decay: DecayRates) -> Self {
        self.decay = decay;
        self
    }

    /// Replace the action effects.
    pub fn with_effects(mut self, effects: ActionEffects) -> Self {
        self.effects = effects;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = SimConfig::default();
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert!(config.tick_during_intro);
        assert_eq!(config.max_events, DEFAULT_MAX_EVENTS);
        assert!((config.decay.hunger - 0.5).abs() < f64::EPSILON);
        assert!((config.decay.sleep_multiplier - 0.3).abs() < f64::EPSILON);
        assert!((config.effects.clean_hygiene - 40.0).abs() < f64::EPSILON);
        assert!((config.effects.play_energy_floor - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn config_builder_chain() {
        let config = SimConfig::default()
            .with_tick_interval(Duration::from_millis(250))
            .with_tick_during_intro(false)
            .with_max_events(100);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        assert!(!config.tick_during_intro);
        assert_eq!(config.max_events, 100);
    }

    #[test]
    fn config_rates_builder() {
        let decay = DecayRates {
            hunger: 2.0,
            ..DecayRates::default()
        };
        let config = SimConfig::default().with_decay(decay);
        assert!((config.decay.hunger - 2.0).abs() < f64::EPSILON);
        assert!((config.decay.happiness - 0.3).abs() < f64::EPSILON);
    }
}
