use crate::pet::PetMood;
use crate::stats::Stats;

/// A gauge below this reads as a need.
pub const NEED_THRESHOLD: f64 = 30.0;
/// Every gauge above this reads as happy.
pub const HAPPY_THRESHOLD: f64 = 70.0;

/// Derive the pet's mood from its gauges and sleep state.
///
/// Rules are checked in order and the first match wins: sleeping, hunger,
/// energy, hygiene, happiness, then all-high. [`PetMood::Sick`] is never
/// returned.
pub fn derive_mood(stats: &Stats, is_sleeping: bool) -> PetMood {
    if is_sleeping {
        return PetMood::Neutral;
    }

    if stats.hunger < NEED_THRESHOLD {
        return PetMood::Hungry;
    }
    if stats.energy < NEED_THRESHOLD {
        return PetMood::Tired;
    }
    if stats.hygiene < NEED_THRESHOLD {
        return PetMood::Dirty;
    }
    if stats.happiness < NEED_THRESHOLD {
        return PetMood::Sad;
    }

    let all_high = stats.hunger > HAPPY_THRESHOLD
        && stats.happiness > HAPPY_THRESHOLD
        && stats.energy > HAPPY_THRESHOLD
        && stats.hygiene > HAPPY_THRESHOLD;
    if all_high {
        PetMood::Happy
    } else {
        PetMood::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(hunger: f64, happiness: f64, energy: f64, hygiene: f64) -> Stats {
        Stats {
            hunger,
            happiness,
            energy,
            hygiene,
        }
    }

    #[test]
    fn sleeping_is_always_neutral() {
        assert_eq!(derive_mood(&stats(0.0, 0.0, 0.0, 0.0), true), PetMood::Neutral);
        assert_eq!(derive_mood(&stats(100.0, 100.0, 100.0, 100.0), true), PetMood::Neutral);
    }

    #[test]
    fn hunger_wins_over_energy() {
        assert_eq!(derive_mood(&stats(20.0, 70.0, 20.0, 70.0), false), PetMood::Hungry);
    }

    #[test]
    fn priority_chain() {
        assert_eq!(derive_mood(&stats(50.0, 10.0, 10.0, 10.0), false), PetMood::Tired);
        assert_eq!(derive_mood(&stats(50.0, 10.0, 50.0, 10.0), false), PetMood::Dirty);
        assert_eq!(derive_mood(&stats(50.0, 10.0, 50.0, 50.0), false), PetMood::Sad);
    }

    #[test]
    fn happy_needs_all_strictly_above_seventy() {
        assert_eq!(derive_mood(&stats(71.0, 71.0, 71.0, 71.0), false), PetMood::Happy);
        assert_eq!(derive_mood(&stats(71.0, 70.0, 71.0, 71.0), false), PetMood::Neutral);
    }

    #[test]
    fn defaults_are_neutral() {
        assert_eq!(derive_mood(&Stats::default(), false), PetMood::Neutral);
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(derive_mood(&stats(30.0, 30.0, 30.0, 30.0), false), PetMood::Neutral);
    }

    #[test]
    fn never_sick() {
        for h in [0.0, 29.9, 30.0, 70.0, 70.1, 100.0] {
            for e in [0.0, 29.9, 30.0, 70.1, 100.0] {
                for sleeping in [false, true] {
                    let mood = derive_mood(&stats(h, e, h, e), sleeping);
                    assert_ne!(mood, PetMood::Sick);
                }
            }
        }
    }
}
