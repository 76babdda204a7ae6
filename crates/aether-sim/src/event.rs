use std::collections::VecDeque;

use aether_core::{PetMood, PetType};

use crate::action::{Action, IgnoredReason};

/// What kind of engine event occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetEventKind {
    /// A care or onboarding action changed the state.
    ActionApplied {
        /// The action.
        action: Action,
    },
    /// An action was refused and left the state untouched.
    ActionIgnored {
        /// The action.
        action: Action,
        /// Why it was refused.
        reason: IgnoredReason,
    },
    /// The egg hatched.
    Hatched {
        /// The chosen type.
        pet_type: PetType,
    },
    /// The derived mood changed.
    MoodChanged {
        /// Mood before the change.
        from: PetMood,
        /// Mood after the change.
        to: PetMood,
    },
    /// A full day of game time passed.
    Birthday {
        /// Age in days after the increment.
        age: u64,
    },
    /// Onboarding finished; state is now persisted.
    IntroCompleted,
}

/// A record of something that happened to the pet.
#[derive(Debug, Clone)]
pub struct PetEvent {
    /// Game minute when this event occurred.
    pub game_time: u64,
    /// The specific kind of event.
    pub kind: PetEventKind,
    /// A human-readable description.
    pub description: String,
}

impl PetEvent {
    /// Create a new event.
    pub fn new(game_time: u64, kind: PetEventKind, description: impl Into<String>) -> Self {
        Self {
            game_time,
            kind,
            description: description.into(),
        }
    }
}

/// Recent history of the pet, oldest first.
///
/// Holds at most `capacity` events; pushing past it forgets the oldest.
/// A capacity of 0 keeps everything.
#[derive(Debug, Default)]
pub struct EventLog {
    events: VecDeque<PetEvent>,
    capacity: usize,
}

impl EventLog {
    /// An empty log holding at most `capacity` events (0 = unbounded).
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::new(),
            capacity,
        }
    }

    /// Record an event, forgetting the oldest one if the log is full.
    pub fn push(&mut self, event: PetEvent) {
        if self.capacity > 0 && self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Every retained event, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &PetEvent> {
        self.events.iter()
    }

    /// Events recorded after game minute `game_time`.
    ///
    /// Events raised by a tick carry the minute the tick moved to, so
    /// `since(start)` yields exactly what a run of ticks from `start` produced.
    pub fn since(&self, game_time: u64) -> impl Iterator<Item = &PetEvent> {
        self.events.iter().filter(move |e| e.game_time > game_time)
    }

    /// The latest event.
    pub fn last(&self) -> Option<&PetEvent> {
        self.events.back()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
