use std::sync::Arc;

use aether_core::{PartialState, PetMood, PetStage, PetState, PetType, StatKind};

use crate::action::{Action, ActionOutcome, IgnoredReason};
use crate::clock::{GameClock, SystemTimeSource, TimeSource};
use crate::config::SimConfig;
use crate::event::{EventLog, PetEvent, PetEventKind};
use crate::store::PetStore;

/// Identifies a state subscriber so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&PetState) + Send>;

/// The single owner of a pet's state.
///
/// Every change goes through [`PetEngine::apply`] or [`PetEngine::tick`].
/// After each applied change the engine recomputes the mood, saves the state
/// (unless onboarding is still showing), and calls every subscriber with the
/// new state, in that order.
pub struct PetEngine {
    state: PetState,
    config: SimConfig,
    store: Arc<dyn PetStore>,
    time: Arc<dyn TimeSource>,
    events: EventLog,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl std::fmt::Debug for PetEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PetEngine")
            .field("game_time", &self.state.game_time)
            .field("mood", &self.state.mood)
            .field("subscribers", &self.subscribers.len())
            .field("events", &self.events.len())
            .finish()
    }
}

impl PetEngine {
    /// Create an engine holding the default state.
    pub fn new(config: SimConfig, store: Arc<dyn PetStore>, time: Arc<dyn TimeSource>) -> Self {
        let events = EventLog::new(config.max_events);
        Self {
            state: PetState::default(),
            config,
            store,
            time,
            events,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create an engine and initialize it from whatever `store` holds.
    pub fn load(config: SimConfig, store: Arc<dyn PetStore>, time: Arc<dyn TimeSource>) -> Self {
        let loaded = store.load();
        let mut engine = Self::new(config, store, time);
        engine.initialize(loaded);
        engine
    }

    /// Create an engine backed by `store`, stamping interactions with the system clock.
    pub fn with_store(store: Arc<dyn PetStore>) -> Self {
        Self::load(SimConfig::default(), store, Arc::new(SystemTimeSource))
    }

    /// Merge a loaded state over the current one, field by field.
    ///
    /// Loaded gauges are clamped into range and the mood is recomputed.
    /// `None` leaves the state untouched.
    pub fn initialize(&mut self, loaded: Option<PartialState>) {
        let Some(partial) = loaded else {
            tracing::debug!("no saved state, starting fresh");
            return;
        };
        self.state.apply_partial(partial);
        self.state.stats = self.state.stats.clamped();
        tracing::info!(
            name = %self.state.pet_name,
            stage = %self.state.pet_stage,
            game_time = self.state.game_time,
            "restored saved pet"
        );
        self.commit();
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Apply an action. Care actions on a sleeping pet are ignored.
    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        if action.needs_awake() && self.state.is_sleeping {
            tracing::debug!(%action, "ignored, pet is asleep");
            let reason = IgnoredReason::Asleep;
            self.emit(
                PetEventKind::ActionIgnored {
                    action: action.clone(),
                    reason,
                },
                format!("{action} ignored: {reason}"),
            );
            return ActionOutcome::Ignored(reason);
        }

        let effects = self.config.effects.clone();
        match &action {
            Action::SetPetName(name) => self.state.pet_name = name.clone(),
            Action::SetPetType(pet_type) => self.assign_type(*pet_type),
            Action::Feed => self
                .state
                .stats
                .raise(StatKind::Hunger, effects.feed_hunger),
            Action::Play => {
                let stats = &mut self.state.stats;
                stats.raise(StatKind::Happiness, effects.play_happiness);
                stats.lower(
                    StatKind::Energy,
                    effects.play_energy_cost,
                    effects.play_energy_floor,
                );
            }
            Action::Clean => self
                .state
                .stats
                .raise(StatKind::Hygiene, effects.clean_hygiene),
            Action::ToggleSleep => {
                if self.state.is_sleeping {
                    self.state.is_sleeping = false;
                } else {
                    self.state.is_sleeping = true;
                    self.state
                        .stats
                        .raise(StatKind::Energy, effects.sleep_energy_boost);
                }
            }
            Action::CompleteIntro => {
                self.state.show_intro = false;
                tracing::info!(name = %self.state.pet_name, "onboarding complete");
                self.emit(PetEventKind::IntroCompleted, "onboarding complete");
            }
        }

        if let Some(interaction) = action.interaction() {
            let now = self.time.now();
            self.state.last_interaction.record(interaction, now);
        }

        tracing::debug!(%action, "action applied");
        self.emit(
            PetEventKind::ActionApplied {
                action: action.clone(),
            },
            action.to_string(),
        );
        self.commit();
        ActionOutcome::Applied
    }

    /// Set the display name verbatim.
    pub fn set_pet_name(&mut self, name: impl Into<String>) -> ActionOutcome {
        self.apply(Action::SetPetName(name.into()))
    }

    /// Set the elemental type; hatches an egg when a real type is chosen.
    ///
    /// `PetType::None` is recorded but does not hatch the egg.
    pub fn set_pet_type(&mut self, pet_type: PetType) -> ActionOutcome {
        self.apply(Action::SetPetType(pet_type))
    }

    /// Feed the pet.
    pub fn feed(&mut self) -> ActionOutcome {
        self.apply(Action::Feed)
    }

    /// Play with the pet.
    pub fn play(&mut self) -> ActionOutcome {
        self.apply(Action::Play)
    }

    /// Clean the pet.
    pub fn clean(&mut self) -> ActionOutcome {
        self.apply(Action::Clean)
    }

    /// Put the pet to sleep or wake it up.
    pub fn toggle_sleep(&mut self) -> ActionOutcome {
        self.apply(Action::ToggleSleep)
    }

    /// Finish onboarding. Every later change is saved.
    pub fn complete_intro(&mut self) -> ActionOutcome {
        self.apply(Action::CompleteIntro)
    }

    fn assign_type(&mut self, pet_type: PetType) {
        self.state.pet_type = pet_type;
        if !pet_type.is_chosen() {
            return;
        }
        if self.state.pet_stage == PetStage::Egg {
            tracing::info!(%pet_type, "egg hatched");
            self.emit(
                PetEventKind::Hatched { pet_type },
                format!("a {pet_type} pet hatched"),
            );
        }
        self.state.pet_stage = PetStage::Baby;
    }

    // -----------------------------------------------------------------------
    // Time
    // -----------------------------------------------------------------------

    /// Advance game time by one minute and apply decay.
    ///
    /// Returns `false` if the tick was skipped because onboarding is showing
    /// and [`SimConfig::tick_during_intro`] is off.
    pub fn tick(&mut self) -> bool {
        if self.state.show_intro && !self.config.tick_during_intro {
            return false;
        }

        let mut clock = GameClock::new(self.state.game_time);
        let new_day = clock.advance();
        self.state.game_time = clock.minutes();
        if new_day {
            self.state.pet_age = self.state.pet_age.saturating_add(1);
            let age = self.state.pet_age;
            tracing::info!(age, "a day has passed");
            self.emit(
                PetEventKind::Birthday { age },
                format!("{} is now {age} day(s) old", self.display_name()),
            );
        }

        let decay = &self.config.decay;
        let sleeping = self.state.is_sleeping;
        let factor = if sleeping { decay.sleep_multiplier } else { 1.0 };
        let stats = &mut self.state.stats;
        stats.lower(StatKind::Hunger, decay.hunger * factor, 0.0);
        stats.lower(StatKind::Happiness, decay.happiness * factor, 0.0);
        stats.lower(StatKind::Hygiene, decay.hygiene * factor, 0.0);
        if sleeping {
            stats.raise(StatKind::Energy, decay.energy);
        } else {
            stats.lower(StatKind::Energy, decay.energy, 0.0);
        }

        tracing::trace!(game_time = self.state.game_time, "tick");
        self.commit();
        true
    }

    /// Apply `n` ticks. Returns how many were not skipped.
    pub fn run(&mut self, n: u64) -> u64 {
        (0..n).filter(|_| self.tick()).count() as u64
    }

    // -----------------------------------------------------------------------
    // Derived state, persistence, subscribers
    // -----------------------------------------------------------------------

    /// Recompute the mood from the current gauges and sleep state.
    pub fn recompute_mood(&mut self) -> PetMood {
        if let Some(from) = self.state.recompute_mood() {
            let to = self.state.mood;
            self.emit(
                PetEventKind::MoodChanged { from, to },
                format!("{} feels {to}", self.display_name()),
            );
        }
        self.state.mood
    }

    fn commit(&mut self) {
        self.recompute_mood();
        if !self.state.show_intro {
            self.store.save(&self.state);
        }
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
    }

    /// Call `f` with the new state after every applied change.
    pub fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: FnMut(&PetState) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn emit(&mut self, kind: PetEventKind, description: impl Into<String>) {
        self.events
            .push(PetEvent::new(self.state.game_time, kind, description));
    }

    fn display_name(&self) -> &str {
        if self.state.pet_name.is_empty() {
            "your pet"
        } else {
            &self.state.pet_name
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Borrow the current state.
    pub fn state(&self) -> &PetState {
        &self.state
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> PetState {
        self.state.clone()
    }

    /// The game clock at the current time.
    pub fn clock(&self) -> GameClock {
        GameClock::new(self.state.game_time)
    }

    /// The engine's configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Events recorded so far.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// The persistence adapter, for callers that need to reset the save.
    pub fn store(&self) -> &Arc<dyn PetStore> {
        &self.store
    }
}
