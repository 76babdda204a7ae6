//! Tick-based pet simulation for AetherPet.
//!
//! [`PetEngine`] is the single owner of a [`aether_core::PetState`]. It
//! applies care actions, advances game time one tick at a time, recomputes
//! the derived mood after every change, notifies subscribers, and hands the
//! state to a [`PetStore`] once onboarding is complete. [`PetRuntime`] wraps
//! an engine for live play and drives its tick from a `tokio` interval.

/// Care actions and their outcomes.
pub mod action;
/// Game clock and wall-clock time sources.
pub mod clock;
/// Configuration types for the engine and runtime.
pub mod config;
/// The pet simulation engine.
pub mod engine;
/// Error types for the simulation crate.
pub mod error;
/// Engine event types and the event log.
pub mod event;
/// Live runtime that owns the periodic tick task.
pub mod runtime;
/// Persistence adapters.
pub mod store;

/// Re-exports of [`action::Action`], [`action::ActionOutcome`], and [`action::IgnoredReason`].
pub use action::{Action, ActionOutcome, IgnoredReason};
/// Re-exports of the clock types.
pub use clock::{FixedTimeSource, GameClock, SystemTimeSource, TimeSource};
/// Re-exports of the configuration types.
pub use config::{ActionEffects, DEFAULT_MAX_EVENTS, DecayRates, SimConfig};
/// Re-exports of [`engine::PetEngine`] and [`engine::SubscriptionId`].
pub use engine::{PetEngine, SubscriptionId};
/// Re-exports of the error types.
pub use error::{SimError, SimResult, StoreError, StoreResult};
/// Re-exports of [`event::EventLog`], [`event::PetEvent`], and [`event::PetEventKind`].
pub use event::{EventLog, PetEvent, PetEventKind};
/// Re-exports of [`runtime::PetRuntime`] and [`runtime::PetHandle`].
pub use runtime::{PetHandle, PetRuntime};
/// Re-exports of the persistence adapters.
pub use store::{JsonFileStore, MemoryStore, PetStore, STORAGE_KEY};
