//! Core types for AetherPet: the pet state aggregate, its stat gauges, and
//! the mood derivation.
//!
//! This crate holds no behavior over time. The simulation engine in
//! `aether-sim` owns a [`PetState`] and is the only thing that mutates it;
//! everything here is plain data plus pure functions over it.

/// Error types used throughout the crate.
pub mod error;
/// Mood derivation from stat gauges and sleep state.
pub mod mood;
/// Pet identity enums: stage, elemental type, and mood.
pub mod pet;
/// The pet state aggregate and its partial form used when loading saves.
pub mod state;
/// The four bounded stat gauges.
pub mod stats;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the mood derivation.
pub use mood::derive_mood;
/// Re-export pet identity enums.
pub use pet::{PetMood, PetStage, PetType};
/// Re-export state types.
pub use state::{
    Interaction, LastInteraction, LenientDecode, MINUTES_PER_DAY, PartialState, PetState,
};
/// Re-export stat types.
pub use stats::{StatKind, StatLevel, Stats};
