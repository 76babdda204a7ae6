use aether_core::{Interaction, PetType};

/// A state transition the presentation layer can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Set the display name verbatim.
    SetPetName(String),
    /// Choose the elemental type. Hatches the egg when a real type is chosen.
    SetPetType(PetType),
    /// Restore hunger. Ignored while asleep.
    Feed,
    /// Raise happiness at the cost of energy. Ignored while asleep.
    Play,
    /// Restore hygiene. Ignored while asleep.
    Clean,
    /// Fall asleep or wake up.
    ToggleSleep,
    /// Finish onboarding and start persisting.
    CompleteIntro,
}

impl Action {
    /// The interaction timestamp this action records, if any.
    pub fn interaction(&self) -> Option<Interaction> {
        match self {
            Self::Feed => Some(Interaction::Feed),
            Self::Play => Some(Interaction::Play),
            Self::Clean => Some(Interaction::Clean),
            Self::ToggleSleep => Some(Interaction::Sleep),
            Self::SetPetName(_) | Self::SetPetType(_) | Self::CompleteIntro => None,
        }
    }

    /// Whether a sleeping pet refuses this action.
    pub fn needs_awake(&self) -> bool {
        matches!(self, Self::Feed | Self::Play | Self::Clean)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SetPetName(name) => write!(f, "set name \"{name}\""),
            Self::SetPetType(ty) => write!(f, "set type {ty}"),
            Self::Feed => write!(f, "feed"),
            Self::Play => write!(f, "play"),
            Self::Clean => write!(f, "clean"),
            Self::ToggleSleep => write!(f, "toggle sleep"),
            Self::CompleteIntro => write!(f, "complete intro"),
        }
    }
}

/// Why an action left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// The pet is asleep.
    Asleep,
}

impl std::fmt::Display for IgnoredReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asleep => write!(f, "pet is asleep"),
        }
    }
}

/// What happened when an action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The state changed.
    Applied,
    /// Nothing changed; nothing was saved or notified.
    Ignored(IgnoredReason),
}

impl ActionOutcome {
    /// Whether the action changed the state.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}
