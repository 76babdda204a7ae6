use std::path::Path;

use aether_sim::{Action, ActionOutcome, IgnoredReason};
use colored::Colorize;

/// Care commands offered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Care {
    Feed,
    Play,
    Clean,
    Sleep,
}

impl Care {
    fn action(self) -> Action {
        match self {
            Self::Feed => Action::Feed,
            Self::Play => Action::Play,
            Self::Clean => Action::Clean,
            Self::Sleep => Action::ToggleSleep,
        }
    }
}

/// The toast shown after a care action went through.
fn applied_message(care: Care, now_sleeping: bool) -> &'static str {
    match care {
        Care::Feed => "You fed your pet!",
        Care::Play => "Your pet enjoyed playtime!",
        Care::Clean => "Your pet is now clean!",
        Care::Sleep if now_sleeping => "Your pet is now sleeping peacefully...",
        Care::Sleep => "Your pet woke up!",
    }
}

fn ignored_message(reason: IgnoredReason) -> &'static str {
    match reason {
        IgnoredReason::Asleep => "Your pet is sleeping! Wake them up first.",
    }
}

pub fn run(dir: &Path, care: Care) -> Result<(), String> {
    let mut engine = super::open_hatched(dir)?;

    match engine.apply(care.action()) {
        ActionOutcome::Applied => {
            let state = engine.state();
            println!("  {}", applied_message(care, state.is_sleeping).green());
            println!("  {}", format!("Mood: {}", state.mood).dimmed());
            Ok(())
        }
        ActionOutcome::Ignored(reason) => Err(ignored_message(reason).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_message_depends_on_direction() {
        assert_eq!(
            applied_message(Care::Sleep, true),
            "Your pet is now sleeping peacefully..."
        );
        assert_eq!(applied_message(Care::Sleep, false), "Your pet woke up!");
    }

    #[test]
    fn care_maps_to_engine_actions() {
        assert_eq!(Care::Sleep.action(), Action::ToggleSleep);
        assert_eq!(Care::Feed.action(), Action::Feed);
    }
}
