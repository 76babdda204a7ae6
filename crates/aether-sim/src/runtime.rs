//! Live play: an engine behind a shared handle, ticked by a background task.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use aether_core::{PetState, PetType};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::interval;

use crate::action::{Action, ActionOutcome};
use crate::engine::PetEngine;
use crate::error::{SimError, SimResult};

/// Cloneable access to a shared engine.
///
/// Each call holds the engine lock for one whole transition, so actions and
/// ticks never interleave.
#[derive(Debug, Clone)]
pub struct PetHandle {
    engine: Arc<Mutex<PetEngine>>,
}

impl PetHandle {
    /// Wrap an engine for shared use.
    pub fn new(engine: PetEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PetEngine> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut PetEngine) -> R) -> R {
        f(&mut self.lock())
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> PetState {
        self.lock().snapshot()
    }

    /// Apply an action.
    pub fn apply(&self, action: Action) -> ActionOutcome {
        self.lock().apply(action)
    }

    /// Advance one tick.
    pub fn tick(&self) -> bool {
        self.lock().tick()
    }

    /// See [`PetEngine::feed`].
    pub fn feed(&self) -> ActionOutcome {
        self.apply(Action::Feed)
    }

    /// See [`PetEngine::play`].
    pub fn play(&self) -> ActionOutcome {
        self.apply(Action::Play)
    }

    /// See [`PetEngine::clean`].
    pub fn clean(&self) -> ActionOutcome {
        self.apply(Action::Clean)
    }

    /// See [`PetEngine::toggle_sleep`].
    pub fn toggle_sleep(&self) -> ActionOutcome {
        self.apply(Action::ToggleSleep)
    }

    /// See [`PetEngine::set_pet_name`].
    pub fn set_pet_name(&self, name: impl Into<String>) -> ActionOutcome {
        self.apply(Action::SetPetName(name.into()))
    }

    /// See [`PetEngine::set_pet_type`].
    pub fn set_pet_type(&self, pet_type: PetType) -> ActionOutcome {
        self.apply(Action::SetPetType(pet_type))
    }

    /// See [`PetEngine::complete_intro`].
    pub fn complete_intro(&self) -> ActionOutcome {
        self.apply(Action::CompleteIntro)
    }
}

/// An engine whose clock runs on its own.
///
/// Starting the runtime spawns a task that ticks the engine once per
/// [`crate::SimConfig::tick_interval`]. The task stops on
/// [`PetRuntime::shutdown`] or when the runtime is dropped.
#[derive(Debug)]
pub struct PetRuntime {
    handle: PetHandle,
    updates: watch::Receiver<PetState>,
    ticker: Option<JoinHandle<()>>,
}

impl PetRuntime {
    /// Take ownership of `engine` and start ticking it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(mut engine: PetEngine) -> SimResult<Self> {
        let rt = tokio::runtime::Handle::try_current().map_err(|_| SimError::NoRuntime)?;

        let (tx, updates) = watch::channel(engine.snapshot());
        engine.subscribe(move |state| {
            tx.send_replace(state.clone());
        });

        let period = engine
            .config()
            .tick_interval
            .max(Duration::from_millis(1));
        let handle = PetHandle::new(engine);
        let ticker = rt.spawn(run_clock(handle.clone(), period));

        Ok(Self {
            handle,
            updates,
            ticker: Some(ticker),
        })
    }

    /// A handle for dispatching actions and reading snapshots.
    pub fn handle(&self) -> PetHandle {
        self.handle.clone()
    }

    /// A receiver that sees every state the engine publishes.
    pub fn watch(&self) -> watch::Receiver<PetState> {
        self.updates.clone()
    }

    /// Whether the tick task is still alive.
    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop the tick task and wait for it to finish. The handle stays usable.
    pub async fn shutdown(mut self) -> PetHandle {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            let _ = ticker.await;
            tracing::info!("game clock stopped");
        }
        self.handle.clone()
    }
}

impl Drop for PetRuntime {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

async fn run_clock(handle: PetHandle, period: Duration) {
    tracing::info!("game clock started (interval: {:?})", period);

    let mut ticker = interval(period);

    // Skip the first immediate tick
    ticker.tick().await;

    loop {
        ticker.tick().await;
        // A tick may write the save file; keep it off the async workers.
        let engine = handle.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || engine.tick()).await {
            tracing::error!("game clock tick failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemTimeSource;
    use crate::config::SimConfig;
    use crate::store::{JsonFileStore, MemoryStore, PetStore};

    fn engine() -> PetEngine {
        PetEngine::new(
            SimConfig::default(),
            Arc::new(MemoryStore::new()),
            Arc::new(SystemTimeSource),
        )
    }

    #[test]
    fn start_outside_runtime_fails() {
        let err = PetRuntime::start(engine()).unwrap_err();
        assert!(matches!(err, SimError::NoRuntime));
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_interval() {
        let runtime = PetRuntime::start(engine()).unwrap();
        assert!(runtime.is_running());

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(runtime.handle().snapshot().game_time, 3);

        let handle = runtime.shutdown().await;
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(handle.snapshot().game_time, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn watch_sees_actions() {
        let runtime = PetRuntime::start(engine()).unwrap();
        let mut updates = runtime.watch();
        let handle = runtime.handle();

        handle.set_pet_name("Pip");
        updates.changed().await.unwrap();
        assert_eq!(updates.borrow_and_update().pet_name, "Pip");
    }

    #[tokio::test(start_paused = true)]
    async fn live_ticks_reach_the_save_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::new(dir.path()));
        let mut engine = PetEngine::new(
            SimConfig::default(),
            store.clone(),
            Arc::new(SystemTimeSource),
        );
        engine.complete_intro();

        let runtime = PetRuntime::start(engine).unwrap();
        tokio::time::sleep(Duration::from_millis(2500)).await;
        runtime.shutdown().await;

        let saved = store.load().unwrap();
        assert_eq!(saved.game_time, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_runtime_stops_clock() {
        let runtime = PetRuntime::start(engine()).unwrap();
        let handle = runtime.handle();
        drop(runtime);
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(handle.snapshot().game_time, 0);
    }
}
