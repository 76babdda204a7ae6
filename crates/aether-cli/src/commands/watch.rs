use std::path::Path;
use std::time::Duration;

use aether_sim::{PetRuntime, SimConfig};

use crate::render;

pub fn run(dir: &Path, seconds: u64, interval_ms: u64) -> Result<(), String> {
    if interval_ms == 0 {
        return Err("--interval-ms must be at least 1".into());
    }

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| format!("failed to start runtime: {e}"))?;

    runtime.block_on(async {
        let config = SimConfig::default().with_tick_interval(Duration::from_millis(interval_ms));
        let engine = super::open_engine(dir, config);
        if engine.state().show_intro {
            return Err("No pet yet. Run `aetherpet hatch <name> <type>` first.".to_string());
        }

        println!("{}", render::status_line(engine.state()));

        let live = PetRuntime::start(engine).map_err(|e| e.to_string())?;
        let mut updates = live.watch();
        let deadline = tokio::time::sleep(Duration::from_secs(seconds));
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                changed = updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let state = updates.borrow_and_update().clone();
                    println!("{}", render::status_line(&state));
                }
                _ = &mut deadline => break,
            }
        }

        let handle = live.shutdown().await;
        let state = handle.snapshot();
        tracing::info!(game_time = state.game_time, "watch finished");
        Ok(())
    })
}
