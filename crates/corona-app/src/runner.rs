//! Headless tick loop.

use std::path::Path;
use std::time::Instant;

use corona_common::CoronaError;
use corona_config::schema::PerformanceConfig;
use corona_scene::{FrameSnapshot, FrameTimer, Scene};
use tracing::{info, warn};

/// Run `frames` fixed-step ticks, timing each update against the frame
/// budget. With `realtime`, sleeps out the rest of each frame.
pub fn run(scene: &mut Scene, frames: u64, perf: &PerformanceConfig, realtime: bool) -> FrameTimer {
    let budget = perf.frame_budget();
    let mut timer = FrameTimer::new(budget);

    for _ in 0..frames {
        let start = Instant::now();
        let t = scene.tick();
        let dt = start.elapsed();

        // Only the first overrun is reported individually; the total is
        // logged in the summary.
        if timer.record(dt) && perf.warn_on_overrun && timer.overruns() == 1 {
            warn!(
                elapsed = t,
                update_ms = dt.as_secs_f64() * 1000.0,
                budget_ms = budget.as_secs_f64() * 1000.0,
                "scene update overran frame budget"
            );
        }

        if realtime {
            if let Some(rest) = budget.checked_sub(dt) {
                std::thread::sleep(rest);
            }
        }
    }

    let stats = timer.stats();
    info!(
        frames,
        elapsed = scene.elapsed(),
        vertices = scene.rings().vertex_count(),
        mean_ms = stats.mean_ms,
        worst_ms = stats.worst_ms,
        fps = stats.fps,
        overruns = stats.overruns,
        "run complete"
    );
    timer
}

/// Write a frame snapshot as pretty JSON.
pub fn write_snapshot(path: &Path, snapshot: &FrameSnapshot) -> Result<(), CoronaError> {
    let json =
        serde_json::to_string_pretty(snapshot).map_err(|e| CoronaError::Serialize(e.to_string()))?;
    std::fs::write(path, json)?;
    info!("wrote snapshot to {}", path.display());
    Ok(())
}
