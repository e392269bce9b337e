//! Debug module: periodic simulation stats logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
pub mod stats;

#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use crate::core::system::system_order::{BallTickSet, BounceCueSet};

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
pub struct DebugLogState {
    pub time_accum: f32,
    /// Seconds between summary lines.
    pub log_interval: f32,
}
#[cfg(feature = "debug")]
impl Default for DebugLogState {
    fn default() -> Self {
        Self { time_accum: 0.0, log_interval: 5.0 }
    }
}

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use logging::debug_logging_system;
        use stats::{debug_count_ticks, debug_stats_collect_system, DebugStats};

        app.init_resource::<DebugLogState>()
            .init_resource::<DebugStats>()
            .add_systems(FixedUpdate, debug_count_ticks.after(BallTickSet))
            .add_systems(
                Update,
                (debug_stats_collect_system, debug_logging_system)
                    .chain()
                    .after(BounceCueSet),
            );
    }
}
