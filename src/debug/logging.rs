use bevy::prelude::*;

use super::stats::DebugStats;
use super::DebugLogState;
use crate::physics::BallState;

pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugLogState>,
    stats: Res<DebugStats>,
    ball: Res<BallState>,
) {
    state.time_accum += time.delta_secs();
    if state.time_accum < state.log_interval {
        return;
    }
    state.time_accum = 0.0;
    info!(
        "SIM frame={} t={:.3}s fps={:.1} ft_ms={:.1} ticks={} bounces={} cues={} silent={} pos=({:.1},{:.1}) vel=({:.1},{:.1})",
        stats.frame_counter,
        time.elapsed_secs(),
        stats.fps,
        stats.frame_time_ms,
        stats.ticks,
        stats.bounces,
        stats.cues,
        stats.silent_bounces,
        ball.position.x,
        ball.position.y,
        ball.velocity.x,
        ball.velocity.y
    );
}
