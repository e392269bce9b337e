use bevy::prelude::*;

use crate::audio::BounceSound;
use crate::physics::BallBounced;

#[derive(Resource, Debug, Default, Clone)]
pub struct DebugStats {
    pub frame_counter: u64,
    pub fps: f32,
    pub frame_time_ms: f32,
    pub ticks: u64,
    pub bounces: u64,
    pub cues: u64,
    pub silent_bounces: u64,
}

pub fn debug_count_ticks(mut stats: ResMut<DebugStats>) {
    stats.ticks += 1;
}

pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut stats: ResMut<DebugStats>,
    mut bounced: EventReader<BallBounced>,
    sound: Option<Res<BounceSound>>,
) {
    stats.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    let inst_ms = dt * 1000.0;
    // exponential smoothing, seeded by the first sample
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
        stats.frame_time_ms = inst_ms;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    stats.bounces += bounced.read().count() as u64;
    if let Some(sound) = sound {
        stats.cues = sound.cues_played;
        stats.silent_bounces = sound.silent_bounces;
    }
}
