use std::time::Duration;

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use super::bounce::{BallState, BounceAxes};
use crate::core::config::BoingConfig;
use crate::core::system::system_order::BallTickSet;

/// Written once for every tick in which the ball reflected off at least one edge.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct BallBounced {
    pub axes: BounceAxes,
    pub position: Vec2,
}

pub struct BallPhysicsPlugin;

impl Plugin for BallPhysicsPlugin {
    fn build(&self, app: &mut App) {
        let interval_ms = app
            .world()
            .get_resource::<BoingConfig>()
            .map(|cfg| cfg.tick.interval_ms)
            .unwrap_or(16)
            .max(1);
        app.insert_resource(Time::<Fixed>::from_duration(Duration::from_millis(interval_ms)))
            .init_resource::<BallState>()
            .add_event::<BallBounced>()
            .configure_sets(FixedUpdate, BallTickSet)
            .add_systems(Startup, sync_bounds_from_primary_window)
            .add_systems(FixedUpdate, advance_ball.in_set(BallTickSet))
            .add_systems(PreUpdate, handle_window_resized);
    }
}

pub fn advance_ball(mut ball: ResMut<BallState>, mut bounced: EventWriter<BallBounced>) {
    if let Some(axes) = ball.tick() {
        bounced.write(BallBounced {
            axes,
            position: ball.position,
        });
    }
}

/// Only the latest size matters; intermediate sizes from a drag are skipped.
pub fn handle_window_resized(mut events: EventReader<WindowResized>, mut ball: ResMut<BallState>) {
    let Some(last) = events.read().last() else {
        return;
    };
    ball.resize(last.width, last.height);
    debug!(width = last.width, height = last.height, "ball bounds resized");
}

/// The window may not come up at the requested size (scale factor, tiling
/// window managers), so adopt whatever the primary window actually reports.
pub fn sync_bounds_from_primary_window(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut ball: ResMut<BallState>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if size != ball.bounds {
        info!("window opened at {}x{}", size.x, size.y);
        ball.resize(size.x, size.y);
    }
}
