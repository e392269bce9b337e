use bevy::prelude::*;
use bevy::sprite::MeshMaterial2d;

use super::mesh::{checkered_sphere_mesh, sphere_depth};
use crate::core::components::{Ball, BallOutline};
use crate::core::config::{rgb, BoingConfig};
use crate::core::system::system_order::BallSyncSet;
use crate::physics::BallState;
use crate::rendering::window_to_world;

/// Keeps the ball above the grid.
pub const BALL_Z: f32 = 10.0;

pub struct BallRenderPlugin;

impl Plugin for BallRenderPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, BallSyncSet)
            .add_systems(Startup, spawn_ball)
            .add_systems(Update, sync_ball_transform.in_set(BallSyncSet));
    }
}

fn spawn_ball(
    mut commands: Commands,
    cfg: Res<BoingConfig>,
    ball: Res<BallState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let b = &cfg.ball;
    let sphere = meshes.add(checkered_sphere_mesh(
        ball.radius,
        b.segments,
        rgb(b.primary_color),
        rgb(b.secondary_color),
    ));
    // white so the vertex colours come through unchanged
    let sphere_material = materials.add(Color::WHITE);
    let half = (b.outline_width * 0.5).max(0.0);
    let ring = meshes.add(Annulus::new((ball.radius - half).max(0.0), ball.radius + half));
    let ring_material = materials.add(rgb(b.outline_color));

    let center = window_to_world(ball.position, ball.bounds);
    commands
        .spawn((
            Mesh2d(sphere),
            MeshMaterial2d(sphere_material),
            Transform::from_translation(center.extend(BALL_Z)),
            Ball,
            Name::new("Ball"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh2d(ring),
                MeshMaterial2d(ring_material),
                Transform::from_xyz(0.0, 0.0, sphere_depth(b.segments) + 0.01),
                BallOutline,
            ));
        });
    info!(radius = ball.radius, segments = b.segments, "ball spawned");
}

pub fn sync_ball_transform(ball: Res<BallState>, mut q: Query<&mut Transform, With<Ball>>) {
    let center = window_to_world(ball.position, ball.bounds);
    for mut t in q.iter_mut() {
        t.translation = center.extend(BALL_Z);
    }
}
