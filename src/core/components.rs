use bevy::prelude::*;

/// Marker for the visible ball entity (sphere mesh); its transform follows `BallState`.
#[derive(Component)]
pub struct Ball;

/// Outline ring drawn above the sphere patches.
#[derive(Component)]
pub struct BallOutline;

/// One line of the background grid. Despawned and rebuilt on resize.
#[derive(Component)]
pub struct GridLine;

/// A live playback of the bounce sound.
#[derive(Component)]
pub struct BounceCue;
