pub mod background;
pub mod ball;
pub mod camera;

use bevy::prelude::*;

/// Window coordinates (origin top-left, y down) to 2D world coordinates
/// (origin at the window centre, y up).
pub fn window_to_world(pos: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(pos.x - bounds.x * 0.5, bounds.y * 0.5 - pos.y)
}
