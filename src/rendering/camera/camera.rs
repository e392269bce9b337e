use bevy::prelude::*;

use crate::core::config::{rgb, BoingConfig};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, apply_clear_color);
    }
}

fn setup_camera(mut commands: Commands) {
    // 1 world unit == 1 logical pixel, origin at the window centre.
    commands.spawn(Camera2d);
}

fn apply_clear_color(cfg: Res<BoingConfig>, mut clear: ResMut<ClearColor>) {
    if !cfg.is_changed() {
        return;
    }
    clear.0 = rgb(cfg.window.clear_color);
}
