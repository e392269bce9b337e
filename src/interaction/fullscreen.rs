use bevy::prelude::*;
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};

use super::inputmap::{InputActionUpdateSet, InputMap, TOGGLE_FULLSCREEN};

pub struct FullscreenTogglePlugin;

impl Plugin for FullscreenTogglePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, toggle_fullscreen.after(InputActionUpdateSet));
    }
}

pub fn next_window_mode(mode: WindowMode) -> WindowMode {
    match mode {
        WindowMode::Windowed => WindowMode::BorderlessFullscreen(MonitorSelection::Current),
        _ => WindowMode::Windowed,
    }
}

pub fn toggle_fullscreen(
    input_map: Res<InputMap>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !input_map.just_pressed(TOGGLE_FULLSCREEN) {
        return;
    }
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    window.mode = next_window_mode(window.mode);
    info!(mode = ?window.mode, "fullscreen toggled");
}
