// This file is part of Boing Ball.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::audio::BounceSoundPlugin;
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::interaction::fullscreen::FullscreenTogglePlugin;
use crate::interaction::inputmap::InputActionsPlugin;
use crate::interaction::session::{AutoClosePlugin, ConfigHotReloadPlugin};
use crate::physics::BallPhysicsPlugin;
use crate::rendering::background::background::BackgroundPlugin;
use crate::rendering::ball::ball::BallRenderPlugin;
use crate::rendering::camera::camera::CameraPlugin;

/// Problems found while resolving configuration before the app existed.
#[derive(Resource, Debug, Default, Clone)]
pub struct StartupDiagnostics {
    pub layers: String,
    pub warnings: Vec<String>,
}

/// Everything except the window/renderer/audio backends, which come from
/// `DefaultPlugins`. Expects a `BoingConfig` resource to be inserted first.
pub struct BoingPlugin;

impl Plugin for BoingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StartupDiagnostics>()
            .add_systems(Startup, report_startup_diagnostics)
            .add_plugins((
                BallPhysicsPlugin,
                CameraPlugin,
                BackgroundPlugin,
                BallRenderPlugin,
                BounceSoundPlugin,
                InputActionsPlugin,
                FullscreenTogglePlugin,
                ConfigHotReloadPlugin,
                AutoClosePlugin,
                #[cfg(feature = "debug")]
                DebugPlugin,
            ));
    }
}

fn report_startup_diagnostics(diag: Res<StartupDiagnostics>) {
    info!("config: {}", diag.layers);
    for w in &diag.warnings {
        warn!("CONFIG: {w}");
    }
}
