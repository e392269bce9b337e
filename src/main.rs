use anyhow::Result;
use bevy::prelude::*;
use bevy::window::{MonitorSelection, WindowMode, WindowResizeConstraints};
use clap::Parser;

use boing_ball::core::cli::describe_layers;
use boing_ball::core::config::rgb;
use boing_ball::interaction::session::ConfigReloadSettings;
use boing_ball::{BoingPlugin, Cli, StartupDiagnostics};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = cli.load()?;
    let cfg = loaded.config;
    let min_side = (cfg.ball.radius * 2.0).max(1.0);
    let mode = if cfg.window.fullscreen {
        WindowMode::BorderlessFullscreen(MonitorSelection::Current)
    } else {
        WindowMode::Windowed
    };

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(ClearColor(rgb(cfg.window.clear_color)))
        .insert_resource(StartupDiagnostics {
            layers: describe_layers(&loaded.used),
            warnings: loaded.warnings,
        })
        .insert_resource(ConfigReloadSettings {
            paths: loaded.layers,
            cli,
            ..default()
        })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                mode,
                resize_constraints: WindowResizeConstraints {
                    min_width: min_side,
                    min_height: min_side,
                    ..default()
                },
                ..default()
            }),
            ..default()
        }))
        .add_plugins(BoingPlugin)
        .run();
    Ok(())
}
