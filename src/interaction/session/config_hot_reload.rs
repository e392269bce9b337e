use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::{collections::HashMap, path::{Path, PathBuf}, time::{Duration, SystemTime, UNIX_EPOCH}};

use crate::core::cli::{load_with_layers, Cli};
use crate::core::config::{BoingConfig, DEFAULT_CONFIG_PATH, LOCAL_CONFIG_PATH};

/// Layers watched for changes plus the command line that is re-applied on top
/// of every reload.
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings { pub paths: Vec<PathBuf>, pub cli: Cli, pub interval_secs: f32 }
impl Default for ConfigReloadSettings { fn default() -> Self { Self { paths: vec![PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from(LOCAL_CONFIG_PATH)], cli: Cli::default(), interval_secs: 0.5 } } }

#[derive(Resource, Debug)]
struct ConfigReloadState { last_mod: HashMap<PathBuf, SystemTime>, timer: Timer }
impl FromWorld for ConfigReloadState {
    fn from_world(world: &mut World) -> Self {
        let settings = world.get_resource::<ConfigReloadSettings>().cloned().unwrap_or_default();
        // seed with current mtimes so startup does not count as a change
        let last_mod = settings.paths.iter().filter_map(|p| modified(p).map(|t| (p.clone(), t))).collect();
        Self { last_mod, timer: Timer::new(settings.poll_interval(), TimerMode::Repeating) }
    }
}

fn modified(path: &Path) -> Option<SystemTime> { std::fs::metadata(path).and_then(|m| m.modified()).ok() }

/// Re-applies window title, clear colour, grid and sound settings when a
/// watched layer changes. Ball geometry and kinematics are fixed at startup.
pub struct ConfigHotReloadPlugin;
impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConfigReloadSettings>().init_resource::<ConfigReloadState>().add_systems(Update, poll_and_reload_config);
    }
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<BoingConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !state.timer.tick(time.delta()).just_finished() { return; }
    let mut dirty = false;
    for path in &settings.paths {
        if let Some(mod_time) = modified(path) {
            let entry = state.last_mod.entry(path.clone()).or_insert(UNIX_EPOCH);
            if mod_time > *entry { *entry = mod_time; dirty = true; }
        }
    }
    if !dirty { return; }
    let loaded = load_with_layers(&settings.cli, settings.paths.clone());
    for w in &loaded.warnings { warn!("CONFIG HOT-RELOAD issue: {w}"); }
    let mut new_cfg = loaded.config;
    // keep startup-only sections as they are
    new_cfg.ball = cfg_res.ball.clone();
    new_cfg.tick = cfg_res.tick.clone();
    new_cfg.window.width = cfg_res.window.width;
    new_cfg.window.height = cfg_res.window.height;
    if *cfg_res == new_cfg { return; }
    info!("Config hot-reload applied");
    if let Ok(mut window) = windows.single_mut() {
        if window.title != new_cfg.window.title { window.title = new_cfg.window.title.clone(); }
    }
    *cfg_res = new_cfg;
}

impl ConfigReloadSettings {
    pub fn with_interval(mut self, secs: f32) -> Self { self.interval_secs = secs; self }
    pub fn poll_interval(&self) -> Duration { Duration::from_secs_f32(self.interval_secs.max(0.05)) }
}
