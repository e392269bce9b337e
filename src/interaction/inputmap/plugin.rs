use bevy::prelude::*;

use super::parse::parse_input_toml;
use super::systems::system_evaluate_bindings;
use super::types::InputMap;

pub const DEFAULT_INPUT_CONFIG_PATH: &str = "assets/config/input.toml";

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputActionUpdateSet;

pub struct InputActionsPlugin;
impl Plugin for InputActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputMap>()
            .configure_sets(PreUpdate, InputActionUpdateSet)
            .add_systems(PreStartup, load_initial_input_map)
            .add_systems(PreUpdate, system_evaluate_bindings.in_set(InputActionUpdateSet));
    }
}

pub fn input_config_path() -> String {
    std::env::var("INPUT_CONFIG_PATH").unwrap_or_else(|_| DEFAULT_INPUT_CONFIG_PATH.into())
}

/// Missing file -> built-in map. A file that parses to nothing usable also
/// falls back so F11 keeps working.
pub fn load_input_map(path: &str) -> InputMap {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            info!("input map {path} unavailable ({e}); using built-in bindings");
            return InputMap::builtin();
        }
    };
    let parsed = parse_input_toml(&raw);
    for e in &parsed.errors {
        error!("INPUT MAP ERROR: {e}");
    }
    if parsed.input_map.bindings.is_empty() {
        warn!("input map {path} has no usable bindings; using built-in bindings");
        return InputMap::builtin();
    }
    info!(bindings = parsed.input_map.bindings.len(), "input map loaded: {}", parsed.input_map.describe_actions().join(", "));
    parsed.input_map
}

fn load_initial_input_map(mut commands: Commands) {
    commands.insert_resource(load_input_map(&input_config_path()));
}
