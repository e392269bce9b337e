use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::HashMap;

pub const TOGGLE_FULLSCREEN: &str = "ToggleFullscreen";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u16); // index into `actions` / `states`

#[derive(Debug, Clone)]
pub struct ActionMeta { pub id: ActionId, pub name: String, pub description: String }

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionState { pub pressed: bool, pub just_pressed: bool, pub just_released: bool }
impl ActionState { pub fn clear_transitions(&mut self) { self.just_pressed = false; self.just_released = false; } }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingToken { Key(KeyCode), MouseBtn(MouseButton) }

/// All tokens must be held at once for the binding to be active.
#[derive(Debug, Clone)]
pub struct Binding { pub action: ActionId, pub tokens: SmallVec<[BindingToken; 2]> }

#[derive(Resource, Debug, Default, Clone)]
pub struct InputMap {
    pub actions: Vec<ActionMeta>,
    pub name_to_id: HashMap<String, ActionId>,
    pub bindings: Vec<Binding>,
    pub states: Vec<ActionState>,
}

impl InputMap {
    /// F11 toggles fullscreen; used when no input file is available.
    pub fn builtin() -> Self {
        let mut map = Self::default();
        let id = map.add_action(TOGGLE_FULLSCREEN, "Switch between windowed and borderless fullscreen");
        map.add_binding(id, SmallVec::from_slice(&[BindingToken::Key(KeyCode::F11)]));
        map
    }

    pub fn add_action(&mut self, name: &str, description: &str) -> ActionId {
        if let Some(id) = self.name_to_id.get(name) { return *id; }
        let id = ActionId(self.actions.len() as u16);
        self.actions.push(ActionMeta { id, name: name.to_string(), description: description.to_string() });
        self.name_to_id.insert(name.to_string(), id);
        self.states.push(ActionState::default());
        id
    }

    pub fn add_binding(&mut self, action: ActionId, tokens: SmallVec<[BindingToken; 2]>) {
        self.bindings.push(Binding { action, tokens });
    }

    /// `Name (description)` for every action, for logs.
    pub fn describe_actions(&self) -> Vec<String> {
        self.actions.iter().map(|a| if a.description.is_empty() { a.name.clone() } else { format!("{} ({})", a.name, a.description) }).collect()
    }

    pub fn state(&self, name: &str) -> Option<&ActionState> { self.name_to_id.get(name).and_then(|id| self.states.get(id.0 as usize)) }
    pub fn pressed(&self, name: &str) -> bool { self.state(name).is_some_and(|s| s.pressed) }
    pub fn just_pressed(&self, name: &str) -> bool { self.state(name).is_some_and(|s| s.just_pressed) }
    pub fn just_released(&self, name: &str) -> bool { self.state(name).is_some_and(|s| s.just_released) }
}
