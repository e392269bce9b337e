//! Per-frame evaluation of bindings into action states.
use bevy::prelude::*;
use super::types::*;

fn token_pressed(token: &BindingToken, keyboard: &ButtonInput<KeyCode>, mouse_buttons: &ButtonInput<MouseButton>) -> bool {
    match token { BindingToken::Key(k) => keyboard.pressed(*k), BindingToken::MouseBtn(b) => mouse_buttons.pressed(*b) }
}

/// An action is pressed while any of its bindings is fully held; transitions
/// are derived from the aggregated state so two bindings of one action never
/// double-fire.
pub fn evaluate_bindings(input_map: &mut InputMap, keyboard: &ButtonInput<KeyCode>, mouse_buttons: &ButtonInput<MouseButton>) {
    let mut held = vec![false; input_map.states.len()];
    for binding in &input_map.bindings {
        if !binding.tokens.iter().all(|t| token_pressed(t, keyboard, mouse_buttons)) { continue; }
        if let Some(h) = held.get_mut(binding.action.0 as usize) { *h = true; }
    }
    for (state, now) in input_map.states.iter_mut().zip(held) {
        state.clear_transitions();
        if now && !state.pressed { state.just_pressed = true; }
        if !now && state.pressed { state.just_released = true; }
        state.pressed = now;
    }
}

pub fn system_evaluate_bindings(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Option<Res<ButtonInput<MouseButton>>>,
    mut input_map: ResMut<InputMap>,
) {
    let no_mouse = ButtonInput::<MouseButton>::default();
    let mouse_buttons = mouse_buttons.as_deref().unwrap_or(&no_mouse);
    evaluate_bindings(&mut input_map, &keyboard, mouse_buttons);
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn alt_enter_map() -> InputMap {
        let mut map = InputMap::builtin();
        let id = map.name_to_id[TOGGLE_FULLSCREEN];
        map.add_binding(id, smallvec![BindingToken::Key(KeyCode::AltLeft), BindingToken::Key(KeyCode::Enter)]);
        map
    }

    #[test]
    fn press_hold_release_transitions() {
        let mut map = InputMap::builtin();
        let mut keys = ButtonInput::<KeyCode>::default();
        let mouse = ButtonInput::<MouseButton>::default();
        keys.press(KeyCode::F11);
        evaluate_bindings(&mut map, &keys, &mouse);
        assert!(map.just_pressed(TOGGLE_FULLSCREEN) && map.pressed(TOGGLE_FULLSCREEN));
        evaluate_bindings(&mut map, &keys, &mouse);
        assert!(!map.just_pressed(TOGGLE_FULLSCREEN) && map.pressed(TOGGLE_FULLSCREEN));
        keys.release(KeyCode::F11);
        evaluate_bindings(&mut map, &keys, &mouse);
        assert!(map.just_released(TOGGLE_FULLSCREEN) && !map.pressed(TOGGLE_FULLSCREEN));
    }

    #[test]
    fn chord_needs_every_token() {
        let mut map = alt_enter_map();
        let mut keys = ButtonInput::<KeyCode>::default();
        let mouse = ButtonInput::<MouseButton>::default();
        keys.press(KeyCode::Enter);
        evaluate_bindings(&mut map, &keys, &mouse);
        assert!(!map.pressed(TOGGLE_FULLSCREEN));
        keys.press(KeyCode::AltLeft);
        evaluate_bindings(&mut map, &keys, &mouse);
        assert!(map.just_pressed(TOGGLE_FULLSCREEN));
    }

    #[test]
    fn second_binding_does_not_retrigger_held_action() {
        let mut map = alt_enter_map();
        let mut keys = ButtonInput::<KeyCode>::default();
        let mouse = ButtonInput::<MouseButton>::default();
        keys.press(KeyCode::F11);
        evaluate_bindings(&mut map, &keys, &mouse);
        keys.press(KeyCode::AltLeft);
        keys.press(KeyCode::Enter);
        evaluate_bindings(&mut map, &keys, &mouse);
        assert!(map.pressed(TOGGLE_FULLSCREEN));
        assert!(!map.just_pressed(TOGGLE_FULLSCREEN));
    }
}
