use super::types::*;
use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Default)]
pub struct ParsedInputConfig { pub input_map: InputMap, pub errors: Vec<String> }

#[derive(Debug, serde::Deserialize)]
struct ActionDecl { description: Option<String> }

// BTreeMap keeps action ids stable across runs
#[derive(Debug, serde::Deserialize)]
struct RootToml { actions: Option<BTreeMap<String, ActionDecl>>, bindings: Option<BTreeMap<String, Vec<String>>> }

/// Parse `[actions]` + `[bindings]`. Problems are collected per entry; a bad
/// entry is skipped and everything else still loads.
pub fn parse_input_toml(raw: &str) -> ParsedInputConfig {
    let mut result = ParsedInputConfig::default();
    let root: RootToml = match toml::from_str(raw) { Ok(r) => r, Err(e) => { result.errors.push(format!("Top-level parse: {e}")); return result; } };
    let mut input_map = InputMap::default();
    for (name, decl) in root.actions.unwrap_or_default() {
        if !validate_action_name(&name) { result.errors.push(format!("Invalid action name '{name}': must be PascalCase")); continue; }
        input_map.add_action(&name, decl.description.as_deref().unwrap_or_default());
    }
    let mut seen_chords: HashSet<SmallVec<[BindingToken; 2]>> = HashSet::new();
    for (action_name, list) in root.bindings.unwrap_or_default() {
        let Some(aid) = input_map.name_to_id.get(&action_name).copied() else { result.errors.push(format!("Binding references unknown action '{action_name}'")); continue; };
        for spec in &list {
            match parse_binding(spec) {
                Ok(mut tokens) => {
                    canonical_sort_tokens(&mut tokens);
                    if !seen_chords.insert(tokens.clone()) { result.errors.push(format!("[binding {action_name} '{spec}'] chord already bound")); continue; }
                    input_map.add_binding(aid, tokens);
                }
                Err(err) => result.errors.push(format!("[binding {action_name} '{spec}'] {err}")),
            }
        }
    }
    result.input_map = input_map;
    result
}

fn validate_action_name(name: &str) -> bool { name.chars().next().is_some_and(|c| c.is_ascii_uppercase()) && name.chars().all(|c| c.is_ascii_alphanumeric()) }

fn canonical_sort_tokens(tokens: &mut SmallVec<[BindingToken; 2]>) { tokens.sort_by_key(token_sort_key); }

fn token_sort_key(t: &BindingToken) -> (u8, String) { match t { BindingToken::Key(k) => (0, format!("{k:?}")), BindingToken::MouseBtn(b) => (1, format!("{b:?}")) } }

fn parse_binding(spec: &str) -> Result<SmallVec<[BindingToken; 2]>, String> {
    let mut tokens: SmallVec<[BindingToken; 2]> = SmallVec::new();
    let mut seen: HashSet<BindingToken> = HashSet::new();
    for part in spec.split('+') {
        let p = part.trim();
        if p.is_empty() { continue; }
        let token = parse_token(p)?;
        if !seen.insert(token) { return Err(format!("Duplicate token in chord: {token:?}")); }
        tokens.push(token);
    }
    if tokens.is_empty() { return Err("Empty binding".into()); }
    Ok(tokens)
}

fn parse_token(s: &str) -> Result<BindingToken, String> {
    if let Some(rest) = s.strip_prefix("Key:") { return parse_keycode(rest).map(BindingToken::Key); }
    if let Some(rest) = s.strip_prefix("Mouse:") {
        return match rest { "Left" => Ok(BindingToken::MouseBtn(MouseButton::Left)), "Right" => Ok(BindingToken::MouseBtn(MouseButton::Right)), "Middle" => Ok(BindingToken::MouseBtn(MouseButton::Middle)), other => Err(format!("Unknown mouse button '{other}'")) };
    }
    Err(format!("Unrecognized token '{s}'"))
}

fn parse_keycode(name: &str) -> Result<KeyCode, String> {
    let kc = match name {
        "F1" => KeyCode::F1, "F2" => KeyCode::F2, "F3" => KeyCode::F3, "F4" => KeyCode::F4, "F5" => KeyCode::F5, "F6" => KeyCode::F6,
        "F7" => KeyCode::F7, "F8" => KeyCode::F8, "F9" => KeyCode::F9, "F10" => KeyCode::F10, "F11" => KeyCode::F11, "F12" => KeyCode::F12,
        "Enter" => KeyCode::Enter, "Escape" => KeyCode::Escape, "Space" => KeyCode::Space, "Tab" => KeyCode::Tab,
        "AltLeft" => KeyCode::AltLeft, "AltRight" => KeyCode::AltRight, "ControlLeft" => KeyCode::ControlLeft, "ControlRight" => KeyCode::ControlRight,
        "ShiftLeft" => KeyCode::ShiftLeft, "ShiftRight" => KeyCode::ShiftRight, "SuperLeft" => KeyCode::SuperLeft,
        "F"|"KeyF" => KeyCode::KeyF, "M"|"KeyM" => KeyCode::KeyM, "Q"|"KeyQ" => KeyCode::KeyQ,
        other => return Err(format!("Unsupported KeyCode '{other}'")),
    };
    Ok(kc)
}
