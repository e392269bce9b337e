use bevy::prelude::*;
use serde::Deserialize;

use crate::rendering::background::background::MAX_GRID_LINES;
use crate::rendering::ball::mesh::MAX_SEGMENTS;
use std::{fs, path::Path};

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/boing.ron";
pub const LOCAL_CONFIG_PATH: &str = "assets/config/boing.local.ron";
pub const DEFAULT_SOUND_PATH: &str = "/usr/share/sounds/freedesktop/stereo/bell.oga";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
    pub clear_color: [f32; 3],
    /// Start in borderless fullscreen instead of a window.
    pub fullscreen: bool,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Boing Ball Demo".into(),
            auto_close: 0.0,
            clear_color: [0.96, 0.96, 0.95],
            fullscreen: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Initial centre in window pixels (origin top-left, y down).
    pub start: [f32; 2],
    /// Pixels travelled per tick on each axis.
    pub velocity: [f32; 2],
    /// Patches along longitude and latitude of the checkered sphere.
    pub segments: u32,
    pub primary_color: [f32; 3],
    pub secondary_color: [f32; 3],
    pub outline_color: [f32; 3],
    pub outline_width: f32,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 64.0,
            start: [400.0, 300.0],
            velocity: [6.0, 6.0],
            segments: 12,
            primary_color: [1.0, 0.0, 0.0],
            secondary_color: [1.0, 1.0, 1.0],
            outline_color: [0.5, 0.5, 0.5],
            outline_width: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub spacing: f32,
    pub line_width: f32,
    pub color: [f32; 3],
}
impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spacing: 64.0,
            line_width: 1.0,
            color: [0.2, 0.2, 0.2],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TickConfig {
    pub interval_ms: u64,
}
impl Default for TickConfig {
    fn default() -> Self {
        Self { interval_ms: 16 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SoundConfig {
    pub enabled: bool,
    pub path: String,
    /// Linear gain applied to each cue.
    pub volume: f32,
}
impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: DEFAULT_SOUND_PATH.into(),
            volume: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BoingConfig {
    pub window: WindowConfig,
    pub ball: BallConfig,
    pub grid: GridConfig,
    pub tick: TickConfig,
    pub sound: SoundConfig,
}

pub fn rgb([r, g, b]: [f32; 3]) -> Color {
    Color::srgb(r, g, b)
}

impl BoingConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Merge every readable RON file in order, later files overriding earlier
    /// ones key by key. Returns the config, the paths actually used, and
    /// any read/parse problems encountered along the way.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        if let Some((_, ev)) = bm.iter_mut().find(|(ek, _)| **ek == k) {
                            merge_value(ev, v);
                            continue;
                        }
                        bm.insert(k, v);
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (BoingConfig::default(), used, errors);
        };
        match val.into_rust::<BoingConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                (BoingConfig::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if !self.window.auto_close.is_finite() {
            w.push(format!(
                "window.autoClose {} not finite -> treated as disabled",
                self.window.auto_close
            ));
        } else if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.ball.radius <= 0.0 {
            w.push(format!("ball.radius {} must be > 0", self.ball.radius));
        }
        let diameter = self.ball.radius * 2.0;
        if self.window.width < diameter || self.window.height < diameter {
            w.push(format!(
                "window {}x{} smaller than ball diameter {diameter}; ball will be pinned on that axis",
                self.window.width, self.window.height
            ));
        }
        let [dx, dy] = self.ball.velocity;
        if dx == 0.0 && dy == 0.0 {
            w.push("ball.velocity is zero; the ball will not move".into());
        }
        if dx.abs() >= diameter || dy.abs() >= diameter {
            w.push(format!(
                "ball.velocity ({dx}, {dy}) exceeds the ball diameter per tick; motion will look jumpy"
            ));
        }
        if self.ball.segments < 2 {
            w.push(format!("ball.segments {} too low; need at least 2", self.ball.segments));
        } else if self.ball.segments > MAX_SEGMENTS {
            w.push(format!(
                "ball.segments {} too high; capped at {MAX_SEGMENTS}",
                self.ball.segments
            ));
        }
        if !(self.grid.spacing > 0.0) {
            w.push("grid.spacing must be > 0; grid disabled".into());
        } else {
            let lines = (self.window.width / self.grid.spacing).floor()
                + (self.window.height / self.grid.spacing).floor()
                + 2.0;
            if !(lines <= MAX_GRID_LINES as f32) {
                w.push(format!(
                    "grid.spacing {} needs more than {MAX_GRID_LINES} lines; grid disabled",
                    self.grid.spacing
                ));
            }
        }
        if self.tick.interval_ms == 0 {
            w.push("tick.interval_ms is 0; clamped to 1 ms".into());
        }
        if !(0.0..=4.0).contains(&self.sound.volume) {
            w.push(format!("sound.volume {} outside 0..4", self.sound.volume));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_demo() {
        let cfg = BoingConfig::default();
        assert_eq!(cfg.ball.radius, 64.0);
        assert_eq!(cfg.ball.velocity, [6.0, 6.0]);
        assert_eq!(cfg.grid.spacing, 64.0);
        assert_eq!(cfg.tick.interval_ms, 16);
        assert_eq!((cfg.window.width, cfg.window.height), (800.0, 600.0));
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let cfg: BoingConfig = ron::from_str("(ball: (radius: 32.0))").unwrap();
        assert_eq!(cfg.ball.radius, 32.0);
        assert_eq!(cfg.ball.segments, 12);
        assert_eq!(cfg.window.title, "Boing Ball Demo");
    }

    #[test]
    fn validate_flags_values_the_renderer_caps() {
        let mut cfg = BoingConfig::default();
        cfg.ball.segments = 70_000;
        cfg.grid.spacing = 1e-30;
        cfg.window.auto_close = f32::INFINITY;
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.contains("ball.segments")), "{warnings:?}");
        assert!(warnings.iter().any(|w| w.contains("grid.spacing")), "{warnings:?}");
        assert!(warnings.iter().any(|w| w.contains("not finite")), "{warnings:?}");
    }

    #[test]
    fn validate_flags_tiny_window() {
        let mut cfg = BoingConfig::default();
        cfg.window.width = 100.0;
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.contains("pinned")), "{warnings:?}");
    }
}
