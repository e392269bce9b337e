use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Parser;

use crate::core::config::{BoingConfig, DEFAULT_CONFIG_PATH, LOCAL_CONFIG_PATH};

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "boing_ball", version, about = "Bouncing Boing ball demo")]
pub struct Cli {
    /// Extra RON config layer applied after the defaults (repeatable)
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    pub configs: Vec<PathBuf>,
    /// Sound file played on every bounce
    #[arg(long, value_name = "PATH")]
    pub sound: Option<PathBuf>,
    /// Bounce silently
    #[arg(long)]
    pub mute: bool,
    /// Start in borderless fullscreen
    #[arg(long)]
    pub fullscreen: bool,
    /// Exit after this many seconds
    #[arg(long, value_name = "SECS", value_parser = parse_seconds)]
    pub auto_close: Option<f32>,
}

fn parse_seconds(raw: &str) -> std::result::Result<f32, String> {
    let secs: f32 = raw.parse().map_err(|e| format!("{e}"))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("{raw} is not a finite, non-negative number of seconds"));
    }
    Ok(secs)
}

/// Outcome of resolving CLI + config layers, before the app exists.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: BoingConfig,
    pub layers: Vec<PathBuf>,
    /// Layers that were read and parsed; reported at startup.
    pub used: Vec<String>,
    pub warnings: Vec<String>,
}

impl Cli {
    /// Default layers that exist on disk, followed by every `--config` layer.
    /// An explicit layer that does not exist is an error; a missing default is not.
    pub fn config_layers(&self) -> Result<Vec<PathBuf>> {
        let mut layers: Vec<PathBuf> = [DEFAULT_CONFIG_PATH, LOCAL_CONFIG_PATH]
            .iter()
            .map(PathBuf::from)
            .filter(|p| p.exists())
            .collect();
        for p in &self.configs {
            if !p.exists() {
                bail!("config file {} does not exist", p.display());
            }
            layers.push(p.clone());
        }
        Ok(layers)
    }

    pub fn apply(&self, cfg: &mut BoingConfig) {
        if let Some(sound) = &self.sound {
            cfg.sound.path = sound.display().to_string();
            cfg.sound.enabled = true;
        }
        if self.mute {
            cfg.sound.enabled = false;
        }
        if self.fullscreen {
            cfg.window.fullscreen = true;
        }
        if let Some(secs) = self.auto_close {
            cfg.window.auto_close = secs;
        }
    }

    pub fn load(&self) -> Result<LoadedConfig> {
        let layers = self.config_layers()?;
        Ok(load_with_layers(self, layers))
    }
}

pub fn load_with_layers(cli: &Cli, layers: Vec<PathBuf>) -> LoadedConfig {
    let (mut config, used, mut warnings) = BoingConfig::load_layered(layers.iter().map(PathBuf::as_path));
    cli.apply(&mut config);
    warnings.extend(config.validate());
    LoadedConfig {
        config,
        layers,
        used,
        warnings,
    }
}

pub fn describe_layers(layers: &[impl AsRef<Path>]) -> String {
    if layers.is_empty() {
        return "built-in defaults".into();
    }
    layers
        .iter()
        .map(|p| p.as_ref().display().to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "boing_ball",
            "--mute",
            "--fullscreen",
            "--auto-close",
            "2.5",
        ]);
        let mut cfg = BoingConfig::default();
        cli.apply(&mut cfg);
        assert!(!cfg.sound.enabled);
        assert!(cfg.window.fullscreen);
        assert_eq!(cfg.window.auto_close, 2.5);
    }

    #[test]
    fn sound_flag_sets_path() {
        let cli = Cli::parse_from(["boing_ball", "--sound", "/tmp/pop.ogg"]);
        let mut cfg = BoingConfig::default();
        cfg.sound.enabled = false;
        cli.apply(&mut cfg);
        assert!(cfg.sound.enabled);
        assert_eq!(cfg.sound.path, "/tmp/pop.ogg");
    }

    #[test]
    fn missing_explicit_layer_is_an_error() {
        let cli = Cli::parse_from(["boing_ball", "--config", "/definitely/not/here.ron"]);
        let err = cli.config_layers().unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn auto_close_rejects_non_finite_seconds() {
        for bad in ["inf", "NaN", "-1"] {
            let res = Cli::try_parse_from(["boing_ball", "--auto-close", bad]);
            assert!(res.is_err(), "{bad} accepted");
        }
        let cli = Cli::try_parse_from(["boing_ball", "--auto-close", "0"]).unwrap();
        assert_eq!(cli.auto_close, Some(0.0));
    }

    #[test]
    fn describe_empty_layers() {
        let none: [PathBuf; 0] = [];
        assert_eq!(describe_layers(&none), "built-in defaults");
    }
}
