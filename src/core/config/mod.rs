pub mod config;

pub use config::{
    rgb, BallConfig, BoingConfig, GridConfig, SoundConfig, TickConfig, WindowConfig,
    DEFAULT_CONFIG_PATH, DEFAULT_SOUND_PATH, LOCAL_CONFIG_PATH,
};
