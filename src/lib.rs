pub mod app;
pub mod audio;
pub mod core;
pub mod debug;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::{BoingPlugin, StartupDiagnostics};
pub use crate::core::cli::Cli;
pub use crate::core::components::{Ball, BounceCue};
pub use crate::core::config::{BoingConfig, WindowConfig};
pub use crate::physics::{BallBounced, BallState, BounceAxes};
