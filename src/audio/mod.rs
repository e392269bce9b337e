pub mod bounce_sound;

pub use bounce_sound::{load_bounce_sound, BounceSound, BounceSoundPlugin};
