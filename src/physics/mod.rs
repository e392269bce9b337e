pub mod bounce;
pub mod plugin;

pub use bounce::{BallState, BounceAxes};
pub use plugin::{BallBounced, BallPhysicsPlugin};
