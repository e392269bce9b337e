//! Ball kinematics in window coordinates (origin top-left, y down).
//!
//! One tick moves the ball by its velocity, reflects each velocity component
//! whose axis left the window, then clamps the centre to
//! `[radius, extent - radius]`. Velocity is in pixels per tick.
use bevy::prelude::*;

use crate::core::config::BoingConfig;

/// Which axes reflected during a tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BounceAxes {
    pub x: bool,
    pub y: bool,
}
impl BounceAxes {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct BallState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    /// Current window width/height in logical pixels.
    pub bounds: Vec2,
}

impl FromWorld for BallState {
    fn from_world(world: &mut World) -> Self {
        let cfg = world.get_resource::<BoingConfig>().cloned().unwrap_or_default();
        Self::from_config(&cfg)
    }
}

impl BallState {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, bounds: Vec2) -> Self {
        let mut state = Self {
            position,
            velocity,
            radius,
            bounds,
        };
        state.clamp_to_bounds();
        state
    }

    pub fn from_config(cfg: &BoingConfig) -> Self {
        Self::new(
            Vec2::from_array(cfg.ball.start),
            Vec2::from_array(cfg.ball.velocity),
            cfg.ball.radius.max(0.0),
            Vec2::new(cfg.window.width, cfg.window.height),
        )
    }

    /// Advance one tick. Returns the reflected axes, or `None` when the ball
    /// travelled freely.
    pub fn tick(&mut self) -> Option<BounceAxes> {
        self.position += self.velocity;
        let axes = BounceAxes {
            x: reflect_axis(&mut self.position.x, &mut self.velocity.x, self.radius, self.bounds.x),
            y: reflect_axis(&mut self.position.y, &mut self.velocity.y, self.radius, self.bounds.y),
        };
        self.clamp_to_bounds();
        axes.any().then_some(axes)
    }

    /// Adopt new window dimensions and pull the ball back inside them.
    /// Velocity is left untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
        self.clamp_to_bounds();
    }

    pub fn clamp_to_bounds(&mut self) {
        self.position.x = clamp_axis(self.position.x, self.radius, self.bounds.x);
        self.position.y = clamp_axis(self.position.y, self.radius, self.bounds.y);
    }

    /// Smallest and largest legal centre on each axis.
    pub fn limits(&self) -> (Vec2, Vec2) {
        let lo = Vec2::new(
            clamp_axis(f32::NEG_INFINITY, self.radius, self.bounds.x),
            clamp_axis(f32::NEG_INFINITY, self.radius, self.bounds.y),
        );
        let hi = Vec2::new(
            clamp_axis(f32::INFINITY, self.radius, self.bounds.x),
            clamp_axis(f32::INFINITY, self.radius, self.bounds.y),
        );
        (lo, hi)
    }
}

fn pinned(radius: f32, extent: f32) -> bool {
    extent < radius * 2.0
}

fn reflect_axis(pos: &mut f32, vel: &mut f32, radius: f32, extent: f32) -> bool {
    // An axis narrower than the ball has no room to travel; reporting a bounce
    // there would fire the cue on every tick.
    if pinned(radius, extent) {
        return false;
    }
    if *pos - radius < 0.0 || *pos + radius > extent {
        *vel = -*vel;
        return true;
    }
    false
}

fn clamp_axis(pos: f32, radius: f32, extent: f32) -> f32 {
    if pinned(radius, extent) {
        return extent * 0.5;
    }
    pos.clamp(radius, extent - radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(pos: (f32, f32), vel: (f32, f32)) -> BallState {
        BallState::new(Vec2::new(pos.0, pos.1), Vec2::new(vel.0, vel.1), 64.0, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn free_flight_moves_by_velocity() {
        let mut s = state((400.0, 300.0), (6.0, 6.0));
        assert_eq!(s.tick(), None);
        assert_eq!(s.position, Vec2::new(406.0, 306.0));
        assert_eq!(s.velocity, Vec2::new(6.0, 6.0));
    }

    #[test]
    fn right_wall_reflects_and_clamps() {
        let mut s = state((733.0, 300.0), (6.0, 0.0));
        let axes = s.tick().expect("bounce");
        assert!(axes.x && !axes.y);
        assert_eq!(s.velocity.x, -6.0);
        assert_eq!(s.position.x, 800.0 - 64.0);
    }

    #[test]
    fn touching_the_edge_exactly_is_not_a_bounce() {
        let mut s = state((730.0, 300.0), (6.0, 0.0));
        assert_eq!(s.tick(), None);
        assert_eq!(s.position.x, 736.0);
        assert_eq!(s.velocity.x, 6.0);
    }

    #[test]
    fn corner_hit_reports_both_axes_once() {
        let mut s = state((70.0, 70.0), (-10.0, -10.0));
        let axes = s.tick().expect("bounce");
        assert_eq!(axes, BounceAxes { x: true, y: true });
        assert_eq!(s.velocity, Vec2::new(10.0, 10.0));
        assert_eq!(s.position, Vec2::new(64.0, 64.0));
    }

    #[test]
    fn resize_reclamps_without_touching_velocity() {
        let mut s = state((700.0, 500.0), (-6.0, 6.0));
        s.resize(400.0, 300.0);
        assert_eq!(s.position, Vec2::new(336.0, 236.0));
        assert_eq!(s.velocity, Vec2::new(-6.0, 6.0));
    }

    #[test]
    fn narrow_axis_pins_ball_and_stays_quiet() {
        let mut s = state((400.0, 300.0), (6.0, 6.0));
        s.resize(100.0, 600.0);
        assert_eq!(s.position.x, 50.0);
        for _ in 0..10 {
            if let Some(axes) = s.tick() {
                assert!(!axes.x, "pinned axis must not bounce");
            }
            assert_eq!(s.position.x, 50.0);
        }
    }

    #[test]
    fn limits_follow_bounds() {
        let s = state((400.0, 300.0), (0.0, 0.0));
        let (lo, hi) = s.limits();
        assert_eq!(lo, Vec2::new(64.0, 64.0));
        assert_eq!(hi, Vec2::new(736.0, 536.0));
    }
}
