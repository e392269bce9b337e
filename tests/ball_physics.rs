use bevy::ecs::event::Events;
use bevy::prelude::*;
use bevy::window::WindowResized;
use boing_ball::physics::BallPhysicsPlugin;
use boing_ball::{BallBounced, BallState, BoingConfig};

fn physics_app(cfg: BoingConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(cfg)
        .add_event::<WindowResized>()
        .add_plugins(BallPhysicsPlugin);
    app.update();
    app
}

fn place_ball(app: &mut App, pos: Vec2, vel: Vec2) {
    let bounds = Vec2::new(800.0, 600.0);
    app.insert_resource(BallState::new(pos, vel, 64.0, bounds));
}

fn bounce_count(app: &App) -> usize {
    let events = app.world().resource::<Events<BallBounced>>();
    events.get_cursor().read(events).count()
}

#[test]
fn ball_stays_inside_and_flips_exactly_at_walls() {
    let mut cfg = BoingConfig::default();
    cfg.ball.velocity = [7.0, 5.0];
    let mut app = physics_app(cfg);
    let baseline = bounce_count(&app);
    let mut expected_bounces = 0;
    for tick in 0..2000 {
        let before = app.world().resource::<BallState>().clone();
        let next = before.position + before.velocity;
        let would_exit_x = next.x - before.radius < 0.0 || next.x + before.radius > before.bounds.x;
        let would_exit_y = next.y - before.radius < 0.0 || next.y + before.radius > before.bounds.y;
        if would_exit_x || would_exit_y {
            expected_bounces += 1;
        }

        app.world_mut().run_schedule(FixedUpdate);

        let after = app.world().resource::<BallState>();
        let (lo, hi) = after.limits();
        assert!(
            after.position.cmpge(lo).all() && after.position.cmple(hi).all(),
            "tick {tick}: {} outside [{lo}, {hi}]",
            after.position
        );
        assert_eq!(after.velocity.x == -before.velocity.x, would_exit_x, "tick {tick} x");
        assert_eq!(after.velocity.y == -before.velocity.y, would_exit_y, "tick {tick} y");
    }
    assert!(expected_bounces > 0);
    assert_eq!(bounce_count(&app) - baseline, expected_bounces, "one event per bouncing tick");
}

#[test]
fn corner_hit_emits_a_single_event() {
    let mut app = physics_app(BoingConfig::default());
    place_ball(&mut app, Vec2::new(70.0, 70.0), Vec2::new(-10.0, -10.0));
    app.world_mut().resource_mut::<Events<BallBounced>>().clear();
    app.world_mut().run_schedule(FixedUpdate);
    let events = app.world().resource::<Events<BallBounced>>();
    let all: Vec<_> = events.get_cursor().read(events).copied().collect();
    assert_eq!(all.len(), 1);
    assert!(all[0].axes.x && all[0].axes.y);
    assert_eq!(all[0].position, Vec2::new(64.0, 64.0));
}

#[test]
fn resize_event_reclamps_without_changing_direction() {
    let mut app = physics_app(BoingConfig::default());
    place_ball(&mut app, Vec2::new(700.0, 500.0), Vec2::new(6.0, -6.0));
    app.world_mut().send_event(WindowResized {
        window: Entity::PLACEHOLDER,
        width: 400.0,
        height: 300.0,
    });
    app.world_mut().run_schedule(PreUpdate);
    let ball = app.world().resource::<BallState>();
    assert_eq!(ball.bounds, Vec2::new(400.0, 300.0));
    assert_eq!(ball.position, Vec2::new(336.0, 236.0));
    assert_eq!(ball.velocity, Vec2::new(6.0, -6.0));
}

#[test]
fn fixed_timestep_follows_tick_interval() {
    let mut cfg = BoingConfig::default();
    cfg.tick.interval_ms = 20;
    let app = physics_app(cfg);
    let fixed = app.world().resource::<Time<Fixed>>();
    assert_eq!(fixed.timestep().as_millis(), 20);
}
