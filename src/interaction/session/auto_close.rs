use crate::core::config::BoingConfig;
use bevy::prelude::*;
use std::time::Duration;

#[derive(Resource, Deref, DerefMut)]
pub struct AutoCloseTimer(Timer);

/// Exits the app `window.autoClose` seconds after startup; 0 or negative
/// keeps it running until the window is closed.
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<BoingConfig>) {
    let secs = cfg.window.auto_close;
    if !(secs > 0.0) {
        return;
    }
    match Duration::try_from_secs_f32(secs) {
        Ok(after) => {
            info!(seconds = secs, "AutoClose: will exit after {secs} seconds");
            commands.insert_resource(AutoCloseTimer(Timer::new(after, TimerMode::Once)));
        }
        Err(e) => warn!("AutoClose: ignoring window.autoClose {secs}: {e}"),
    }
}

fn check_autoclose(
    time: Res<Time>,
    timer: Option<ResMut<AutoCloseTimer>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut t) = timer else {
        return;
    };
    if t.tick(time.delta()).just_finished() {
        info!("AutoClose: timer finished, requesting app exit");
        ev_exit.write(AppExit::Success);
    }
}
