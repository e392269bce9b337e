use std::{fs, io::Cursor, path::Path, sync::Arc};

use anyhow::{ensure, Context, Result};
use bevy::audio::{AudioPlayer, AudioSource, PlaybackSettings, Volume};
use bevy::prelude::*;

use crate::core::components::BounceCue;
use crate::core::config::BoingConfig;
use crate::core::system::system_order::{BallSyncSet, BounceCueSet};
use crate::physics::BallBounced;

/// Sound played on every bounce. `source` is `None` when loading failed or
/// sound is disabled; bounces are then silent.
#[derive(Resource, Debug, Default)]
pub struct BounceSound {
    pub source: Option<Handle<AudioSource>>,
    pub volume: f32,
    pub muted: bool,
    /// Path `source` was read from; a config change to a different path reloads.
    pub loaded_path: Option<String>,
    /// Cue entity spawned most recently; despawned when the next bounce restarts the sound.
    pub current: Option<Entity>,
    pub cues_played: u64,
    pub silent_bounces: u64,
}

impl FromWorld for BounceSound {
    fn from_world(world: &mut World) -> Self {
        let cfg = world.get_resource::<BoingConfig>().cloned().unwrap_or_default();
        Self {
            volume: cfg.sound.volume.max(0.0),
            muted: !cfg.sound.enabled,
            ..default()
        }
    }
}

/// Read an Ogg Vorbis file into memory and check that it decodes. Playback
/// panics on a stream it cannot decode, so only checked sources are added to
/// `Assets<AudioSource>`.
pub fn load_bounce_sound(path: impl AsRef<Path>) -> Result<AudioSource> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("read bounce sound {}", path.display()))?;
    ensure!(!bytes.is_empty(), "bounce sound {} is empty", path.display());
    ensure!(
        bytes.starts_with(b"OggS"),
        "bounce sound {} is not an Ogg stream (only Ogg Vorbis is supported)",
        path.display()
    );
    let bytes: Arc<[u8]> = Arc::from(bytes);
    rodio::Decoder::new(Cursor::new(bytes.clone()))
        .with_context(|| format!("decode bounce sound {} as Ogg Vorbis", path.display()))?;
    Ok(AudioSource { bytes })
}

/// Reads the configured sound path into an `AudioSource`.
#[derive(Resource, Clone, Copy)]
pub struct BounceSoundLoader(pub fn(&Path) -> Result<AudioSource>);

impl Default for BounceSoundLoader {
    fn default() -> Self {
        Self(|path| load_bounce_sound(path))
    }
}

pub struct BounceSoundPlugin;

impl Plugin for BounceSoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BounceSound>()
            .init_resource::<BounceSoundLoader>()
            .configure_sets(Update, BounceCueSet.before(BallSyncSet))
            .add_systems(Startup, sync_bounce_sound)
            .add_systems(
                Update,
                (
                    sync_bounce_sound.run_if(resource_changed::<BoingConfig>),
                    play_bounce_cue,
                )
                    .chain()
                    .in_set(BounceCueSet),
            );
    }
}

/// Applies the `sound` config section: volume and mute always, the source
/// only when the path differs from what is loaded.
pub fn sync_bounce_sound(
    cfg: Res<BoingConfig>,
    mut sound: ResMut<BounceSound>,
    loader: Option<Res<BounceSoundLoader>>,
    sources: Option<ResMut<Assets<AudioSource>>>,
) {
    sound.volume = cfg.sound.volume.max(0.0);
    sound.muted = !cfg.sound.enabled;
    if sound.muted {
        if sound.loaded_path.is_none() {
            info!("bounce sound disabled");
        }
        return;
    }
    if sound.loaded_path.as_deref() == Some(cfg.sound.path.as_str()) {
        return;
    }
    sound.loaded_path = Some(cfg.sound.path.clone());
    let Some(mut sources) = sources else {
        warn!("audio output unavailable, bouncing silently");
        return;
    };
    let load = loader.map_or(BounceSoundLoader::default().0, |l| l.0);
    match load(Path::new(&cfg.sound.path)) {
        Ok(source) => {
            sound.source = Some(sources.add(source));
            info!(path = %cfg.sound.path, "bounce sound loaded");
        }
        Err(e) => {
            sound.source = None;
            warn!("bounce sound unavailable, bouncing silently: {e:#}");
        }
    }
}

/// Restarts the cue once per bounce event: the previous playback (if any) is
/// stopped and a fresh one started from the beginning.
pub fn play_bounce_cue(
    mut commands: Commands,
    mut events: EventReader<BallBounced>,
    mut sound: ResMut<BounceSound>,
) {
    for ev in events.read() {
        let handle = match (&sound.source, sound.muted) {
            (Some(handle), false) => handle.clone(),
            _ => {
                sound.silent_bounces += 1;
                continue;
            }
        };
        if let Some(prev) = sound.current.take() {
            commands.entity(prev).try_despawn();
        }
        let settings = PlaybackSettings::DESPAWN.with_volume(Volume::Linear(sound.volume));
        let cue = commands.spawn((AudioPlayer::new(handle), settings, BounceCue)).id();
        sound.current = Some(cue);
        sound.cues_played += 1;
        trace!(x = ev.axes.x, y = ev.axes.y, "bounce cue");
    }
}
