use bevy::prelude::*;
use bevy::sprite::MeshMaterial2d;

use crate::core::components::GridLine;
use crate::core::config::{rgb, BoingConfig, GridConfig};
use crate::physics::BallState;
use crate::rendering::window_to_world;

const GRID_Z: f32 = 0.0;
// Denser grids are skipped entirely.
pub const MAX_GRID_LINES: usize = 4096;

/// Axis-aligned strip in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSegment {
    pub center: Vec2,
    pub size: Vec2,
}

/// Vertical lines at `x = 0, s, 2s, ... <= width` followed by horizontal lines
/// at `y = 0, s, 2s, ... <= height`, each spanning the whole window.
pub fn grid_lines(size: Vec2, grid: &GridConfig) -> Vec<GridSegment> {
    let spacing = grid.spacing;
    if !(spacing > 0.0) || size.x <= 0.0 || size.y <= 0.0 {
        return Vec::new();
    }
    // counted in f32 so a tiny spacing cannot overflow the cast
    let cols = (size.x / spacing).floor() + 1.0;
    let rows = (size.y / spacing).floor() + 1.0;
    if !(cols + rows <= MAX_GRID_LINES as f32) {
        return Vec::new();
    }
    let (cols, rows) = (cols as usize, rows as usize);
    let w = grid.line_width.max(0.0);
    let mut out = Vec::with_capacity(cols + rows);
    for i in 0..cols {
        let x = i as f32 * spacing;
        out.push(GridSegment {
            center: Vec2::new(x, size.y * 0.5),
            size: Vec2::new(w, size.y),
        });
    }
    for j in 0..rows {
        let y = j as f32 * spacing;
        out.push(GridSegment {
            center: Vec2::new(size.x * 0.5, y),
            size: Vec2::new(size.x, w),
        });
    }
    out
}

pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, rebuild_grid);
    }
}

/// Respawns the grid whenever the ball bounds (window size) or the grid
/// section of the config differ from what was last built.
fn rebuild_grid(
    mut commands: Commands,
    cfg: Res<BoingConfig>,
    ball: Res<BallState>,
    existing: Query<Entity, With<GridLine>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut built: Local<Option<(Vec2, GridConfig)>>,
) {
    let key = (ball.bounds, cfg.grid.clone());
    if built.as_ref() == Some(&key) {
        return;
    }
    for e in existing.iter() {
        commands.entity(e).despawn();
    }
    let segments = grid_lines(ball.bounds, &cfg.grid);
    if segments.is_empty() {
        if cfg.grid.spacing > 0.0 {
            warn!(spacing = cfg.grid.spacing, "grid too dense; background grid disabled");
        }
    } else {
        let unit = meshes.add(Rectangle::new(1.0, 1.0));
        let material = materials.add(rgb(cfg.grid.color));
        for seg in &segments {
            let center = window_to_world(seg.center, ball.bounds);
            commands.spawn((
                Mesh2d(unit.clone()),
                MeshMaterial2d(material.clone()),
                Transform::from_translation(center.extend(GRID_Z)).with_scale(seg.size.extend(1.0)),
                GridLine,
            ));
        }
    }
    debug!(lines = segments.len(), "grid rebuilt");
    *built = Some(key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_has_thirteen_columns_and_ten_rows() {
        let lines = grid_lines(Vec2::new(800.0, 600.0), &GridConfig::default());
        let vertical = lines.iter().filter(|l| l.size.y == 600.0).count();
        let horizontal = lines.iter().filter(|l| l.size.x == 800.0).count();
        // 0, 64, ..., 768 and 0, 64, ..., 576
        assert_eq!(vertical, 13);
        assert_eq!(horizontal, 10);
        assert_eq!(lines[0].center, Vec2::new(0.0, 300.0));
        assert_eq!(lines[12].center.x, 768.0);
    }

    #[test]
    fn line_on_exact_edge_is_included() {
        let grid = GridConfig { spacing: 100.0, ..default() };
        let lines = grid_lines(Vec2::new(200.0, 100.0), &grid);
        assert_eq!(lines.len(), 3 + 2);
    }

    #[test]
    fn non_positive_spacing_disables_grid() {
        let grid = GridConfig { spacing: 0.0, ..default() };
        assert!(grid_lines(Vec2::new(800.0, 600.0), &grid).is_empty());
    }

    #[test]
    fn vanishing_spacing_is_refused_without_overflow() {
        let grid = GridConfig { spacing: 1e-30, ..default() };
        assert!(grid_lines(Vec2::new(800.0, 600.0), &grid).is_empty());
        let grid = GridConfig { spacing: f32::MIN_POSITIVE, ..default() };
        assert!(grid_lines(Vec2::new(f32::MAX, f32::MAX), &grid).is_empty());
    }

    #[test]
    fn absurdly_dense_grid_is_refused() {
        let grid = GridConfig { spacing: 0.01, ..default() };
        assert!(grid_lines(Vec2::new(800.0, 600.0), &grid).is_empty());
    }
}
