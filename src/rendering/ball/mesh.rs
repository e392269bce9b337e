//! Checkered "Boing" sphere as a flat 2D mesh.
//!
//! The disc is tiled with `segments x segments` quads obtained by projecting
//! a longitude/latitude grid onto the view plane. Mirrored longitudes
//! overlap; each later quad sits slightly above the previous one so the
//! depth test reproduces painter's order.
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

pub const PATCH_Z_STEP: f32 = 0.001;
/// Upper bound on patches per direction.
pub const MAX_SEGMENTS: u32 = 256;

/// `segments` limited to `2..=MAX_SEGMENTS`.
pub fn effective_segments(segments: u32) -> u32 {
    segments.clamp(2, MAX_SEGMENTS)
}

/// Corners of patch `(i, j)` in world orientation (y up), in drawing order.
pub fn patch_corners(radius: f32, segments: u32, i: u32, j: u32) -> [Vec2; 4] {
    let n = segments as f32;
    let a1 = i as f32 * TAU / n;
    let a2 = (i + 1) as f32 * TAU / n;
    let v1 = j as f32 * PI / n - FRAC_PI_2;
    let v2 = (j + 1) as f32 * PI / n - FRAC_PI_2;
    // latitude runs top to bottom in window space; flip for y-up
    let p = |a: f32, v: f32| Vec2::new(radius * a.cos() * v.cos(), -radius * v.sin());
    [p(a1, v1), p(a2, v1), p(a2, v2), p(a1, v2)]
}

pub fn patch_is_primary(i: u32, j: u32) -> bool {
    (i + j) % 2 == 0
}

pub fn checkered_sphere_mesh(radius: f32, segments: u32, primary: Color, secondary: Color) -> Mesh {
    let segments = effective_segments(segments);
    let patches = (segments * segments) as usize;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(patches * 4);
    let mut colors: Vec<[f32; 4]> = Vec::with_capacity(patches * 4);
    let mut indices: Vec<u32> = Vec::with_capacity(patches * 6);
    let primary = LinearRgba::from(primary).to_f32_array();
    let secondary = LinearRgba::from(secondary).to_f32_array();

    for i in 0..segments {
        for j in 0..segments {
            let order = i * segments + j;
            let z = order as f32 * PATCH_Z_STEP;
            let color = if patch_is_primary(i, j) { primary } else { secondary };
            let base = positions.len() as u32;
            for corner in patch_corners(radius, segments, i, j) {
                positions.push([corner.x, corner.y, z]);
                colors.push(color);
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    let count = positions.len();
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, vec![[0.0, 0.0, 1.0]; count])
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, vec![[0.5, 0.5]; count])
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
        .with_inserted_indices(Indices::U32(indices))
}

/// Local z of the topmost patch; anything drawn over the sphere must sit above it.
pub fn sphere_depth(segments: u32) -> f32 {
    let segments = effective_segments(segments);
    (segments * segments) as f32 * PATCH_Z_STEP
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    #[test]
    fn every_corner_lies_inside_the_disc() {
        for i in 0..12 {
            for j in 0..12 {
                for c in patch_corners(64.0, 12, i, j) {
                    assert!(c.length() <= 64.0 + 1e-3, "({i},{j}) corner {c} outside");
                }
            }
        }
    }

    #[test]
    fn mesh_has_four_vertices_and_two_triangles_per_patch() {
        let mesh = checkered_sphere_mesh(64.0, 12, Color::srgb(1.0, 0.0, 0.0), Color::WHITE);
        assert_eq!(mesh.count_vertices(), 144 * 4);
        let Some(Indices::U32(idx)) = mesh.indices() else {
            panic!("expected u32 indices");
        };
        assert_eq!(idx.len(), 144 * 6);
    }

    #[test]
    fn later_patches_sit_above_earlier_ones() {
        let mesh = checkered_sphere_mesh(64.0, 4, Color::BLACK, Color::WHITE);
        let Some(VertexAttributeValues::Float32x3(pos)) = mesh.attribute(Mesh::ATTRIBUTE_POSITION) else {
            panic!("positions missing");
        };
        let zs: Vec<f32> = pos.chunks(4).map(|quad| quad[0][2]).collect();
        assert!(zs.windows(2).all(|w| w[1] > w[0]));
        assert!(*zs.last().unwrap() < sphere_depth(4));
    }

    #[test]
    fn huge_segment_counts_are_capped() {
        let mesh = checkered_sphere_mesh(64.0, 70_000, Color::BLACK, Color::WHITE);
        let n = MAX_SEGMENTS as usize;
        assert_eq!(mesh.count_vertices(), n * n * 4);
        assert_eq!(sphere_depth(u32::MAX), sphere_depth(MAX_SEGMENTS));
    }

    #[test]
    fn colors_alternate_like_a_checkerboard() {
        assert!(patch_is_primary(0, 0));
        assert!(!patch_is_primary(0, 1));
        assert!(!patch_is_primary(1, 0));
        assert!(patch_is_primary(1, 1));
    }

    #[test]
    fn top_row_is_at_the_top_of_the_disc() {
        // j = 0 starts at latitude -90 degrees, the top edge in window space
        let [c0, ..] = patch_corners(10.0, 12, 0, 0);
        assert!((c0.y - 10.0).abs() < 1e-4);
    }
}
