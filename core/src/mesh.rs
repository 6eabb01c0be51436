use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::error::Result;
use crate::heightfield::Heightfield;
use crate::params::MeshParams;

// One vertex per grid cell, laid out for direct upload as raw bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    // always zero here; kept so the layout matches textured pipelines
    pub uv: [f32; 2],
}

// Triangle list over `vertices`, replaced wholesale on every rebuild
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerrainMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    // Axis-aligned (min, max) corners of all vertex positions
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut it = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

// Turn a heightfield into a lit triangle mesh.
// x/z are centered on the grid middle and scaled by `horizontal_scale`,
// y is height * `vertical_scale`.
pub fn build(heights: Heightfield, horizontal_scale: f32, vertical_scale: f32) -> TerrainMesh {
    let n = heights.size();
    let half = (n / 2) as f32;

    let positions: Vec<Vec3> = (0..n)
        .flat_map(|y| (0..n).map(move |x| (x, y)))
        .map(|(x, y)| {
            Vec3::new(
                (x as f32 - half) * horizontal_scale,
                heights.get(x, y) * vertical_scale,
                (y as f32 - half) * horizontal_scale,
            )
        })
        .collect();

    let mut normals = vec![Vec3::ZERO; n * n];
    let mut indices = Vec::with_capacity((n - 1) * (n - 1) * 6);

    for y in 0..n - 1 {
        for x in 0..n - 1 {
            // tl - - tr
            //  | \   |
            //  |   \ |
            // bl - - br
            let tl = x + y * n;
            let tr = (x + 1) + y * n;
            let bl = x + (y + 1) * n;
            let br = (x + 1) + (y + 1) * n;

            for [a, b, c] in [[tl, br, bl], [tl, tr, br]] {
                // validate_size keeps every index below u32::MAX
                indices.extend_from_slice(&[a as u32, b as u32, c as u32]);

                // Unnormalized, so bigger faces weigh more in the vertex sum
                let face = face_normal(positions[a], positions[b], positions[c]);
                normals[a] += face;
                normals[b] += face;
                normals[c] += face;
            }
        }
    }

    // Zero-length sums (fully degenerate neighbourhoods) stay zero
    let vertices = positions
        .iter()
        .zip(&normals)
        .map(|(p, nrm)| Vertex {
            position: p.to_array(),
            normal: nrm.normalize_or_zero().to_array(),
            uv: [0.0; 2],
        })
        .collect();

    TerrainMesh { vertices, indices }
}

// Same as `build`, taking the scales from a validated parameter block
pub fn build_with(heights: Heightfield, params: &MeshParams) -> Result<TerrainMesh> {
    params.validate()?;
    Ok(build(heights, params.horizontal_scale, params.vertical_scale))
}

// Legs run from the first vertex to the third and the second one;
// for this grid's winding that points faces of a flat surface up +Y
#[inline]
fn face_normal(first: Vec3, second: Vec3, third: Vec3) -> Vec3 {
    let leg0 = first - third;
    let leg1 = first - second;
    leg0.cross(leg1)
}
