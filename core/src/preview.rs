// Image previews of a heightfield: greyscale, or colored and lit by the mesh normals
use glam::Vec3;
use image::{GrayImage, Luma, Rgb, RgbImage};
use palette::{Gradient, LinSrgb};

use crate::error::{Result, TerrainError};
use crate::heightfield::Heightfield;
use crate::mesh::TerrainMesh;

// Directional light shining down and away from the viewer
const LIGHT_DIRECTION: Vec3 = Vec3::new(0.0, -1.0, -1.0);

// One pixel per cell, 0 = lowest point, 255 = highest
pub fn grayscale(heights: &Heightfield) -> GrayImage {
    let size = heights.size() as u32;
    let norm = heights.normalized();
    GrayImage::from_fn(size, size, |x, y| {
        let h = norm[heights.index(x as usize, y as usize)];
        Luma([(h * 255.0).round() as u8])
    })
}

// Deep water to beach to grass to rock to snow
fn terrain_gradient() -> Gradient<LinSrgb> {
    Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)),
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)),
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)),
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)),
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)),
    ])
}

// Height-colored image lit with the per-vertex normals of `mesh`,
// which must have been built from `heights`
pub fn shaded(heights: &Heightfield, mesh: &TerrainMesh) -> Result<RgbImage> {
    let n = heights.size();
    if mesh.vertices.len() != n * n {
        return Err(TerrainError::invalid(format!(
            "mesh has {} vertices, heightfield has {} cells",
            mesh.vertices.len(),
            n * n
        )));
    }

    let gradient = terrain_gradient();
    let to_light = -LIGHT_DIRECTION.normalize();
    let norm = heights.normalized();

    Ok(RgbImage::from_fn(n as u32, n as u32, |x, y| {
        let i = heights.index(x as usize, y as usize);
        let rgb = gradient.get(norm[i]).into_format::<u8>();
        // Lambert term, lifted so faces turned away are dimmed rather than black
        let lambert = Vec3::from(mesh.vertices[i].normal).dot(to_light).max(0.0);
        let light = (lambert * 0.5 + 0.5).clamp(0.0, 1.0);
        Rgb([
            (rgb.red as f32 * light) as u8,
            (rgb.green as f32 * light) as u8,
            (rgb.blue as f32 * light) as u8,
        ])
    }))
}
