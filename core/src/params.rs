use serde::{Deserialize, Serialize};

use crate::error::{Result, TerrainError};

// Inputs of the diamond-square generator.
// size must be 2^n + 1, e.g. 129, 257, 513
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorParams {
    #[serde(default = "default_size")]
    pub size: usize,
    // 0 draws a fresh seed from OS entropy
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_range_min")]
    pub range_min: f32,
    #[serde(default = "default_range_max")]
    pub range_max: f32,
    // fraction of the height range used as jitter on the coarsest step
    #[serde(default = "default_roughness")]
    pub roughness: f32,
}

fn default_size() -> usize {
    257
}
fn default_range_min() -> f32 {
    0.0
}
fn default_range_max() -> f32 {
    255.0
}
fn default_roughness() -> f32 {
    0.4
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            size: default_size(),
            seed: 0,
            range_min: default_range_min(),
            range_max: default_range_max(),
            roughness: default_roughness(),
        }
    }
}

impl GeneratorParams {
    pub fn new(size: usize, seed: u64, range_min: f32, range_max: f32, roughness: f32) -> Self {
        Self {
            size,
            seed,
            range_min,
            range_max,
            roughness,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_size(self.size)?;
        if !self.range_min.is_finite() || !self.range_max.is_finite() {
            return Err(TerrainError::invalid(format!(
                "height range [{}, {}] must be finite",
                self.range_min, self.range_max
            )));
        }
        if self.range_min >= self.range_max {
            return Err(TerrainError::invalid(format!(
                "range_min {} must be below range_max {}",
                self.range_min, self.range_max
            )));
        }
        if !self.roughness.is_finite() || self.roughness < 0.0 {
            return Err(TerrainError::invalid(format!(
                "roughness {} must be a non-negative number",
                self.roughness
            )));
        }
        Ok(())
    }
}

// size - 1 has to be a power of two and at least 2
pub fn validate_size(size: usize) -> Result<()> {
    if size < 3 || !(size - 1).is_power_of_two() {
        return Err(TerrainError::invalid(format!(
            "grid size {} is not of the form 2^n + 1 (n >= 1)",
            size
        )));
    }
    // mesh indices are u32, so the last cell index has to fit one
    let cells = size.checked_mul(size);
    if cells.and_then(|c| u32::try_from(c - 1).ok()).is_none() {
        return Err(TerrainError::invalid(format!(
            "grid size {} is too large for 32-bit mesh indices",
            size
        )));
    }
    Ok(())
}

// Scaling applied when turning heights into vertex positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshParams {
    #[serde(default = "default_horizontal_scale")]
    pub horizontal_scale: f32,
    #[serde(default = "default_vertical_scale")]
    pub vertical_scale: f32,
}

fn default_horizontal_scale() -> f32 {
    0.25
}
fn default_vertical_scale() -> f32 {
    0.2
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            horizontal_scale: default_horizontal_scale(),
            vertical_scale: default_vertical_scale(),
        }
    }
}

impl MeshParams {
    pub fn validate(&self) -> Result<()> {
        if !self.horizontal_scale.is_finite() || !self.vertical_scale.is_finite() {
            return Err(TerrainError::invalid(format!(
                "mesh scales ({}, {}) must be finite",
                self.horizontal_scale, self.vertical_scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        for ok in [3, 5, 9, 17, 257, 513] {
            assert!(validate_size(ok).is_ok(), "{} should be valid", ok);
        }
        for bad in [0, 1, 2, 4, 6, 100, 256] {
            assert!(validate_size(bad).is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn size_is_capped_by_u32_indices() {
        // 32769^2 cells still index with u32, 65537^2 do not
        assert!(validate_size(32769).is_ok());
        let err = validate_size(65537).unwrap_err();
        assert!(err.to_string().contains("too large"));
        assert!(validate_size((1usize << 40) + 1).is_err());
        assert!(GeneratorParams::new(65537, 1, 0.0, 1.0, 0.5).validate().is_err());
    }

    #[test]
    fn range_must_be_ordered() {
        let p = GeneratorParams::new(5, 1, 10.0, 5.0, 0.5);
        assert!(matches!(p.validate(), Err(TerrainError::InvalidParameter(_))));
        let p = GeneratorParams::new(5, 1, 5.0, 5.0, 0.5);
        assert!(p.validate().is_err());
    }

    #[test]
    fn roughness_must_be_non_negative() {
        assert!(GeneratorParams::new(5, 1, 0.0, 1.0, -0.1).validate().is_err());
        assert!(GeneratorParams::new(5, 1, 0.0, 1.0, f32::NAN).validate().is_err());
        assert!(GeneratorParams::new(5, 1, 0.0, 1.0, 0.0).validate().is_ok());
    }

    #[test]
    fn defaults_are_valid() {
        assert!(GeneratorParams::default().validate().is_ok());
        assert!(MeshParams::default().validate().is_ok());
        assert!(
            MeshParams {
                horizontal_scale: f32::INFINITY,
                vertical_scale: 1.0
            }
            .validate()
            .is_err()
        );
    }
}
