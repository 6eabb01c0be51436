use crate::error::{Result, TerrainError};
use crate::params::validate_size;

// size×size grid of heights stored as one flat row-major buffer.
// Cell (x, y) lives at index x + y * size.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightfield {
    size: usize,
    seed: u64,
    data: Vec<f32>,
}

impl Heightfield {
    // All-zero grid; only the generator hands these out
    pub(crate) fn zeroed(size: usize, seed: u64) -> Self {
        Self {
            size,
            seed,
            data: vec![0.0; size * size],
        }
    }

    // Wrap an existing buffer, e.g. heights loaded from elsewhere
    pub fn from_flat(size: usize, data: Vec<f32>) -> Result<Self> {
        validate_size(size)?;
        if data.len() != size * size {
            return Err(TerrainError::invalid(format!(
                "height buffer has {} values, expected {}",
                data.len(),
                size * size
            )));
        }
        Ok(Self {
            size,
            seed: 0,
            data,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    // Seed that produced this grid (the resolved one when 0 was requested).
    // 0 for grids built with from_flat.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.size
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.index(x, y)]
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, value: f32) {
        let i = self.index(x, y);
        self.data[i] = value;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    // Lowest and highest height in the grid
    pub fn min_max(&self) -> (f32, f32) {
        self.data
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), &h| (lo.min(h), hi.max(h)))
    }

    // Heights remapped to [0, 1]; a perfectly flat grid maps to 0.5
    pub fn normalized(&self) -> Vec<f32> {
        let (min, max) = self.min_max();
        let range = max - min;
        if range.abs() < f32::EPSILON {
            return vec![0.5; self.data.len()];
        }
        self.data.iter().map(|&h| (h - min) / range).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_indexing() {
        let data: Vec<f32> = (0..9).map(|i| i as f32).collect();
        let hf = Heightfield::from_flat(3, data).unwrap();
        assert_eq!(hf.get(0, 0), 0.0);
        assert_eq!(hf.get(2, 0), 2.0);
        assert_eq!(hf.get(0, 1), 3.0);
        assert_eq!(hf.get(2, 2), 8.0);
        assert_eq!(hf.min_max(), (0.0, 8.0));
    }

    #[test]
    fn from_flat_checks_shape() {
        assert!(Heightfield::from_flat(3, vec![0.0; 8]).is_err());
        assert!(Heightfield::from_flat(4, vec![0.0; 16]).is_err());
        assert!(Heightfield::from_flat(5, vec![0.0; 25]).is_ok());
    }

    #[test]
    fn normalize_flat_and_ramp() {
        let flat = Heightfield::from_flat(3, vec![7.0; 9]).unwrap();
        assert!(flat.normalized().iter().all(|&v| v == 0.5));

        let ramp = Heightfield::from_flat(3, (0..9).map(|i| i as f32 * 2.0).collect()).unwrap();
        let n = ramp.normalized();
        assert_eq!(n[0], 0.0);
        assert_eq!(n[8], 1.0);
        assert_eq!(n[4], 0.5);
    }
}
