use log::debug;

use crate::error::Result;
use crate::heightfield::Heightfield;
use crate::params::GeneratorParams;
use crate::rng::{self, UniformSource};

// 2D fractal heightfield generator using the Diamond–Square algorithm
#[derive(Debug, Clone)]
pub struct DiamondSquare {
    params: GeneratorParams,
}

impl DiamondSquare {
    pub fn new(params: GeneratorParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    // Generate from the configured seed (0 = fresh entropy)
    pub fn generate(&self) -> Heightfield {
        let seed = rng::resolve_seed(self.params.seed);
        let mut source = rng::seeded(seed);
        debug!(
            "diamond-square: size={} seed={} (requested {}) range=[{}, {}] roughness={}",
            self.params.size,
            seed,
            self.params.seed,
            self.params.range_min,
            self.params.range_max,
            self.params.roughness
        );
        self.fill(seed, &mut source)
    }

    // Generate drawing every random value from `source`.
    // The resulting heightfield reports the configured seed.
    pub fn generate_with<R: UniformSource + ?Sized>(&self, source: &mut R) -> Heightfield {
        self.fill(self.params.seed, source)
    }

    fn fill<R: UniformSource + ?Sized>(&self, seed: u64, rng: &mut R) -> Heightfield {
        let GeneratorParams {
            size,
            range_min: lo,
            range_max: hi,
            roughness,
            ..
        } = self.params;
        let s = size - 1;
        let mut grid = Heightfield::zeroed(size, seed);

        // Corners first, in a fixed order: (0,0), (s,0), (0,s), (s,s)
        grid.set(0, 0, rng.range(lo, hi));
        grid.set(s, 0, rng.range(lo, hi));
        grid.set(0, s, rng.range(lo, hi));
        grid.set(s, s, rng.range(lo, hi));

        // Step is the edge length of the cells being subdivided
        let mut step = s;
        while step > 1 {
            let half = step / 2;
            // Jitter shrinks with the step so detail gets finer at each level
            let noise = (hi - lo) * roughness * (step as f32 / s as f32);

            // Diamond step: cell centers from their four corners
            for y in (0..s).step_by(step) {
                for x in (0..s).step_by(step) {
                    let avg = (grid.get(x, y)
                        + grid.get(x + step, y)
                        + grid.get(x, y + step)
                        + grid.get(x + step, y + step))
                        / 4.0;
                    grid.set(x + half, y + half, avg + rng.range(-noise, noise));
                }
            }

            // Square step: edge midpoints from two corners, the cell center
            // and the neighbouring cell's center when there is one
            for y in (0..s).step_by(step) {
                for x in (0..s).step_by(step) {
                    let s0 = grid.get(x, y);
                    let s1 = grid.get(x + step, y);
                    let s2 = grid.get(x, y + step);
                    let s3 = grid.get(x + step, y + step);
                    let cn = grid.get(x + half, y + half);

                    let top = if y == 0 {
                        (s0 + s1 + cn) / 3.0
                    } else {
                        (s0 + s1 + cn + grid.get(x + half, y - half)) / 4.0
                    };
                    let left = if x == 0 {
                        (s0 + cn + s2) / 3.0
                    } else {
                        (s0 + cn + s2 + grid.get(x - half, y + half)) / 4.0
                    };
                    let right = if x >= s - step {
                        (s1 + cn + s3) / 3.0
                    } else {
                        (s1 + cn + s3 + grid.get(x + step + half, y + half)) / 4.0
                    };
                    let bottom = if y >= s - step {
                        (cn + s2 + s3) / 3.0
                    } else {
                        (cn + s2 + s3 + grid.get(x + half, y + step + half)) / 4.0
                    };

                    // Draw order matters: top, left, right, bottom
                    grid.set(x + half, y, top + rng.range(-noise, noise));
                    grid.set(x, y + half, left + rng.range(-noise, noise));
                    grid.set(x + step, y + half, right + rng.range(-noise, noise));
                    grid.set(x + half, y + step, bottom + rng.range(-noise, noise));
                }
            }

            step = half;
        }

        grid
    }
}

// Validate, then run diamond-square once
pub fn generate(params: GeneratorParams) -> Result<Heightfield> {
    Ok(DiamondSquare::new(params)?.generate())
}

// Same as `generate` but with a caller-supplied random stream
pub fn generate_with<R: UniformSource + ?Sized>(
    params: GeneratorParams,
    source: &mut R,
) -> Result<Heightfield> {
    Ok(DiamondSquare::new(params)?.generate_with(source))
}
