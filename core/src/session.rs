use std::sync::mpsc::Receiver;

use log::{info, warn};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::diamond_square::DiamondSquare;
use crate::error::Result;
use crate::heightfield::Heightfield;
use crate::mesh::{self, TerrainMesh};
use crate::params::{GeneratorParams, MeshParams};
use crate::rng;

// Roughness moves in tenths
const ROUGHNESS_STEP: f32 = 0.1;
// NewSeed picks from 1..=MAX_RANDOM_SEED
const MAX_RANDOM_SEED: u64 = 100;

// Things a host can ask for; each one ends in a full regeneration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RegenRequest {
    RoughnessUp,
    RoughnessDown,
    NewSeed,
    SetSeed(u64),
    SetSize(usize),
    Regenerate,
}

// Owns the current parameters and the mesh built from them.
// A request either swaps in a completely new mesh or leaves everything as it was.
pub struct TerrainSession {
    generator: GeneratorParams,
    mesh_params: MeshParams,
    mesh: TerrainMesh,
    // seed that actually produced `mesh`
    current_seed: u64,
    seeds: ChaCha8Rng,
}

impl TerrainSession {
    pub fn new(generator: GeneratorParams, mesh_params: MeshParams) -> Result<Self> {
        Self::with_seed_rng(generator, mesh_params, rng::resolve_seed(0))
    }

    // `seed_rng_seed` drives NewSeed requests, so a whole session can be replayed
    pub fn with_seed_rng(
        generator: GeneratorParams,
        mesh_params: MeshParams,
        seed_rng_seed: u64,
    ) -> Result<Self> {
        let mut session = Self {
            generator,
            mesh_params,
            mesh: TerrainMesh::default(),
            current_seed: 0,
            seeds: rng::seeded(seed_rng_seed),
        };
        session.rebuild(generator)?;
        Ok(session)
    }

    pub fn params(&self) -> &GeneratorParams {
        &self.generator
    }

    pub fn mesh_params(&self) -> &MeshParams {
        &self.mesh_params
    }

    pub fn mesh(&self) -> &TerrainMesh {
        &self.mesh
    }

    pub fn current_seed(&self) -> u64 {
        self.current_seed
    }

    // Recreate the heightfield behind the current mesh, e.g. for a preview
    pub fn heightfield(&self) -> Result<Heightfield> {
        let params = GeneratorParams {
            seed: self.current_seed,
            ..self.generator
        };
        Ok(DiamondSquare::new(params)?.generate())
    }

    pub fn apply(&mut self, request: RegenRequest) -> Result<&TerrainMesh> {
        let mut next = self.generator;
        match request {
            RegenRequest::RoughnessUp => {
                next.roughness = step_roughness(next.roughness, 1.0);
            }
            RegenRequest::RoughnessDown => {
                next.roughness = step_roughness(next.roughness, -1.0);
            }
            RegenRequest::NewSeed => {
                next.seed = self.seeds.gen_range(1..=MAX_RANDOM_SEED);
            }
            RegenRequest::SetSeed(seed) => next.seed = seed,
            RegenRequest::SetSize(size) => next.size = size,
            RegenRequest::Regenerate => {}
        }

        if let Err(e) = self.rebuild(next) {
            warn!("{:?} rejected, keeping previous terrain: {}", request, e);
            return Err(e);
        }
        Ok(&self.mesh)
    }

    // Handle everything queued on the channel; returns how many requests succeeded
    pub fn drain(&mut self, requests: &Receiver<RegenRequest>) -> usize {
        requests
            .try_iter()
            .filter(|&request| self.apply(request).is_ok())
            .count()
    }

    fn rebuild(&mut self, next: GeneratorParams) -> Result<()> {
        let heights = DiamondSquare::new(next)?.generate();
        let seed = heights.seed();
        let mesh = mesh::build_with(heights, &self.mesh_params)?;
        info!(
            "terrain regenerated: {}x{} seed={} roughness={:.1} ({} triangles)",
            next.size,
            next.size,
            seed,
            next.roughness,
            mesh.triangle_count()
        );
        self.generator = next;
        self.current_seed = seed;
        self.mesh = mesh;
        Ok(())
    }
}

fn step_roughness(current: f32, direction: f32) -> f32 {
    let tenths = (current / ROUGHNESS_STEP).round() + direction;
    (tenths * ROUGHNESS_STEP).max(0.0)
}
