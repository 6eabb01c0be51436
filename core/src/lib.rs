// core holds the diamond-square generator and the heightfield-to-mesh conversion
pub mod diamond_square;
pub mod error;
pub mod heightfield;
pub mod mesh;
pub mod params;
pub mod preview;
pub mod rng;
pub mod session;

pub use diamond_square::{DiamondSquare, generate, generate_with};
pub use error::{Result, TerrainError};
pub use heightfield::Heightfield;
pub use mesh::{TerrainMesh, Vertex, build, build_with};
pub use params::{GeneratorParams, MeshParams};
pub use rng::UniformSource;
pub use session::{RegenRequest, TerrainSession};
