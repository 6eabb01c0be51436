// Run settings, loaded from a RON file at startup
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use terrain_core::{GeneratorParams, MeshParams, RegenRequest};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub generator: GeneratorParams,
    #[serde(default)]
    pub mesh: MeshParams,
    // Replayed in order after the first terrain is built
    #[serde(default)]
    pub requests: Vec<RegenRequest>,
    // Where the preview PNGs go
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorParams::default(),
            mesh: MeshParams::default(),
            requests: Vec::new(),
            output_dir: default_output_dir(),
        }
    }
}

impl AppConfig {
    // Missing or unreadable config falls back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(data) => match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            },
            Err(_) => log::info!("No config at {:?}, using defaults", path),
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let c: AppConfig = ron::from_str(
            "(generator: (size: 65, seed: 7), requests: [RoughnessUp, SetSeed(3), NewSeed])",
        )
        .unwrap();
        assert_eq!(c.generator.size, 65);
        assert_eq!(c.generator.seed, 7);
        assert_eq!(c.generator.range_max, 255.0);
        assert_eq!(c.mesh, MeshParams::default());
        assert_eq!(
            c.requests,
            vec![
                RegenRequest::RoughnessUp,
                RegenRequest::SetSeed(3),
                RegenRequest::NewSeed
            ]
        );
        assert_eq!(c.output_dir, PathBuf::from("."));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let c = AppConfig::load(Path::new("/nonexistent/terrain.ron"));
        assert_eq!(c.generator, GeneratorParams::default());
        assert!(c.requests.is_empty());
    }
}
