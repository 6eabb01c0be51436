use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::Context;
use log::info;
use terrain_core::{TerrainSession, preview};

mod config;

use config::AppConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("terrain.ron"));
    let config = AppConfig::load(&config_path);

    let start = Instant::now();
    let mut session = TerrainSession::new(config.generator, config.mesh)
        .context("initial terrain generation failed")?;

    // Requests come in over a channel, the way an input layer would send them
    let (tx, rx) = mpsc::channel();
    for request in &config.requests {
        tx.send(*request)?;
    }
    drop(tx);
    let applied = session.drain(&rx);
    info!(
        "{}/{} requests applied in {:.2} ms",
        applied,
        config.requests.len(),
        start.elapsed().as_secs_f32() * 1000.0
    );

    let heights = session.heightfield()?;
    let seed = heights.seed();
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {:?}", config.output_dir))?;

    let gray_path = config.output_dir.join(format!("terrain_{}_gray.png", seed));
    preview::grayscale(&heights)
        .save(&gray_path)
        .with_context(|| format!("saving {:?}", gray_path))?;
    info!("Saved {:?}", gray_path);

    let shaded_path = config.output_dir.join(format!("terrain_{}_shaded.png", seed));
    preview::shaded(&heights, session.mesh())?
        .save(&shaded_path)
        .with_context(|| format!("saving {:?}", shaded_path))?;
    info!("Saved {:?}", shaded_path);

    let mesh = session.mesh();
    if let Some((lo, hi)) = mesh.bounds() {
        info!(
            "mesh: {} vertices, {} triangles, bounds {:?} .. {:?}",
            mesh.vertices.len(),
            mesh.triangle_count(),
            lo,
            hi
        );
    }
    Ok(())
}
