use anyhow::{Context, Result};

use trirender::config::RenderConfig;
use trirender::scene::Scene;
use trirender::session::Session;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RenderConfig::from_args(std::env::args().skip(1))?;
    log::info!(
        "surface {}x{}, viewpoint {:?}, {} worker threads",
        config.width, config.height, config.viewpoint.0, config.threads
    );

    // Build thread pool based on configured worker count
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build_global()
        .context("failed to build the render thread pool")?;

    let scene = match &config.scene_path {
        Some(path) => Scene::load(path).with_context(|| format!("failed to load scene {}", path.display()))?,
        None => Scene::demo(),
    };
    log::info!("scene has {} points and {} triangles", scene.points.len(), scene.triangles.len());

    let session = Session::new(scene, config.viewpoint, config.width, config.height, config.threads);

    if let Some(output) = &config.output {
        session.frame().save(output)?;
        log::info!("saved {}", output.display());
        return Ok(());
    }

    run_viewer(&config, session)
}

#[cfg(feature = "viewer")]
fn run_viewer(config: &RenderConfig, session: Session) -> Result<()> {
    trirender::viewer::run(config, session)
}

#[cfg(not(feature = "viewer"))]
fn run_viewer(_config: &RenderConfig, _session: Session) -> Result<()> {
    anyhow::bail!("built without the `viewer` feature; pass --out FILE to render a single frame")
}
