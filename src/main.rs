use anyhow::Context;
use clap::Parser;

use learn_gpu::camera::Camera;
use learn_gpu::cli::Cli;
use learn_gpu::config::AppConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config).context("failed to load application config")?;
    let camera = Camera::load(&cli.camera_config).context("camera initialization failed")?;
    log::info!(
        "Camera at {:?}, fov {:.1}",
        camera.position,
        camera.field_of_view()
    );

    learn_gpu::app::run(cli.demo, config, camera)
}
