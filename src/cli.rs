// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::demos::DemoKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "learn-gpu")]
#[command(about = "Tutorial GPU demos with a first-person camera", long_about = None)]
pub struct Cli {
    /// Demo to run
    #[arg(value_enum, default_value = "cubes")]
    pub demo: DemoKind,

    /// Application configuration (window, shaders, textures)
    #[arg(long, default_value = "config/config.yaml")]
    pub config: PathBuf,

    /// Camera configuration
    #[arg(long = "camera-config", default_value = "config/camera.yaml")]
    pub camera_config: PathBuf,
}
