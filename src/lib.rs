pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod demos;
pub mod error;
pub mod frame;
pub mod mesh;
pub mod shader;
pub mod texture;
pub mod types;

pub use app::{run, AppContext};
pub use camera::{Camera, Direction};
pub use config::{AppConfig, CameraConfig};
pub use error::{AssetError, ConfigError};
