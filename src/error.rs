use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading a YAML configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration unavailable: {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration is empty: {path}")]
    Empty { path: PathBuf },
    #[error("invalid configuration {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid window size {width}x{height} in {path}")]
    InvalidWindow { path: PathBuf, width: u32, height: u32 },
    #[error("invalid `{field}` {value:?} in {path}: {reason}")]
    InvalidVector {
        path: PathBuf,
        field: &'static str,
        value: [f32; 3],
        reason: &'static str,
    },
}

/// Failures while loading textures, vertex data or shaders
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load texture {path}: {source}")]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to read vertex file {path}: {source}")]
    VertexFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid float {token:?} in vertex data")]
    InvalidFloat { token: String },
    #[error("vertex data has {len} floats, not a multiple of {stride}")]
    PartialVertex { len: usize, stride: usize },
    #[error("failed to read shader {path}: {source}")]
    Shader {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
