// config.rs - Typed YAML configuration for the demos and the camera
use glam::Vec3;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::camera::{
    DEFAULT_LOOK_SENSITIVITY, DEFAULT_MOVE_SPEED, DEFAULT_PITCH, DEFAULT_YAW, MAX_FIELD_OF_VIEW,
};
use crate::error::ConfigError;

pub const DEFAULT_CLEAR_COLOR: [f64; 4] = [0.2, 0.3, 0.3, 1.0];

const MIN_LENGTH_SQUARED: f32 = 1e-12;
// sin² of the smallest accepted angle between forward and world_up
const MIN_CROSS_LENGTH_SQUARED: f32 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl WindowConfig {
    /// Window centre in pixels, used to seed the cursor
    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 600, height: 600 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShaderPaths {
    pub cube: Option<PathBuf>,
    pub toy: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VertexPaths {
    pub cube: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TexturePaths {
    pub container: Option<PathBuf>,
    pub awesomeface: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self { near: 0.1, far: 100.0 }
    }
}

/// Application-wide settings: window, clear colour and asset paths
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub window: WindowConfig,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_clear_color")]
    pub clear_color: [f64; 4],
    #[serde(default)]
    pub shaders: ShaderPaths,
    #[serde(default)]
    pub vertices: VertexPaths,
    #[serde(default)]
    pub textures: TexturePaths,
    #[serde(default)]
    pub projection: ProjectionConfig,
}

fn default_title() -> String {
    "LearnGPU".to_string()
}

fn default_clear_color() -> [f64; 4] {
    DEFAULT_CLEAR_COLOR
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config: Self = load_yaml(path)?;
        validate_window(path, &config.window)?;
        Ok(config)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let path = Path::new("<memory>");
        let config: Self = parse_yaml(path, source)?;
        validate_window(path, &config.window)?;
        Ok(config)
    }
}

/// Initial camera state. Every field is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CameraConfig {
    pub window: WindowConfig,
    pub move_speed: f32,
    pub look_sensitivity: f32,
    /// Falls back to `look_sensitivity` when absent
    #[serde(default)]
    pub zoom_sensitivity: Option<f32>,
    pub field_of_view: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub position: [f32; 3],
    pub forward: [f32; 3],
    pub world_up: [f32; 3],
}

impl CameraConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config: Self = load_yaml(path)?;
        config.validate(path)?;
        Ok(config)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let path = Path::new("<memory>");
        let config: Self = parse_yaml(path, source)?;
        config.validate(path)?;
        Ok(config)
    }

    /// Check the window size and that `forward` and `world_up` span a usable basis.
    /// `path` only labels the error.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        validate_window(path, &self.window)?;
        validate_direction(path, "forward", self.forward)?;
        validate_direction(path, "world_up", self.world_up)?;

        let forward = Vec3::from_array(self.forward).normalize();
        let world_up = Vec3::from_array(self.world_up).normalize();
        if forward.cross(world_up).length_squared() < MIN_CROSS_LENGTH_SQUARED {
            return Err(ConfigError::InvalidVector {
                path: path.to_path_buf(),
                field: "forward",
                value: self.forward,
                reason: "parallel to world_up",
            });
        }
        Ok(())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            move_speed: DEFAULT_MOVE_SPEED,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
            zoom_sensitivity: None,
            field_of_view: MAX_FIELD_OF_VIEW,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            position: [0.0, 0.0, 0.0],
            forward: [0.0, 0.0, -1.0],
            world_up: [0.0, 1.0, 0.0],
        }
    }
}

fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded configuration {}", path.display());
    parse_yaml(path, &source)
}

fn parse_yaml<T: DeserializeOwned>(path: &Path, source: &str) -> Result<T, ConfigError> {
    let blank = source.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    });
    if blank {
        return Err(ConfigError::Empty { path: path.to_path_buf() });
    }

    let document: serde_yaml::Value =
        serde_yaml::from_str(source).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;

    let empty = match &document {
        serde_yaml::Value::Null => true,
        serde_yaml::Value::Mapping(map) => map.is_empty(),
        _ => false,
    };
    if empty {
        return Err(ConfigError::Empty { path: path.to_path_buf() });
    }

    serde_yaml::from_value(document).map_err(|source| ConfigError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_direction(
    path: &Path,
    field: &'static str,
    value: [f32; 3],
) -> Result<(), ConfigError> {
    let vector = Vec3::from_array(value);
    if !vector.is_finite() || vector.length_squared() < MIN_LENGTH_SQUARED {
        return Err(ConfigError::InvalidVector {
            path: path.to_path_buf(),
            field,
            value,
            reason: "must be a finite, non-zero direction",
        });
    }
    Ok(())
}

fn validate_window(path: &Path, window: &WindowConfig) -> Result<(), ConfigError> {
    if window.width == 0 || window.height == 0 {
        return Err(ConfigError::InvalidWindow {
            path: path.to_path_buf(),
            width: window.width,
            height: window.height,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_center_seeds_cursor() {
        let window = WindowConfig { width: 800, height: 600 };
        assert_eq!(window.center(), (400.0, 300.0));
    }

    #[test]
    fn app_config_defaults_optional_sections() {
        let config = AppConfig::from_yaml_str("window: { width: 640, height: 480 }").unwrap();
        assert_eq!(config.title, "LearnGPU");
        assert_eq!(config.clear_color, DEFAULT_CLEAR_COLOR);
        assert_eq!(config.projection, ProjectionConfig::default());
        assert!(config.shaders.cube.is_none());
        assert!(config.textures.container.is_none());
    }

    #[test]
    fn scalar_document_is_invalid() {
        let err = AppConfig::from_yaml_str("42").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
