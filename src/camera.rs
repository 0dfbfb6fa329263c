use glam::{Mat4, Vec3};
use std::path::Path;

use crate::config::CameraConfig;
use crate::error::ConfigError;

pub const DEFAULT_MOVE_SPEED: f32 = 2.5;
pub const DEFAULT_LOOK_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;

pub const MIN_FIELD_OF_VIEW: f32 = 1.0;
pub const MAX_FIELD_OF_VIEW: f32 = 45.0;
pub const PITCH_LIMIT: f32 = 89.0;

/// Scroll offsets are halved before they touch the field of view
const ZOOM_SCALE: f32 = 0.5;

/// Cursor seed used when no window size is known (centre of a 600x600 window)
const DEFAULT_CURSOR: f32 = 300.0;

/// Direction of a single keyboard-driven camera step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

/// First-person camera driven by pointer motion, scroll and directional keys.
///
/// Angles are kept in degrees. `pitch` stays inside `[-89, 89]` and the field
/// of view inside `[1, 45]` after every mutation.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    move_speed: f32,
    look_sensitivity: f32,
    zoom_sensitivity: f32,
    field_of_view: f32,
    last_cursor_x: f32,
    last_cursor_y: f32,
}

impl Camera {
    /// Load a camera from a YAML file.
    ///
    /// Fails if the file is missing, empty, or lacks a required field.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = CameraConfig::load(path)?;
        Self::from_config(&config)
    }

    /// Build a camera from configuration values. `forward` and `world_up` are
    /// normalized; a zero or parallel pair is rejected.
    pub fn from_config(config: &CameraConfig) -> Result<Self, ConfigError> {
        config.validate(Path::new("<camera config>"))?;

        let (cursor_x, cursor_y) = config.window.center();
        let mut camera = Self {
            position: Vec3::from_array(config.position),
            forward: Vec3::from_array(config.forward).normalize(),
            right: Vec3::X,
            up: Vec3::Y,
            world_up: Vec3::from_array(config.world_up).normalize(),
            yaw: config.yaw,
            pitch: config.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            move_speed: config.move_speed,
            look_sensitivity: config.look_sensitivity,
            zoom_sensitivity: config.zoom_sensitivity.unwrap_or(config.look_sensitivity),
            field_of_view: config.field_of_view.clamp(MIN_FIELD_OF_VIEW, MAX_FIELD_OF_VIEW),
            last_cursor_x: cursor_x,
            last_cursor_y: cursor_y,
        };
        camera.update_basis();
        Ok(camera)
    }

    /// Step along `forward` or `right` by `move_speed * elapsed_seconds`
    pub fn move_toward(&mut self, direction: Direction, elapsed_seconds: f32) {
        let distance = self.move_speed * elapsed_seconds;
        match direction {
            Direction::Forward => self.position += self.forward * distance,
            Direction::Backward => self.position -= self.forward * distance,
            Direction::Left => self.position -= self.right * distance,
            Direction::Right => self.position += self.right * distance,
        }
    }

    /// Turn the camera toward an absolute cursor position in window pixels
    pub fn look(&mut self, cursor_x: f32, cursor_y: f32) {
        // window Y grows downward, pitch grows upward
        let delta_x = cursor_x - self.last_cursor_x;
        let delta_y = self.last_cursor_y - cursor_y;
        self.last_cursor_x = cursor_x;
        self.last_cursor_y = cursor_y;

        self.yaw += delta_x * self.look_sensitivity;
        self.pitch =
            (self.pitch + delta_y * self.look_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.forward = Vec3::new(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin())
            .normalize();
        self.update_basis();
    }

    pub fn zoom(&mut self, scroll_offset: f32) {
        let delta = scroll_offset * self.zoom_sensitivity * ZOOM_SCALE;
        self.field_of_view =
            (self.field_of_view - delta).clamp(MIN_FIELD_OF_VIEW, MAX_FIELD_OF_VIEW);
    }

    /// Right-handed look-at matrix. Uses `world_up`, so the camera never rolls.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward, self.world_up)
    }

    /// Field of view in degrees
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.field_of_view.to_radians(), aspect, near, far)
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn look_sensitivity(&self) -> f32 {
        self.look_sensitivity
    }

    pub fn last_cursor(&self) -> (f32, f32) {
        (self.last_cursor_x, self.last_cursor_y)
    }

    // right and up both depend on the current forward
    fn update_basis(&mut self) {
        self.right = self.forward.cross(self.world_up).normalize();
        self.up = self.right.cross(self.forward).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            world_up: Vec3::Y,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            move_speed: DEFAULT_MOVE_SPEED,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
            zoom_sensitivity: DEFAULT_LOOK_SENSITIVITY,
            field_of_view: MAX_FIELD_OF_VIEW,
            last_cursor_x: DEFAULT_CURSOR,
            last_cursor_y: DEFAULT_CURSOR,
        };
        camera.update_basis();
        camera
    }
}
