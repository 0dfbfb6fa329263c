use glam::{Mat4, Vec3};
use std::path::Path;

use crate::error::AssetError;

/// Floats per vertex in the text format: x y z u v
pub const VERTEX_STRIDE: usize = 5;

const CUBE_SOURCE: &str = include_str!("../assets/cube.txt");

/// World-space positions of the ten demo cubes
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Textured vertex: position followed by texture coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Parse whitespace-separated floats
pub fn parse_floats(source: &str) -> Result<Vec<f32>, AssetError> {
    source
        .split_whitespace()
        .map(|token| {
            token.parse::<f32>().map_err(|_| AssetError::InvalidFloat {
                token: token.to_string(),
            })
        })
        .collect()
}

pub fn read_floats(path: impl AsRef<Path>) -> Result<Vec<f32>, AssetError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| AssetError::VertexFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_floats(&source)
}

/// Group a flat float list into vertices of `VERTEX_STRIDE` floats each
pub fn vertices_from_floats(floats: &[f32]) -> Result<Vec<Vertex>, AssetError> {
    if floats.len() % VERTEX_STRIDE != 0 {
        return Err(AssetError::PartialVertex {
            len: floats.len(),
            stride: VERTEX_STRIDE,
        });
    }

    Ok(floats
        .chunks_exact(VERTEX_STRIDE)
        .map(|v| Vertex {
            position: [v[0], v[1], v[2]],
            uv: [v[3], v[4]],
        })
        .collect())
}

/// The built-in unit cube, 36 vertices
pub fn cube_vertices() -> Result<Vec<Vertex>, AssetError> {
    vertices_from_floats(&parse_floats(CUBE_SOURCE)?)
}

/// Cube vertices from a file, or the built-in cube when no path is given
pub fn load_cube_vertices(path: Option<&Path>) -> Result<Vec<Vertex>, AssetError> {
    match path {
        Some(path) => vertices_from_floats(&read_floats(path)?),
        None => cube_vertices(),
    }
}

/// Model matrix for a demo cube at `position` after `time` seconds.
///
/// The cube swings by `90 * sin(t)` degrees around the axis `(1, sin t, cos t)`.
pub fn cube_model(position: Vec3, time: f32) -> Mat4 {
    let angle = (90.0 * time.sin()).to_radians();
    let axis = Vec3::new(1.0, time.sin(), time.cos()).normalize();
    Mat4::from_translation(position) * Mat4::from_axis_angle(axis, angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_cube_has_36_vertices() {
        let vertices = cube_vertices().unwrap();
        assert_eq!(vertices.len(), 36);
        assert!(vertices
            .iter()
            .all(|v| v.position.iter().all(|c| c.abs() == 0.5)));
    }

    #[test]
    fn cube_model_at_time_zero_is_translation() {
        let position = Vec3::new(1.0, 2.0, 3.0);
        let model = cube_model(position, 0.0);
        let expected = Mat4::from_translation(position);
        assert!(model.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn cube_model_keeps_translation() {
        let position = CUBE_POSITIONS[1];
        let model = cube_model(position, 1.3);
        assert!(model.w_axis.truncate().abs_diff_eq(position, 1e-6));
    }
}
