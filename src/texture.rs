use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::core::WindowDimensions;
use crate::error::AssetError;

pub const DEFAULT_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// A sampled 2D texture with its view and sampler
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Texture {
    /// Decode an image file and upload it. Rows are flipped so that `v = 0`
    /// addresses the bottom of the image.
    pub fn from_path(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: impl AsRef<Path>,
    ) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| AssetError::Texture {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = image.flipv().to_rgba8();
        log::debug!("Loaded texture {} ({}x{})", path.display(), rgba.width(), rgba.height());

        let label = path.to_string_lossy();
        Ok(Self::from_rgba(device, queue, &label, &rgba))
    }

    /// Use the image at `path` when given, otherwise a generated checkerboard
    pub fn from_path_or_checkerboard(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: Option<&Path>,
        colors: [[u8; 4]; 2],
    ) -> Result<Self, AssetError> {
        match path {
            Some(path) => Self::from_path(device, queue, path),
            None => {
                let image = checkerboard_image(256, 32, colors[0], colors[1]);
                Ok(Self::from_rgba(device, queue, "Checkerboard Texture", &image))
            }
        }
    }

    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        image: &RgbaImage,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: image.width(),
            height: image.height(),
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEFAULT_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            texture.as_image_copy(),
            image.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * image.width()),
                rows_per_image: Some(image.height()),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_sampler(device, wgpu::AddressMode::Repeat);
        Self { texture, view, sampler }
    }

    /// Off-screen colour target that can later be sampled
    pub fn render_target(
        device: &wgpu::Device,
        dimensions: WindowDimensions,
        format: wgpu::TextureFormat,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Off-screen Colour Target"),
            size: extent(dimensions),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_sampler(device, wgpu::AddressMode::ClampToEdge);
        Self { texture, view, sampler }
    }
}

/// Depth attachment matching a colour target's size
pub struct DepthTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl DepthTexture {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    pub fn new(device: &wgpu::Device, dimensions: WindowDimensions) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: extent(dimensions),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }

    pub fn stencil_state() -> wgpu::DepthStencilState {
        wgpu::DepthStencilState {
            format: Self::FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }
    }
}

/// Two-colour checkerboard, `size` pixels square with `cell`-pixel tiles
pub fn checkerboard_image(size: u32, cell: u32, a: [u8; 4], b: [u8; 4]) -> RgbaImage {
    let cell = cell.max(1);
    RgbaImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Rgba(a)
        } else {
            Rgba(b)
        }
    })
}

fn extent(dimensions: WindowDimensions) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: dimensions.width.max(1),
        height: dimensions.height.max(1),
        depth_or_array_layers: 1,
    }
}

fn create_sampler(device: &wgpu::Device, address_mode: wgpu::AddressMode) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("Texture Sampler"),
        address_mode_u: address_mode,
        address_mode_v: address_mode,
        address_mode_w: address_mode,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_alternates_cells() {
        let white = [255, 255, 255, 255];
        let black = [0, 0, 0, 255];
        let image = checkerboard_image(4, 2, white, black);

        assert_eq!(image.get_pixel(0, 0).0, white);
        assert_eq!(image.get_pixel(1, 1).0, white);
        assert_eq!(image.get_pixel(2, 0).0, black);
        assert_eq!(image.get_pixel(0, 2).0, black);
        assert_eq!(image.get_pixel(3, 3).0, white);
    }

    #[test]
    fn checkerboard_tolerates_zero_cell() {
        let image = checkerboard_image(2, 0, [1, 1, 1, 1], [2, 2, 2, 2]);
        assert_eq!(image.get_pixel(0, 0).0, [1, 1, 1, 1]);
        assert_eq!(image.get_pixel(1, 0).0, [2, 2, 2, 2]);
    }
}
