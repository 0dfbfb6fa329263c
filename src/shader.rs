use std::borrow::Cow;
use std::path::Path;

use crate::error::AssetError;

pub const CUBE_SHADER: &str = include_str!("../shaders/cube.wgsl");
pub const TOY_SHADER: &str = include_str!("../shaders/toy.wgsl");

/// WGSL source from `path`, or the embedded `fallback` when no path is configured
pub fn load_source(
    path: Option<&Path>,
    fallback: &'static str,
) -> Result<Cow<'static, str>, AssetError> {
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path).map_err(|source| AssetError::Shader {
                path: path.to_path_buf(),
                source,
            })?;
            log::debug!("Loaded shader {}", path.display());
            Ok(Cow::Owned(source))
        }
        None => Ok(Cow::Borrowed(fallback)),
    }
}

pub fn create_module(
    device: &wgpu::Device,
    label: &str,
    source: Cow<'static, str>,
) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_embedded_source() {
        let source = load_source(None, CUBE_SHADER).unwrap();
        assert!(matches!(source, Cow::Borrowed(_)));
        assert!(source.contains("vs_main"));
    }

    #[test]
    fn missing_shader_file_is_an_error() {
        let err = load_source(Some(Path::new("no/such/shader.wgsl")), TOY_SHADER).unwrap_err();
        assert!(matches!(err, AssetError::Shader { .. }));
    }
}
