//! Source texture upload
//!
//! The triangle is textured with a fixed 2x2 RGB image (red, green, blue,
//! yellow texels) uploaded once at startup. With linear filtering the
//! four texels blend into a gradient across the triangle, which gives the
//! CMAA pass actual edges to work on.

use glow::HasContext;

use crate::render::{RenderError, RenderResult};

/// The 2x2 RGB texel data: red, green, blue, yellow
pub const TEXTURE_DATA: [u8; 12] = [
    255, 0, 0, //
    0, 255, 0, //
    0, 0, 255, //
    255, 255, 0, //
];

/// Immutable 2x2 texture sampled by the fragment stage
pub struct SourceTexture {
    texture: glow::Texture,
}

impl SourceTexture {
    /// Upload the fixed 2x2 image
    ///
    /// # Errors
    ///
    /// Fails only when the driver refuses to allocate the texture object.
    pub fn new(gl: &glow::Context) -> RenderResult<Self> {
        let texture = unsafe { gl.create_texture() }.map_err(RenderError::ObjectCreation)?;
        unsafe {
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGB16 as i32,
                2,
                2,
                0,
                glow::RGB,
                glow::UNSIGNED_BYTE,
                Some(&TEXTURE_DATA),
            );
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
        }

        Ok(Self { texture })
    }

    /// Bind to texture unit 0
    pub fn bind(&self, gl: &glow::Context) {
        unsafe {
            gl.active_texture(glow::TEXTURE0);
            gl.bind_texture(glow::TEXTURE_2D, Some(self.texture));
        }
    }

    /// Delete the texture
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_texture(self.texture) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_is_two_by_two_rgb() {
        // 4 texels, 3 bytes each
        assert_eq!(TEXTURE_DATA.len(), 12);
    }

    #[test]
    fn test_texel_colors() {
        assert_eq!(&TEXTURE_DATA[0..3], &[255, 0, 0]);
        assert_eq!(&TEXTURE_DATA[3..6], &[0, 255, 0]);
        assert_eq!(&TEXTURE_DATA[6..9], &[0, 0, 255]);
        assert_eq!(&TEXTURE_DATA[9..12], &[255, 255, 0]);
    }
}
