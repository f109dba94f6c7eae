//! Offscreen render target
//!
//! An immutable-storage color texture attached to a framebuffer object.
//! The frame is rendered here, CMAA runs on the attachment, and the
//! result is blitted into the window's default framebuffer with
//! nearest-neighbor sampling. The target is recreated on resize so it
//! always matches the window's framebuffer size.

use glow::HasContext;

use crate::render::renderer_config::ColorPrecision;
use crate::render::{RenderError, RenderResult};

/// Offscreen color attachment plus framebuffer
pub struct OffscreenTarget {
    color: glow::Texture,
    fbo: glow::Framebuffer,
    complete: bool,
}

impl OffscreenTarget {
    /// Allocate the color attachment and framebuffer at the given size
    ///
    /// Framebuffer incompleteness is logged and remembered but is not an
    /// error: rendering proceeds with undefined output, matching the
    /// degraded-mode semantics of shader failures.
    ///
    /// # Errors
    ///
    /// Fails only when the driver refuses to allocate the texture or
    /// framebuffer objects.
    pub fn new(
        gl: &glow::Context,
        width: i32,
        height: i32,
        precision: ColorPrecision,
    ) -> RenderResult<Self> {
        let color = unsafe { gl.create_texture() }.map_err(RenderError::ObjectCreation)?;
        unsafe {
            gl.bind_texture(glow::TEXTURE_2D, Some(color));
            gl.tex_storage_2d(
                glow::TEXTURE_2D,
                1,
                precision.internal_format(),
                width,
                height,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::NEAREST as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::NEAREST as i32,
            );
            gl.bind_texture(glow::TEXTURE_2D, None);
        }

        let fbo = unsafe { gl.create_framebuffer() }.map_err(RenderError::ObjectCreation)?;
        let complete = unsafe {
            gl.bind_framebuffer(glow::FRAMEBUFFER, Some(fbo));
            gl.framebuffer_texture_2d(
                glow::FRAMEBUFFER,
                glow::COLOR_ATTACHMENT0,
                glow::TEXTURE_2D,
                Some(color),
                0,
            );
            let status = gl.check_framebuffer_status(glow::FRAMEBUFFER);
            gl.bind_framebuffer(glow::FRAMEBUFFER, None);
            if status == glow::FRAMEBUFFER_COMPLETE {
                true
            } else {
                log::error!("offscreen framebuffer incomplete (status 0x{status:x})");
                false
            }
        };

        log::debug!("offscreen target allocated at {width}x{height} ({precision:?})");
        Ok(Self {
            color,
            fbo,
            complete,
        })
    }

    /// Bind as the draw target for the frame
    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.bind_framebuffer(glow::FRAMEBUFFER, Some(self.fbo)) }
    }

    /// Copy the color attachment into the default framebuffer
    ///
    /// Nearest-neighbor, the same `region` rectangle on both sides (see
    /// [`crate::render::viewport::Viewport::blit_region`]). Leaves the
    /// default framebuffer bound.
    pub fn blit_to_default(&self, gl: &glow::Context, region: (i32, i32, i32, i32)) {
        let (x0, y0, x1, y1) = region;
        unsafe {
            gl.bind_framebuffer(glow::READ_FRAMEBUFFER, Some(self.fbo));
            gl.bind_framebuffer(glow::DRAW_FRAMEBUFFER, None);
            gl.blit_framebuffer(
                x0,
                y0,
                x1,
                y1,
                x0,
                y0,
                x1,
                y1,
                glow::COLOR_BUFFER_BIT,
                glow::NEAREST,
            );
            gl.bind_framebuffer(glow::FRAMEBUFFER, None);
        }
    }

    /// Whether the framebuffer validated as complete at creation
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Delete framebuffer and color attachment
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_framebuffer(self.fbo);
            gl.delete_texture(self.color);
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    #[ignore = "requires GL context"]
    fn blitted_frame_reaches_default_framebuffer() {
        // Would test: after one offscreen frame, reading the default
        // framebuffer returns the solid fill with no interpolation
        // artifacts at non-edge pixels.
    }
}
