//! Frame renderer
//!
//! Owns every GPU handle (program, triangle, texture, optional offscreen
//! target, CMAA capability) and issues the fixed per-frame sequence:
//! bind target, clear, draw, apply CMAA, blit if offscreen. Handles are
//! deleted in reverse creation order when the renderer is dropped.

use glow::HasContext;

use crate::render::cmaa::CmaaExtension;
use crate::render::geometry::TriangleMesh;
use crate::render::offscreen::OffscreenTarget;
use crate::render::renderer_config::RendererConfig;
use crate::render::shader::{ShaderProgram, TRIANGLE_FRAGMENT_SHADER, TRIANGLE_VERTEX_SHADER};
use crate::render::texture::SourceTexture;
use crate::render::viewport::Viewport;
use crate::render::window::Window;
use crate::render::{debug, RenderResult};

/// Renderer for the CMAA demonstration
pub struct FrameRenderer {
    gl: glow::Context,
    config: RendererConfig,
    viewport: Viewport,
    cmaa: CmaaExtension,
    program: ShaderProgram,
    triangle: TriangleMesh,
    texture: SourceTexture,
    offscreen: Option<OffscreenTarget>,
}

impl FrameRenderer {
    /// Set up all rendering state against the window's context
    ///
    /// The CMAA capability is resolved before any rendering resource is
    /// created, so an unsupported driver aborts startup with nothing to
    /// clean up.
    ///
    /// # Errors
    ///
    /// Fatal errors only: extension or entry point unavailable, or the
    /// driver refusing to create GL objects. Shader and framebuffer
    /// problems are logged and rendering continues degraded.
    pub fn new(window: &mut Window, config: RendererConfig) -> RenderResult<Self> {
        let mut gl = window.load_gl();
        debug::install(&mut gl);

        let cmaa = CmaaExtension::resolve(&gl, window)?;

        let program = ShaderProgram::link(&gl, TRIANGLE_VERTEX_SHADER, TRIANGLE_FRAGMENT_SHADER)?;
        let triangle = TriangleMesh::new(&gl)?;
        let texture = SourceTexture::new(&gl)?;

        let (width, height) = window.get_framebuffer_size();
        let viewport = Viewport::new(width, height);

        let offscreen = if config.offscreen {
            Some(OffscreenTarget::new(
                &gl,
                viewport.width(),
                viewport.height(),
                config.color_precision,
            )?)
        } else {
            None
        };

        let [r, g, b, a] = config.clear_color;
        unsafe {
            gl.viewport(0, 0, viewport.width(), viewport.height());
            gl.clear_color(r, g, b, a);
        }

        log::info!(
            "renderer ready: {}x{}, offscreen={}, precision={:?}",
            viewport.width(),
            viewport.height(),
            config.offscreen,
            config.color_precision
        );

        Ok(Self {
            gl,
            config,
            viewport,
            cmaa,
            program,
            triangle,
            texture,
            offscreen,
        })
    }

    /// Render one frame into the currently selected target
    ///
    /// The caller presents afterwards via [`Window::swap_buffers`].
    pub fn render_frame(&mut self) {
        let gl = &self.gl;

        if let Some(target) = &self.offscreen {
            target.bind(gl);
        }

        unsafe { gl.clear(glow::COLOR_BUFFER_BIT) };

        self.texture.bind(gl);
        self.program.bind(gl);
        self.triangle.draw(gl);

        // In-place post-process on the bound framebuffer's color attachment
        self.cmaa.apply();

        if let Some(target) = &self.offscreen {
            target.blit_to_default(gl, self.viewport.blit_region());
        }
    }

    /// React to a framebuffer size change
    ///
    /// Updates the cached target dimensions and the viewport, and
    /// recreates the offscreen target at the new size so it never goes
    /// stale. Zero-sized updates (minimize) are ignored.
    ///
    /// If the driver refuses the new target, frames fall back to the
    /// default framebuffer until a later resize manages to reallocate it;
    /// the recreation is keyed on the configured mode, not on whether the
    /// previous target still exists.
    pub fn resize(&mut self, width: i32, height: i32) {
        if !self.viewport.resize(width, height) {
            return;
        }

        unsafe { self.gl.viewport(0, 0, width, height) };

        if self.config.offscreen {
            if let Some(old) = self.offscreen.take() {
                old.destroy(&self.gl);
            }
            match OffscreenTarget::new(&self.gl, width, height, self.config.color_precision) {
                Ok(target) => self.offscreen = Some(target),
                Err(err) => log::error!(
                    "failed to recreate offscreen target: {err}; \
                     rendering directly to the default framebuffer until the next resize"
                ),
            }
        }

        log::debug!("resized to {width}x{height}");
    }

    /// Current render target dimensions
    #[must_use]
    pub const fn target_dimensions(&self) -> (i32, i32) {
        (self.viewport.width(), self.viewport.height())
    }

    /// Whether frames go through the offscreen target
    #[must_use]
    pub const fn is_offscreen(&self) -> bool {
        self.offscreen.is_some()
    }
}

impl Drop for FrameRenderer {
    fn drop(&mut self) {
        if let Some(target) = self.offscreen.take() {
            target.destroy(&self.gl);
        }
        self.texture.destroy(&self.gl);
        self.triangle.destroy(&self.gl);
        self.program.destroy(&self.gl);
    }
}

#[cfg(test)]
mod tests {
    #[test]
    #[ignore = "requires GL context"]
    fn resize_updates_target_dimensions_and_viewport() {
        // Would test: after resize(1024, 768), target_dimensions() is
        // (1024, 768) and GL_VIEWPORT reads back (0, 0, 1024, 768).
    }

    #[test]
    #[ignore = "requires GL context"]
    fn windowed_mode_never_binds_an_offscreen_framebuffer() {
        // Would test: with offscreen disabled, FRAMEBUFFER_BINDING stays 0
        // across a frame, so CMAA runs on the default framebuffer.
    }

    #[test]
    #[ignore = "requires GL context"]
    fn failed_offscreen_recreation_is_retried_on_next_resize() {
        // Would test: after a resize where the driver refuses the new
        // target, is_offscreen() is false, and a subsequent successful
        // resize restores it to true rather than staying direct-to-default.
    }

    #[test]
    #[ignore = "requires GL context"]
    fn drop_leaves_no_outstanding_resources() {
        // Would test: dropping the renderer produces no outstanding
        // resource diagnostics from the debug callback.
    }
}
