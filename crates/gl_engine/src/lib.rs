//! # GL Engine
//!
//! A small OpenGL rendering layer demonstrating Intel's conservative
//! morphological anti-aliasing extension (`GL_INTEL_framebuffer_CMAA`).
//!
//! ## Features
//!
//! - **GLFW Windowing**: Window and 3.3 core profile context creation
//! - **CMAA Post-Process**: Extension discovery and per-frame invocation
//! - **Offscreen Rendering**: Optional intermediate color target with blit
//! - **Driver Diagnostics**: GL debug output routed into `log`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_engine::{FrameRenderer, RendererConfig, Window};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RendererConfig::default();
//!     let mut window = Window::new(&config.title, config.window_width, config.window_height)?;
//!     let mut renderer = FrameRenderer::new(&mut window, config)?;
//!
//!     while !window.should_close() {
//!         renderer.render_frame();
//!         window.swap_buffers();
//!         window.poll_events();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

pub mod config;
pub mod foundation;
pub mod render;

pub use render::renderer::FrameRenderer;
pub use render::renderer_config::{ColorPrecision, RendererConfig};
pub use render::window::{Window, WindowError};
pub use render::{RenderError, RenderResult};
