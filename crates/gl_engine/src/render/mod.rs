//! # Rendering System
//!
//! A single-purpose OpenGL renderer: draw one textured triangle, run the
//! Intel CMAA post-process over the result, and (optionally) blit an
//! offscreen color target into the window's framebuffer.
//!
//! ## Architecture
//!
//! - **Window**: GLFW window and 3.3 core debug context ([`window`])
//! - **FrameRenderer**: owns every GPU handle and the per-frame sequence
//!   ([`renderer`])
//! - **CmaaExtension**: the dynamically resolved vendor entry point,
//!   modeled as a capability rather than a nullable pointer ([`cmaa`])
//! - **Debug sink**: GL debug output mapped into `log` levels ([`debug`])
//!
//! Everything is single-threaded; GPU handles are exclusively owned by
//! the renderer and deleted in its `Drop` impl.

pub mod cmaa;
pub mod debug;
pub mod geometry;
pub mod offscreen;
pub mod renderer;
pub mod renderer_config;
pub mod shader;
pub mod texture;
pub mod viewport;
pub mod window;

use thiserror::Error;

/// Rendering errors
///
/// Only the first two variants are fatal to the demonstration; shader and
/// framebuffer problems are reported to the log and rendering continues
/// in a degraded state.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The driver does not advertise a required extension
    #[error("required extension {0} is not supported")]
    ExtensionUnavailable(String),

    /// The extension is advertised but its entry point did not resolve
    #[error("failed to resolve GL entry point {0}")]
    MissingEntryPoint(String),

    /// The driver refused to create a GL object
    #[error("failed to create GL object: {0}")]
    ObjectCreation(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
