//! Intel framebuffer CMAA extension capability
//!
//! `GL_INTEL_framebuffer_CMAA` exposes a single zero-argument entry point
//! that smooths edges in place on the color attachment of the currently
//! bound framebuffer. The entry point lives outside core GL, so it is
//! resolved once at startup through the context's procedure lookup and
//! stored here as a capability; if either the extension string or the
//! symbol is missing, construction fails and the demonstration aborts
//! before creating any rendering resource.

use glow::HasContext;

use crate::render::window::Window;
use crate::render::{RenderError, RenderResult};

/// Extension string advertised by supporting drivers
pub const CMAA_EXTENSION: &str = "GL_INTEL_framebuffer_CMAA";

/// Name of the extension's only entry point
pub const CMAA_ENTRY_POINT: &str = "glApplyFramebufferAttachmentCMAAINTEL";

/// Resolved handle to the CMAA post-process
pub struct CmaaExtension {
    apply_fn: unsafe extern "system" fn(),
}

impl CmaaExtension {
    /// Resolve the extension against a live context
    ///
    /// # Errors
    ///
    /// [`RenderError::ExtensionUnavailable`] when the driver does not
    /// advertise the extension, [`RenderError::MissingEntryPoint`] when
    /// the advertised entry point fails to resolve. There is no fallback
    /// path for either.
    pub fn resolve(gl: &glow::Context, window: &mut Window) -> RenderResult<Self> {
        if !gl.supported_extensions().contains(CMAA_EXTENSION) {
            return Err(RenderError::ExtensionUnavailable(CMAA_EXTENSION.to_owned()));
        }

        let ptr = window.get_proc_address(CMAA_ENTRY_POINT);
        if ptr.is_null() {
            return Err(RenderError::MissingEntryPoint(CMAA_ENTRY_POINT.to_owned()));
        }

        log::info!("{CMAA_EXTENSION} resolved");
        // Entry point pointers stay valid for the lifetime of the context,
        // which outlives this capability inside the renderer.
        let apply_fn = unsafe { std::mem::transmute::<*const std::ffi::c_void, unsafe extern "system" fn()>(ptr) };
        Ok(Self { apply_fn })
    }

    /// Apply CMAA in place to the color attachment of the currently
    /// bound framebuffer
    ///
    /// The call takes no parameters and returns nothing; its effect is
    /// opaque to this program.
    pub fn apply(&self) {
        unsafe { (self.apply_fn)() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_names_match_vendor_spec() {
        assert_eq!(CMAA_EXTENSION, "GL_INTEL_framebuffer_CMAA");
        assert_eq!(CMAA_ENTRY_POINT, "glApplyFramebufferAttachmentCMAAINTEL");
    }

    #[test]
    #[ignore = "requires GL context"]
    fn resolve_fails_without_extension() {
        // Would test: resolve() on a non-Intel context returns
        // RenderError::ExtensionUnavailable before any resource exists.
    }
}
