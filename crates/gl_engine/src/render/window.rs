//! Window management using GLFW
//!
//! Provides window creation with an OpenGL 3.3 core debug context and
//! access to the context's function loader.

use glfw::Context;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("GLFW initialization failed")]
    InitializationFailed,

    #[error("Window creation failed")]
    CreationFailed,
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper with proper resource management
///
/// The wrapped context is made current on creation and stays current for
/// the lifetime of the window; all GL calls assume this.
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    /// Create a window with an OpenGL 3.3 core profile debug context
    ///
    /// # Errors
    ///
    /// Returns an error if GLFW fails to initialize or refuses the
    /// requested context configuration. Both are fatal to the caller.
    pub fn new(title: &str, width: u32, height: u32) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| WindowError::InitializationFailed)?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        glfw.window_hint(glfw::WindowHint::OpenGlDebugContext(true));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.make_current();

        // Set up event polling
        window.set_key_polling(true);
        window.set_close_polling(true);
        window.set_framebuffer_size_polling(true);

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Load GL function pointers from the window's context
    pub fn load_gl(&mut self) -> glow::Context {
        unsafe {
            glow::Context::from_loader_function(|name| {
                self.window.get_proc_address(name) as *const _
            })
        }
    }

    /// Resolve a single GL entry point by name
    ///
    /// Returns a null pointer when the driver does not export the symbol;
    /// callers are expected to turn that into a proper error.
    pub fn get_proc_address(&mut self, name: &str) -> *const std::ffi::c_void {
        self.window.get_proc_address(name) as *const _
    }

    /// Check whether the user or the application requested closure
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Request (or cancel) window closure
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Process pending window system events
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Drain events gathered since the last poll
    pub fn flush_events(&self) -> glfw::FlushedMessages<(f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Present the back buffer
    ///
    /// Blocks until the windowing system accepts the frame.
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Current framebuffer size in pixels
    pub fn get_framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }
}
