//! CMAA demonstration application
//!
//! Opens a window, renders a textured triangle each frame, and applies
//! Intel's framebuffer CMAA post-process to the image before presenting.
//! Drivers without the extension abort startup with a non-zero status.

use gl_engine::config::Config;
use gl_engine::{FrameRenderer, RendererConfig, Window};
use glfw::{Action, Key, WindowEvent};

/// Optional config file next to the binary; defaults apply when absent.
const CONFIG_PATH: &str = "cmaa_demo.toml";

fn main() {
    gl_engine::foundation::logging::init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();

    let mut window = Window::new(&config.title, config.window_width, config.window_height)?;
    let mut renderer = FrameRenderer::new(&mut window, config)?;

    while !window.should_close() {
        renderer.render_frame();
        window.swap_buffers();
        window.poll_events();

        let events: Vec<_> = window.flush_events().collect();
        for (_, event) in events {
            match event {
                WindowEvent::FramebufferSize(width, height) => {
                    renderer.resize(width, height);
                }
                WindowEvent::Key(Key::Escape, _, Action::Press, _) | WindowEvent::Close => {
                    window.set_should_close(true);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

fn load_config() -> RendererConfig {
    if std::path::Path::new(CONFIG_PATH).exists() {
        match RendererConfig::load_from_file(CONFIG_PATH) {
            Ok(config) => {
                log::info!("loaded configuration from {CONFIG_PATH}");
                return config;
            }
            Err(err) => log::warn!("ignoring {CONFIG_PATH}: {err}"),
        }
    }
    RendererConfig::default()
}
