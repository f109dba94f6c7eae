//! Renderer configuration
//!
//! The original demonstration fixed its behavior with two compile-time
//! booleans (offscreen rendering, 16-bit color) and an 800x600 window.
//! Those knobs live here instead, serde-backed so they can come from a
//! config file, with defaults reproducing the fixed behavior.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Color precision of the offscreen attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorPrecision {
    /// 8 bits per channel
    Rgba8,
    /// 16 bits per channel
    Rgba16,
}

impl ColorPrecision {
    /// GL sized internal format for immutable texture storage
    #[must_use]
    pub const fn internal_format(self) -> u32 {
        match self {
            Self::Rgba8 => glow::RGBA8,
            Self::Rgba16 => glow::RGBA16,
        }
    }
}

/// Configuration for the CMAA demonstration renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Initial window width in pixels
    pub window_width: u32,
    /// Initial window height in pixels
    pub window_height: u32,
    /// Window title
    pub title: String,
    /// Render into an offscreen target and blit, instead of rendering
    /// directly into the default framebuffer
    pub offscreen: bool,
    /// Color precision of the offscreen attachment
    pub color_precision: ColorPrecision,
    /// Background clear color [R, G, B, A] (0.0-1.0 range)
    pub clear_color: [f32; 4],
}

impl RendererConfig {
    /// Enable or disable offscreen rendering
    #[must_use]
    pub const fn with_offscreen(mut self, offscreen: bool) -> Self {
        self.offscreen = offscreen;
        self
    }

    /// Set the offscreen color precision
    #[must_use]
    pub const fn with_color_precision(mut self, precision: ColorPrecision) -> Self {
        self.color_precision = precision;
        self
    }

    /// Set the initial window size
    #[must_use]
    pub const fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Set the background clear color [R, G, B, A] (0.0-1.0 range)
    #[must_use]
    pub const fn with_clear_color(mut self, color: [f32; 4]) -> Self {
        self.clear_color = color;
        self
    }
}

impl Default for RendererConfig {
    /// Defaults matching the original demonstration: 800x600 window,
    /// offscreen rendering on, 16-bit color, black background
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            title: "CMAA Demonstration".to_owned(),
            offscreen: true,
            color_precision: ColorPrecision::Rgba16,
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl Config for RendererConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_constants() {
        let config = RendererConfig::default();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
        assert!(config.offscreen);
        assert_eq!(config.color_precision, ColorPrecision::Rgba16);
        assert_eq!(config.title, "CMAA Demonstration");
    }

    #[test]
    fn test_builder_methods() {
        let config = RendererConfig::default()
            .with_offscreen(false)
            .with_color_precision(ColorPrecision::Rgba8)
            .with_window_size(1280, 720);
        assert!(!config.offscreen);
        assert_eq!(config.color_precision, ColorPrecision::Rgba8);
        assert_eq!((config.window_width, config.window_height), (1280, 720));
    }

    #[test]
    fn test_internal_formats() {
        assert_eq!(ColorPrecision::Rgba8.internal_format(), glow::RGBA8);
        assert_eq!(ColorPrecision::Rgba16.internal_format(), glow::RGBA16);
    }

    #[test]
    fn test_config_file_round_trip() {
        let path = std::env::temp_dir().join(format!("cmaa_renderer_{}.toml", std::process::id()));
        let path = path.to_str().unwrap().to_owned();

        let config = RendererConfig::default()
            .with_color_precision(ColorPrecision::Rgba8)
            .with_offscreen(false);
        config.save_to_file(&path).unwrap();
        let parsed = RendererConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(parsed.color_precision, ColorPrecision::Rgba8);
        assert!(!parsed.offscreen);
        assert_eq!(parsed.window_width, config.window_width);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: RendererConfig = toml::from_str("offscreen = false").unwrap();
        assert!(!parsed.offscreen);
        assert_eq!(parsed.window_width, 800);
        assert_eq!(parsed.color_precision, ColorPrecision::Rgba16);
    }
}
