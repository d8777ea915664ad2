/// Renderer configuration, loadable from TOML
use serde::Deserialize;

use crate::buffer::Color;
use crate::error::{Error, Result};

/// Upper bound for `screen_axis_length`, in pixels
pub const MAX_AXIS_LENGTH: i32 = 1 << 20;

/// Resolution, palette and overlay settings of the wireframe renderer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub width: usize,
    pub height: usize,
    pub background: Color,
    /// Triangle edges
    pub wire_color: Color,
    /// Screen-space axis cross
    pub axis_color: Color,
    /// Model axes, bounding box and normals
    pub overlay_color: Color,
    /// Arm length of the screen-space axis cross, in pixels
    pub screen_axis_length: i32,
    pub draw_normals: bool,
    pub normal_scale: f32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 1880,
            height: 1320,
            background: Color::new(0.8, 0.8, 0.8),
            wire_color: Color::BLACK,
            axis_color: Color::RED,
            overlay_color: Color::BLUE,
            screen_axis_length: 400,
            draw_normals: false,
            normal_scale: 1.1,
        }
    }
}

impl RendererConfig {
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse a TOML document; absent keys keep their defaults
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(0..=MAX_AXIS_LENGTH).contains(&self.screen_axis_length) {
            return Err(Error::InvalidConfig(format!(
                "screen_axis_length must be within 0..={}, got {}",
                MAX_AXIS_LENGTH, self.screen_axis_length
            )));
        }
        if !self.normal_scale.is_finite() {
            return Err(Error::InvalidConfig("normal_scale must be finite".to_string()));
        }
        Ok(())
    }
}
