//! Image render settings
//!
//! The render form mirrors the host's raytrace/export facility: physical
//! size in inches or centimeters plus a DPI value, converted to pixel
//! dimensions before the host is asked to render. Rendering itself is
//! delegated entirely to the host.

use std::path::Path;

use serde::{Deserialize, Serialize};

use turnstile_wizard::{HostError, HostViewer};

/// Physical unit for the requested image size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    /// Inches
    Inches,
    /// Centimeters
    Cm,
}

impl Units {
    /// Display label for the unit selector
    pub fn label(&self) -> &'static str {
        match self {
            Units::Inches => "inch",
            Units::Cm => "cm",
        }
    }
}

/// Settings for rendering the scene to an image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Output file path; empty renders on-display only
    pub filename: String,
    /// Image width in physical units
    pub width: f64,
    /// Image height in physical units
    pub height: f64,
    /// Dots per inch
    pub dpi: u32,
    /// Unit of the width/height fields
    pub units: Units,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            filename: String::new(),
            width: 8.0,
            height: 6.0,
            dpi: 300,
            units: Units::Inches,
        }
    }
}

impl RenderSettings {
    /// Dots per physical unit for the selected unit
    pub fn dots_per_unit(&self) -> f64 {
        match self.units {
            Units::Inches => self.dpi as f64,
            Units::Cm => self.dpi as f64 * 2.54,
        }
    }

    /// Requested image size in pixels
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        let dots = self.dots_per_unit();
        (
            (self.width * dots).round() as u32,
            (self.height * dots).round() as u32,
        )
    }

    /// Render with these settings on the given host
    ///
    /// With a filename the image is written to that file; without one the
    /// host only renders on-display.
    pub fn execute(&self, host: &mut dyn HostViewer) -> Result<(), HostError> {
        let (width, height) = self.pixel_dimensions();
        if self.filename.is_empty() {
            log::info!("no filename selected, only rendering on display");
            host.render_display(width, height)
        } else {
            host.render_image(Path::new(&self.filename), width, height, self.dpi)
        }
    }
}
