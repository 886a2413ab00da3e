//! Host viewer abstraction
//!
//! This module defines the `HostViewer` trait that abstracts the embedding
//! 3D viewer, allowing the wizard and session to run against any host that
//! supports named single-atom selections and coordinate edits (and, in
//! tests, against a mock).

use std::path::Path;

use thiserror::Error;

use turnstile_geom::Point3;

/// Errors reported by the host viewer
#[derive(Debug, Error)]
pub enum HostError {
    /// Named selection does not exist or is empty
    #[error("selection not found: {0}")]
    SelectionNotFound(String),

    /// Generic viewer-side failure
    #[error("viewer error: {0}")]
    Viewer(String),

    /// The host does not implement this capability
    #[error("operation not supported by this viewer")]
    Unsupported,
}

/// Trait for types that can serve as the viewer backend for a turnstile
/// session
///
/// The session owns a namespace of hidden selection names (see
/// [`crate::names`]); every selection it creates goes through this trait and
/// is removed again on reset or cleanup.
pub trait HostViewer {
    /// Persist the host's current transient pick as a named single-atom
    /// selection
    fn materialize_selection(&mut self, name: &str) -> Result<(), HostError>;

    /// Drop the host's transient pick marker
    fn clear_pick(&mut self);

    /// Create (or update) a named indicator selection over `target` and
    /// enable its visual highlight
    fn highlight(&mut self, name: &str, target: &str) -> Result<(), HostError>;

    /// Remove all selections whose names match a glob pattern
    fn clear_selections(&mut self, pattern: &str);

    /// Clear the active (unnamed) selection
    fn deselect(&mut self);

    /// Read the 3D position of a named single-atom selection
    fn get_coordinates(&self, name: &str) -> Result<Point3, HostError>;

    /// Stage a new 3D position for a named single-atom selection
    fn set_coordinates(&mut self, name: &str, pos: Point3) -> Result<(), HostError>;

    /// Regenerate display geometry after coordinate edits
    fn rebuild(&mut self);

    /// Current mouse selection mode of the host
    fn selection_mode(&self) -> i32;

    /// Switch the host's mouse selection mode (0 = atomic)
    fn set_selection_mode(&mut self, mode: i32);

    /// Render the scene to an image file (optional capability)
    fn render_image(
        &mut self,
        _path: &Path,
        _width: u32,
        _height: u32,
        _dpi: u32,
    ) -> Result<(), HostError> {
        Err(HostError::Unsupported)
    }

    /// Render the scene on-display without writing a file (optional
    /// capability)
    fn render_display(&mut self, _width: u32, _height: u32) -> Result<(), HostError> {
        Err(HostError::Unsupported)
    }
}
