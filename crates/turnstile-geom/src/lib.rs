//! Rotation geometry for the three-arm turnstile assistant
//!
//! This crate is the pure-math core of the turnstile plugin: it rotates
//! groups of atoms rigidly about an axis defined by three reference points.
//!
//! # Overview
//!
//! - [`UnitAxis::from_three_points`] — unit normal of the plane spanned by
//!   three non-collinear points
//! - [`RotationMatrix::from_axis_angle`] — Rodrigues' rotation formula
//! - [`rotate_about_axis`] — rotate a point about an anchor, with the axis
//!   derived from three other points
//!
//! All functions are pure and hold no shared state, so a single angle change
//! can be fanned out across every atom of every arm independently.
//!
//! # Example
//!
//! ```
//! use lin_alg::f64::Vec3;
//! use turnstile_geom::rotate_about_axis;
//!
//! let anchor = Vec3::new(0.0, 0.0, 0.0);
//! let p = Vec3::new(1.0, 0.0, 0.0);
//! // Axis normal to the xy-plane, from three points in that plane
//! let rotated = rotate_about_axis(
//!     anchor,
//!     p,
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//!     std::f64::consts::FRAC_PI_2,
//! )
//! .unwrap();
//! assert!((rotated.y - -1.0).abs() < 1e-9);
//! ```

mod error;
mod rotation;

pub use error::{GeometryError, GeometryResult};
pub use rotation::{rotate_about_axis, RotationMatrix, UnitAxis, COLLINEAR_EPS};

/// Point in 3D space. Coordinates are f64 to keep the rotation round-trip
/// error well under the 1e-9 tolerance the engine promises.
pub type Point3 = lin_alg::f64::Vec3;
