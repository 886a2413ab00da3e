//! Axis derivation and Rodrigues' rotation
//!
//! The turnstile axis is the unit normal of the plane spanned by the first
//! atom of each arm. Arm atoms are then rotated rigidly about that axis
//! through the anchor atom.
//!
//! The matrix is applied with the transpose convention inherited from the
//! reference implementation:
//!
//! ```text
//! out[i] = sum_j R[j][i] * (point[j] - anchor[j])
//! ```
//!
//! Under this convention a positive angle about the +z axis takes
//! (1, 0, 0) to (0, -1, 0). Changing the convention silently flips the
//! rotation direction, so it is pinned by a literal test below.

use lin_alg::f64::Vec3;

use crate::error::{GeometryError, GeometryResult};

/// Cross products with a magnitude below this are treated as collinear input
pub const COLLINEAR_EPS: f64 = 1e-10;

/// Unit-length rotation axis
///
/// Can only be obtained from [`UnitAxis::from_three_points`], which
/// guarantees |u| = 1 for every value of this type.
#[derive(Debug, Clone, Copy)]
pub struct UnitAxis(Vec3);

impl UnitAxis {
    /// Unit normal of the plane spanned by three points
    ///
    /// Computes the cross product of (p2 - p1) and (p3 - p1) and normalizes
    /// it. Fails with [`GeometryError::DegenerateGeometry`] when the points
    /// are collinear.
    pub fn from_three_points(p1: Vec3, p2: Vec3, p3: Vec3) -> GeometryResult<Self> {
        let normal = (p2 - p1).cross(p3 - p1);
        let len = normal.magnitude();
        if len < COLLINEAR_EPS {
            return Err(GeometryError::DegenerateGeometry);
        }
        Ok(Self(normal / len))
    }

    /// The axis direction as a plain vector
    pub fn as_vec(&self) -> Vec3 {
        self.0
    }
}

/// Proper 3x3 rotation matrix (orthogonal, determinant +1)
///
/// Built only by [`RotationMatrix::from_axis_angle`]; row-major layout,
/// `data[row][col]`.
#[derive(Debug, Clone, Copy)]
pub struct RotationMatrix {
    data: [[f64; 3]; 3],
}

impl RotationMatrix {
    /// Rodrigues' rotation formula for `theta` radians about `axis`
    ///
    /// R = I cos(t) + (1 - cos(t)) (u (x) u) + sin(t) [u]_x, written out
    /// component-wise. Valid for any real angle.
    pub fn from_axis_angle(theta: f64, axis: &UnitAxis) -> Self {
        let u = axis.as_vec();
        let c = theta.cos();
        let s = theta.sin();
        let t = 1.0 - c;

        Self {
            data: [
                [
                    c + u.x * u.x * t,
                    u.x * u.y * t - u.z * s,
                    u.x * u.z * t + u.y * s,
                ],
                [
                    u.x * u.y * t + u.z * s,
                    c + u.y * u.y * t,
                    u.y * u.z * t - u.x * s,
                ],
                [
                    u.x * u.z * t - u.y * s,
                    u.y * u.z * t + u.x * s,
                    c + u.z * u.z * t,
                ],
            ],
        }
    }

    /// Matrix entry at (row, col)
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    /// Apply the matrix to a vector with the transpose convention:
    /// `out[i] = sum_j data[j][i] * v[j]`
    pub fn apply_transposed(&self, v: Vec3) -> Vec3 {
        let m = &self.data;
        Vec3::new(
            m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z,
            m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z,
            m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z,
        )
    }

    /// Determinant of the matrix
    pub fn determinant(&self) -> f64 {
        let m = &self.data;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }
}

/// Rotate `point` about `anchor` by `theta` radians, with the axis taken as
/// the unit normal of the plane through `p1`, `p2`, `p3`
///
/// Translates the point into the anchor frame, applies the rotation matrix
/// with the transpose convention, and translates back. Pure; each call is
/// independent, so all atoms of all arms can be transformed for a given
/// angle without shared state.
///
/// At `theta = 0` the input point is returned unchanged.
pub fn rotate_about_axis(
    anchor: Vec3,
    point: Vec3,
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
    theta: f64,
) -> GeometryResult<Vec3> {
    let axis = UnitAxis::from_three_points(p1, p2, p3)?;
    let matrix = RotationMatrix::from_axis_angle(theta, &axis);
    Ok(matrix.apply_transposed(point - anchor) + anchor)
}
