//! `transforms` submodule implements functions which build 4x4 transformation matrices
//! (translation, rotation, scaling, projection and view matrices) and the [`Transform`] enum
//! that describes basic transformations as values.
//!
//! All builders follow the conventions of [`matrices`](crate::matrices) submodule:
//! column vectors are multiplied on the right, so composing functions
//! (`translate`, `rotate`, `scale`) return `matrix * transform` - the new transform
//! is applied to vectors before the given matrix (`model = parent * child`).
//!
//! Projection matrices are OpenGL-style: right-handed view space with camera looking down `-z`
//! and clip volume `[-1; 1]` on every axis.
//!
//! Degenerate arguments (`near == far`, zero field of view, `eye == target`) are not validated,
//! resulting matrices may contain non-finite values.
//!

use crate::{
    matrices::Matrix4,
    vectors::{Vector3, Vector4},
    Angle,
};
use serde::{Deserialize, Serialize};

/// Builds translation matrix.
///
/// Translation vector occupies the last column. `w` component of [`Vector4`] is ignored.
///
/// # Example
/// ```rust
/// # use ggmath::transforms::translation;
/// # use ggmath::matrices::Matrix4;
/// # use ggmath::vectors::Vector4;
/// let matrix: Matrix4 = translation(Vector4::from([1.0, 2.0, 3.0, 1.0]));
/// assert_eq!(matrix[3], [1.0, 2.0, 3.0, 1.0]);
/// assert_eq!(
///     matrix * Vector4::from([0.0, 0.0, 0.0, 1.0]),
///     Vector4::from([1.0, 2.0, 3.0, 1.0])
/// );
/// ```
///
pub fn translation(vector: impl Into<Vector3>) -> Matrix4 {
    let vector: Vector3 = vector.into();
    let mut matrix: Matrix4 = Matrix4::identity();
    matrix[3][0] = vector.x;
    matrix[3][1] = vector.y;
    matrix[3][2] = vector.z;
    matrix
}
/// Composes translation onto given matrix (`matrix * translation(vector)`).
///
pub fn translate(matrix: Matrix4, vector: impl Into<Vector3>) -> Matrix4 {
    matrix * translation(vector)
}

/// Builds scaling matrix.
///
/// Scale factors are placed on the diagonal, `w` component of [`Vector4`] is ignored.
///
/// # Example
/// ```rust
/// # use ggmath::transforms::scaling;
/// # use ggmath::matrices::Matrix4;
/// # use ggmath::vectors::Vector4;
/// let matrix: Matrix4 = scaling(Vector4::from([2.0, 3.0, 4.0, 0.0]));
/// assert_eq!(
///     matrix.as_rows(),
///     [
///         [2.0, 0.0, 0.0, 0.0],
///         [0.0, 3.0, 0.0, 0.0],
///         [0.0, 0.0, 4.0, 0.0],
///         [0.0, 0.0, 0.0, 1.0]
///     ]
/// );
/// ```
///
pub fn scaling(vector: impl Into<Vector3>) -> Matrix4 {
    let vector: Vector3 = vector.into();
    let mut matrix: Matrix4 = Matrix4::identity();
    matrix[0][0] = vector.x;
    matrix[1][1] = vector.y;
    matrix[2][2] = vector.z;
    matrix
}
/// Composes scaling onto given matrix (`matrix * scaling(vector)`).
///
pub fn scale(matrix: Matrix4, vector: impl Into<Vector3>) -> Matrix4 {
    matrix * scaling(vector)
}

/// Builds matrix of counterclockwise rotation around X axis.
///
pub fn rotation_x(angle: Angle) -> Matrix4 {
    x_axis_rotation(angle.sin_cos())
}
/// Builds rotation around X axis from sine and cosine of angle.
///
fn x_axis_rotation((sin, cos): (f64, f64)) -> Matrix4 {
    let mut matrix: Matrix4 = Matrix4::identity();
    *matrix.at_mut(1, 1) = cos;
    *matrix.at_mut(1, 2) = -sin;
    *matrix.at_mut(2, 1) = sin;
    *matrix.at_mut(2, 2) = cos;
    matrix
}
/// Builds matrix of counterclockwise rotation around Y axis.
///
pub fn rotation_y(angle: Angle) -> Matrix4 {
    y_axis_rotation(angle.sin_cos())
}
/// Builds rotation around Y axis from sine and cosine of angle.
///
fn y_axis_rotation((sin, cos): (f64, f64)) -> Matrix4 {
    let mut matrix: Matrix4 = Matrix4::identity();
    *matrix.at_mut(0, 0) = cos;
    *matrix.at_mut(0, 2) = sin;
    *matrix.at_mut(2, 0) = -sin;
    *matrix.at_mut(2, 2) = cos;
    matrix
}
/// Builds matrix of counterclockwise rotation around Z axis.
///
/// # Example
/// ```rust
/// # use ggmath::transforms::rotation_z;
/// # use ggmath::floats::FloatOperations;
/// # use ggmath::vectors::Vector3;
/// # use ggmath::Angle;
/// let point: Vector3 = rotation_z(Angle::DEG90).apply_to(Vector3::from([1.0, 0.0, 0.0]));
/// assert_eq!(point.correct_to(0), Vector3::from([0.0, 1.0, 0.0]));
/// ```
///
pub fn rotation_z(angle: Angle) -> Matrix4 {
    z_axis_rotation(angle.sin_cos())
}
/// Builds rotation around Z axis from sine and cosine of angle.
///
fn z_axis_rotation((sin, cos): (f64, f64)) -> Matrix4 {
    let mut matrix: Matrix4 = Matrix4::identity();
    *matrix.at_mut(0, 0) = cos;
    *matrix.at_mut(0, 1) = -sin;
    *matrix.at_mut(1, 0) = sin;
    *matrix.at_mut(1, 1) = cos;
    matrix
}
/// Builds rotation matrix from Euler angles (in radians).
///
/// Rotation around X axis is applied first, then around Y axis and then around Z axis,
/// so resulting matrix equals `rotation_z(z) * rotation_y(y) * rotation_x(x)`.
/// Non-finite angles produce NaN entries.
///
/// # Example
/// ```rust
/// # use ggmath::transforms::rotation;
/// # use ggmath::floats::FloatOperations;
/// # use ggmath::vectors::Vector3;
/// # use std::f64::consts::FRAC_PI_2;
/// let matrix = rotation(Vector3::from([FRAC_PI_2, FRAC_PI_2, 0.0]));
/// // X: (0, 1, 0) -> (0, 0, 1), then Y: (0, 0, 1) -> (1, 0, 0)
/// let point: Vector3 = matrix.apply_to(Vector3::from([0.0, 1.0, 0.0]));
/// assert_eq!(point.correct_to(0), Vector3::from([1.0, 0.0, 0.0]));
/// ```
///
pub fn rotation(angles: Vector3) -> Matrix4 {
    z_axis_rotation(angles.z.sin_cos())
        * y_axis_rotation(angles.y.sin_cos())
        * x_axis_rotation(angles.x.sin_cos())
}
/// Composes rotation onto given matrix (`matrix * rotation(angles)`).
///
pub fn rotate(matrix: Matrix4, angles: Vector3) -> Matrix4 {
    matrix * rotation(angles)
}

/// Builds orthographic projection matrix that maps given box to clip volume.
///
/// `near` and `far` are distances along `-z`.
///
/// # Example
/// ```rust
/// # use ggmath::transforms::orthographic;
/// # use ggmath::vectors::Vector3;
/// let matrix = orthographic(0.0, 800.0, 0.0, 600.0, -1.0, 1.0);
/// assert!(matrix
///     .apply_to(Vector3::from([800.0, 600.0, 0.0]))
///     .almost_equal(&Vector3::from([1.0, 1.0, 0.0])));
/// ```
///
pub fn orthographic(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Matrix4 {
    Matrix4::from_rows([
        [2.0 / (right - left), 0.0, 0.0, -(right + left) / (right - left)],
        [0.0, 2.0 / (top - bottom), 0.0, -(top + bottom) / (top - bottom)],
        [0.0, 0.0, -2.0 / (far - near), -(far + near) / (far - near)],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Builds symmetric perspective projection matrix.
///
/// `fov` is vertical field of view, `aspect` is width divided by height.
/// Point on near plane is mapped to depth `-1.0`, point on far plane - to depth `1.0`.
///
/// # Example
/// ```rust
/// # use ggmath::transforms::perspective;
/// # use ggmath::vectors::Vector3;
/// # use ggmath::Angle;
/// let matrix = perspective(Angle::from_degrees(90.0), 1.0, 0.1, 100.0);
/// let near: Vector3 = matrix.project(Vector3::from([0.0, 0.0, -0.1]));
/// assert!(near.almost_equal(&Vector3::from([0.0, 0.0, -1.0])));
/// ```
///
pub fn perspective(fov: Angle, aspect: f64, near: f64, far: f64) -> Matrix4 {
    let f: f64 = 1.0 / (fov.radians() / 2.0).tan();
    Matrix4::from_rows([
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, (far + near) / (near - far), (2.0 * far * near) / (near - far)],
        [0.0, 0.0, -1.0, 0.0],
    ])
}
/// Builds symmetric perspective projection matrix for square viewport (`aspect == 1.0`).
///
pub fn perspective_square(fov: Angle, near: f64, far: f64) -> Matrix4 {
    perspective(fov, 1.0, near, far)
}

/// Builds right-handed view matrix for camera at `eye` which looks at `target`.
///
/// Rows of rotation block are camera basis vectors: right, up and back
/// (`normalize(eye - target)`, camera looks down `-z`).
/// Translation column holds negated dot products of those vectors with `eye`.
///
/// # Example
/// ```rust
/// # use ggmath::transforms::look_at;
/// # use ggmath::vectors::Vector3;
/// let view = look_at(
///     Vector3::from([0.0, 0.0, 5.0]),
///     Vector3::zero(),
///     Vector3::from([0.0, 1.0, 0.0]),
/// );
/// assert_eq!(view.row(2), [0.0, 0.0, 1.0, -5.0]);
/// assert_eq!(view.apply_to(Vector3::zero()), Vector3::from([0.0, 0.0, -5.0]));
/// ```
///
pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Matrix4 {
    let back: Vector3 = (eye - target).normalized();
    let right: Vector3 = up.cross_product(back).normalized();
    let up: Vector3 = back.cross_product(right);

    Matrix4::from_rows([
        [right.x, right.y, right.z, -right.dot_product(eye)],
        [up.x, up.y, up.z, -up.dot_product(eye)],
        [back.x, back.y, back.z, -back.dot_product(eye)],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// [`Transform`] struct-like enum represents 3 basic matrix transformations.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum Transform {
    /// Translation moves an object along given vector.
    ///
    Translation {
        /// Vector along which object will be translated.
        ///
        vector: Vector3,
    },

    /// Rotation operation rotates object around X, Y and Z axes (in that order).
    ///
    Rotation {
        /// Euler angles in radians.
        ///
        angles: Vector3,
    },

    /// Scaling transform changes the size of an object by expanding or contracting all vertices
    /// along axes by given factors.
    ///
    Scaling {
        /// Scale factors for every axis.
        ///
        factors: Vector3,
    },
}
impl Transform {
    /// Constructs corresponding transformation matrix.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::transforms::Transform;
    /// # use ggmath::vectors::Vector3;
    /// let transform: Transform = Transform::Translation { vector: Vector3::from([2.0, 3.0, 4.0]) };
    /// let point: Vector3 = transform.matrix().apply_to(Vector3::from([1.0, 1.0, 1.0]));
    /// assert_eq!(point, Vector3::from([3.0, 4.0, 5.0]));
    /// ```
    ///
    pub fn matrix(self) -> Matrix4 {
        match self {
            Self::Translation { vector } => translation(vector),
            Self::Rotation { angles } => rotation(angles),
            Self::Scaling { factors } => scaling(factors),
        }
    }

    /// Combines given transforms by using dot product.
    ///
    /// This function automatically reverses the order, so if you need to combine transforms `A -> B -> C`
    /// just pass them in that order (matrices multiplication will be performed in order `C * B * A`).
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::transforms::Transform;
    /// # use ggmath::vectors::Vector3;
    /// let scale: Transform = Transform::Scaling { factors: Vector3::from([2.0, 2.0, 2.0]) };
    /// let translation: Transform = Transform::Translation { vector: Vector3::from([1.0, 0.0, 0.0]) };
    ///
    /// let point: Vector3 = Transform::combine([scale, translation].into_iter())
    ///     .apply_to(Vector3::from([1.0, 1.0, 1.0]));
    /// assert_eq!(point, Vector3::from([3.0, 2.0, 2.0]));  // scaling -> translation
    /// ```
    ///
    pub fn combine(transforms: impl DoubleEndedIterator<Item = Transform>) -> Matrix4 {
        transforms
            .rev()
            .fold(Matrix4::identity(), |acc, transform| {
                acc * transform.matrix()
            })
    }
}
