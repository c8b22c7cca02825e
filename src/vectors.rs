//! `vectors` submodule implements 2, 3 and 4-dimensional vectors which represent
//! coordinates, directions and homogeneous points that are consumed by matrices and transforms.
//!

use crate::floats::{almost_equal, FloatOperations};
use serde::{Deserialize, Serialize};
use std::ops::{
    Add, AddAssign, BitXor, BitXorAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

// Macros that implement all common associated functions and methods on vectors could be replaced
// by a single generic struct, but named fields (`x`, `y`, `z`, `w`) are the main access style
// for vectors, so every size is its own struct and shared code is handled by macros.
//
/// [`impl_vector`] macro implements all common associated functions and methods on vectors.
///
/// This macro depends on manual implementation of `elements` and `set` functions and
/// `From<[f64; $size]>` trait implementation.
///
macro_rules! impl_vector {
    ($struct:ident, $size:expr) => {
        impl $struct {
            /// Initializes vector with zeroes.
            ///
            pub fn zero() -> Self {
                Self::from([0.0; $size])
            }
            /// Initializes vector with ones.
            ///
            pub fn one() -> Self {
                Self::from([1.0; $size])
            }

            /// Applies function to every vector element and returns changed vector.
            ///
            pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
                Self::from(self.elements().map(f))
            }
            /// Combines vectors by applying function on their elements.
            ///
            pub fn combine(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
                let (e1, e2): ([f64; $size], [f64; $size]) = (self.elements(), other.elements());
                Self::from(std::array::from_fn(|i| f(e1[i], e2[i])))
            }

            /// Returns squared magnitude of a vector.
            ///
            pub fn sqr_magnitude(&self) -> f64 {
                self.elements().iter().fold(0.0, |acc, n| acc + *n * *n)
            }
            /// Returns magnitude (length) of a vector.
            ///
            pub fn magnitude(&self) -> f64 {
                self.sqr_magnitude().sqrt()
            }
            /// Returns new vector that is normalized.
            ///
            /// Vector with zero length is returned unchanged.
            ///
            pub fn normalized(self) -> Self {
                let magnitude: f64 = self.magnitude();
                if magnitude > 0.0 {
                    self * (1.0 / magnitude)
                } else {
                    self
                }
            }
            /// Normalizes vector in place.
            ///
            /// Vector with zero length is left unchanged.
            ///
            pub fn normalize(&mut self) {
                *self = self.normalized();
            }
            /// Returns distance between two points.
            ///
            pub fn distance(self, other: Self) -> f64 {
                (self - other).magnitude()
            }

            /// Multiplies two vectors component-wise.
            ///
            pub fn scale(self, other: Self) -> Self {
                self.combine(other, |a, b| a * b)
            }
            /// Performs dot product operation on two vectors.
            ///
            pub fn dot_product(self, other: Self) -> f64 {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .fold(0.0, |acc, (a, b)| acc + *a * *b)
            }

            /// Checks whether vectors are equal up to [`EPSILON`](crate::floats::EPSILON).
            ///
            pub fn almost_equal(&self, other: &Self) -> bool {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .all(|(&a, &b)| almost_equal(a, b))
            }
        }
        impl FloatOperations for $struct {
            fn correct_to(self, digits: i32) -> Self {
                self.map(|elem| elem.correct_to(digits))
            }

            fn round_up_to(self, digits: i32) -> Self {
                self.map(|elem| elem.round_up_to(digits))
            }
        }
        impl Index<usize> for $struct {
            type Output = f64;

            fn index(&self, index: usize) -> &Self::Output {
                self.component(index)
            }
        }
        impl IndexMut<usize> for $struct {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                self.component_mut(index)
            }
        }
        impl From<$struct> for [f64; $size] {
            fn from(vector: $struct) -> Self {
                vector.elements()
            }
        }
    };
}

/// [`impl_vector_vector_operations`] macro implements vector-vector operations for vector.
///
macro_rules! impl_vector_vector_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<Self> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                self.combine(rhs, |a, b| a $op b)
            }
        }
    )+}
}
/// [`impl_vector_scalar_operations`] macro implements vector-scalar operations for vector.
///
macro_rules! impl_vector_scalar_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<f64> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: f64) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }
    )+}
}
/// [`impl_scalar_vector_operations`] macro implements scalar-vector operations
/// (scalar is the left operand and is combined with every vector component).
///
macro_rules! impl_scalar_vector_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$struct_name> for f64 {
            type Output = $struct_name;

            fn $method(self, rhs: $struct_name) -> Self::Output {
                rhs.map(|a| self $op a)
            }
        }
    )+}
}
/// [`impl_vector_assign_operations`] macro implements `...Assign` trait for vector.
///
macro_rules! impl_vector_assign_operations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    )+}
}
/// [`impl_vector_operations`] macro implements all operation traits for vector.
///
macro_rules! impl_vector_operations {
    ($struct_name:ident) => {
        impl Neg for $struct_name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                self.map(|a| -a)
            }
        }
        impl Mul for $struct_name {
            type Output = f64;

            /// Performs dot product operation on two vectors.
            ///
            fn mul(self, other: Self) -> Self::Output {
                self.dot_product(other)
            }
        }
        impl_vector_vector_operations!($struct_name, ((Add, add, +),
                                                      (Sub, sub, -),));
        impl_vector_assign_operations!($struct_name, Self, ((AddAssign, add_assign, +),
                                                            (SubAssign, sub_assign, -),));
        impl_vector_scalar_operations!($struct_name, ((Mul, mul, *),
                                                      (Div, div, /),));
        impl_vector_assign_operations!($struct_name, f64, ((MulAssign, mul_assign, *),
                                                           (DivAssign, div_assign, /),));
        impl_scalar_vector_operations!($struct_name, ((Add, add, +),
                                                      (Sub, sub, -),
                                                      (Mul, mul, *),
                                                      (Div, div, /),));
    }
}

/// [`Vector2`] struct represents two-dimensional vector.
///
/// # Example
/// ```rust
/// # use ggmath::vectors::Vector2;
/// let mut vector: Vector2 = Vector2::from([3.0, 4.0]);
/// assert_eq!(vector.magnitude(), 5.0);
/// vector[1] = 0.0;
/// assert_eq!(vector.y, 0.0);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2 {
    /// X component of vector.
    ///
    pub x: f64,
    /// Y component of vector.
    ///
    pub y: f64,
}
impl Vector2 {
    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f64; 2] {
        [self.x, self.y]
    }
    /// Sets from values to elements of vector.
    ///
    pub fn set(&mut self, elements: [f64; 2]) {
        self.x = elements[0];
        self.y = elements[1];
    }

    /// Returns reference to component by its index.
    ///
    fn component(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds: `Vector2` has 2 components but the index is {index}"),
        }
    }
    /// Returns mutable reference to component by its index.
    ///
    fn component_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index out of bounds: `Vector2` has 2 components but the index is {index}"),
        }
    }

    /// Returns scalar that represents cross product of two-dimensional vectors.
    ///
    pub fn cross_product(self, other: Self) -> f64 {
        (self.x * other.y) - (self.y * other.x)
    }
    /// Extends vector to three dimensions.
    ///
    pub fn extend(self, z: f64) -> Vector3 {
        Vector3 {
            x: self.x,
            y: self.y,
            z,
        }
    }
}
impl_vector!(Vector2, 2);
impl_vector_operations!(Vector2);
impl BitXor for Vector2 {
    type Output = f64;

    /// Returns scalar that represents cross product of two-dimensional vectors.
    ///
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross_product(rhs)
    }
}
impl From<[f64; 2]> for Vector2 {
    fn from(arr: [f64; 2]) -> Self {
        Vector2 {
            x: arr[0],
            y: arr[1],
        }
    }
}

/// [`Vector3`] struct represents three-dimensional vector (direction, point or set of Euler angles).
///
/// # Example
/// ```rust
/// # use ggmath::vectors::Vector3;
/// let x: Vector3 = Vector3::from([1.0, 0.0, 0.0]);
/// let y: Vector3 = Vector3::from([0.0, 1.0, 0.0]);
/// assert_eq!(x ^ y, Vector3::from([0.0, 0.0, 1.0]));
/// assert_eq!(x * y, 0.0);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3 {
    /// X component of vector.
    ///
    pub x: f64,
    /// Y component of vector.
    ///
    pub y: f64,
    /// Z component of vector.
    ///
    pub z: f64,
}
impl Vector3 {
    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
    /// Sets from values to elements of vector.
    ///
    pub fn set(&mut self, elements: [f64; 3]) {
        self.x = elements[0];
        self.y = elements[1];
        self.z = elements[2];
    }

    /// Returns reference to component by its index.
    ///
    fn component(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds: `Vector3` has 3 components but the index is {index}"),
        }
    }
    /// Returns mutable reference to component by its index.
    ///
    fn component_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds: `Vector3` has 3 components but the index is {index}"),
        }
    }

    /// Returns cross product of two vectors.
    ///
    pub fn cross_product(self, other: Self) -> Self {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
    /// Extends vector to four dimensions (`w` is 1.0 for points and 0.0 for directions).
    ///
    pub fn extend(self, w: f64) -> Vector4 {
        Vector4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w,
        }
    }
    /// Drops `z` component.
    ///
    pub fn truncate(self) -> Vector2 {
        Vector2 {
            x: self.x,
            y: self.y,
        }
    }
}
impl_vector!(Vector3, 3);
impl_vector_operations!(Vector3);
impl BitXor for Vector3 {
    type Output = Self;

    /// Returns cross product of two vectors.
    ///
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross_product(rhs)
    }
}
impl BitXorAssign for Vector3 {
    /// Replaces vector with its cross product with `rhs`.
    ///
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = self.cross_product(rhs);
    }
}
impl From<[f64; 3]> for Vector3 {
    fn from(arr: [f64; 3]) -> Self {
        Vector3 {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}
impl From<Vector4> for Vector3 {
    /// Drops `w` component.
    ///
    fn from(vector: Vector4) -> Self {
        vector.truncate()
    }
}

/// [`Vector4`] struct represents four-dimensional vector (mostly homogeneous coordinates).
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector4 {
    /// X component of vector.
    ///
    pub x: f64,
    /// Y component of vector.
    ///
    pub y: f64,
    /// Z component of vector.
    ///
    pub z: f64,
    /// W component of vector.
    ///
    pub w: f64,
}
impl Vector4 {
    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }
    /// Sets from values to elements of vector.
    ///
    pub fn set(&mut self, elements: [f64; 4]) {
        self.x = elements[0];
        self.y = elements[1];
        self.z = elements[2];
        self.w = elements[3];
    }

    /// Returns reference to component by its index.
    ///
    fn component(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds: `Vector4` has 4 components but the index is {index}"),
        }
    }
    /// Returns mutable reference to component by its index.
    ///
    fn component_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds: `Vector4` has 4 components but the index is {index}"),
        }
    }

    /// Drops `w` component.
    ///
    pub fn truncate(self) -> Vector3 {
        Vector3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}
impl_vector!(Vector4, 4);
impl_vector_operations!(Vector4);
impl From<[f64; 4]> for Vector4 {
    fn from(arr: [f64; 4]) -> Self {
        Vector4 {
            x: arr[0],
            y: arr[1],
            z: arr[2],
            w: arr[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Vector2, Vector3, Vector4};
    use crate::floats::{almost_equal, FloatOperations};

    #[test]
    fn vector() {
        assert_eq!(Vector2::zero(), Vector2 { x: 0.0, y: 0.0 });
        assert_eq!(Vector3::one(), Vector3 { x: 1.0, y: 1.0, z: 1.0 });

        let vec1: Vector3 = Vector3::from([3.0, 4.0, 12.0]);
        assert_eq!(vec1.elements(), [3.0, 4.0, 12.0]);
        assert_eq!(vec1.sqr_magnitude(), 169.0);
        assert_eq!(vec1.magnitude(), 13.0);
        assert_eq!(vec1[2], 12.0);

        let vec2: Vector3 = vec1.scale(Vector3::from([2.0, 0.5, 1.0]));
        assert_eq!(vec2.elements(), [6.0, 2.0, 12.0]);

        assert_eq!(vec1 + vec2, Vector3::from([9.0, 6.0, 24.0]));
        assert_eq!(vec1 - vec2, Vector3::from([-3.0, 2.0, 0.0]));
        assert_eq!(vec2 * 2.0, Vector3::from([12.0, 4.0, 24.0]));
        assert_eq!(vec2 / 2.0, Vector3::from([3.0, 1.0, 6.0]));
        assert_eq!(-vec1, Vector3::from([-3.0, -4.0, -12.0]));
        assert_eq!(vec1 * vec2, 18.0 + 8.0 + 144.0);

        let mut vec3: Vector3 = vec1;
        vec3 += vec2;
        assert_eq!(vec3.elements(), [9.0, 6.0, 24.0]);
        vec3 -= vec2;
        assert_eq!(vec3.elements(), [3.0, 4.0, 12.0]);
        vec3 *= 2.0;
        assert_eq!(vec3.elements(), [6.0, 8.0, 24.0]);
        vec3 /= 2.0;
        assert_eq!(vec3, vec1);
        vec3[0] = -1.0;
        vec3.set([vec3.x, 0.0, 0.0]);
        assert_eq!(vec3, Vector3::from([-1.0, 0.0, 0.0]));

        assert_eq!(Vector2::from([3.0, 4.0]) ^ Vector2::from([1.0, 2.0]), 2.0);

        let mut cross: Vector3 = Vector3::from([1.0, 0.0, 0.0]);
        cross ^= Vector3::from([0.0, 1.0, 0.0]);
        assert_eq!(cross, Vector3::from([0.0, 0.0, 1.0]));
        cross ^= Vector3::from([1.0, 0.0, 0.0]);
        assert_eq!(cross, Vector3::from([0.0, 1.0, 0.0]));
        assert_eq!(
            Vector3::from([0.0, 1.0, 0.0]) ^ Vector3::from([0.0, 0.0, 1.0]),
            Vector3::from([1.0, 0.0, 0.0])
        );
    }

    #[test]
    fn scalar_operations() {
        let vector: Vector3 = Vector3::from([1.0, 2.0, 4.0]);
        assert_eq!(1.0 + vector, Vector3::from([2.0, 3.0, 5.0]));
        assert_eq!(1.0 - vector, Vector3::from([0.0, -1.0, -3.0]));
        assert_eq!(2.0 * vector, vector * 2.0);
        assert_eq!(8.0 / vector, Vector3::from([8.0, 4.0, 2.0]));

        assert_eq!(3.0 * Vector2::from([1.0, -1.0]), Vector2::from([3.0, -3.0]));
        assert_eq!(
            1.0 / Vector4::from([1.0, 2.0, 4.0, 0.5]),
            Vector4::from([1.0, 0.5, 0.25, 2.0])
        );
        assert!((1.0 / Vector2::zero()).x.is_infinite());
    }

    #[test]
    fn normalization() {
        let mut vector: Vector3 = Vector3::from([0.0, 3.0, 4.0]);
        vector.normalize();
        assert_eq!(vector, Vector3::from([0.0, 3.0, 4.0]).normalized());
        assert!(almost_equal(vector.magnitude(), 1.0));
        let mut zero: Vector2 = Vector2::zero();
        zero.normalize();
        assert_eq!(zero, Vector2::zero());

        let vector: Vector3 = Vector3::from([0.0, 3.0, 4.0]).normalized();
        assert!(vector.almost_equal(&Vector3::from([0.0, 0.6, 0.8])));
        assert_eq!(Vector3::zero().normalized(), Vector3::zero());
        assert_eq!(
            Vector4::from([1.0, 1.0, 1.0, 1.0]).normalized().correct_to(3),
            Vector4::from([0.5; 4])
        );
        assert_eq!(
            Vector2::from([1.0, 1.0]).distance(Vector2::from([4.0, 5.0])),
            5.0
        );
    }

    #[test]
    fn conversions() {
        let vector: Vector4 = Vector2::from([1.0, 2.0]).extend(3.0).extend(1.0);
        assert_eq!(vector, Vector4::from([1.0, 2.0, 3.0, 1.0]));
        assert_eq!(vector[3], 1.0);
        assert_eq!(Vector3::from(vector), Vector3::from([1.0, 2.0, 3.0]));
        assert_eq!(Vector3::from(vector).truncate(), Vector2::from([1.0, 2.0]));
        assert_eq!(<[f64; 4]>::from(vector), [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds() {
        let vector: Vector4 = Vector4::zero();
        let _ = vector[4];
    }
}
