//! Prelude module: `ggmath::prelude` re-exports all `ggmath` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use ggmath::prelude::*;
//!
//! let view: Matrix4 = look_at(
//!     Vector3::from([0.0, 0.0, 5.0]),
//!     Vector3::zero(),
//!     Vector3::from([0.0, 1.0, 0.0]),
//! );
//! let projection: Matrix4 = perspective(Angle::DEG90, 16.0 / 9.0, 0.1, 100.0);
//! assert!(almost_equal((projection * view).determinant(), projection.determinant()));
//! ```
//!

// re-exports
pub use crate::floats::*;
pub use crate::matrices::*;
pub use crate::transforms::*;
pub use crate::vectors::*;
pub use crate::*;
