//! # GGMath
//!
//! **GGMath** - linear algebra primitives for real-time graphics written in pure Rust.
//!
//! # Prelude
//! `ggmath` prelude can be imported with `use ggmath::prelude::*`.
//!
//! # Model
//! Vectors represent directions and coordinates, square matrices of size 2, 3 and 4
//! represent linear and affine transformations of those vectors.
//! Matrices are stored column-major (`[column][row]`), element storage can be viewed both
//! as a flat sequence of `N * N` scalars and as a grid of columns.
//!
//! 4x4 matrices can be inverted (singular matrices are inverted into zero matrix),
//! and `transforms` submodule builds translation, rotation, scaling, projection and view matrices
//! that are ready to be uploaded to graphics APIs with OpenGL conventions.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate seq_macro;

extern crate serde;
extern crate serde_big_array;

// submodules and public re-exports
mod ext;
pub use ext::*;

pub mod floats;
pub mod matrices;
pub mod transforms;
pub mod vectors;

// prelude
pub mod prelude;
