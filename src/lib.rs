//! A small **3D geometry kernel**: vectors, 4×4 matrices, quaternions, a parent-relative
//! transform hierarchy and a fixed-width binary codec, generic over `f32` and `f64`.
//!
//! Matrices are addressed `(row, column)`, act on column vectors and keep the translation in
//! column 3. Projections follow the right-handed OpenGL convention (clip depth `-1..1`).
//!
//! ```
//! use geokern::{Mat4, Quat, Vec3};
//!
//! let q = Quat::from_axis_angle(Vec3::<f64>::Y, core::f64::consts::FRAC_PI_2);
//! let m = Mat4::from(q);
//! let p = m.transform(Vec3::X);
//! assert!((p.z + 1.0).abs() < 1e-12);
//! ```
//!
//! # Features
//! #### Default
//! None; the kernel itself only needs `nalgebra`.
//!
//! #### Optional
//! - **parallel**: use rayon for batch encoding and decoding
//! - **serde**: `Serialize`/`Deserialize` for every value type
//! - **wasm**: `wasm-bindgen` wrappers around the `f64` types

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod codec;
pub mod errors;
pub mod float_types;
pub mod matrix;
pub mod quaternion;
pub mod transform;
pub mod vector;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use codec::ByteCodec;
pub use errors::{CodecError, GeometryError, HierarchyError};
pub use float_types::Real;
pub use matrix::{Mat4, Mat4d, Mat4f};
pub use quaternion::{Quat, Quatd, Quatf};
pub use transform::{NodeId, Pose, TransformNode, TransformTree};
pub use vector::{Vec3, Vec3d, Vec3f, Vec4, Vec4d, Vec4f};
