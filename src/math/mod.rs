//! Math utilities module
//!
//! Model transforms on top of glam, plus the glam types the renderer traffics in.

mod transform;

pub use transform::Transform;

pub use glam::{Mat4, Quat, Vec3, Vec4};
