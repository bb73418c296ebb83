//! clack: 2D elastic-collision resolution kernel (two engines, one contract)
//!
//! Given two point masses in contact, compute their post-collision
//! velocities under perfectly elastic physics (e = 1). Two independent
//! derivations are provided for cross-validation and performance
//! comparison: [`AngleFreeResolver`] (vector projection along the line of
//! centers) and [`TrigonometricResolver`] (rotation into the collision
//! frame). Both are pure and stateless; calls are freely concurrent.

pub mod types;
pub mod api;
pub mod angle_free;
pub mod trigonometry;

pub use crate::types::*;
pub use crate::api::*;
pub use crate::angle_free::AngleFreeResolver;
pub use crate::trigonometry::TrigonometricResolver;
