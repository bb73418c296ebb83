use glam::Vec2;

use crate::angle_free::AngleFreeResolver;
use crate::trigonometry::TrigonometricResolver;
use crate::types::*;

/// Contract shared by both collision engines.
///
/// Implementations must be pure: same inputs produce bit-identical outputs,
/// nothing is mutated, and no global state is consulted. The two bodies are
/// assumed already in contact; only their separation direction matters.
pub trait ResolverApi {
    /// Compute post-collision velocities for two point masses under a
    /// perfectly elastic collision (e = 1).
    ///
    /// Returns the pair `(v1', v2')` in body order, or swapped when
    /// `invert` is set. Fails with [`ResolveError::DegenerateGeometry`]
    /// when the positions coincide and [`ResolveError::InvalidMass`] when
    /// a mass is not strictly positive and finite.
    fn resolve(a: &Body, b: &Body, invert: bool) -> Result<Resolution, ResolveError>;
}

// --- Decomposed-scalar entry points ------------------------------------
//
// Component-wise variants for callers that carry their own vector type.
// Argument orders intentionally differ between the two functions; they
// match the engines' historical signatures.

/// Angle-free resolution on raw components.
/// Returns `(r1x, r1y, r2x, r2y)` in (possibly inverted) caller order.
#[allow(clippy::too_many_arguments)]
pub fn resolve_angle_free(
    v1x: f32,
    v1y: f32,
    v2x: f32,
    v2y: f32,
    m1: f32,
    m2: f32,
    x1x: f32,
    x1y: f32,
    x2x: f32,
    x2y: f32,
    invert: bool,
) -> Result<(f32, f32, f32, f32), ResolveError> {
    let a = Body::new(Vec2::new(x1x, x1y), Vec2::new(v1x, v1y), m1);
    let b = Body::new(Vec2::new(x2x, x2y), Vec2::new(v2x, v2y), m2);
    let r = AngleFreeResolver::resolve(&a, &b, invert)?;
    Ok((r.v1.x, r.v1.y, r.v2.x, r.v2.y))
}

/// Trigonometric resolution on raw components.
/// Returns `(r1x, r1y, r2x, r2y)` in (possibly inverted) caller order.
#[allow(clippy::too_many_arguments)]
pub fn resolve_trigonometry(
    x1x: f32,
    x1y: f32,
    x2x: f32,
    x2y: f32,
    v1x: f32,
    v1y: f32,
    v2x: f32,
    v2y: f32,
    m1: f32,
    m2: f32,
    invert: bool,
) -> Result<(f32, f32, f32, f32), ResolveError> {
    let a = Body::new(Vec2::new(x1x, x1y), Vec2::new(v1x, v1y), m1);
    let b = Body::new(Vec2::new(x2x, x2y), Vec2::new(v2x, v2y), m2);
    let r = TrigonometricResolver::resolve(&a, &b, invert)?;
    Ok((r.v1.x, r.v1.y, r.v2.x, r.v2.y))
}
