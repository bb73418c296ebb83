use std::error::Error;
use std::fmt;

use glam::Vec2;

/// One colliding point mass, read-only input to a resolver call.
#[derive(Copy, Clone, Debug)]
pub struct Body {
    /// Position at the instant of contact.
    pub pos: Vec2,
    /// Velocity going into the collision.
    pub vel: Vec2,
    /// Mass; must be strictly positive and finite.
    pub mass: f32,
}

impl Body {
    /// Convenience constructor.
    pub fn new(pos: Vec2, vel: Vec2, mass: f32) -> Self {
        Self { pos, vel, mass }
    }
}

/// Post-collision velocities, one per body, in caller order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    /// Resultant velocity reported first.
    pub v1: Vec2,
    /// Resultant velocity reported second.
    pub v2: Vec2,
}

impl Resolution {
    /// Swap which body's result comes first (the `invert` convention).
    pub fn swapped(self) -> Self {
        Self {
            v1: self.v2,
            v2: self.v1,
        }
    }
}

/// The only failure modes of a resolver call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// The two positions coincide; the collision normal is undefined.
    DegenerateGeometry,
    /// A body mass is not strictly positive (or not finite).
    InvalidMass,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::DegenerateGeometry => {
                write!(f, "coincident positions: collision normal is undefined")
            }
            ResolveError::InvalidMass => {
                write!(f, "body mass must be strictly positive and finite")
            }
        }
    }
}

impl Error for ResolveError {}

/// Shared precondition check applied identically by both resolvers.
/// Returns the separation `a.pos - b.pos` so callers don't recompute it.
pub(crate) fn validate_pair(a: &Body, b: &Body) -> Result<Vec2, ResolveError> {
    if !(a.mass > 0.0 && a.mass.is_finite() && b.mass > 0.0 && b.mass.is_finite()) {
        return Err(ResolveError::InvalidMass);
    }
    let sep = a.pos - b.pos;
    if sep.length_squared() == 0.0 {
        return Err(ResolveError::DegenerateGeometry);
    }
    Ok(sep)
}
