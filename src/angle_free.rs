use crate::api::ResolverApi;
use crate::types::*;

/// Elastic collision via vector projection along the line of centers.
/// No trigonometric functions involved.
pub struct AngleFreeResolver;

impl ResolverApi for AngleFreeResolver {
    fn resolve(a: &Body, b: &Body, invert: bool) -> Result<Resolution, ResolveError> {
        // sep = x1 - x2, the unnormalized collision normal. The |x1-x2|^2
        // denominator below absorbs the missing normalization.
        let sep = validate_pair(a, b)?;
        let inv_d2 = 1.0 / sep.length_squared();
        let inv_msum = 1.0 / (a.mass + b.mass);

        // Body 2's term uses the mirrored separation and relative velocity;
        // both signs flip in the dot product, leaving only the flipped
        // direction, so it reduces to the same projection with a `+`.
        let k = (a.vel - b.vel).dot(sep) * inv_d2;
        let v1 = a.vel - (2.0 * b.mass * inv_msum) * k * sep;
        let v2 = b.vel + (2.0 * a.mass * inv_msum) * k * sep;

        let res = Resolution { v1, v2 };
        Ok(if invert { res.swapped() } else { res })
    }
}
