use glam::Vec2;

use crate::api::ResolverApi;
use crate::types::*;

/// Elastic collision via rotation into the collision frame: align one axis
/// with the line of centers, apply the 1D elastic exchange on that axis,
/// rotate back.
pub struct TrigonometricResolver;

impl ResolverApi for TrigonometricResolver {
    fn resolve(a: &Body, b: &Body, invert: bool) -> Result<Resolution, ResolveError> {
        let sep = validate_pair(a, b)?;
        // Contact angle: orientation of the line joining the centers.
        let theta = sep.y.atan2(sep.x);

        // In the rotated frame, x is the normal component and y tangential.
        let to_frame = Vec2::from_angle(-theta);
        let u1 = to_frame.rotate(a.vel);
        let u2 = to_frame.rotate(b.vel);

        // 1D elastic exchange on the normal axis; tangential untouched.
        let inv_msum = 1.0 / (a.mass + b.mass);
        let n1 = (u1.x * (a.mass - b.mass) + 2.0 * b.mass * u2.x) * inv_msum;
        let n2 = (u2.x * (b.mass - a.mass) + 2.0 * a.mass * u1.x) * inv_msum;

        let to_lab = Vec2::from_angle(theta);
        let v1 = to_lab.rotate(Vec2::new(n1, u1.y));
        let v2 = to_lab.rotate(Vec2::new(n2, u2.y));

        let res = Resolution { v1, v2 };
        Ok(if invert { res.swapped() } else { res })
    }
}
