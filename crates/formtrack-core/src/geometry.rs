//! Angle computations over 2D landmark positions.
//!
//! Two functions cover everything the analysis needs: the angle subtended at
//! a joint by its two adjacent points, and the absolute angle of a line
//! segment relative to horizontal (the torso-lean proxy).

/// Additive term in the magnitude denominator. Keeps coincident points from
/// dividing by zero while leaving normal-scale inputs unaffected.
const ANGLE_EPSILON: f32 = 1e-6;

/// Computes the angle ABC in degrees, where `b` is the joint vertex.
///
/// Uses the dot product formula `cos(θ) = (v1 · v2) / (|v1| × |v2|)` over
/// the vectors B→A and B→C, with the cosine clamped to `[-1, 1]` before
/// `acos`. The result is always in `[0, 180]` and symmetric in `a` and `c`.
///
/// Degenerate inputs (a point coinciding with the vertex) produce a stable
/// in-range value rather than NaN.
#[must_use]
pub fn joint_angle(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    let v1 = (a.0 - b.0, a.1 - b.1);
    let v2 = (c.0 - b.0, c.1 - b.1);

    let dot = v1.0 * v2.0 + v1.1 * v2.1;
    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

    let cosine = (dot / (mag1 * mag2 + ANGLE_EPSILON)).clamp(-1.0, 1.0);
    cosine.acos().to_degrees()
}

/// Computes the absolute angle of the segment `p1 → p2` from horizontal,
/// in degrees.
///
/// A bigger value means a steeper segment. With normalized image
/// coordinates (`y` downward), a standing torso's shoulder→hip segment
/// measures near 90.
#[must_use]
pub fn line_angle(p1: (f32, f32), p2: (f32, f32)) -> f32 {
    let dx = p2.0 - p1.0;
    let dy = p2.1 - p1.1;
    dy.atan2(dx).to_degrees().abs()
}
