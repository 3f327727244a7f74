// Clamped piecewise-linear range remapping.

/// Map `value` from `domain` into `range` linearly, clamping outside the
/// domain so the result never leaves the declared output range. A
/// degenerate domain resolves as a step at its lower bound.
pub fn map_range(value: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    if d1 <= d0 {
        return if value < d0 { r0 } else { r1 };
    }
    let t = ((value - d0) / (d1 - d0)).clamp(0.0, 1.0);
    r0 + (r1 - r0) * t
}
