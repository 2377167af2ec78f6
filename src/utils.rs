use num_traits::Float;
use num_traits::cast::FromPrimitive;

pub fn from_f64<F: Float + FromPrimitive>(value: f64) -> F {
    F::from_f64(value).unwrap_or_else(F::nan)
}

pub fn from_usize<F: Float + FromPrimitive>(value: usize) -> F {
    F::from_usize(value).unwrap_or_else(F::nan)
}

pub fn to_f64<F: Float>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// count points from start to end, both included; first and last points are
/// start and end exactly
pub fn evenly_spaced<F: Float + FromPrimitive>(
    start: F,
    end: F,
    count: usize,
) -> impl Iterator<Item = F> {
    let intervals: F = from_usize(count.saturating_sub(1).max(1));
    let span = end - start;
    let step = span / intervals;
    // end - start overflows for bounds near the float limits, interpolate then
    let interpolate = !span.is_finite();
    (0..count).map(move |i| {
        if i == 0 {
            start
        } else if i + 1 == count {
            end
        } else if interpolate {
            let t = from_usize::<F>(i) / intervals;
            start * (F::one() - t) + end * t
        } else {
            start + step * from_usize(i)
        }
    })
}
