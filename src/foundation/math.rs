/// `x * y / 255` with truncation toward zero. Both inputs are 8-bit, so the result fits a `u8`.
pub(crate) fn mul_div255_trunc(x: u8, y: u8) -> u8 {
    ((u16::from(x) * u16::from(y)) / 255) as u8
}

/// Clamp a float pixel bound into `[lo, hi]`, truncating when in range.
///
/// NaN lands on `lo`. Callers guarantee `lo <= hi`.
pub(crate) fn clamp_index(v: f64, lo: i64, hi: i64) -> i64 {
    if v.is_nan() || v < lo as f64 {
        return lo;
    }
    if v > hi as f64 {
        return hi;
    }
    v as i64
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
