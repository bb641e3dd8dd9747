pub struct InterpHelper;

impl InterpHelper {
    /// Linear interpolation between `(t0, v0)` and `(t1, v1)` evaluated at `t`.
    ///
    /// Returns `v0`/`v1` exactly at the endpoints and never leaves the closed
    /// interval spanned by the two values. Callers guarantee `t0 != t1`.
    pub fn lerp(t0: f64, v0: f64, t1: f64, v1: f64, t: f64) -> f64 {
        if t == t0 {
            return v0;
        }
        if t == t1 {
            return v1;
        }
        let value = v0 + (v1 - v0) * (t - t0) / (t1 - t0);
        // Rounding can overshoot by an ulp; `f64::clamp` would panic on NaN bounds.
        let (lo, hi) = (v0.min(v1), v0.max(v1));
        if value < lo {
            lo
        } else if value > hi {
            hi
        } else {
            value
        }
    }
}
