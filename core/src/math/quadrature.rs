pub struct QuadratureHelper;

impl QuadratureHelper {
    /// Composite trapezoidal rule over index-aligned `times`/`values`.
    ///
    /// Sums strictly left to right so identical inputs give bit-identical
    /// results. Fewer than two samples integrate to zero.
    pub fn trapezoid(times: &[f64], values: &[f64]) -> f64 {
        debug_assert_eq!(times.len(), values.len());
        times
            .windows(2)
            .zip(values.windows(2))
            .fold(0.0, |acc, (t, v)| acc + 0.5 * (v[0] + v[1]) * (t[1] - t[0]))
    }
}
