//! Numerical validation of analytical derivatives.
//!
//! A central finite difference over a linspace gives an independent estimate
//! of the derivative; comparing its norm against the analytical result is a
//! cheap sanity check for hand-built expressions and for the engine itself.

use crate::expr::Expr;
use log::debug;

/// Evenly spaced values over `[start, end]`, inclusive of both ends.
pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(num_values);
    let step = (end - start) / (num_values as f64 - 1.0);
    for i in 0..num_values {
        values.push(start + i as f64 * step);
    }
    values
}

/// Central-difference estimate of `df/dx` at each of `x_values`.
pub fn numerical_derivative<F>(f: F, x_values: &[f64], h: f64) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    let mut derivatives = Vec::with_capacity(x_values.len());
    for &x in x_values {
        derivatives.push((f(x + h) - f(x - h)) / (2.0 * h));
    }
    derivatives
}

/// Scaled L2 norm of the elementwise difference of two equal-length vectors.
pub fn norm(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len());
    (1.0 / x.len() as f64)
        * x.iter()
            .zip(y.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
}

impl Expr {
    /// Compares the analytical derivative with a central finite difference
    /// over `num_values` points of `[start, end]`.
    ///
    /// Returns the difference norm and whether it is below `max_norm`. The
    /// interval must lie inside the domain of the expression and of its
    /// derivative.
    pub fn check_derivative(
        &self,
        start: f64,
        end: f64,
        num_values: usize,
        max_norm: f64,
    ) -> (f64, bool) {
        let x_values = linspace(start, end, num_values);
        let f = self.lambdify();
        let df = self.diff().lambdify();
        let analytical: Vec<f64> = x_values.iter().map(|&x| df(x)).collect();
        let numerical = numerical_derivative(&f, &x_values, 1e-6);
        let res_norm = norm(&analytical, &numerical);
        debug!("derivative check: norm = {}, max_norm = {}", res_norm, max_norm);
        (res_norm, res_norm < max_norm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_covers_both_ends() {
        let xs = linspace(0.0, 1.0, 5);
        assert_eq!(xs.len(), 5);
        assert_relative_eq!(xs[0], 0.0);
        assert_relative_eq!(xs[2], 0.5);
        assert_relative_eq!(xs[4], 1.0);
    }

    #[test]
    fn central_difference_approximates_known_slope() {
        let ds = numerical_derivative(|x| x * x, &[1.0, 2.0], 1e-6);
        assert_relative_eq!(ds[0], 2.0, epsilon = 1e-8);
        assert_relative_eq!(ds[1], 4.0, epsilon = 1e-8);
    }

    #[test]
    fn norm_of_identical_vectors_is_zero() {
        let v = [1.0, 2.0, 3.0];
        assert_eq!(norm(&v, &v), 0.0);
        assert!(norm(&[0.0, 0.0], &[1.0, 0.0]) > 0.0);
    }

    #[test]
    fn analytical_derivatives_match_numerics() {
        let f = Expr::var().pow(2);
        let (n, ok) = f.check_derivative(0.0, 2.0, 50, 1e-6);
        assert!(ok, "norm too large: {}", n);

        let g = 4 * (2 * Expr::var()).sin() + Expr::var().exp();
        let (n, ok) = g.check_derivative(-1.0, 1.0, 100, 1e-4);
        assert!(ok, "norm too large: {}", n);

        let h = (Expr::var() + 2.0).ln() / (Expr::var() + 3.0);
        let (n, ok) = h.check_derivative(0.0, 1.0, 50, 1e-6);
        assert!(ok, "norm too large: {}", n);
    }
}
