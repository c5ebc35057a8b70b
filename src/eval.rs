//! # Simplifying Evaluator
//!
//! Numeric evaluation of expression trees. The constant elision rules here
//! are the evaluation half of the shared simplification logic; the printing
//! half in the display module consults the same constant flags, so what is
//! printed matches what is actually computed.
//!
//! There is no error type: division by zero, `ln` or `sqrt` of out-of-domain
//! values and similar issues surface as the IEEE `inf`/`NaN` the underlying
//! routines return and propagate through further arithmetic unchanged.

use crate::expr::{BinOp, Expr, UnaryFn};

impl UnaryFn {
    /// The underlying numeric routine of the function.
    ///
    /// These calls are the only floating-point math the crate delegates to
    /// the standard `f64` functions.
    pub fn apply(self, v: f64) -> f64 {
        match self {
            UnaryFn::Sin => v.sin(),
            UnaryFn::Cos => v.cos(),
            UnaryFn::Sqrt => v.sqrt(),
            // the first power is the identity routine
            UnaryFn::Pow(1) => v,
            UnaryFn::Pow(n) => v.powi(n as i32),
            UnaryFn::Exp => v.exp(),
            UnaryFn::Ln => v.ln(),
            UnaryFn::Abs => v.abs(),
        }
    }
}

impl Expr {
    /// Evaluates the expression at `x`.
    ///
    /// Multiplication by a zero or unity constant and division by a unity
    /// constant short-circuit without evaluating the redundant side; addition
    /// and subtraction always evaluate both operands. The checks apply only
    /// to operands that are themselves constant nodes, using the flags fixed
    /// at construction.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Const(c) => c.value(),
            Expr::Var => x,
            Expr::Binary(op, lhs, rhs) => match op {
                BinOp::Add => lhs.eval(x) + rhs.eval(x),
                BinOp::Sub => lhs.eval(x) - rhs.eval(x),
                BinOp::Mul => {
                    if lhs.is_zero_const() || rhs.is_zero_const() {
                        return 0.0;
                    }
                    if lhs.is_unity_const() {
                        return rhs.eval(x);
                    }
                    if rhs.is_unity_const() {
                        return lhs.eval(x);
                    }
                    lhs.eval(x) * rhs.eval(x)
                }
                BinOp::Div => {
                    if rhs.is_unity_const() {
                        return lhs.eval(x);
                    }
                    lhs.eval(x) / rhs.eval(x)
                }
            },
            Expr::Unary(func, operand) => func.apply(operand.eval(x)),
        }
    }

    /// Compiles the expression into a nested closure for repeated evaluation.
    ///
    /// The same constant elision as [`Expr::eval`] is applied once, while the
    /// closure is built, so elided subtrees cost nothing per call.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::var().pow(2);
    /// let func = f.lambdify();
    /// assert_eq!(func(3.0), 9.0);
    /// ```
    pub fn lambdify(&self) -> Box<dyn Fn(f64) -> f64 + Send + Sync> {
        match self {
            Expr::Const(c) => {
                let v = c.value();
                Box::new(move |_| v)
            }
            Expr::Var => Box::new(|x| x),
            Expr::Binary(op, lhs, rhs) => match op {
                BinOp::Add => {
                    let lf = lhs.lambdify();
                    let rf = rhs.lambdify();
                    Box::new(move |x| lf(x) + rf(x))
                }
                BinOp::Sub => {
                    let lf = lhs.lambdify();
                    let rf = rhs.lambdify();
                    Box::new(move |x| lf(x) - rf(x))
                }
                BinOp::Mul => {
                    if lhs.is_zero_const() || rhs.is_zero_const() {
                        return Box::new(|_| 0.0);
                    }
                    if lhs.is_unity_const() {
                        return rhs.lambdify();
                    }
                    if rhs.is_unity_const() {
                        return lhs.lambdify();
                    }
                    let lf = lhs.lambdify();
                    let rf = rhs.lambdify();
                    Box::new(move |x| lf(x) * rf(x))
                }
                BinOp::Div => {
                    if rhs.is_unity_const() {
                        return lhs.lambdify();
                    }
                    let lf = lhs.lambdify();
                    let rf = rhs.lambdify();
                    Box::new(move |x| lf(x) / rf(x))
                }
            },
            Expr::Unary(func, operand) => {
                let func = *func;
                let inner = operand.lambdify();
                Box::new(move |x| func.apply(inner(x)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{E, FRAC_PI_2, PI};

    #[test]
    fn leaves_evaluate_to_themselves() {
        assert_eq!(Expr::constant(3.5).eval(100.0), 3.5);
        assert_eq!(Expr::var().eval(2.0), 2.0);
    }

    #[test]
    fn arithmetic_evaluates_recursively() {
        let f = (Expr::var() + 2.0) * (Expr::var() - 1.0);
        assert_eq!(f.eval(3.0), 10.0);
        let g = Expr::var() / (Expr::var() + 1.0);
        assert_eq!(g.eval(1.0), 0.5);
    }

    #[test]
    fn zero_product_short_circuits_the_other_side() {
        // without the short-circuit this would be 0 * inf = NaN
        let f = Expr::constant(0.0) * (Expr::var() / Expr::constant(0.0));
        assert_eq!(f.eval(1.0), 0.0);
        let g = (Expr::var() / Expr::constant(0.0)) * Expr::constant(0.0);
        assert_eq!(g.eval(1.0), 0.0);
    }

    #[test]
    fn unity_factors_and_divisors_are_elided() {
        let f = Expr::constant(1.0) * Expr::var();
        assert_eq!(f.eval(7.0), 7.0);
        let g = Expr::var() * Expr::constant(0.5 + 0.5);
        assert_eq!(g.eval(7.0), 7.0);
        let h = Expr::var() / Expr::constant(1.0);
        assert_eq!(h.eval(7.0), 7.0);
    }

    #[test]
    fn zero_addends_still_contribute() {
        let f = Expr::constant(0.0) + Expr::var();
        assert_eq!(f.eval(4.0), 4.0);
        let g = Expr::var() - Expr::constant(0.0);
        assert_eq!(g.eval(4.0), 4.0);
    }

    #[test]
    fn function_catalog_routines() {
        assert_relative_eq!(Expr::var().sin().eval(FRAC_PI_2), 1.0);
        assert_relative_eq!(Expr::var().cos().eval(PI), -1.0);
        assert_relative_eq!(Expr::var().sqrt().eval(9.0), 3.0);
        assert_relative_eq!(Expr::var().pow(3).eval(2.0), 8.0);
        assert_relative_eq!(Expr::var().exp().eval(1.0), E);
        assert_relative_eq!(Expr::var().ln().eval(E), 1.0);
        assert_relative_eq!(Expr::var().abs().eval(-2.5), 2.5);
        // Pow(1) is the identity routine, Pow(0) the constant one
        assert_eq!(Expr::var().pow(1).eval(42.0), 42.0);
        assert_eq!(Expr::var().pow(0).eval(42.0), 1.0);
    }

    #[test]
    fn out_of_domain_values_propagate() {
        assert!(Expr::var().sqrt().eval(-1.0).is_nan());
        assert!(Expr::var().ln().eval(0.0).is_infinite());
        let f = Expr::constant(1.0) / Expr::var();
        assert!(f.eval(0.0).is_infinite());
    }

    #[test]
    fn lambdify_matches_eval() {
        let f = 4 * (2 * Expr::var()).sin() + Expr::var().pow(2) / (Expr::var() + 3.0);
        let func = f.lambdify();
        for i in 0..20 {
            let x = -2.0 + 0.25 * i as f64;
            assert_relative_eq!(func(x), f.eval(x));
        }
    }

    #[test]
    fn lambdify_applies_the_same_elision() {
        let f = Expr::constant(0.0) * (Expr::var() / Expr::constant(0.0));
        assert_eq!(f.lambdify()(1.0), 0.0);
        let g = Expr::var() / Expr::constant(1.0);
        assert_eq!(g.lambdify()(5.0), 5.0);
    }
}
