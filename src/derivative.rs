//! # Differentiation Engine
//!
//! Analytical differentiation with respect to the single free variable `x`,
//! implemented as a pure structural transform with one rule per node kind:
//!
//! - constants differentiate to `0`, the variable to `1`;
//! - addition and subtraction recurse into both sides;
//! - multiplication applies the product rule, division the quotient rule;
//! - every unary function applies the chain rule: the function's own
//!   derivative in terms of its original operand, multiplied by the
//!   derivative of that operand.
//!
//! The transform is total over well-formed trees and always returns a
//! brand-new tree; the input is never mutated or aliased. No simplification
//! pass runs on the result beyond what the freshly constructed `0`/`1`
//! constants let evaluation and printing elide later.

use crate::expr::{BinOp, Expr, UnaryFn};

impl UnaryFn {
    /// The derivative of this function in terms of its original operand.
    ///
    /// The chain-rule multiplication by the operand's derivative happens
    /// once, generically, in [`Expr::diff`].
    pub fn outer_derivative(self, e: &Expr) -> Expr {
        match self {
            UnaryFn::Sin => e.clone().cos(),
            UnaryFn::Cos => e.clone().sin() * Expr::constant(-1.0),
            UnaryFn::Sqrt => Expr::constant(1.0) / (Expr::constant(2.0) * e.clone().sqrt()),
            // x^0 is a constant; the general rule would need a negative exponent
            UnaryFn::Pow(0) => Expr::constant(0.0),
            UnaryFn::Pow(n) => Expr::constant(n as f64) * e.clone().pow(n - 1),
            UnaryFn::Exp => e.clone().exp(),
            UnaryFn::Ln => Expr::constant(1.0) / e.clone(),
            UnaryFn::Abs => e.clone() / e.clone().abs(),
        }
    }
}

impl Expr {
    /// Computes the analytical derivative `d(self)/dx` as a new tree.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::var().pow(2);
    /// let df = f.diff();
    /// assert_eq!(df.eval(3.0), 6.0);
    /// ```
    pub fn diff(&self) -> Expr {
        match self {
            Expr::Const(_) => Expr::constant(0.0),
            Expr::Var => Expr::constant(1.0),
            Expr::Binary(BinOp::Add, lhs, rhs) => lhs.diff() + rhs.diff(),
            Expr::Binary(BinOp::Sub, lhs, rhs) => lhs.diff() - rhs.diff(),
            Expr::Binary(BinOp::Mul, lhs, rhs) => {
                lhs.diff() * rhs.as_ref().clone() + lhs.as_ref().clone() * rhs.diff()
            }
            Expr::Binary(BinOp::Div, lhs, rhs) => {
                (lhs.diff() * rhs.as_ref().clone() - lhs.as_ref().clone() * rhs.diff())
                    / (rhs.as_ref().clone() * rhs.as_ref().clone())
            }
            Expr::Unary(func, operand) => func.outer_derivative(operand) * operand.diff(),
        }
    }
}

/// Derivative of `e` with respect to `x`, as a new expression tree.
pub fn derivative(e: &Expr) -> Expr {
    e.diff()
}
