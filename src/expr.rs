//! # Expression Model
//!
//! Core symbolic expression type representing single-variable mathematical
//! expressions as immutable trees.
//!
//! An [`Expr`] is built bottom-up: leaves are constants and the free variable
//! `x`, inner nodes combine sub-trees with the four arithmetic operators or
//! apply one of the named functions from the closed [`UnaryFn`] catalog.
//! There is no parser; trees are composed with the `std::ops` overloads and
//! the builder methods:
//!
//! ```rust, ignore
//! use symdiff::Expr;
//! let f = 4 * (2 * Expr::var()).sin();
//! println!("f(x) = {}", f);
//! println!("f'(x) = {}", f.diff());
//! ```
//!
//! Every construction copies or moves its operands into the new parent node,
//! so trees are strict trees with exclusive ownership of their children. No
//! operation mutates a node in place; differentiation and evaluation walk the
//! tree and build new values.

use crate::numeric::{is_identity, is_zero};

/// A numeric literal with its zero/identity flags fixed at construction.
///
/// The flags are computed once from [`crate::numeric`] and stay consistent
/// with `value` for the lifetime of the node. They make the elision checks in
/// evaluation and printing branch-free lookups instead of repeated
/// floating-point comparisons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constant {
    value: f64,
    zero: bool,
    unity: bool,
}

impl Constant {
    pub fn new(value: f64) -> Self {
        Constant {
            value,
            zero: is_zero(value),
            unity: is_identity(value),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.zero
    }

    pub fn is_unity(&self) -> bool {
        self.unity
    }
}

/// Arithmetic operator tags for binary nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// The closed set of supported unary functions.
///
/// Each function pairs a numeric routine (`apply`), a print form and a
/// derivative rule; the three live in the evaluation, display and derivative
/// modules and must be extended together when a function is added.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryFn {
    Sin,
    Cos,
    Sqrt,
    /// Integer power with a non-negative exponent; `Pow(1)` is definitionally
    /// the identity function.
    Pow(u32),
    Exp,
    Ln,
    Abs,
}

/// Core symbolic expression type: an immutable tree over the single free
/// variable `x`.
///
/// Uses `Box<Expr>` for recursive structure, enabling arbitrarily deep
/// expression trees; recursion depth is caller-controlled.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numerical constant with cached zero/identity flags
    Const(Constant),
    /// The free variable `x`; carries no state, every `Var` is interchangeable
    Var,
    /// Arithmetic combination of two sub-expressions
    Binary(BinOp, Box<Expr>, Box<Expr>),
    /// Application of a named function to a sub-expression
    Unary(UnaryFn, Box<Expr>),
}

impl Expr {
    /// Wraps a raw scalar as a constant leaf.
    pub fn constant(value: f64) -> Expr {
        Expr::Const(Constant::new(value))
    }

    /// The free variable `x`.
    pub fn var() -> Expr {
        Expr::Var
    }

    /// Convenience method to wrap an expression in a `Box` for recursive
    /// structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates `sin(self)`.
    pub fn sin(self) -> Expr {
        Expr::Unary(UnaryFn::Sin, self.boxed())
    }

    /// Creates `cos(self)`.
    pub fn cos(self) -> Expr {
        Expr::Unary(UnaryFn::Cos, self.boxed())
    }

    /// Creates `sqrt(self)`.
    pub fn sqrt(self) -> Expr {
        Expr::Unary(UnaryFn::Sqrt, self.boxed())
    }

    /// Creates `self^n` for a non-negative integer exponent.
    pub fn pow(self, n: u32) -> Expr {
        Expr::Unary(UnaryFn::Pow(n), self.boxed())
    }

    /// Creates the natural exponential `e^(self)`.
    pub fn exp(self) -> Expr {
        Expr::Unary(UnaryFn::Exp, self.boxed())
    }

    /// Creates the natural logarithm `ln(self)`.
    pub fn ln(self) -> Expr {
        Expr::Unary(UnaryFn::Ln, self.boxed())
    }

    /// Creates the absolute value `|self|`.
    pub fn abs(self) -> Expr {
        Expr::Unary(UnaryFn::Abs, self.boxed())
    }

    /// The node itself as a constant, if it is one.
    pub fn as_const(&self) -> Option<&Constant> {
        match self {
            Expr::Const(c) => Some(c),
            _ => None,
        }
    }

    /// True only when the node is a constant whose zero flag was set at
    /// construction. Never looks through sub-trees.
    pub fn is_zero_const(&self) -> bool {
        self.as_const().is_some_and(Constant::is_zero)
    }

    /// True only when the node is a constant whose identity flag was set at
    /// construction. Never looks through sub-trees.
    pub fn is_unity_const(&self) -> bool {
        self.as_const().is_some_and(Constant::is_unity)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Expr {
        Expr::constant(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Expr {
        Expr::constant(value as f64)
    }
}

impl<R: Into<Expr>> std::ops::Add<R> for Expr {
    type Output = Self;

    fn add(self, rhs: R) -> Self::Output {
        Expr::Binary(BinOp::Add, self.boxed(), rhs.into().boxed())
    }
}

impl<R: Into<Expr>> std::ops::Sub<R> for Expr {
    type Output = Self;

    fn sub(self, rhs: R) -> Self::Output {
        Expr::Binary(BinOp::Sub, self.boxed(), rhs.into().boxed())
    }
}

impl<R: Into<Expr>> std::ops::Mul<R> for Expr {
    type Output = Self;

    fn mul(self, rhs: R) -> Self::Output {
        Expr::Binary(BinOp::Mul, self.boxed(), rhs.into().boxed())
    }
}

impl<R: Into<Expr>> std::ops::Div<R> for Expr {
    type Output = Self;

    fn div(self, rhs: R) -> Self::Output {
        Expr::Binary(BinOp::Div, self.boxed(), rhs.into().boxed())
    }
}

impl std::ops::Add<Expr> for f64 {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::constant(self) + rhs
    }
}

impl std::ops::Sub<Expr> for f64 {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::constant(self) - rhs
    }
}

impl std::ops::Mul<Expr> for f64 {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::constant(self) * rhs
    }
}

impl std::ops::Div<Expr> for f64 {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::constant(self) / rhs
    }
}

impl std::ops::Add<Expr> for i32 {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::constant(self as f64) + rhs
    }
}

impl std::ops::Sub<Expr> for i32 {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::constant(self as f64) - rhs
    }
}

impl std::ops::Mul<Expr> for i32 {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::constant(self as f64) * rhs
    }
}

impl std::ops::Div<Expr> for i32 {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::constant(self as f64) / rhs
    }
}

impl std::ops::AddAssign for Expr {
    fn add_assign(&mut self, rhs: Self) {
        *self = Expr::Binary(BinOp::Add, Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::SubAssign for Expr {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Expr::Binary(BinOp::Sub, Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Expr::Binary(BinOp::Mul, Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::DivAssign for Expr {
    fn div_assign(&mut self, rhs: Self) {
        *self = Expr::Binary(BinOp::Div, Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Binary(BinOp::Mul, Expr::constant(-1.0).boxed(), self.boxed())
    }
}
