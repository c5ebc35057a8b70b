// MIT License
//! # symdiff
//!
//! Symbolic differentiation of single-variable real-valued expressions.
//!
//! Expressions are immutable trees built bottom-up from constants, the free
//! variable `x`, the four arithmetic operators and a closed catalog of math
//! functions (sin, cos, sqrt, integer power, exp, ln, abs). A tree can be
//! evaluated numerically, differentiated analytically into a new tree, and
//! printed in a compact parenthesized form with multiply-by-one, add-zero and
//! divide-by-one subtrees elided.
//!
//! # Example
//! ```
//! use symdiff::{derivative, Expr};
//!
//! let f = 4 * (2 * Expr::var()).sin();
//! println!("f(x) = {}", f);
//! println!("f(pi/4) = {}", f.eval(std::f64::consts::FRAC_PI_4));
//!
//! let df = derivative(&f);
//! println!("f'(x) = {}", df);
//! assert!((df.eval(0.0) - 8.0).abs() < 1e-12);
//! ```

/// Floating-point tolerant zero/identity predicates; constants cache their
/// results at construction time.
pub mod numeric;
/// The expression tree itself: node kinds, builder methods and the `std::ops`
/// overloads for natural mathematical syntax.
pub mod expr;
/// Numeric evaluation and closure compilation, with the constant elision
/// rules shared with printing.
pub mod eval;
/// Pretty printing in fully parenthesized mathematical notation.
pub mod display;
/// Analytical differentiation: one structural rule per node kind, chain rule
/// applied generically over the function catalog.
pub mod derivative;
/// Cross-checking analytical derivatives against central finite differences.
pub mod validate;


pub use crate::derivative::derivative;
pub use crate::expr::{BinOp, Constant, Expr, UnaryFn};
