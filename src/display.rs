//! # Simplifying Printer
//!
//! Pretty printing of expression trees in fully parenthesized mathematical
//! notation. The zero/identity elision rules mirror the evaluator, consulting
//! the same constant flags, so the printed form describes the computation
//! that actually happens.
//!
//! The output is deterministic and repeatable but is not meant to be
//! re-parsed; no inverse operation exists.

use crate::expr::{BinOp, Expr, UnaryFn};
use std::fmt;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Const(c) => write!(f, "{}", c.value()),
            Expr::Var => write!(f, "x"),
            Expr::Binary(op, lhs, rhs) => match op {
                BinOp::Add => {
                    if lhs.is_zero_const() {
                        write!(f, "{}", rhs)
                    } else if rhs.is_zero_const() {
                        write!(f, "{}", lhs)
                    } else {
                        write!(f, "({} + {})", lhs, rhs)
                    }
                }
                BinOp::Sub => {
                    if lhs.is_zero_const() {
                        write!(f, "-{}", rhs)
                    } else if rhs.is_zero_const() {
                        write!(f, "{}", lhs)
                    } else {
                        write!(f, "({} - {})", lhs, rhs)
                    }
                }
                BinOp::Mul => {
                    if lhs.is_unity_const() {
                        write!(f, "{}", rhs)
                    } else if rhs.is_unity_const() {
                        write!(f, "{}", lhs)
                    } else {
                        write!(f, "{} * {}", lhs, rhs)
                    }
                }
                BinOp::Div => {
                    if rhs.is_unity_const() {
                        write!(f, "{}", lhs)
                    } else {
                        write!(f, "(({}) / ({}))", lhs, rhs)
                    }
                }
            },
            Expr::Unary(func, e) => match func {
                UnaryFn::Sin => write!(f, "sin({})", e),
                UnaryFn::Cos => write!(f, "cos({})", e),
                UnaryFn::Sqrt => write!(f, "sqrt({})", e),
                UnaryFn::Pow(n) => write!(f, "({}^{})", e, n),
                UnaryFn::Exp => write!(f, "e^({})", e),
                UnaryFn::Ln => write!(f, "ln({})", e),
                UnaryFn::Abs => write!(f, "|{}|", e),
            },
        }
    }
}
