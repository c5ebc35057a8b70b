//! Floating-point tolerant zero and identity tests.
//!
//! Every elision decision in evaluation and printing goes through these two
//! predicates. Constant nodes cache the results at construction time, so a
//! constant can never disagree with its own flags later.

/// Checks whether `v` is zero up to one unit in the last place.
///
/// Returns true when no representable `f64` lies strictly between `v` and
/// `0.0`, approached from either side. This tolerates the last bit of
/// accumulated rounding error without introducing a configurable epsilon.
/// Only finite inputs are meaningful; constants are assumed finite.
pub fn is_zero(v: f64) -> bool {
    if v.next_down() > 0.0 || v.next_up() < 0.0 {
        return false;
    }
    true
}

/// Checks whether `v` is one up to one unit in the last place.
///
/// Defined as `is_zero(|v - 1|)`, reusing the same one-ULP tolerance instead
/// of a separate epsilon.
pub fn is_identity(v: f64) -> bool {
    is_zero((v - 1.0).abs())
}
