//! Sign-gated scoring of an integer triple.
//!
//! Branching is a pure classification over the sign triple
//! `(a>0, b>0, c>0)`; the arithmetic lives in a single helper applied to
//! whichever participating sum the classification selects.

use serde::{Deserialize, Serialize};

// Fixed transform applied to whichever sum a branch selects.
const SCALE_NUMERATOR: i64 = 2;
const SCALE_DENOMINATOR: i64 = 3;
const BASE_OFFSET: i64 = 10;

/// Which operands of the triple participate in the scored sum.
///
/// `a` is the gate: when it is non-positive nothing participates. When `a`
/// is positive, each of `b` and `c` joins the sum only if it is itself
/// positive, and `a` alone scores nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperandSelection {
    /// All three operands are positive; `a + b + c` participates.
    All,
    /// `a` and `b` are positive, `c` is not; `a + b` participates.
    FirstSecond,
    /// `a` and `c` are positive, `b` is not; `a + c` participates.
    FirstThird,
    /// No participating sum; the score is fixed at zero.
    None,
}

/// Pure classification of the sign triple into a participating-operand set.
pub fn classify(a: i64, b: i64, c: i64) -> OperandSelection {
    match (a > 0, b > 0, c > 0) {
        (true, true, true) => OperandSelection::All,
        (true, true, false) => OperandSelection::FirstSecond,
        (true, false, true) => OperandSelection::FirstThird,
        // a <= 0, or a > 0 with no positive partner
        _ => OperandSelection::None,
    }
}

/// Apply the fixed transform to a participating sum.
///
/// Division truncates toward zero (Rust's `/` on signed integers), which
/// matters for any caller reasoning about negative intermediate sums even
/// though every sum reaching this helper is strictly positive.
fn scale(sum: i64) -> i64 {
    sum * SCALE_NUMERATOR / SCALE_DENOMINATOR + BASE_OFFSET
}

/// Score a triple of signed integers.
///
/// - `a > 0, b > 0, c > 0` → `((a + b + c) * 2 / 3) + 10`
/// - `a > 0, b > 0, c <= 0` → `((a + b) * 2 / 3) + 10`
/// - `a > 0, b <= 0, c > 0` → `((a + c) * 2 / 3) + 10`
/// - anything else → `0`
///
/// The zero fallthrough for `a > 0` with no positive partner is part of
/// the contract, not an error: this function has no failure path.
///
/// Overflow of the participating sum or of the `* 2` step follows Rust's
/// default `i64` semantics (panic under debug assertions, wrap in
/// release); no saturating or checked policy is imposed.
pub fn compute(a: i64, b: i64, c: i64) -> i64 {
    match classify(a, b, c) {
        OperandSelection::All => scale(a + b + c),
        OperandSelection::FirstSecond => scale(a + b),
        OperandSelection::FirstThird => scale(a + c),
        OperandSelection::None => 0,
    }
}
