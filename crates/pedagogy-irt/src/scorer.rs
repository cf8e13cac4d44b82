//! 3PL response probability and item information.
//!
//! ```text
//! P(θ) = c + (1 − c) / (1 + exp(−a(θ − b)))
//! I(θ) = a² · P · (1 − P)
//! ```

use pedagogy_core::constants::{EXPONENT_OVERFLOW_LIMIT, NEUTRAL_PROBABILITY};
use pedagogy_core::Question;
use tracing::warn;

/// Probability of a correct response under the 3PL model.
///
/// Exponents beyond ±700 short-circuit to the asymptote (`guessing` or 1.0)
/// instead of evaluating `exp`. A non-finite result (e.g. a NaN parameter)
/// is replaced by 0.5 and logged: scoring never propagates a numeric error.
pub fn probability_correct(
    ability: f64,
    difficulty: f64,
    discrimination: f64,
    guessing: f64,
) -> f64 {
    let exponent = -discrimination * (ability - difficulty);

    let probability = if exponent > EXPONENT_OVERFLOW_LIMIT {
        guessing
    } else if exponent < -EXPONENT_OVERFLOW_LIMIT {
        1.0
    } else {
        guessing + (1.0 - guessing) / (1.0 + exponent.exp())
    };

    if !probability.is_finite() {
        warn!(
            ability,
            difficulty,
            discrimination,
            guessing,
            "non-finite response probability, using neutral fallback"
        );
        return NEUTRAL_PROBABILITY;
    }

    probability.clamp(0.0, 1.0)
}

/// Fisher information `a² · P · (1 − P)` at `ability`.
pub fn fisher_information(
    ability: f64,
    difficulty: f64,
    discrimination: f64,
    guessing: f64,
) -> f64 {
    let p = probability_correct(ability, difficulty, discrimination, guessing);
    discrimination * discrimination * p * (1.0 - p)
}

/// Fisher information of `question` at `ability`, using all three parameters.
pub fn item_information(ability: f64, question: &Question) -> f64 {
    fisher_information(
        ability,
        question.difficulty,
        question.discrimination,
        question.guessing,
    )
}

/// Numerically stable logistic `1 / (1 + exp(−x))`.
pub(crate) fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
