//! Maximum-likelihood ability estimation via Newton-Raphson.

use pedagogy_core::config::EstimationConfig;
use pedagogy_core::constants::{
    CONVERGENCE_THRESHOLD, MAX_ABILITY, MAX_ESTIMATION_ITERATIONS, MIN_ABILITY, MIN_CURVATURE,
    MIN_TOTAL_INFORMATION, PRIOR_ABILITY, PRIOR_STANDARD_ERROR, PROBABILITY_CEILING,
    PROBABILITY_FLOOR,
};
use pedagogy_core::ResponseRecord;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scorer::{logistic, probability_correct};

/// Result of ability estimation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbilityEstimate {
    pub ability: f64,
    pub standard_error: f64,
    /// Newton steps evaluated (0 for an empty history).
    pub iterations: usize,
    /// False when the iteration cap was hit or the likelihood had no usable curvature.
    pub converged: bool,
}

impl AbilityEstimate {
    /// Neutral estimate with maximal uncertainty, used when there is no data.
    pub fn prior() -> Self {
        Self {
            ability: PRIOR_ABILITY,
            standard_error: PRIOR_STANDARD_ERROR,
            iterations: 0,
            converged: true,
        }
    }

    pub fn as_pair(&self) -> (f64, f64) {
        (self.ability, self.standard_error)
    }
}

/// Newton-Raphson MLE solver over a response history.
#[derive(Debug, Clone)]
pub struct AbilityEstimator {
    max_iterations: usize,
    convergence_threshold: f64,
}

impl AbilityEstimator {
    /// Create an estimator with the default iteration cap (50) and threshold (0.01).
    pub fn new() -> Self {
        Self {
            max_iterations: MAX_ESTIMATION_ITERATIONS,
            convergence_threshold: CONVERGENCE_THRESHOLD,
        }
    }

    pub fn from_config(config: &EstimationConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            convergence_threshold: config.convergence_threshold,
        }
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn convergence_threshold(&self) -> f64 {
        self.convergence_threshold
    }

    /// Estimate ability and its standard error from graded responses.
    ///
    /// Starts at θ = 0 and clamps to [-4, 4] after every step. Stops once the
    /// applied step is below the convergence threshold, when the likelihood is
    /// flat (|second derivative| < 1e-10), or at the iteration cap. Hitting the
    /// cap is not an error: the last estimate is returned.
    pub fn estimate(&self, responses: &[ResponseRecord]) -> AbilityEstimate {
        if responses.is_empty() {
            return AbilityEstimate::prior();
        }

        let mut ability = PRIOR_ABILITY;
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            let (score, curvature) = log_likelihood_derivatives(ability, responses);
            if curvature.abs() < MIN_CURVATURE {
                break;
            }

            let step = score / -curvature;
            if !step.is_finite() {
                break;
            }

            let next = (ability + step).clamp(MIN_ABILITY, MAX_ABILITY);
            let applied = next - ability;
            ability = next;

            if applied.abs() < self.convergence_threshold {
                converged = true;
                break;
            }
        }

        let standard_error = standard_error(ability, responses);

        debug!(
            ability,
            standard_error,
            iterations,
            converged,
            responses = responses.len(),
            "ability estimation finished"
        );

        AbilityEstimate {
            ability,
            standard_error,
            iterations,
            converged,
        }
    }

    /// Estimate many independent histories in parallel.
    pub fn estimate_batch(&self, histories: &[Vec<ResponseRecord>]) -> Vec<AbilityEstimate> {
        histories
            .par_iter()
            .map(|history| self.estimate(history))
            .collect()
    }
}

impl Default for AbilityEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Estimate ability with the default solver settings.
pub fn estimate_ability(responses: &[ResponseRecord]) -> AbilityEstimate {
    AbilityEstimator::new().estimate(responses)
}

/// First (score) and second derivative of the log-likelihood at `ability`.
///
/// Probabilities are clamped to [0.001, 0.999] so neither term divides by zero.
fn log_likelihood_derivatives(ability: f64, responses: &[ResponseRecord]) -> (f64, f64) {
    let mut score = 0.0;
    let mut curvature = 0.0;

    for r in responses {
        let p = probability_correct(ability, r.difficulty, r.discrimination, r.guessing)
            .clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING);
        let core = logistic_variance(ability, r);
        let slope = r.discrimination * (1.0 - r.guessing) * core;

        if r.correct {
            score += slope / p;
        } else {
            score -= slope / (1.0 - p);
        }

        let information = r.discrimination * r.discrimination * (1.0 - r.guessing) * core;
        curvature -= information / (p * (1.0 - p));
    }

    (score, curvature)
}

/// `1 / sqrt(Σ I)` over responses whose probability lies inside the clamp
/// range, with the sum floored at 0.1.
fn standard_error(ability: f64, responses: &[ResponseRecord]) -> f64 {
    let total: f64 = responses
        .iter()
        .filter(|r| {
            let p = probability_correct(ability, r.difficulty, r.discrimination, r.guessing);
            (PROBABILITY_FLOOR..=PROBABILITY_CEILING).contains(&p)
        })
        .map(|r| {
            r.discrimination * r.discrimination * (1.0 - r.guessing) * logistic_variance(ability, r)
        })
        .sum();

    1.0 / total.max(MIN_TOTAL_INFORMATION).sqrt()
}

/// `L · (1 − L)` with `L = logistic(a(θ − b))`.
fn logistic_variance(ability: f64, r: &ResponseRecord) -> f64 {
    let l = logistic(r.discrimination * (ability - r.difficulty));
    l * (1.0 - l)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(correct: bool, difficulty: f64) -> ResponseRecord {
        ResponseRecord::new(correct, difficulty, 1.0, 0.0)
    }

    #[test]
    fn empty_history_returns_prior() {
        let est = estimate_ability(&[]);
        assert_eq!(est.as_pair(), (0.0, 1.0));
        assert_eq!(est.iterations, 0);
    }

    #[test]
    fn balanced_history_at_zero_stays_at_zero() {
        let est = estimate_ability(&[rec(true, 0.0), rec(false, 0.0)]);
        assert!(est.ability.abs() < 1e-12);
        assert!(est.converged);
        assert_eq!(est.iterations, 1);
        // Two items at θ = b contribute 0.25 each.
        assert!((est.standard_error - 1.0 / 0.5f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn all_correct_history_drifts_high_without_error() {
        let responses: Vec<_> = (0..5).map(|_| rec(true, -1.0)).collect();
        let est = estimate_ability(&responses);
        assert!(est.ability > 2.0 && est.ability <= 4.0);
        assert!(est.iterations <= MAX_ESTIMATION_ITERATIONS);
    }

    #[test]
    fn all_incorrect_history_drifts_low_without_error() {
        let responses: Vec<_> = (0..5).map(|_| rec(false, 1.0)).collect();
        let est = estimate_ability(&responses);
        assert!(est.ability < -2.0 && est.ability >= -4.0);
    }

    #[test]
    fn mixed_history_converges_before_the_cap() {
        let responses = vec![
            rec(true, -1.0),
            rec(true, 0.0),
            rec(false, 1.0),
            rec(true, 0.5),
            rec(false, 2.0),
        ];
        let est = estimate_ability(&responses);
        assert!(est.converged);
        assert!(est.iterations < MAX_ESTIMATION_ITERATIONS);
        assert!(est.ability > 0.5 && est.ability < 1.5, "got {}", est.ability);
    }

    #[test]
    fn standard_error_never_exceeds_information_floor() {
        let est = estimate_ability(&[rec(true, -4.0)]);
        assert!(est.standard_error <= 1.0 / MIN_TOTAL_INFORMATION.sqrt() + 1e-12);
    }

    #[test]
    fn iteration_cap_is_respected() {
        let estimator = AbilityEstimator::from_config(&EstimationConfig {
            max_iterations: 2,
            convergence_threshold: 1e-12,
        });
        let responses = vec![rec(true, 0.0), rec(true, 0.5), rec(false, 1.5)];
        let est = estimator.estimate(&responses);
        assert_eq!(est.iterations, 2);
        assert!(!est.converged);
    }

    #[test]
    fn nan_difficulty_does_not_poison_the_estimate() {
        let est = estimate_ability(&[rec(true, f64::NAN), rec(false, 0.0)]);
        assert!(est.ability.is_finite());
        assert!(est.standard_error.is_finite());
    }

    #[test]
    fn batch_matches_sequential() {
        let histories = vec![
            vec![rec(true, 0.0), rec(false, 1.0)],
            vec![],
            vec![rec(false, -1.0), rec(false, 0.0), rec(true, -2.0)],
        ];
        let estimator = AbilityEstimator::new();
        let batch = estimator.estimate_batch(&histories);
        let sequential: Vec<_> = histories.iter().map(|h| estimator.estimate(h)).collect();
        assert_eq!(batch, sequential);
    }
}
