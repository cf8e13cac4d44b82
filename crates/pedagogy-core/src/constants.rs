/// Lower bound of the ability scale (theta).
pub const MIN_ABILITY: f64 = -4.0;

/// Upper bound of the ability scale (theta).
pub const MAX_ABILITY: f64 = 4.0;

/// Default item discrimination (IRT `a`).
pub const DEFAULT_DISCRIMINATION: f64 = 1.0;

/// Default pseudo-guessing floor (IRT `c`).
pub const DEFAULT_GUESSING: f64 = 0.0;

/// Magnitude past which `exp` is not evaluated and the asymptote is returned.
pub const EXPONENT_OVERFLOW_LIMIT: f64 = 700.0;

/// Probability returned when scoring produces a non-finite value.
pub const NEUTRAL_PROBABILITY: f64 = 0.5;

/// Maximum Newton-Raphson iterations for ability estimation.
pub const MAX_ESTIMATION_ITERATIONS: usize = 50;

/// Step size below which ability estimation is considered converged.
pub const CONVERGENCE_THRESHOLD: f64 = 0.01;

/// Curvature magnitude below which a Newton step is not attempted.
pub const MIN_CURVATURE: f64 = 1e-10;

/// Probability clamp used inside the likelihood derivatives.
pub const PROBABILITY_FLOOR: f64 = 0.001;
pub const PROBABILITY_CEILING: f64 = 0.999;

/// Floor on total test information when computing the standard error.
pub const MIN_TOTAL_INFORMATION: f64 = 0.1;

/// Estimate returned for an empty response history.
pub const PRIOR_ABILITY: f64 = 0.0;
pub const PRIOR_STANDARD_ERROR: f64 = 1.0;

/// Online update step for ability after each response.
pub const LEARNING_RATE: f64 = 0.1;

/// Bloom's mastery reward for a correct response.
pub const MASTERY_GAIN: f64 = 0.1;

/// Bloom's mastery penalty for an incorrect response.
pub const MASTERY_PENALTY: f64 = 0.05;

/// Selection weight for an item at exactly the targeted Bloom's level.
pub const TARGET_LEVEL_WEIGHT: f64 = 2.0;

/// Selection weight for an item one Bloom's level away from the target.
pub const ADJACENT_LEVEL_WEIGHT: f64 = 1.5;

/// Default learning style tag for new profiles.
pub const DEFAULT_LEARNING_STYLE: &str = "adaptive";
