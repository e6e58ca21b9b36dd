//! Weighted-average scoring engine.
//!
//! Pure arithmetic, no state: one simulation's five raw scores folded against
//! one ambition's five weights.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ScoringError};

/// Raw subject scores for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectScores {
    pub math: f64,
    pub languages: f64,
    pub natural_science: f64,
    pub human_science: f64,
    pub essay: f64,
}

/// Per-subject weights taken from one ambition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectWeights {
    pub math: i32,
    pub languages: i32,
    pub natural_science: i32,
    pub human_science: i32,
    pub essay: i32,
}

impl SubjectWeights {
    pub fn sum(&self) -> i32 {
        self.math + self.languages + self.natural_science + self.human_science + self.essay
    }
}

/// Computes the weighted mean of the five subject scores.
///
/// No rounding is applied; the result carries full floating-point precision.
/// The ambition invariant keeps every weight >= 1, so the weight sum is
/// normally >= 5. A record pushed below that invariant (only reachable by
/// direct data manipulation) yields [`ScoringError::InvalidWeights`] instead
/// of a NaN or infinite score.
pub fn compute_final_score(scores: &SubjectScores, weights: &SubjectWeights) -> Result<f64> {
    let weight_sum = weights.sum();
    if weight_sum <= 0 {
        return Err(ScoringError::InvalidWeights.into());
    }

    let weighted_sum = scores.math * f64::from(weights.math)
        + scores.languages * f64::from(weights.languages)
        + scores.natural_science * f64::from(weights.natural_science)
        + scores.human_science * f64::from(weights.human_science)
        + scores.essay * f64::from(weights.essay);

    Ok(weighted_sum / f64::from(weight_sum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn uniform_weights(value: i32) -> SubjectWeights {
        SubjectWeights {
            math: value,
            languages: value,
            natural_science: value,
            human_science: value,
            essay: value,
        }
    }

    #[test]
    fn test_unit_weights_give_arithmetic_mean() {
        let scores = SubjectScores {
            math: 700.0,
            languages: 650.0,
            natural_science: 600.0,
            human_science: 550.0,
            essay: 800.0,
        };
        let result = compute_final_score(&scores, &uniform_weights(1)).unwrap();
        assert!((result - 660.0).abs() < EPSILON);
    }

    #[test]
    fn test_weighted_example() {
        // weights (2,1,1,1,1), scores (800,600,600,600,600)
        // -> (1600+600+600+600+600)/6 = 666.666...
        let scores = SubjectScores {
            math: 800.0,
            languages: 600.0,
            natural_science: 600.0,
            human_science: 600.0,
            essay: 600.0,
        };
        let weights = SubjectWeights {
            math: 2,
            ..uniform_weights(1)
        };
        let result = compute_final_score(&scores, &weights).unwrap();
        assert!((result - 4000.0 / 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_scores_give_zero() {
        let result =
            compute_final_score(&SubjectScores::default(), &uniform_weights(3)).unwrap();
        assert_eq!(result, 0.0);
    }

    #[test]
    fn test_zero_weight_sum_is_an_error_not_nan() {
        let scores = SubjectScores {
            math: 500.0,
            ..Default::default()
        };
        let result = compute_final_score(&scores, &uniform_weights(0));
        assert!(matches!(
            result,
            Err(crate::Error::Scoring(ScoringError::InvalidWeights))
        ));
    }

    proptest! {
        #[test]
        fn prop_matches_reference_formula(
            scores in prop::array::uniform5(0.0f64..1000.0),
            weights in prop::array::uniform5(1i32..100),
        ) {
            let s = SubjectScores {
                math: scores[0],
                languages: scores[1],
                natural_science: scores[2],
                human_science: scores[3],
                essay: scores[4],
            };
            let w = SubjectWeights {
                math: weights[0],
                languages: weights[1],
                natural_science: weights[2],
                human_science: weights[3],
                essay: weights[4],
            };
            let expected: f64 = scores
                .iter()
                .zip(weights.iter())
                .map(|(score, weight)| score * f64::from(*weight))
                .sum::<f64>()
                / f64::from(weights.iter().sum::<i32>());
            let actual = compute_final_score(&s, &w).unwrap();
            prop_assert!((actual - expected).abs() < EPSILON);
        }

        #[test]
        fn prop_result_bounded_by_extremes(
            scores in prop::array::uniform5(0.0f64..1000.0),
            weights in prop::array::uniform5(1i32..100),
        ) {
            let s = SubjectScores {
                math: scores[0],
                languages: scores[1],
                natural_science: scores[2],
                human_science: scores[3],
                essay: scores[4],
            };
            let w = SubjectWeights {
                math: weights[0],
                languages: weights[1],
                natural_science: weights[2],
                human_science: weights[3],
                essay: weights[4],
            };
            let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let actual = compute_final_score(&s, &w).unwrap();
            prop_assert!(actual >= min - EPSILON && actual <= max + EPSILON);
        }
    }
}
