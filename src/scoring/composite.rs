// Weighted composite influencer score.
//
// Five normalized components, each bounded to [0,100] before weighting:
// engagement, authenticity, content relevance, posting cadence, and growth.
// The weights sum to exactly 1.0 — that is an invariant, not a convention,
// and `ScoreWeights::validate` enforces it for caller-supplied weights.

use crate::model::Rating;

/// Engagement rate that maps to a perfect engagement component.
/// Anything above 5% is capped at 100, not extrapolated.
const PERFECT_ENGAGEMENT_RATE: f64 = 5.0;

/// Posting cadence that maps to a perfect posting component (daily).
const PERFECT_POSTS_PER_WEEK: f64 = 7.0;

/// Configurable weights for the composite formula.
///
/// `score = engagement*w.engagement + authenticity*w.authenticity
///        + relevance*w.relevance + posting*w.posting + growth*w.growth`
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreWeights {
    pub engagement: f64,
    pub authenticity: f64,
    pub relevance: f64,
    pub posting: f64,
    pub growth: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            engagement: 0.30,
            authenticity: 0.25,
            relevance: 0.20,
            posting: 0.15,
            growth: 0.10,
        }
    }
}

impl ScoreWeights {
    /// Check the sum-to-one invariant (within float tolerance).
    pub fn validate(&self) -> anyhow::Result<()> {
        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-9 {
            anyhow::bail!("score weights must sum to 1.0, got {sum}");
        }
        Ok(())
    }

    pub fn sum(&self) -> f64 {
        self.engagement + self.authenticity + self.relevance + self.posting + self.growth
    }
}

/// Normalize an engagement rate percentage to a 0-100 component.
/// 5% engagement is a perfect score; higher rates cap at 100.
pub fn engagement_component(engagement_rate: f64) -> f64 {
    ((engagement_rate / PERFECT_ENGAGEMENT_RATE) * 100.0).clamp(0.0, 100.0)
}

/// Normalize posting cadence to a 0-100 component. Daily posting caps it.
pub fn posting_component(posts_per_week: f64) -> f64 {
    ((posts_per_week / PERFECT_POSTS_PER_WEEK) * 100.0).clamp(0.0, 100.0)
}

/// Compute the weighted composite score and its rating band.
///
/// `relevance` and `growth` come from external collaborators and may be
/// absent; an absent input contributes 0 at its full weight — weight is
/// never redistributed to the other components.
/// Inputs are clamped to [0,100] before weighting and the sum is clamped
/// after summation.
pub fn compute_composite(
    engagement_score: f64,
    authenticity_score: f64,
    relevance_score: Option<f64>,
    posting_score: f64,
    growth_score: Option<f64>,
    weights: &ScoreWeights,
) -> (f64, Rating) {
    let clamp = |v: f64| v.clamp(0.0, 100.0);

    let score = clamp(engagement_score) * weights.engagement
        + clamp(authenticity_score) * weights.authenticity
        + clamp(relevance_score.unwrap_or(0.0)) * weights.relevance
        + clamp(posting_score) * weights.posting
        + clamp(growth_score.unwrap_or(0.0)) * weights.growth;

    let score = score.clamp(0.0, 100.0);
    (score, Rating::from_score(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let w = ScoreWeights::default();
        assert!((w.sum() - 1.0).abs() < 1e-12);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn invalid_weights_rejected() {
        let w = ScoreWeights {
            engagement: 0.5,
            authenticity: 0.5,
            relevance: 0.5,
            posting: 0.0,
            growth: 0.0,
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn engagement_component_caps_at_100() {
        assert_eq!(engagement_component(5.0), 100.0);
        assert_eq!(engagement_component(12.0), 100.0);
        assert_eq!(engagement_component(1000.0), 100.0);
    }

    #[test]
    fn engagement_component_scales_linearly() {
        // 4.26% -> 85.2
        let c = engagement_component(4.26);
        assert!((c - 85.2).abs() < 0.01, "got {c}");
    }

    #[test]
    fn posting_component_daily_is_perfect() {
        assert_eq!(posting_component(7.0), 100.0);
        assert_eq!(posting_component(14.0), 100.0);
        let c = posting_component(3.5);
        assert!((c - 50.0).abs() < 1e-9);
    }

    #[test]
    fn composite_all_perfect_is_100() {
        let w = ScoreWeights::default();
        let (score, rating) = compute_composite(100.0, 100.0, Some(100.0), 100.0, Some(100.0), &w);
        assert_eq!(score, 100.0);
        assert_eq!(rating, Rating::Excellent);
    }

    #[test]
    fn composite_clamps_extreme_inputs() {
        let w = ScoreWeights::default();
        let (score, _) = compute_composite(5000.0, 900.0, Some(700.0), 400.0, Some(300.0), &w);
        assert_eq!(score, 100.0);
        let (score, rating) = compute_composite(-50.0, -10.0, None, -5.0, None, &w);
        assert_eq!(score, 0.0);
        assert_eq!(rating, Rating::Poor);
    }

    #[test]
    fn absent_external_inputs_contribute_zero() {
        let w = ScoreWeights::default();
        let (with_zero, _) = compute_composite(80.0, 80.0, Some(0.0), 80.0, Some(0.0), &w);
        let (with_none, _) = compute_composite(80.0, 80.0, None, 80.0, None, &w);
        assert_eq!(with_zero, with_none);
    }

    #[test]
    fn monotonic_in_engagement() {
        let w = ScoreWeights::default();
        let mut last = -1.0;
        for rate in [0.0, 1.0, 2.5, 4.0, 5.0, 8.0, 50.0] {
            let (score, _) =
                compute_composite(engagement_component(rate), 50.0, Some(50.0), 50.0, Some(50.0), &w);
            assert!(score >= last, "score decreased at rate {rate}");
            last = score;
        }
    }
}
