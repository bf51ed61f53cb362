// Authenticity scoring — fake-follower heuristics.
//
// Starts at a baseline of 100 and applies an ordered chain of additive
// adjustments rather than a continuous formula. The rules are independent
// except the two low-engagement penalties, which are mutually exclusive
// (at most one applies). A profile can take the engagement-pod penalty
// and the comment-quality bonus at the same time.

use serde::{Deserialize, Serialize};

use crate::model::Tier;

/// Engagement rate a healthy account of each tier is expected to hold.
/// Smaller audiences engage proportionally more.
pub fn expected_engagement(tier: Tier) -> f64 {
    match tier {
        Tier::Nano => 5.0,
        Tier::Micro => 3.0,
        Tier::Mid => 2.0,
        Tier::Macro => 1.5,
        Tier::Mega => 1.0,
    }
}

/// Penalty when engagement sits below 30% of the tier norm — the strongest
/// purchased-follower signal.
const SEVERE_LOW_ENGAGEMENT_PENALTY: f64 = -40.0;
/// Milder penalty for engagement between 30% and 50% of the tier norm.
const LOW_ENGAGEMENT_PENALTY: f64 = -25.0;
/// Penalty when engagement exceeds 5x the tier norm — engagement pods and
/// bot comments look like this.
const INFLATED_ENGAGEMENT_PENALTY: f64 = -30.0;
/// Bonus for comments averaging over 50 characters.
const COMMENT_QUALITY_BONUS: f64 = 5.0;
/// Bonus when more than 80% of attributed comments come from distinct
/// accounts.
const COMMENTER_DIVERSITY_BONUS: f64 = 10.0;

/// One applied adjustment, kept as evidence for the report view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adjustment {
    pub rule: &'static str,
    pub delta: f64,
}

/// Inputs to the authenticity rule chain. Optional signals simply skip
/// their rules when absent.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticityInputs {
    pub engagement_rate: f64,
    pub tier: Tier,
    pub avg_comment_length: Option<f64>,
    pub unique_commenter_ratio: Option<f64>,
}

/// Run the rule chain. Returns the clamped score and the adjustments that
/// fired, in application order.
pub fn score(inputs: &AuthenticityInputs) -> (f64, Vec<Adjustment>) {
    let expected = expected_engagement(inputs.tier);
    let rate = inputs.engagement_rate;

    // Rules as (name, fired?, delta) so the chain reads as data. The first
    // two share a guard: at most one low-engagement penalty applies.
    let severe_low = rate < expected * 0.3;
    let rules: [(&'static str, bool, f64); 5] = [
        (
            "engagement far below tier norm",
            severe_low,
            SEVERE_LOW_ENGAGEMENT_PENALTY,
        ),
        (
            "engagement below tier norm",
            !severe_low && rate < expected * 0.5,
            LOW_ENGAGEMENT_PENALTY,
        ),
        (
            "engagement suspiciously above tier norm",
            rate > expected * 5.0,
            INFLATED_ENGAGEMENT_PENALTY,
        ),
        (
            "substantive comments",
            inputs.avg_comment_length.is_some_and(|len| len > 50.0),
            COMMENT_QUALITY_BONUS,
        ),
        (
            "diverse commenter pool",
            inputs.unique_commenter_ratio.is_some_and(|r| r > 0.8),
            COMMENTER_DIVERSITY_BONUS,
        ),
    ];

    let mut total = 100.0;
    let mut applied = Vec::new();
    for (rule, fired, delta) in rules {
        if fired {
            total += delta;
            applied.push(Adjustment { rule, delta });
        }
    }

    (total.clamp(0.0, 100.0), applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(rate: f64, tier: Tier) -> AuthenticityInputs {
        AuthenticityInputs {
            engagement_rate: rate,
            tier,
            avg_comment_length: None,
            unique_commenter_ratio: None,
        }
    }

    #[test]
    fn healthy_engagement_scores_100() {
        // Micro expected 3.0; 2.8 is above half the norm and below 5x.
        let (score, applied) = score(&inputs(2.8, Tier::Micro));
        assert_eq!(score, 100.0);
        assert!(applied.is_empty());
    }

    #[test]
    fn severe_low_engagement_penalty() {
        // Mid expected 2.0; 0.5 < 0.6 (= 2.0 * 0.3)
        let (s, applied) = score(&inputs(0.5, Tier::Mid));
        assert_eq!(s, 60.0);
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].delta, -40.0);
    }

    #[test]
    fn boundary_exactly_at_severe_threshold_takes_milder_branch() {
        // Mid expected 2.0, 0.3x = 0.6. Comparison is strict <, so a rate
        // of exactly 0.6 misses the severe branch but hits the 0.5x one.
        let (s, applied) = score(&inputs(0.6, Tier::Mid));
        assert_eq!(s, 75.0);
        assert_eq!(applied[0].delta, -25.0);
    }

    #[test]
    fn just_below_severe_threshold() {
        let (s, _) = score(&inputs(0.5999, Tier::Mid));
        assert_eq!(s, 60.0);
    }

    #[test]
    fn low_engagement_penalties_are_mutually_exclusive() {
        // 0.5 for mid fires only the severe penalty, never both.
        let (_, applied) = score(&inputs(0.5, Tier::Mid));
        assert_eq!(applied.len(), 1);
    }

    #[test]
    fn inflated_engagement_penalty() {
        // Mega expected 1.0; 5.5 > 5.0
        let (s, applied) = score(&inputs(5.5, Tier::Mega));
        assert_eq!(s, 70.0);
        assert_eq!(applied[0].delta, -30.0);
    }

    #[test]
    fn inflated_penalty_coexists_with_bonuses() {
        let i = AuthenticityInputs {
            engagement_rate: 30.0, // nano expected 5.0; 30 > 25
            tier: Tier::Nano,
            avg_comment_length: Some(72.0),
            unique_commenter_ratio: Some(0.95),
        };
        let (s, applied) = score(&i);
        // 100 - 30 + 5 + 10 = 85
        assert_eq!(s, 85.0);
        assert_eq!(applied.len(), 3);
    }

    #[test]
    fn clamped_at_ceiling() {
        // Both bonuses on an already-clean profile: 115 clamps to 100.
        let i = AuthenticityInputs {
            engagement_rate: 3.0,
            tier: Tier::Micro,
            avg_comment_length: Some(80.0),
            unique_commenter_ratio: Some(0.9),
        };
        let (s, _) = score(&i);
        assert_eq!(s, 100.0); // 115 clamped to 100
    }

    #[test]
    fn missing_comment_signals_skip_their_rules() {
        let (s, applied) = score(&inputs(3.0, Tier::Micro));
        assert_eq!(s, 100.0);
        assert!(applied.is_empty());
    }

    #[test]
    fn expected_engagement_table() {
        assert_eq!(expected_engagement(Tier::Nano), 5.0);
        assert_eq!(expected_engagement(Tier::Micro), 3.0);
        assert_eq!(expected_engagement(Tier::Mid), 2.0);
        assert_eq!(expected_engagement(Tier::Macro), 1.5);
        assert_eq!(expected_engagement(Tier::Mega), 1.0);
    }
}
