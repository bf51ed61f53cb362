// Profile scoring — orchestrates the sub-computations for one profile.
//
// Given a normalized CreatorProfile, this module:
// 1. Computes engagement metrics over the sample window
// 2. Classifies the follower tier
// 3. Runs the authenticity rule chain
// 4. Builds the weighted composite score
// 5. Scans the text corpus for brand-safety flags
// 6. Extracts contact details from the bio
// 7. Looks up the rate card entry
//
// Sub-computations degrade independently: a missing view count nulls the
// engagement rate (and everything downstream of it) without blocking the
// tier, safety, or contact results. Only an empty sample set fails the
// whole call. The engine is stateless — identical input, identical output.

use tracing::info;

use crate::contact;
use crate::model::{CreatorProfile, CreatorProfileRaw, ScoreError, ScoreResult, Tier};
use crate::safety::{self, KeywordLists};
use crate::scoring::authenticity::{self, AuthenticityInputs};
use crate::scoring::composite::{self, ScoreWeights};
use crate::scoring::engagement;
use crate::scoring::rates::RateCard;

/// Sample posts beyond this count are ignored; fetchers are expected to
/// send the most recent posts first.
pub const MAX_SAMPLE_POSTS: usize = 100;

/// Everything injectable about the engine: composite weights, the rate
/// card, and the brand-safety keyword lists. Defaults match the compiled
/// tables; callers override via config files.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub weights: ScoreWeights,
    pub rate_card: RateCard,
    pub keywords: KeywordLists,
}

/// Score a single profile.
///
/// Errors only on an empty sample set (`InsufficientData`) — every other
/// missing input degrades to a None field in the result.
pub fn score_profile(
    profile: &CreatorProfile,
    config: &EngineConfig,
) -> Result<ScoreResult, ScoreError> {
    // Bound the sample window.
    let mut bounded = profile.clone();
    bounded.sample_posts.truncate(MAX_SAMPLE_POSTS);
    let profile = &bounded;

    let metrics = engagement::compute_metrics(profile)?;

    let tier = Tier::from_followers(profile.follower_count);

    // Authenticity needs both a rate and a tier baseline.
    let authenticity_score = match (metrics.engagement_rate, tier) {
        (Some(rate), Some(tier)) => {
            let inputs = AuthenticityInputs {
                engagement_rate: rate,
                tier,
                avg_comment_length: metrics.avg_comment_length,
                unique_commenter_ratio: metrics.unique_commenter_ratio,
            };
            let (score, _adjustments) = authenticity::score(&inputs);
            Some(score)
        }
        _ => None,
    };

    // Composite needs at least an engagement rate. Absent components
    // (authenticity with no tier, external relevance/growth, unknown
    // cadence) contribute zero at their full weight.
    let (influencer_score, rating) = match metrics.engagement_rate {
        Some(rate) => {
            let engagement_score = composite::engagement_component(rate);
            let posting_score = metrics
                .posts_per_week
                .map(composite::posting_component)
                .unwrap_or(0.0);
            let (score, rating) = composite::compute_composite(
                engagement_score,
                authenticity_score.unwrap_or(0.0),
                profile.relevance_score,
                posting_score,
                profile.growth_score,
                &config.weights,
            );
            (Some(score), Some(rating))
        }
        None => (None, None),
    };

    let brand_safety = safety::scan(&safety::profile_corpus(profile), &config.keywords);

    let contact = contact::extract(&profile.bio_text);

    // Both estimates come from the injected card, never from compiled tables.
    let (estimated_post_rate, cpm_estimate) = match tier {
        Some(tier) => {
            let entry = config.rate_card.lookup(tier, profile.platform);
            (
                entry.map(|e| e.post_rate.clone()),
                entry.map(|e| e.cpm.clone()),
            )
        }
        None => (None, None),
    };

    info!(
        handle = %profile.handle,
        tier = tier.map(|t| t.as_str()).unwrap_or("below-threshold"),
        score = ?influencer_score,
        authenticity = ?authenticity_score,
        safety = %brand_safety.status,
        posts = profile.sample_posts.len(),
        "Scored profile"
    );

    Ok(ScoreResult {
        handle: profile.handle.clone(),
        platform: profile.platform,
        follower_count: profile.follower_count,
        tier,
        engagement: metrics,
        influencer_score,
        rating,
        authenticity_score,
        brand_safety,
        estimated_post_rate,
        cpm_estimate,
        contact,
        posts_analyzed: profile.sample_posts.len() as u32,
    })
}

/// Validate a raw (wire-shaped) profile into the engine's input type.
///
/// Fetcher exports carry follower counts as signed integers; a negative
/// value is malformed input, reported as `InvalidInput` rather than being
/// clamped.
pub fn validate_profile(raw: CreatorProfileRaw) -> Result<CreatorProfile, ScoreError> {
    if raw.follower_count < 0 {
        return Err(ScoreError::InvalidInput(format!(
            "negative follower count for @{}: {}",
            raw.handle, raw.follower_count
        )));
    }
    Ok(CreatorProfile {
        handle: raw.handle,
        platform: raw.platform,
        follower_count: raw.follower_count as u64,
        verified: raw.verified,
        bio_text: raw.bio_text,
        sample_posts: raw.sample_posts,
        relevance_score: raw.relevance_score,
        growth_score: raw.growth_score,
    })
}
