// Data models — the types that flow through the scoring engine.
//
// These are kept separate from the scoring functions so callers (CLI,
// exporters) can use them without depending on engine internals. Every
// output type is serde-stable: field names and types are the export
// contract for the CSV/JSON report writers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors the engine can surface. All of them are deterministic given the
/// same input — there is no I/O and nothing to retry.
#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    /// The profile has no sample posts, so no engagement-derived metric
    /// can be computed. Never reported as a score of 0.
    #[error("insufficient data: profile has no sample posts")]
    InsufficientData,

    /// Malformed input detected at the boundary (negative follower count,
    /// unknown platform string).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Social platform a profile was scraped from. Determines the engagement
/// rate denominator: followers for feed platforms, views for video-first
/// platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
    Tiktok,
    Youtube,
    Twitter,
}

impl Platform {
    /// Video-first platforms divide engagement by average views rather
    /// than follower count.
    pub fn uses_view_denominator(&self) -> bool {
        matches!(self, Platform::Tiktok | Platform::Youtube)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::Twitter => "twitter",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single comment captured alongside a post, when the scraper provides
/// comment detail. Used for commenter-diversity and comment-quality
/// authenticity signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentSample {
    /// Commenter identifier — optional because some scrapers anonymize.
    pub author: Option<String>,
    pub text: String,
}

/// One post from a creator's recent history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSample {
    pub likes: u64,
    pub comments: u64,
    /// Not all platforms expose shares; None degrades gracefully.
    #[serde(default)]
    pub shares: Option<u64>,
    /// Required in practice for tiktok/youtube (view-denominator platforms).
    #[serde(default)]
    pub views: Option<u64>,
    /// RFC 3339 timestamp of the post. Cadence math uses these, never the
    /// wall clock, so scoring stays reproducible.
    pub timestamp: String,
    #[serde(default)]
    pub caption_text: String,
    /// Per-comment detail when the scraper captured it.
    #[serde(default)]
    pub comment_samples: Vec<CommentSample>,
}

/// A normalized creator profile as produced by the (out-of-scope) data
/// fetchers. This is the engine's sole input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorProfile {
    pub handle: String,
    pub platform: Platform,
    pub follower_count: u64,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub bio_text: String,
    #[serde(default)]
    pub sample_posts: Vec<PostSample>,
    /// Content relevance to the campaign niche, 0-100. Computed by an
    /// external collaborator (this engine does not judge relevance).
    #[serde(default)]
    pub relevance_score: Option<f64>,
    /// Follower growth signal, 0-100, supplied externally with its own
    /// observation window.
    #[serde(default)]
    pub growth_score: Option<f64>,
}

/// A profile as it arrives on the wire from fetcher exports, before
/// validation. Follower counts come through signed because several scraper
/// exports use -1 for "unknown"; validation rejects negatives with
/// `InvalidInput` instead of silently clamping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorProfileRaw {
    pub handle: String,
    pub platform: Platform,
    pub follower_count: i64,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub bio_text: String,
    #[serde(default)]
    pub sample_posts: Vec<PostSample>,
    #[serde(default)]
    pub relevance_score: Option<f64>,
    #[serde(default)]
    pub growth_score: Option<f64>,
}

/// Engagement metrics derived from the sample window. Computed fresh on
/// every scoring call; never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    /// Percentage; None when the denominator is zero or missing.
    pub engagement_rate: Option<f64>,
    pub avg_likes: f64,
    pub avg_comments: f64,
    /// None when no post in the window carried share data.
    pub avg_shares: Option<f64>,
    /// None when no post in the window carried view data.
    pub avg_views: Option<f64>,
    /// Distinct commenters / total attributed comments, in [0,1].
    /// None when no comment detail was captured.
    pub unique_commenter_ratio: Option<f64>,
    /// Mean comment length in characters; None without comment detail.
    pub avg_comment_length: Option<f64>,
    /// Posting cadence derived from sample timestamps.
    pub posts_per_week: Option<f64>,
}

/// Follower-count tier. Derived solely from follower_count, independent
/// of engagement quality. Profiles under 1,000 followers have no tier —
/// callers see an explicit None, never a defaulted "nano".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Nano,
    Micro,
    Mid,
    Macro,
    Mega,
}

impl Tier {
    /// Classify a follower count. Returns None below the 1,000-follower
    /// floor — the below-threshold sentinel, not an error.
    pub fn from_followers(followers: u64) -> Option<Self> {
        match followers {
            0..=999 => None,
            1_000..=9_999 => Some(Tier::Nano),
            10_000..=99_999 => Some(Tier::Micro),
            100_000..=499_999 => Some(Tier::Mid),
            500_000..=999_999 => Some(Tier::Macro),
            _ => Some(Tier::Mega),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Nano => "nano",
            Tier::Micro => "micro",
            Tier::Mid => "mid",
            Tier::Macro => "macro",
            Tier::Mega => "mega",
        }
    }

    pub const ALL: [Tier; 5] = [Tier::Nano, Tier::Micro, Tier::Mid, Tier::Macro, Tier::Mega];
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualitative band for the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    Average,
    BelowAverage,
    Poor,
}

impl Rating {
    /// Band a composite score (0-100). Lower edges inclusive, upper edges
    /// exclusive, except the top band which is closed on both ends.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => Rating::Excellent,
            s if s >= 60.0 => Rating::Good,
            s if s >= 40.0 => Rating::Average,
            s if s >= 20.0 => Rating::BelowAverage,
            _ => Rating::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Average => "Average",
            Rating::BelowAverage => "Below Average",
            Rating::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Traffic-light brand-safety verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyStatus {
    Green,
    Yellow,
    Red,
}

impl SafetyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyStatus::Green => "green",
            SafetyStatus::Yellow => "yellow",
            SafetyStatus::Red => "red",
        }
    }
}

impl std::fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of a flagged term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Red,
    Yellow,
}

/// A single keyword hit in the content corpus, kept as evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlaggedTerm {
    pub term: String,
    pub severity: Severity,
}

/// Brand-safety report for a profile's bio + captions corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyReport {
    pub status: SafetyStatus,
    pub red_flags: u32,
    pub yellow_flags: u32,
    pub flagged_terms: Vec<FlaggedTerm>,
}

/// Contact details extracted from a bio. All fields optional; a generic
/// and a business-prefixed email can both populate from the same address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub business_email: Option<String>,
    pub website: Option<String>,
    pub linktree: Option<String>,
    pub other_links: Vec<String>,
}

/// The complete scoring output for one profile. Pure computation result:
/// owned by the caller, nothing retained by the engine. Optional fields
/// are partial-result markers — a missing view count nulls the engagement
/// rate without failing tier classification or brand safety.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub handle: String,
    pub platform: Platform,
    pub follower_count: u64,
    /// None means below the 1,000-follower tier floor.
    pub tier: Option<Tier>,
    pub engagement: EngagementMetrics,
    /// Composite 0-100; None when the engagement rate was uncomputable.
    pub influencer_score: Option<f64>,
    pub rating: Option<Rating>,
    pub authenticity_score: Option<f64>,
    pub brand_safety: SafetyReport,
    /// Suggested per-post rate range from the rate card; None when the
    /// profile has no tier or the card has no entry.
    pub estimated_post_rate: Option<String>,
    pub cpm_estimate: Option<String>,
    pub contact: ContactInfo,
    pub posts_analyzed: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_below_threshold_is_none() {
        assert_eq!(Tier::from_followers(0), None);
        assert_eq!(Tier::from_followers(999), None);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::from_followers(1_000), Some(Tier::Nano));
        assert_eq!(Tier::from_followers(9_999), Some(Tier::Nano));
        assert_eq!(Tier::from_followers(10_000), Some(Tier::Micro));
        assert_eq!(Tier::from_followers(99_999), Some(Tier::Micro));
        assert_eq!(Tier::from_followers(100_000), Some(Tier::Mid));
        assert_eq!(Tier::from_followers(499_999), Some(Tier::Mid));
        assert_eq!(Tier::from_followers(500_000), Some(Tier::Macro));
        assert_eq!(Tier::from_followers(999_999), Some(Tier::Macro));
        assert_eq!(Tier::from_followers(1_000_000), Some(Tier::Mega));
        assert_eq!(Tier::from_followers(u64::MAX), Some(Tier::Mega));
    }

    #[test]
    fn rating_boundaries() {
        assert_eq!(Rating::from_score(100.0), Rating::Excellent);
        assert_eq!(Rating::from_score(80.0), Rating::Excellent);
        assert_eq!(Rating::from_score(79.999), Rating::Good);
        assert_eq!(Rating::from_score(60.0), Rating::Good);
        assert_eq!(Rating::from_score(40.0), Rating::Average);
        assert_eq!(Rating::from_score(20.0), Rating::BelowAverage);
        assert_eq!(Rating::from_score(0.0), Rating::Poor);
    }
}
