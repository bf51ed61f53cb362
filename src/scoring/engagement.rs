// Engagement metrics — averages over the sample window and the
// platform-specific engagement rate.
//
// The rate denominator depends on the platform: feed platforms (instagram,
// facebook, twitter) divide by follower count, video-first platforms
// (tiktok, youtube) divide by average views. A zero or missing denominator
// yields None — never a division by zero, never a silent infinity.

use chrono::DateTime;
use tracing::debug;

use crate::model::{CreatorProfile, EngagementMetrics, ScoreError};

/// Compute engagement metrics for a profile's sample window.
///
/// Errors with `InsufficientData` on an empty sample set — an empty window
/// must never surface as a zero rate. Missing optional data (shares, views,
/// comment detail) degrades to None in the corresponding field.
pub fn compute_metrics(profile: &CreatorProfile) -> Result<EngagementMetrics, ScoreError> {
    let posts = &profile.sample_posts;
    if posts.is_empty() {
        return Err(ScoreError::InsufficientData);
    }

    let n = posts.len() as f64;
    let avg_likes = posts.iter().map(|p| p.likes as f64).sum::<f64>() / n;
    let avg_comments = posts.iter().map(|p| p.comments as f64).sum::<f64>() / n;

    // Shares and views average only over posts that carry them. If no post
    // does, the metric is absent rather than zero.
    let avg_shares = optional_average(posts.iter().map(|p| p.shares));
    let avg_views = optional_average(posts.iter().map(|p| p.views));

    let engagement_rate = compute_rate(profile, avg_likes, avg_comments, avg_shares, avg_views);

    let (unique_commenter_ratio, avg_comment_length) = commenter_signals(profile);

    let posts_per_week = posting_cadence(posts.iter().map(|p| p.timestamp.as_str()));

    debug!(
        handle = %profile.handle,
        rate = ?engagement_rate,
        posts = posts.len(),
        "Computed engagement metrics"
    );

    Ok(EngagementMetrics {
        engagement_rate,
        avg_likes,
        avg_comments,
        avg_shares,
        avg_views,
        unique_commenter_ratio,
        avg_comment_length,
        posts_per_week,
    })
}

/// The platform-specific engagement rate as a percentage.
///
/// - instagram: (likes + comments) / followers
/// - facebook, twitter: (likes + comments + shares) / followers
/// - youtube: (likes + comments) / views
/// - tiktok: (likes + comments + shares) / views
fn compute_rate(
    profile: &CreatorProfile,
    avg_likes: f64,
    avg_comments: f64,
    avg_shares: Option<f64>,
    avg_views: Option<f64>,
) -> Option<f64> {
    use crate::model::Platform;

    let interactions = match profile.platform {
        Platform::Instagram | Platform::Youtube => avg_likes + avg_comments,
        Platform::Facebook | Platform::Tiktok | Platform::Twitter => {
            avg_likes + avg_comments + avg_shares.unwrap_or(0.0)
        }
    };

    let denominator = if profile.platform.uses_view_denominator() {
        avg_views?
    } else {
        profile.follower_count as f64
    };

    if denominator <= 0.0 {
        return None;
    }

    Some(interactions / denominator * 100.0)
}

/// Average over an iterator of optional counts, skipping absent values.
/// None when every value is absent.
fn optional_average(values: impl Iterator<Item = Option<u64>>) -> Option<f64> {
    let present: Vec<u64> = values.flatten().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().map(|&v| v as f64).sum::<f64>() / present.len() as f64)
    }
}

/// Commenter-diversity and comment-quality signals from captured comment
/// detail. Both None when the scraper provided no comments.
fn commenter_signals(profile: &CreatorProfile) -> (Option<f64>, Option<f64>) {
    let comments: Vec<&crate::model::CommentSample> = profile
        .sample_posts
        .iter()
        .flat_map(|p| p.comment_samples.iter())
        .collect();

    if comments.is_empty() {
        return (None, None);
    }

    let avg_len =
        comments.iter().map(|c| c.text.chars().count() as f64).sum::<f64>() / comments.len() as f64;

    // Ratio only over comments with an attributed author.
    let attributed: Vec<&str> = comments
        .iter()
        .filter_map(|c| c.author.as_deref())
        .collect();
    let ratio = if attributed.is_empty() {
        None
    } else {
        let unique: std::collections::HashSet<&str> = attributed.iter().copied().collect();
        Some(unique.len() as f64 / attributed.len() as f64)
    };

    (ratio, Some(avg_len))
}

/// Posting cadence in posts per week, derived from the span between the
/// oldest and newest sample timestamps. Wall-clock free so identical input
/// always scores identically. None with fewer than two parseable
/// timestamps or a zero-length span.
fn posting_cadence<'a>(timestamps: impl Iterator<Item = &'a str>) -> Option<f64> {
    let mut parsed: Vec<i64> = timestamps
        .filter_map(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|dt| dt.timestamp())
        .collect();

    if parsed.len() < 2 {
        return None;
    }
    parsed.sort_unstable();

    let span_secs = parsed[parsed.len() - 1] - parsed[0];
    if span_secs <= 0 {
        return None;
    }

    let weeks = span_secs as f64 / (7.0 * 24.0 * 3600.0);
    // Post count over the span, both endpoints included (not interval
    // count): 7 posts spanning exactly two weeks report 3.5/week.
    Some(parsed.len() as f64 / weeks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Platform, PostSample};

    fn post(likes: u64, comments: u64, views: Option<u64>, ts: &str) -> PostSample {
        PostSample {
            likes,
            comments,
            shares: None,
            views,
            timestamp: ts.to_string(),
            caption_text: String::new(),
            comment_samples: vec![],
        }
    }

    fn profile(platform: Platform, followers: u64, posts: Vec<PostSample>) -> CreatorProfile {
        CreatorProfile {
            handle: "test".to_string(),
            platform,
            follower_count: followers,
            verified: false,
            bio_text: String::new(),
            sample_posts: posts,
            relevance_score: None,
            growth_score: None,
        }
    }

    #[test]
    fn empty_sample_set_is_insufficient_data() {
        let p = profile(Platform::Instagram, 50_000, vec![]);
        assert_eq!(compute_metrics(&p), Err(ScoreError::InsufficientData));
    }

    #[test]
    fn instagram_rate_uses_followers() {
        // (3500 + 125) / 85000 * 100 ≈ 4.26
        let p = profile(
            Platform::Instagram,
            85_000,
            vec![post(3500, 125, None, "2026-01-01T00:00:00Z")],
        );
        let m = compute_metrics(&p).unwrap();
        let rate = m.engagement_rate.unwrap();
        assert!((rate - 4.2647).abs() < 0.001, "got {rate}");
    }

    #[test]
    fn zero_followers_yields_no_rate() {
        let p = profile(
            Platform::Instagram,
            0,
            vec![post(100, 10, None, "2026-01-01T00:00:00Z")],
        );
        let m = compute_metrics(&p).unwrap();
        assert!(m.engagement_rate.is_none());
    }

    #[test]
    fn tiktok_without_views_yields_no_rate() {
        let p = profile(
            Platform::Tiktok,
            200_000,
            vec![post(5000, 300, None, "2026-01-01T00:00:00Z")],
        );
        let m = compute_metrics(&p).unwrap();
        assert!(m.engagement_rate.is_none());
    }

    #[test]
    fn youtube_rate_uses_views() {
        // (800 + 200) / 20000 * 100 = 5.0
        let p = profile(
            Platform::Youtube,
            1_000_000,
            vec![post(800, 200, Some(20_000), "2026-01-01T00:00:00Z")],
        );
        let m = compute_metrics(&p).unwrap();
        let rate = m.engagement_rate.unwrap();
        assert!((rate - 5.0).abs() < 1e-9, "got {rate}");
    }

    #[test]
    fn cadence_from_timestamp_span() {
        // 7 posts over exactly two weeks -> 3.5 posts/week
        let posts: Vec<PostSample> = (0..7)
            .map(|i| {
                let day = 1 + i * 2 + i / 3; // spread across 14 days
                post(10, 1, None, &format!("2026-01-{day:02}T12:00:00Z"))
            })
            .collect();
        let p = profile(Platform::Instagram, 10_000, posts);
        let m = compute_metrics(&p).unwrap();
        let cadence = m.posts_per_week.unwrap();
        // Count divided by span, not intervals: 7 / 2 weeks, not 6 / 2.
        assert!((cadence - 3.5).abs() < 1e-9, "got {cadence}");
    }

    #[test]
    fn cadence_none_with_single_post() {
        let p = profile(
            Platform::Instagram,
            10_000,
            vec![post(10, 1, None, "2026-01-01T00:00:00Z")],
        );
        let m = compute_metrics(&p).unwrap();
        assert!(m.posts_per_week.is_none());
    }
}
