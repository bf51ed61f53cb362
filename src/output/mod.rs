// Output formatting — terminal display and report export.

pub mod export;
pub mod terminal;

use crate::model::ScoreResult;

/// Rank results by composite score (descending, unscorable last) and apply
/// the minimum-score floor. Results without a composite score carry partial
/// data and survive only a zero floor; they can never clear a numeric one.
pub fn rank_results(mut results: Vec<ScoreResult>, min_score: u32) -> Vec<ScoreResult> {
    results.sort_by(|a, b| {
        b.influencer_score
            .unwrap_or(-1.0)
            .partial_cmp(&a.influencer_score.unwrap_or(-1.0))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.retain(|r| match r.influencer_score {
        Some(score) => score >= min_score as f64,
        None => min_score == 0,
    });
    results
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
