// Report export — CSV for spreadsheet-driven outreach, JSON for pipelines.
//
// The flat CSV row is a deliberate projection of ScoreResult: one line per
// profile with the fields an outreach sheet actually uses. The JSON export
// serializes ScoreResult as-is, nested reports included.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::model::ScoreResult;

/// Flattened row shape for CSV export.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    handle: &'a str,
    platform: &'a str,
    followers: u64,
    tier: &'a str,
    influencer_score: Option<f64>,
    rating: &'a str,
    engagement_rate: Option<f64>,
    authenticity_score: Option<f64>,
    brand_safety: &'a str,
    red_flags: u32,
    yellow_flags: u32,
    estimated_post_rate: &'a str,
    cpm_estimate: &'a str,
    email: &'a str,
    business_email: &'a str,
    website: &'a str,
    linktree: &'a str,
    posts_analyzed: u32,
}

/// Write results as a CSV file.
pub fn write_csv(results: &[ScoreResult], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create CSV file: {}", path.display()))?;

    for result in results {
        let row = CsvRow {
            handle: &result.handle,
            platform: result.platform.as_str(),
            followers: result.follower_count,
            tier: result.tier.map(|t| t.as_str()).unwrap_or("below-threshold"),
            influencer_score: result.influencer_score,
            rating: result.rating.map(|r| r.as_str()).unwrap_or(""),
            engagement_rate: result.engagement.engagement_rate,
            authenticity_score: result.authenticity_score,
            brand_safety: result.brand_safety.status.as_str(),
            red_flags: result.brand_safety.red_flags,
            yellow_flags: result.brand_safety.yellow_flags,
            estimated_post_rate: result.estimated_post_rate.as_deref().unwrap_or(""),
            cpm_estimate: result.cpm_estimate.as_deref().unwrap_or(""),
            email: result.contact.email.as_deref().unwrap_or(""),
            business_email: result.contact.business_email.as_deref().unwrap_or(""),
            website: result.contact.website.as_deref().unwrap_or(""),
            linktree: result.contact.linktree.as_deref().unwrap_or(""),
            posts_analyzed: result.posts_analyzed,
        };
        writer.serialize(row)?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write CSV file: {}", path.display()))?;
    Ok(())
}

/// Write results as pretty-printed JSON.
pub fn write_json(results: &[ScoreResult], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write JSON file: {}", path.display()))?;
    Ok(())
}
