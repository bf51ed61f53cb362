// Profile loading — reads fetcher exports from disk.
//
// The scrapers that produce these files are out of scope; the engine only
// sees their normalized output. Two shapes are accepted: a single JSON
// object, and a batch file that is either a JSON array or JSONL (one
// record per line). Records that fail validation are reported and skipped
// rather than aborting the whole batch.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::model::{CreatorProfile, CreatorProfileRaw};
use crate::scoring::profile::validate_profile;

/// Load and validate a single profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<CreatorProfile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile: {}", path.display()))?;
    let parsed: CreatorProfileRaw = serde_json::from_str(&raw)
        .with_context(|| format!("invalid profile JSON: {}", path.display()))?;
    let profile = validate_profile(parsed)
        .with_context(|| format!("rejected profile in {}", path.display()))?;
    Ok(profile)
}

/// Load a batch of profiles — JSON array or JSONL, detected by the first
/// non-whitespace character. Returns the valid profiles and the number of
/// records skipped.
pub fn load_profiles(path: &Path) -> Result<(Vec<CreatorProfile>, usize)> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profiles: {}", path.display()))?;

    let records: Vec<CreatorProfileRaw> = if raw.trim_start().starts_with('[') {
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid profile array JSON: {}", path.display()))?
    } else {
        let mut records = Vec::new();
        for (lineno, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<CreatorProfileRaw>(line) {
                Ok(r) => records.push(r),
                Err(e) => {
                    warn!(line = lineno + 1, error = %e, "Skipping malformed JSONL record");
                }
            }
        }
        records
    };

    let total = records.len();
    let mut profiles = Vec::with_capacity(total);
    for record in records {
        let handle = record.handle.clone();
        match validate_profile(record) {
            Ok(p) => profiles.push(p),
            Err(e) => warn!(handle = %handle, error = %e, "Skipping invalid profile"),
        }
    }

    let skipped = total - profiles.len();
    Ok((profiles, skipped))
}
