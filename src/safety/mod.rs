// Brand-safety flagging — keyword matching over a profile's text corpus.
//
// Two severity lists: red terms (content most advertisers will not touch)
// and yellow terms (drama-adjacent content worth a human look). Matching is
// case-insensitive substring search with no stemming or negation handling;
// a bio saying "I am against gambling" still flags on "gambling". Status is
// an OR-gate over the counters, not a weighted score: one red hit anywhere
// forces a red verdict regardless of corpus length.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::{CreatorProfile, FlaggedTerm, SafetyReport, SafetyStatus, Severity};

/// The keyword configuration. Injectable so agencies can maintain their
/// own lists (a JSON file via LIMELIGHT_KEYWORDS); compiled defaults cover
/// the common advertiser exclusion categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordLists {
    pub red: Vec<String>,
    pub yellow: Vec<String>,
}

impl KeywordLists {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read keyword lists: {}", path.display()))?;
        let lists: KeywordLists = serde_json::from_str(&raw)
            .with_context(|| format!("invalid keyword list JSON: {}", path.display()))?;
        info!(
            path = %path.display(),
            red = lists.red.len(),
            yellow = lists.yellow.len(),
            "Loaded keyword lists"
        );
        Ok(lists)
    }
}

impl Default for KeywordLists {
    fn default() -> Self {
        let red = [
            "nsfw", "onlyfans", "porn", "gambling", "casino", "betting", "cocaine", "heroin",
            "meth", "drug dealer", "vape", "cigarette", "tobacco", "firearm", "gun deal",
            "ammunition", "explosive", "nazi", "white power", "terrorist", "jihad", "kill them",
            "gore", "beheading",
        ];
        let yellow = [
            "rant", "drama", "exposed", "callout", "cancel", "beef", "feud", "controversy",
            "clickbait", "outrage", "heated debate", "hot take", "unpopular opinion",
            "conspiracy", "scandal", "boycott",
        ];
        Self {
            red: red.iter().map(|s| s.to_string()).collect(),
            yellow: yellow.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Scan a text corpus against the keyword lists.
///
/// Each matching term appends evidence and bumps its counter once,
/// regardless of how many times it occurs in the corpus.
pub fn scan(corpus: &str, lists: &KeywordLists) -> SafetyReport {
    let lower = corpus.to_lowercase();

    let mut flagged_terms = Vec::new();
    let mut red_flags = 0u32;
    let mut yellow_flags = 0u32;

    for term in &lists.red {
        if lower.contains(&term.to_lowercase()) {
            red_flags += 1;
            flagged_terms.push(FlaggedTerm {
                term: term.clone(),
                severity: Severity::Red,
            });
        }
    }
    for term in &lists.yellow {
        if lower.contains(&term.to_lowercase()) {
            yellow_flags += 1;
            flagged_terms.push(FlaggedTerm {
                term: term.clone(),
                severity: Severity::Yellow,
            });
        }
    }

    let status = if red_flags > 0 {
        SafetyStatus::Red
    } else if yellow_flags > 0 {
        SafetyStatus::Yellow
    } else {
        SafetyStatus::Green
    };

    SafetyReport {
        status,
        red_flags,
        yellow_flags,
        flagged_terms,
    }
}

/// Build the scan corpus for a profile: bio plus every caption.
pub fn profile_corpus(profile: &CreatorProfile) -> String {
    let mut corpus = profile.bio_text.clone();
    for post in &profile.sample_posts {
        corpus.push('\n');
        corpus.push_str(&post.caption_text);
    }
    corpus
}
