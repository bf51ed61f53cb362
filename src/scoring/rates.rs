// Rate card — suggested post rates and CPM by (tier, platform).
//
// This is business configuration, not computed data. The compiled defaults
// reflect common sponsorship market ranges, but agencies reprice
// constantly, so the card is injectable: a JSON file supplied via
// LIMELIGHT_RATE_CARD overrides the defaults without touching engine code.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::{Platform, Tier};

/// One rate card entry: a human-readable per-post range and a CPM range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateEntry {
    pub post_rate: String,
    pub cpm: String,
}

/// The full card, keyed by tier then platform. Missing entries are legal —
/// lookups return None and the score result carries a null rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateCard {
    pub entries: HashMap<Tier, HashMap<Platform, RateEntry>>,
}

impl RateCard {
    /// Look up the rate entry for a tier/platform pair.
    pub fn lookup(&self, tier: Tier, platform: Platform) -> Option<&RateEntry> {
        self.entries.get(&tier)?.get(&platform)
    }

    /// Load a card from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read rate card: {}", path.display()))?;
        let card: RateCard = serde_json::from_str(&raw)
            .with_context(|| format!("invalid rate card JSON: {}", path.display()))?;
        info!(path = %path.display(), "Loaded rate card");
        Ok(card)
    }
}

impl Default for RateCard {
    fn default() -> Self {
        // (tier, [(platform, post rate, cpm)])
        let table: [(Tier, &[(Platform, &str, &str)]); 5] = [
            (
                Tier::Nano,
                &[
                    (Platform::Instagram, "$10-$100", "$5-$15"),
                    (Platform::Tiktok, "$5-$65", "$4-$12"),
                    (Platform::Youtube, "$20-$200", "$10-$25"),
                    (Platform::Twitter, "$2-$20", "$2-$6"),
                    (Platform::Facebook, "$25-$250", "$4-$10"),
                ],
            ),
            (
                Tier::Micro,
                &[
                    (Platform::Instagram, "$100-$500", "$8-$20"),
                    (Platform::Tiktok, "$65-$320", "$6-$16"),
                    (Platform::Youtube, "$200-$1,000", "$12-$30"),
                    (Platform::Twitter, "$20-$100", "$3-$8"),
                    (Platform::Facebook, "$250-$1,250", "$6-$14"),
                ],
            ),
            (
                Tier::Mid,
                &[
                    (Platform::Instagram, "$500-$5,000", "$10-$25"),
                    (Platform::Tiktok, "$320-$1,600", "$8-$20"),
                    (Platform::Youtube, "$1,000-$10,000", "$15-$35"),
                    (Platform::Twitter, "$100-$1,000", "$4-$10"),
                    (Platform::Facebook, "$1,250-$6,250", "$8-$18"),
                ],
            ),
            (
                Tier::Macro,
                &[
                    (Platform::Instagram, "$5,000-$10,000", "$12-$30"),
                    (Platform::Tiktok, "$1,600-$3,200", "$10-$25"),
                    (Platform::Youtube, "$10,000-$20,000", "$18-$40"),
                    (Platform::Twitter, "$1,000-$2,000", "$5-$12"),
                    (Platform::Facebook, "$6,250-$12,500", "$10-$22"),
                ],
            ),
            (
                Tier::Mega,
                &[
                    (Platform::Instagram, "$10,000+", "$15-$40"),
                    (Platform::Tiktok, "$3,200+", "$12-$30"),
                    (Platform::Youtube, "$20,000+", "$20-$50"),
                    (Platform::Twitter, "$2,000+", "$6-$15"),
                    (Platform::Facebook, "$12,500+", "$12-$28"),
                ],
            ),
        ];

        let mut entries = HashMap::new();
        for (tier, rows) in table {
            let mut by_platform = HashMap::new();
            for &(platform, post_rate, cpm) in rows {
                by_platform.insert(
                    platform,
                    RateEntry {
                        post_rate: post_rate.to_string(),
                        cpm: cpm.to_string(),
                    },
                );
            }
            entries.insert(tier, by_platform);
        }

        Self { entries }
    }
}

/// Tier-scaled posting cadence guideline, shown by the `rates` subcommand
/// alongside the card. Bigger accounts tend to post less per-platform.
pub fn suggested_cadence(tier: Tier, platform: Platform) -> &'static str {
    match (tier, platform.uses_view_denominator()) {
        (Tier::Nano, false) => "4-7 posts/week",
        (Tier::Nano, true) => "5-10 videos/week",
        (Tier::Micro, false) => "3-6 posts/week",
        (Tier::Micro, true) => "4-7 videos/week",
        (Tier::Mid, false) => "3-5 posts/week",
        (Tier::Mid, true) => "3-6 videos/week",
        (Tier::Macro, false) => "2-4 posts/week",
        (Tier::Macro, true) => "2-5 videos/week",
        (Tier::Mega, false) => "1-3 posts/week",
        (Tier::Mega, true) => "1-4 videos/week",
    }
}
