// Contact extraction — pattern matching over bio text.
//
// Pure text processing, no I/O. Priority order is fixed: generic email,
// business-prefixed email, link-aggregator domains, then remaining URLs.
// First match wins per field and fields are not deduplicated against each
// other — "collab: jane@brandco.com" populates both `email` and
// `business_email` with the same address, which is the expected contract
// for the outreach exporters downstream.

use std::sync::OnceLock;

use regex_lite::Regex;

use crate::model::ContactInfo;

/// Domains of known link-in-bio aggregator services.
const AGGREGATOR_DOMAINS: [&str; 4] = ["linktr.ee", "beacons.ai", "stan.store", "bio.link"];

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email pattern")
    })
}

fn business_email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(?:business|collab|collabs|inquiry|inquiries|contact)\s*[:\-]\s*([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})",
        )
        .expect("valid business email pattern")
    })
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Matches scheme-full URLs and bare aggregator-style links
    // ("linktr.ee/jane"). Trailing punctuation is trimmed afterward.
    RE.get_or_init(|| {
        Regex::new(r"(?:https?://[^\s]+|[A-Za-z0-9-]+\.[A-Za-z]{2,}(?:\.[A-Za-z]{2,})?/[^\s]+)")
            .expect("valid url pattern")
    })
}

/// Extract contact details from a bio.
pub fn extract(bio: &str) -> ContactInfo {
    let mut contact = ContactInfo::default();

    // 1. Generic email — first occurrence anywhere in the bio.
    if let Some(m) = email_re().find(bio) {
        contact.email = Some(m.as_str().to_string());
    }

    // 2. Business-prefixed email — independent of the generic field.
    if let Some(caps) = business_email_re().captures(bio) {
        if let Some(m) = caps.get(1) {
            contact.business_email = Some(m.as_str().to_string());
        }
    }

    // 3. Links — aggregators claim `linktree` first, the first other URL
    // claims `website`, everything else lands in `other_links`.
    for m in url_re().find_iter(bio) {
        let link = m.as_str().trim_end_matches(['.', ',', ')', '!', '?']);

        // Skip matches that are really the domain half of an email.
        if contact
            .email
            .as_deref()
            .is_some_and(|e| e.contains(link))
        {
            continue;
        }

        let is_aggregator = AGGREGATOR_DOMAINS.iter().any(|d| link.contains(d));
        if is_aggregator && contact.linktree.is_none() {
            contact.linktree = Some(link.to_string());
        } else if !is_aggregator && contact.website.is_none() {
            contact.website = Some(link.to_string());
        } else {
            contact.other_links.push(link.to_string());
        }
    }

    contact
}
