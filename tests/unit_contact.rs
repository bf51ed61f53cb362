// Unit tests for contact extraction from bio strings.
//
// Pure text processing — each test is a literal bio taken from the shapes
// real creator bios use (emoji separators, pipe-delimited segments,
// aggregator links without a scheme).

use limelight::contact::extract;

#[test]
fn nothing_to_extract() {
    let c = extract("just vibes ✨");
    assert!(c.email.is_none());
    assert!(c.business_email.is_none());
    assert!(c.website.is_none());
    assert!(c.linktree.is_none());
    assert!(c.other_links.is_empty());
}

#[test]
fn generic_email_only() {
    let c = extract("say hi: jane@gmail.com");
    assert_eq!(c.email.as_deref(), Some("jane@gmail.com"));
    // "hi:" is not a recognized business prefix
    assert!(c.business_email.is_none());
}

#[test]
fn collab_prefix_populates_both_email_fields() {
    // The generic pattern also matches the same address — both fields
    // populate, undeduplicated. Expected behavior, not a bug.
    let c = extract("DM for collab: jane@brandco.com");
    assert_eq!(c.email.as_deref(), Some("jane@brandco.com"));
    assert_eq!(c.business_email.as_deref(), Some("jane@brandco.com"));
}

#[test]
fn separate_personal_and_business_emails() {
    let c = extract("jane@personal.io 💌 | business: team@janedoe.agency");
    assert_eq!(c.email.as_deref(), Some("jane@personal.io"));
    assert_eq!(c.business_email.as_deref(), Some("team@janedoe.agency"));
}

#[test]
fn inquiry_prefix_with_dash_separator() {
    let c = extract("inquiries - press@studio.tv");
    assert_eq!(c.business_email.as_deref(), Some("press@studio.tv"));
}

#[test]
fn all_four_aggregator_domains_detected() {
    for domain in ["linktr.ee", "beacons.ai", "stan.store", "bio.link"] {
        let bio = format!("everything here: {domain}/janedoe");
        let c = extract(&bio);
        assert_eq!(
            c.linktree.as_deref(),
            Some(format!("{domain}/janedoe").as_str()),
            "domain {domain}"
        );
    }
}

#[test]
fn aggregator_with_https_scheme() {
    let c = extract("🔗 https://linktr.ee/janedoe");
    assert_eq!(c.linktree.as_deref(), Some("https://linktr.ee/janedoe"));
}

#[test]
fn website_and_aggregator_fill_distinct_fields() {
    let c = extract("https://janedoe.shop/collection | linktr.ee/jane");
    assert_eq!(c.website.as_deref(), Some("https://janedoe.shop/collection"));
    assert_eq!(c.linktree.as_deref(), Some("linktr.ee/jane"));
}

#[test]
fn overflow_urls_collect_in_other_links() {
    let c = extract(
        "https://a.example.com/1 https://b.example.com/2 https://c.example.com/3",
    );
    assert_eq!(c.website.as_deref(), Some("https://a.example.com/1"));
    assert_eq!(
        c.other_links,
        vec!["https://b.example.com/2", "https://c.example.com/3"]
    );
}

#[test]
fn first_match_wins_per_field() {
    let c = extract("one@first.com two@second.com linktr.ee/a linktr.ee/b");
    assert_eq!(c.email.as_deref(), Some("one@first.com"));
    assert_eq!(c.linktree.as_deref(), Some("linktr.ee/a"));
    assert_eq!(c.other_links, vec!["linktr.ee/b"]);
}

#[test]
fn email_with_plus_and_dots() {
    let c = extract("contact: jane.doe+brands@mail.example.co");
    assert_eq!(c.email.as_deref(), Some("jane.doe+brands@mail.example.co"));
    assert_eq!(
        c.business_email.as_deref(),
        Some("jane.doe+brands@mail.example.co")
    );
}

#[test]
fn realistic_full_bio() {
    let bio = "🏋️ Coach | 500k strong | inquiries: talent@mgmt.agency | linktr.ee/fitjane | https://fitjane.com/programs";
    let c = extract(bio);
    assert_eq!(c.email.as_deref(), Some("talent@mgmt.agency"));
    assert_eq!(c.business_email.as_deref(), Some("talent@mgmt.agency"));
    assert_eq!(c.linktree.as_deref(), Some("linktr.ee/fitjane"));
    assert_eq!(c.website.as_deref(), Some("https://fitjane.com/programs"));
    assert!(c.other_links.is_empty());
}
