// Colored terminal output for score lists and profile detail views.
//
// This module handles all terminal-specific formatting: colors, tables,
// summaries. The main.rs display paths delegate here.

use colored::Colorize;

use crate::model::{Rating, SafetyStatus, ScoreResult, Severity};
use crate::output::truncate_chars;

/// Display a ranked score list in the terminal.
pub fn display_score_list(results: &[ScoreResult]) {
    if results.is_empty() {
        println!("No profiles scored.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Influencer Report ({} profiles) ===", results.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<28} {:>6}  {:<14}  {:<8}  {:>6}  {:>5}  {:<6}",
        "Rank".dimmed(),
        "Handle".dimmed(),
        "Score".dimmed(),
        "Rating".dimmed(),
        "Tier".dimmed(),
        "Rate%".dimmed(),
        "Auth".dimmed(),
        "Safety".dimmed(),
    );
    println!("  {}", "-".repeat(90).dimmed());

    for (i, result) in results.iter().enumerate() {
        let tier_str = result
            .tier
            .map(|t| t.as_str())
            .unwrap_or("sub-1k");
        let rating_str = result.rating.map(|r| r.as_str()).unwrap_or("-");
        // Unscorable columns render "-", never a fake 0.0.
        let score_str = result
            .influencer_score
            .map(|s| format!("{s:.1}"))
            .unwrap_or_else(|| "-".to_string());
        let rate_str = result
            .engagement
            .engagement_rate
            .map(|r| format!("{r:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let auth_str = result
            .authenticity_score
            .map(|a| format!("{a:.0}"))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:>4}. @{:<26} {:>6}  {:<14}  {:<8}  {:>6}  {:>5}  {}",
            i + 1,
            result.handle,
            score_str,
            colorize_rating(rating_str),
            tier_str,
            rate_str,
            auth_str,
            colorize_safety(result.brand_safety.status),
        );
    }

    println!();

    // Summary
    let excellent = results
        .iter()
        .filter(|r| r.rating == Some(Rating::Excellent))
        .count();
    let red = results
        .iter()
        .filter(|r| r.brand_safety.status == SafetyStatus::Red)
        .count();
    let low_auth = results
        .iter()
        .filter(|r| r.authenticity_score.is_some_and(|a| a < 60.0))
        .count();

    if excellent > 0 {
        println!("  {} {} excellent candidates", "*".green().bold(), excellent);
    }
    if red > 0 {
        println!("  {} {} brand-safety red flags", "!!".red().bold(), red);
    }
    if low_auth > 0 {
        println!(
            "  {} {} profiles with authenticity concerns",
            "~".yellow(),
            low_auth
        );
    }
}

/// Display a single profile's detailed score. The bio is taken from the
/// source profile since the score result carries only what it extracted.
pub fn display_score_detail(result: &ScoreResult, bio: &str) {
    println!(
        "\n{}",
        format!("=== Score for @{} ({}) ===", result.handle, result.platform).bold()
    );

    if !bio.trim().is_empty() {
        println!("  Bio: {}", truncate_chars(bio, 120).dimmed());
    }

    match result.tier {
        Some(tier) => println!("  Tier: {} ({} followers)", tier, result.follower_count),
        None => println!(
            "  Tier: {} ({} followers — below the 1,000 floor)",
            "below threshold".dimmed(),
            result.follower_count
        ),
    }

    if let Some(score) = result.influencer_score {
        let rating = result.rating.map(|r| r.as_str()).unwrap_or("-");
        println!(
            "  Influencer score: {:.1}/100  ({})",
            score,
            colorize_rating(rating)
        );
    } else {
        println!("  Influencer score: {}", "unavailable".dimmed());
    }

    match result.engagement.engagement_rate {
        Some(rate) => println!("  Engagement rate: {rate:.2}%"),
        None => println!(
            "  Engagement rate: {}",
            "unavailable (zero or missing denominator)".dimmed()
        ),
    }
    println!(
        "  Avg likes: {:.0}  Avg comments: {:.0}",
        result.engagement.avg_likes, result.engagement.avg_comments
    );
    if let Some(cadence) = result.engagement.posts_per_week {
        println!("  Posting cadence: {cadence:.1} posts/week");
    }

    if let Some(auth) = result.authenticity_score {
        let colored_auth = if auth >= 80.0 {
            format!("{auth:.0}").green()
        } else if auth >= 60.0 {
            format!("{auth:.0}").yellow()
        } else {
            format!("{auth:.0}").red()
        };
        println!("  Authenticity: {colored_auth}/100");
    }

    println!(
        "  Brand safety: {} ({} red, {} yellow)",
        colorize_safety(result.brand_safety.status),
        result.brand_safety.red_flags,
        result.brand_safety.yellow_flags,
    );
    for flagged in &result.brand_safety.flagged_terms {
        let sev = match flagged.severity {
            Severity::Red => "red".red(),
            Severity::Yellow => "yellow".yellow(),
        };
        println!("    [{}] \"{}\"", sev, flagged.term);
    }

    if let Some(rate) = &result.estimated_post_rate {
        println!("  Suggested post rate: {rate}");
    }
    if let Some(cpm) = &result.cpm_estimate {
        println!("  CPM estimate: {cpm}");
    }

    let c = &result.contact;
    if c.email.is_some() || c.business_email.is_some() || c.website.is_some() || c.linktree.is_some()
    {
        println!("\n  Contact:");
        if let Some(email) = &c.email {
            println!("    Email: {email}");
        }
        if let Some(email) = &c.business_email {
            println!("    Business email: {email}");
        }
        if let Some(site) = &c.website {
            println!("    Website: {site}");
        }
        if let Some(link) = &c.linktree {
            println!("    Link hub: {link}");
        }
        for link in &c.other_links {
            println!("    Other: {}", link.dimmed());
        }
    }

    println!("  Posts analyzed: {}", result.posts_analyzed);
}

/// Colorize a rating string.
fn colorize_rating(rating: &str) -> colored::ColoredString {
    match rating {
        "Excellent" => rating.green().bold(),
        "Good" => rating.green(),
        "Average" => rating.yellow(),
        "Below Average" => rating.bright_red(),
        "Poor" => rating.red().bold(),
        _ => rating.dimmed(),
    }
}

/// Colorize a safety status.
fn colorize_safety(status: SafetyStatus) -> colored::ColoredString {
    match status {
        SafetyStatus::Green => "green".green(),
        SafetyStatus::Yellow => "yellow".yellow(),
        SafetyStatus::Red => "red".red().bold(),
    }
}
