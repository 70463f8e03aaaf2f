// Colored terminal output for analysis results and the tier table.
//
// This module handles all terminal-specific formatting. main.rs delegates
// here for the default (non-JSON) output.

use colored::Colorize;

use super::copy;
use crate::scoring::risk::RiskStyle;
use crate::scoring::rules::INDICATORS;
use crate::scoring::tier::TIERS;
use crate::scoring::{AnalysisResult, RiskLevel};

/// Display a full analysis in the terminal.
pub fn display_analysis(result: &AnalysisResult) {
    let style = result.risk_level.style();

    println!("\n{}", "=== Fake Follower Analysis ===".bold());
    println!();
    println!(
        "  Fake followers:     {}",
        colorize_level(result.risk_level, &format!("{}%", result.fake_percentage)).bold()
    );
    println!(
        "  Authenticity score: {}/100",
        result.authenticity_score.to_string().bold()
    );
    println!("  Risk:               {}", risk_badge(style));
    println!("  Tier:               {}", result.tier);

    println!("\n  {}", "Audience breakdown".bold());
    println!(
        "    {} Real:       {:>3}%",
        "■".green(),
        result.breakdown.real
    );
    println!(
        "    {} Suspicious: {:>3}%",
        "■".yellow(),
        result.breakdown.suspicious
    );
    println!(
        "    {} Inactive:   {:>3}%",
        "■".red(),
        result.breakdown.inactive
    );

    println!("\n  {}", "Red flags".bold());
    if result.red_flags.is_empty() {
        println!("    {}", "No red flags detected".dimmed());
    } else {
        for flag in &result.red_flags {
            println!("    {} {}", "✗".red(), flag);
        }
    }

    println!("\n  {}", "Positive signals".bold());
    if result.green_flags.is_empty() {
        println!("    {}", "No positive signals detected".dimmed());
    } else {
        for flag in &result.green_flags {
            println!("    {} {}", "✓".green(), flag);
        }
    }

    let metrics = &result.metrics;
    println!("\n  {}", "Details".bold());
    println!("    Engagement rate:          {}%", metrics.engagement_rate);
    println!("    Like-to-comment ratio:    {}", metrics.lc_ratio);
    println!("    Follower/following ratio: {}", metrics.ff_ratio);
    println!(
        "    Posts per follower:       {} per 1K",
        metrics.posts_per_follower
    );

    println!("\n  {}", "What This Means".bold());
    println!("    {}", copy::meaning(result.risk_level));

    let cta = copy::call_to_action(result.risk_level);
    println!("\n  {}", cta.head.bold());
    println!("    {}", cta.sub);
    println!("    {}", cta.href.underline());
    println!();
}

/// Display the follower tiers and indicator weights.
pub fn display_tiers() {
    println!("\n{}", "=== Follower Tiers ===".bold());
    println!();
    println!(
        "  {:<10} {:>12} {:>12} {:>10}",
        "Tier".dimmed(),
        "Min".dimmed(),
        "Max".dimmed(),
        "Avg ER".dimmed(),
    );
    println!("  {}", "-".repeat(47).dimmed());

    for tier in &TIERS {
        let max = if tier.max.is_finite() {
            super::group_thousands(tier.max)
        } else {
            "-".to_string()
        };
        println!(
            "  {:<10} {:>12} {:>12} {:>9.1}%",
            tier.name,
            super::group_thousands(tier.min),
            max,
            tier.avg_er,
        );
    }

    println!("\n{}", "=== Indicators ===".bold());
    println!();
    for indicator in &INDICATORS {
        println!(
            "  {:<24} weight {:>2}  ({} rules)",
            indicator.kind.as_str(),
            indicator.weight,
            indicator.rules.len()
        );
    }
    println!();
}

/// Render the risk badge: label on the style's background, framed in the
/// border color. Falls back to plain text if a color is malformed.
fn risk_badge(style: &RiskStyle) -> String {
    let text = format!(" {} {} ", style.icon, style.label);
    match (hex_rgb(style.color), hex_rgb(style.bg), hex_rgb(style.border)) {
        (Some(fg), Some(bg), Some(border)) => {
            let edge = |s: &str| s.truecolor(border.0, border.1, border.2).to_string();
            format!(
                "{}{}{}",
                edge("▐"),
                text.truecolor(fg.0, fg.1, fg.2)
                    .on_truecolor(bg.0, bg.1, bg.2)
                    .bold(),
                edge("▌")
            )
        }
        _ => text,
    }
}

/// Parse a "#rrggbb" color.
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Colorize text by risk level.
fn colorize_level(level: RiskLevel, text: &str) -> colored::ColoredString {
    match level {
        RiskLevel::Excellent => text.green(),
        RiskLevel::Good => text.blue(),
        RiskLevel::Moderate => text.yellow(),
        RiskLevel::High => text.bright_red(),
        RiskLevel::Critical => text.red().bold(),
    }
}
