// Scoring engine — inputs in, authenticity score out.
//
// Starts from 100 and walks the indicator table, subtracting the penalty of
// the first matching rule in each indicator. The result is clamped to 0-100
// once every indicator has run. Pure: no I/O, no shared state.

use serde::Serialize;
use tracing::debug;

use super::risk::RiskLevel;
use super::rules::{IndicatorKind, Polarity, Signals, INDICATORS};
use super::tier::get_tier;
use crate::output::to_fixed;

/// Starting score before any penalty applies.
const BASELINE_SCORE: i64 = 100;

/// Red flags containing this marker indicate a like-to-comment problem,
/// which shifts the fake mass toward "suspicious" in the breakdown.
pub const LIKE_COMMENT_MARKER: &str = "like-to-comment";

/// Suspicious/inactive split when a like-to-comment flag is present.
const BOT_SPLIT: (f64, f64) = (0.7, 0.3);
/// Suspicious/inactive split otherwise.
const DORMANT_SPLIT: (f64, f64) = (0.4, 0.6);

/// The five concrete values the engine scores. Defaults have already been
/// applied by the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisInput {
    pub followers: f64,
    pub following: f64,
    pub posts: f64,
    pub avg_likes: f64,
    pub avg_comments: f64,
}

/// Three-way split of the audience, in whole percent.
///
/// Each share is rounded on its own, so the three may not add to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub real: u32,
    pub suspicious: u32,
    pub inactive: u32,
}

/// Display-formatted ratios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metrics {
    /// Percent, two decimals
    pub engagement_rate: String,
    /// "x.x:1", or "N/A" without comments
    pub lc_ratio: String,
    /// "x.x:1"
    pub ff_ratio: String,
    /// Posts per 1,000 followers, two decimals
    pub posts_per_follower: String,
}

/// A rule that fired during scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub indicator: IndicatorKind,
    pub penalty: u32,
    pub polarity: Polarity,
    pub message: String,
}

/// Everything the rendering side needs.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub authenticity_score: u32,
    pub fake_percentage: u32,
    pub breakdown: Breakdown,
    pub risk_level: RiskLevel,
    pub red_flags: Vec<String>,
    pub green_flags: Vec<String>,
    pub metrics: Metrics,
    /// Name of the follower tier used as the engagement baseline
    pub tier: &'static str,
    /// Every fired rule in evaluation order
    pub findings: Vec<Finding>,
    pub signals: Signals,
}

/// Compute the derived ratios for an input.
pub fn derive_signals(input: &AnalysisInput) -> Signals {
    let AnalysisInput {
        followers,
        following,
        posts,
        avg_likes,
        avg_comments,
    } = *input;

    let engagement_rate = ((avg_likes + avg_comments) / followers) * 100.0;
    let lc_ratio = if avg_comments > 0.0 {
        avg_likes / avg_comments
    } else {
        0.0
    };
    let ff_ratio = if following > 0.0 {
        followers / following
    } else {
        followers
    };

    Signals {
        followers,
        following,
        posts,
        avg_likes,
        avg_comments,
        engagement_rate,
        lc_ratio,
        ff_ratio,
        posts_per_follower: posts / followers,
        tier: get_tier(followers),
    }
}

/// Run every indicator against the input and assemble the result.
pub fn perform_analysis(input: &AnalysisInput) -> AnalysisResult {
    let signals = derive_signals(input);

    let mut score = BASELINE_SCORE;
    let mut findings = Vec::new();

    for indicator in &INDICATORS {
        let Some(rule) = indicator.first_match(&signals) else {
            continue;
        };
        let message = (rule.message)(&signals);
        debug!(
            indicator = indicator.kind.as_str(),
            penalty = rule.penalty,
            polarity = ?rule.polarity,
            "{message}"
        );
        score -= i64::from(rule.penalty);
        findings.push(Finding {
            indicator: indicator.kind,
            penalty: rule.penalty,
            polarity: rule.polarity,
            message,
        });
    }

    // Worst case exceeds 100 points of penalties
    let authenticity_score = score.clamp(0, 100) as u32;
    let fake_percentage = 100 - authenticity_score;

    let flags_of = |polarity: Polarity| -> Vec<String> {
        findings
            .iter()
            .filter(|f| f.polarity == polarity)
            .map(|f| f.message.clone())
            .collect()
    };
    let red_flags = flags_of(Polarity::Red);
    let green_flags = flags_of(Polarity::Green);

    let breakdown = calculate_breakdown(fake_percentage, &red_flags);
    let risk_level = RiskLevel::from_fake_percentage(fake_percentage);

    debug!(
        authenticity_score,
        fake_percentage,
        risk = %risk_level,
        tier = signals.tier.name,
        "analysis complete"
    );

    AnalysisResult {
        authenticity_score,
        fake_percentage,
        breakdown,
        risk_level,
        red_flags,
        green_flags,
        metrics: format_metrics(&signals),
        tier: signals.tier.name,
        findings,
        signals,
    }
}

/// Split the fake share into suspicious and inactive accounts.
///
/// A like-to-comment red flag points at bot engagement, so the split leans
/// suspicious (70/30); otherwise it leans inactive (40/60).
pub fn calculate_breakdown(fake_percentage: u32, red_flags: &[String]) -> Breakdown {
    let fake = f64::from(fake_percentage);
    let has_lc_flag = red_flags
        .iter()
        .any(|flag| flag.contains(LIKE_COMMENT_MARKER));
    let (suspicious_share, inactive_share) = if has_lc_flag {
        BOT_SPLIT
    } else {
        DORMANT_SPLIT
    };

    Breakdown {
        real: round_half_up(100.0 - fake),
        suspicious: round_half_up(fake * suspicious_share),
        inactive: round_half_up(fake * inactive_share),
    }
}

fn format_metrics(signals: &Signals) -> Metrics {
    Metrics {
        engagement_rate: to_fixed(signals.engagement_rate, 2),
        lc_ratio: if signals.lc_ratio > 0.0 {
            format!("{}:1", to_fixed(signals.lc_ratio, 1))
        } else {
            "N/A".to_string()
        },
        ff_ratio: format!("{}:1", to_fixed(signals.ff_ratio, 1)),
        posts_per_follower: to_fixed(signals.posts_per_follower * 1000.0, 2),
    }
}

/// Non-negative rounding with ties going up.
fn round_half_up(value: f64) -> u32 {
    (value + 0.5).floor().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(followers: f64, following: f64, posts: f64, likes: f64, comments: f64) -> AnalysisInput {
        AnalysisInput {
            followers,
            following,
            posts,
            avg_likes: likes,
            avg_comments: comments,
        }
    }

    #[test]
    fn test_signals_guard_zero_denominators() {
        let s = derive_signals(&input(2_000.0, 0.0, 100.0, 40.0, 0.0));
        assert_eq!(s.lc_ratio, 0.0);
        assert_eq!(s.ff_ratio, 2_000.0);
        assert!((s.engagement_rate - 2.0).abs() < 1e-9);
        assert!((s.posts_per_follower - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_clean_account_keeps_full_score() {
        // Non-round count, healthy engagement, natural ratio, moderate following
        let result = perform_analysis(&input(7_321.0, 900.0, 400.0, 330.0, 25.0));
        assert_eq!(result.authenticity_score, 100);
        assert_eq!(result.fake_percentage, 0);
        assert!(result.red_flags.is_empty());
        assert_eq!(result.risk_level, RiskLevel::Excellent);
        assert_eq!(
            result.breakdown,
            Breakdown {
                real: 100,
                suspicious: 0,
                inactive: 0
            }
        );
    }

    #[test]
    fn test_breakdown_bot_split() {
        let flags = vec!["Above-average like-to-comment ratio".to_string()];
        let b = calculate_breakdown(30, &flags);
        assert_eq!(b.real, 70);
        assert_eq!(b.suspicious, 21);
        assert_eq!(b.inactive, 9);
    }

    #[test]
    fn test_breakdown_dormant_split() {
        let flags = vec!["Low post volume relative to follower count".to_string()];
        let b = calculate_breakdown(30, &flags);
        assert_eq!(b.real, 70);
        assert_eq!(b.suspicious, 12);
        assert_eq!(b.inactive, 18);
    }

    #[test]
    fn test_breakdown_rounding_can_overshoot() {
        // 25 * 0.7 = 17.5 -> 18, 25 * 0.3 = 7.5 -> 8
        let flags = vec![format!("x {LIKE_COMMENT_MARKER} y")];
        let b = calculate_breakdown(25, &flags);
        assert_eq!((b.real, b.suspicious, b.inactive), (75, 18, 8));
        assert_eq!(b.real + b.suspicious + b.inactive, 101);
    }

    #[test]
    fn test_metrics_formatting() {
        let result = perform_analysis(&input(5_000.0, 500.0, 300.0, 200.0, 20.0));
        assert_eq!(result.metrics.engagement_rate, "4.40");
        assert_eq!(result.metrics.lc_ratio, "10.0:1");
        assert_eq!(result.metrics.ff_ratio, "10.0:1");
        assert_eq!(result.metrics.posts_per_follower, "60.00");
    }

    #[test]
    fn test_metrics_without_comments() {
        let result = perform_analysis(&input(5_000.0, 0.0, 300.0, 200.0, 0.0));
        assert_eq!(result.metrics.lc_ratio, "N/A");
        assert_eq!(result.metrics.ff_ratio, "5000.0:1");
    }
}
