// Indicator rules — the audit table behind the authenticity score.
//
// Each indicator is an ordered list of rules. The engine walks the list
// top-to-bottom and applies the first rule whose predicate matches, so at
// most one rule per indicator fires. Penalties are additive across
// indicators; the order of indicators only affects flag order.

use serde::Serialize;

use super::tier::Tier;
use crate::output::{group_thousands, to_fixed};

/// Follower counts that look purchased rather than grown.
pub const ROUND_NUMBERS: [f64; 9] = [
    1_000.0,
    5_000.0,
    10_000.0,
    25_000.0,
    50_000.0,
    100_000.0,
    250_000.0,
    500_000.0,
    1_000_000.0,
];

/// Whether a follower count is suspiciously round.
pub fn is_round_number(n: f64) -> bool {
    if n < 1_000.0 {
        return false;
    }
    ROUND_NUMBERS.iter().any(|round| n % round == 0.0)
}

/// Values derived once per analysis. Rule predicates read only this.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Signals {
    pub followers: f64,
    pub following: f64,
    pub posts: f64,
    pub avg_likes: f64,
    pub avg_comments: f64,
    /// (likes + comments) / followers, in percent
    pub engagement_rate: f64,
    /// likes / comments, or 0.0 when there are no comments
    pub lc_ratio: f64,
    /// followers / following, or followers when following is 0
    pub ff_ratio: f64,
    pub posts_per_follower: f64,
    #[serde(skip)]
    pub tier: &'static Tier,
}

/// Which indicator a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    EngagementRate,
    LikeCommentRatio,
    FollowRatio,
    ContentVolume,
    RoundNumber,
    EngagementConsistency,
}

impl IndicatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKind::EngagementRate => "Engagement Rate",
            IndicatorKind::LikeCommentRatio => "Like-to-Comment Ratio",
            IndicatorKind::FollowRatio => "Follower/Following Ratio",
            IndicatorKind::ContentVolume => "Content Volume",
            IndicatorKind::RoundNumber => "Round Number",
            IndicatorKind::EngagementConsistency => "Engagement Consistency",
        }
    }
}

/// Whether a fired rule counts against the account or in its favor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Red,
    Green,
}

/// One branch of an indicator.
pub struct Rule {
    pub when: fn(&Signals) -> bool,
    /// Points subtracted from the score when this rule fires (0 for green rules)
    pub penalty: u32,
    pub polarity: Polarity,
    pub message: fn(&Signals) -> String,
}

/// An indicator: a nominal weight and its ordered rules.
pub struct Indicator {
    pub kind: IndicatorKind,
    /// Nominal weight. Informational only; the rule penalties are what apply.
    pub weight: u32,
    pub rules: &'static [Rule],
}

impl Indicator {
    /// First rule whose predicate matches, if any.
    pub fn first_match(&self, signals: &Signals) -> Option<&'static Rule> {
        self.rules.iter().find(|rule| (rule.when)(signals))
    }
}

static ENGAGEMENT_RATE_RULES: [Rule; 4] = [
    Rule {
        when: |s| s.engagement_rate < s.tier.avg_er * 0.3,
        penalty: 35,
        polarity: Polarity::Red,
        message: |_| {
            "Very low engagement rate for follower count (possible bot followers)".to_string()
        },
    },
    Rule {
        when: |s| s.engagement_rate < s.tier.avg_er * 0.5,
        penalty: 20,
        polarity: Polarity::Red,
        message: |_| "Below-average engagement rate suggests inactive audience".to_string(),
    },
    Rule {
        when: |s| s.engagement_rate < s.tier.avg_er,
        penalty: 10,
        polarity: Polarity::Red,
        message: |_| "Engagement rate is slightly below tier average".to_string(),
    },
    Rule {
        when: |s| s.engagement_rate >= s.tier.avg_er,
        penalty: 0,
        polarity: Polarity::Green,
        message: |_| "Healthy engagement rate for follower count".to_string(),
    },
];

static LIKE_COMMENT_RULES: [Rule; 5] = [
    Rule {
        when: |s| s.lc_ratio > 100.0,
        penalty: 25,
        polarity: Polarity::Red,
        message: |s| {
            format!(
                "Extremely high like-to-comment ratio ({}:1) indicates bot-generated likes",
                to_fixed(s.lc_ratio, 0)
            )
        },
    },
    Rule {
        when: |s| s.lc_ratio > 50.0,
        penalty: 15,
        polarity: Polarity::Red,
        message: |s| {
            format!(
                "High like-to-comment ratio ({}:1) suggests low-quality engagement",
                to_fixed(s.lc_ratio, 0)
            )
        },
    },
    Rule {
        when: |s| s.lc_ratio > 30.0,
        penalty: 8,
        polarity: Polarity::Red,
        message: |_| "Above-average like-to-comment ratio".to_string(),
    },
    Rule {
        when: |s| s.lc_ratio < 3.0 && s.lc_ratio > 0.0,
        penalty: 20,
        polarity: Polarity::Red,
        message: |s| {
            format!(
                "Unusually low like-to-comment ratio ({}:1) suggests engagement pods or comment bots",
                to_fixed(s.lc_ratio, 1)
            )
        },
    },
    Rule {
        when: |s| s.lc_ratio >= 10.0 && s.lc_ratio <= 20.0,
        penalty: 0,
        polarity: Polarity::Green,
        message: |_| "Natural like-to-comment ratio".to_string(),
    },
];

static FOLLOW_RATIO_RULES: [Rule; 3] = [
    Rule {
        when: |s| s.ff_ratio < 0.3 && s.followers > 1_000.0,
        penalty: 15,
        polarity: Polarity::Red,
        message: |_| {
            "Following significantly more accounts than followers (mass follow strategy)"
                .to_string()
        },
    },
    Rule {
        when: |s| s.ff_ratio < 0.5 && s.followers > 5_000.0,
        penalty: 10,
        polarity: Polarity::Red,
        message: |_| "High following count relative to followers".to_string(),
    },
    Rule {
        when: |s| s.ff_ratio > 10.0 && s.followers > 10_000.0,
        penalty: 0,
        polarity: Polarity::Green,
        message: |_| "Strong follower-to-following ratio".to_string(),
    },
];

static CONTENT_VOLUME_RULES: [Rule; 3] = [
    Rule {
        when: |s| s.posts_per_follower < 0.0005 && s.followers > 10_000.0,
        penalty: 18,
        polarity: Polarity::Red,
        message: |_| "Very few posts for large follower count (likely bought followers)".to_string(),
    },
    Rule {
        when: |s| s.posts_per_follower < 0.001 && s.followers > 5_000.0,
        penalty: 10,
        polarity: Polarity::Red,
        message: |_| "Low post volume relative to follower count".to_string(),
    },
    Rule {
        when: |s| s.posts > 500.0 && s.followers > 10_000.0,
        penalty: 0,
        polarity: Polarity::Green,
        message: |_| "Active posting history".to_string(),
    },
];

static ROUND_NUMBER_RULES: [Rule; 1] = [Rule {
    when: |s| is_round_number(s.followers),
    penalty: 10,
    polarity: Polarity::Red,
    message: |s| {
        format!(
            "Suspiciously round follower count: {}",
            group_thousands(s.followers)
        )
    },
}];

static CONSISTENCY_RULES: [Rule; 2] = [
    Rule {
        when: |s| s.avg_likes == 0.0 && s.avg_comments == 0.0 && s.followers > 1_000.0,
        penalty: 5,
        polarity: Polarity::Red,
        message: |_| "Zero engagement with significant follower count".to_string(),
    },
    Rule {
        when: |s| s.engagement_rate >= s.tier.avg_er * 1.2,
        penalty: 0,
        polarity: Polarity::Green,
        message: |_| "Above-average engagement rate".to_string(),
    },
];

/// All indicators, in evaluation order.
pub static INDICATORS: [Indicator; 6] = [
    Indicator {
        kind: IndicatorKind::EngagementRate,
        weight: 35,
        rules: &ENGAGEMENT_RATE_RULES,
    },
    Indicator {
        kind: IndicatorKind::LikeCommentRatio,
        weight: 25,
        rules: &LIKE_COMMENT_RULES,
    },
    Indicator {
        kind: IndicatorKind::FollowRatio,
        weight: 15,
        rules: &FOLLOW_RATIO_RULES,
    },
    Indicator {
        kind: IndicatorKind::ContentVolume,
        weight: 18,
        rules: &CONTENT_VOLUME_RULES,
    },
    Indicator {
        kind: IndicatorKind::RoundNumber,
        weight: 10,
        rules: &ROUND_NUMBER_RULES,
    },
    Indicator {
        kind: IndicatorKind::EngagementConsistency,
        weight: 5,
        rules: &CONSISTENCY_RULES,
    },
];
