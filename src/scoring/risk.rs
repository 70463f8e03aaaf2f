// Risk levels — the five-step ladder over fake percentage.

use serde::Serialize;

/// Badge styling for a risk level: text color, background, and border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskStyle {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub bg: &'static str,
    pub border: &'static str,
}

/// Risk category assigned from the fake percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Excellent,
    Good,
    Moderate,
    High,
    Critical,
}

/// Upper bound (inclusive) of fake percentage for each level below Critical.
const EXCELLENT_MAX: u32 = 10;
const GOOD_MAX: u32 = 25;
const MODERATE_MAX: u32 = 40;
const HIGH_MAX: u32 = 60;

impl RiskLevel {
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::Excellent,
        RiskLevel::Good,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Determine the level from a fake percentage (0-100).
    pub fn from_fake_percentage(fake_percentage: u32) -> Self {
        match fake_percentage {
            p if p <= EXCELLENT_MAX => RiskLevel::Excellent,
            p if p <= GOOD_MAX => RiskLevel::Good,
            p if p <= MODERATE_MAX => RiskLevel::Moderate,
            p if p <= HIGH_MAX => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Excellent => "excellent",
            RiskLevel::Good => "good",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    pub fn style(&self) -> &'static RiskStyle {
        match self {
            RiskLevel::Excellent => &RiskStyle {
                label: "Highly Authentic",
                icon: "✅",
                color: "#10b981",
                bg: "#d1fae5",
                border: "#34d399",
            },
            RiskLevel::Good => &RiskStyle {
                label: "Mostly Real",
                icon: "👍",
                color: "#3b82f6",
                bg: "#dbeafe",
                border: "#60a5fa",
            },
            RiskLevel::Moderate => &RiskStyle {
                label: "Moderate Risk",
                icon: "⚠️",
                color: "#f59e0b",
                bg: "#fef3c7",
                border: "#fbbf24",
            },
            RiskLevel::High => &RiskStyle {
                label: "High Risk",
                icon: "⛔",
                color: "#ef4444",
                bg: "#fee2e2",
                border: "#f87171",
            },
            RiskLevel::Critical => &RiskStyle {
                label: "Mostly Fake",
                icon: "🚫",
                color: "#dc2626",
                bg: "#fee2e2",
                border: "#dc2626",
            },
        }
    }

    pub fn label(&self) -> &'static str {
        self.style().label
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Free-function form of [`RiskLevel::from_fake_percentage`].
pub fn determine_risk_level(fake_percentage: u32) -> RiskLevel {
    RiskLevel::from_fake_percentage(fake_percentage)
}
