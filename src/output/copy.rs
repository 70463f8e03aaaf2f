// Presentation copy — what each risk level means and what to do next.

use serde::Serialize;

use crate::scoring::RiskLevel;

const SITE_URL: &str = "https://www.buyrealfollows.com/";
const FOLLOWERS_URL: &str = "https://www.buyrealfollows.com/buy-instagram-followers/";

/// A call-to-action block tailored to a risk level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub head: &'static str,
    pub sub: &'static str,
    pub href: &'static str,
}

/// The "What This Means" paragraph for a risk level.
pub fn meaning(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Excellent => {
            "This account has a highly authentic audience with minimal fake followers. \
             The engagement metrics are strong and consistent. Continue focusing on \
             organic growth strategies."
        }
        RiskLevel::Good => {
            "This account has a mostly genuine audience with some questionable followers. \
             Overall health is good, but there's room for improvement in audience quality."
        }
        RiskLevel::Moderate => {
            "This account has a concerning number of fake or low-quality followers. \
             This impacts reach and engagement. Consider auditing your growth strategy \
             and removing inactive accounts."
        }
        RiskLevel::High => {
            "This account has a significant fake follower problem. The majority of the \
             audience appears to be inactive or fraudulent. Immediate action is needed \
             to rebuild with real followers."
        }
        RiskLevel::Critical => {
            "This account is predominantly made up of fake followers. Engagement is \
             severely impacted. A complete audience cleanse and rebuild is strongly \
             recommended."
        }
    }
}

pub fn call_to_action(level: RiskLevel) -> &'static CallToAction {
    match level {
        RiskLevel::Excellent => &CallToAction {
            head: "✨ Maintain Your Authenticity",
            sub: "Your audience is genuine. Keep growing with real engagement.",
            href: SITE_URL,
        },
        RiskLevel::Good => &CallToAction {
            head: "📈 Optimize Your Growth",
            sub: "Build on your solid foundation with targeted real followers.",
            href: FOLLOWERS_URL,
        },
        RiskLevel::Moderate => &CallToAction {
            head: "🔧 Clean & Rebuild Your Audience",
            sub: "Remove fake followers and replace them with real, engaged users.",
            href: FOLLOWERS_URL,
        },
        RiskLevel::High => &CallToAction {
            head: "🚨 Urgent: Rebuild Your Audience",
            sub: "Fake followers are killing your reach. Start fresh with real engagement.",
            href: FOLLOWERS_URL,
        },
        RiskLevel::Critical => &CallToAction {
            head: "🆘 Complete Audience Overhaul Needed",
            sub: "Your account needs a full reset with genuine, active followers.",
            href: FOLLOWERS_URL,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_copy() {
        for level in RiskLevel::ALL {
            assert!(!meaning(level).is_empty());
            assert!(call_to_action(level).href.starts_with("https://"));
        }
    }

    #[test]
    fn test_only_excellent_links_home() {
        assert_eq!(call_to_action(RiskLevel::Excellent).href, SITE_URL);
        assert_eq!(call_to_action(RiskLevel::Critical).href, FOLLOWERS_URL);
    }
}
