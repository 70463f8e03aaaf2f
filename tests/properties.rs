// Property tests — invariants that hold for any validated input.

use proptest::prelude::*;

use fakecheck::scoring::tier::TIERS;
use fakecheck::scoring::{get_tier, perform_analysis, AnalysisInput, RiskLevel};

fn any_input() -> impl Strategy<Value = AnalysisInput> {
    (
        1.0f64..5e7,
        0.0f64..5e7,
        0.0f64..1e5,
        0.0f64..1e6,
        0.0f64..1e5,
    )
        .prop_map(|(followers, following, posts, avg_likes, avg_comments)| AnalysisInput {
            followers,
            following,
            posts,
            avg_likes,
            avg_comments,
        })
}

proptest! {
    #[test]
    fn score_stays_in_range(input in any_input()) {
        let result = perform_analysis(&input);
        prop_assert!(result.authenticity_score <= 100);
        prop_assert_eq!(result.authenticity_score + result.fake_percentage, 100);
    }

    #[test]
    fn real_share_is_exact(input in any_input()) {
        let result = perform_analysis(&input);
        prop_assert_eq!(result.breakdown.real, 100 - result.fake_percentage);
    }

    #[test]
    fn risk_matches_fake_percentage(input in any_input()) {
        let result = perform_analysis(&input);
        prop_assert_eq!(result.risk_level, RiskLevel::from_fake_percentage(result.fake_percentage));
    }

    #[test]
    fn analysis_is_deterministic(input in any_input()) {
        let a = serde_json::to_string(&perform_analysis(&input)).unwrap();
        let b = serde_json::to_string(&perform_analysis(&input)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn whole_counts_hit_one_band(followers in 1u64..10_000_000) {
        let followers = followers as f64;
        let tier = get_tier(followers);
        let containing = TIERS.iter().filter(|t| t.contains(followers)).count();
        if followers < 1_000.0 {
            prop_assert_eq!(containing, 0);
            prop_assert_eq!(tier.name, "Mega");
        } else {
            prop_assert_eq!(containing, 1);
            prop_assert!(tier.contains(followers));
        }
    }

    #[test]
    fn flags_match_findings(input in any_input()) {
        let result = perform_analysis(&input);
        prop_assert_eq!(
            result.red_flags.len() + result.green_flags.len(),
            result.findings.len()
        );
        prop_assert!(result.findings.len() <= 6);
    }
}
