// Composition tests — verifying that the boundaries chain together correctly.
//
// These tests exercise the data flow between modules:
//   RawInput -> validate -> perform_analysis -> report / chart
// without touching the filesystem or the terminal.

use fakecheck::input::RawInput;
use fakecheck::output::chart::{pie_segments, render_svg, REAL_COLOR, SUSPICIOUS_COLOR};
use fakecheck::output::copy::{call_to_action, meaning};
use fakecheck::output::AnalysisReport;
use fakecheck::scoring::{perform_analysis, RiskLevel};

#[test]
fn form_with_only_required_fields_scores() {
    // posts defaults to 50, comments to round(0) = 0
    let input = RawInput {
        followers: Some(10_000.0),
        avg_likes: Some(0.0),
        ..Default::default()
    }
    .validate()
    .unwrap();

    let result = perform_analysis(&input);
    assert_eq!(result.authenticity_score, 50);
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[test]
fn estimated_comments_feed_the_ratio() {
    // 400 likes -> 20 estimated comments -> 20:1, a natural ratio
    let input = RawInput {
        followers: Some(9_876.0),
        avg_likes: Some(400.0),
        following: Some(1_200.0),
        posts: Some(350.0),
        avg_comments: None,
    }
    .validate()
    .unwrap();

    let result = perform_analysis(&input);
    assert_eq!(result.metrics.lc_ratio, "20.0:1");
    assert!(result
        .green_flags
        .contains(&"Natural like-to-comment ratio".to_string()));
}

#[test]
fn report_json_carries_copy_for_the_level() {
    let input = RawInput {
        followers: Some(100_000.0),
        avg_likes: Some(150.0),
        following: Some(1_000_000.0),
        posts: Some(1.0),
        avg_comments: Some(1.0),
    }
    .validate()
    .unwrap();
    let result = perform_analysis(&input);
    let report = AnalysisReport::new(&result);
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["result"]["risk_level"], "critical");
    assert_eq!(json["result"]["authenticity_score"], 0);
    assert_eq!(json["result"]["fake_percentage"], 100);
    assert_eq!(json["result"]["breakdown"]["suspicious"], 70);
    assert_eq!(json["meaning"], meaning(RiskLevel::Critical));
    assert_eq!(json["style"]["label"], "Mostly Fake");
    assert_eq!(json["style"]["bg"], "#fee2e2");
    assert_eq!(json["style"]["border"], "#dc2626");
    assert_eq!(
        json["call_to_action"]["head"],
        call_to_action(RiskLevel::Critical).head
    );
    assert_eq!(json["result"]["findings"][1]["indicator"], "like_comment_ratio");
    assert_eq!(json["result"]["findings"][1]["polarity"], "red");
}

#[test]
fn chart_follows_breakdown() {
    let result = perform_analysis(
        &RawInput {
            followers: Some(5_000.0),
            avg_likes: Some(200.0),
            following: Some(500.0),
            posts: Some(300.0),
            avg_comments: Some(20.0),
        }
        .validate()
        .unwrap(),
    );

    let segments = pie_segments(&result.breakdown);
    let values: Vec<u32> = segments.iter().map(|s| s.value).collect();
    assert_eq!(values, vec![80, 8, 12]);
    assert_eq!(segments[0].color, REAL_COLOR);
    assert_eq!(segments[1].color, SUSPICIOUS_COLOR);
    // 80% of the circle is more than half
    assert!(segments[0].path.contains(" 0 1 1 "));
    assert!(segments[1].path.contains(" 0 0 1 "));

    let svg = render_svg(&result.breakdown);
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<path").count(), 3);
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn clean_account_renders_single_wedge() {
    let result = perform_analysis(
        &RawInput {
            followers: Some(7_321.0),
            avg_likes: Some(330.0),
            following: Some(900.0),
            posts: Some(400.0),
            avg_comments: Some(25.0),
        }
        .validate()
        .unwrap(),
    );
    assert_eq!(result.risk_level, RiskLevel::Excellent);
    assert_eq!(render_svg(&result.breakdown).matches("<path").count(), 1);
}
