use super::*;
use crate::input::OrgLabels;
use crate::input::codes::{ScaleCode, StyleCode};
use crate::input::themes::{ThemeRank, ThemeSet};
use crate::input::CognitiveScores;
use crate::pipeline::stage2_baseline::aggregate_baseline;
use crate::pipeline::stage3_rank::score_candidate;

fn baseline_of(values: [f64; 8]) -> BaselineVector {
    aggregate_baseline(&[("B".to_string(), CompositeVector::from_values(values))]).unwrap()
}

fn themes(pairs: &[(&str, u32)]) -> ThemeSet {
    ThemeSet::from_pairs(
        pairs
            .iter()
            .map(|(t, r)| ThemeRank {
                theme: t.to_string(),
                rank: *r,
            })
            .collect(),
    )
}

#[test]
fn test_classify_gap_is_strict() {
    assert_eq!(classify_gap(0.11, 0.10), Some(GapClass::Strength));
    assert_eq!(classify_gap(-0.11, 0.10), Some(GapClass::Gap));
    assert_eq!(classify_gap(0.05, 0.10), None);
    assert_eq!(classify_gap(-0.05, 0.10), None);
}

#[test]
fn test_views_use_their_own_thresholds() {
    let thresholds = InsightThresholds::default_v1();
    assert_eq!(InsightView::List.threshold(&thresholds), 0.10);
    assert_eq!(InsightView::Detail.threshold(&thresholds), 0.15);

    let baseline = baseline_of([0.5; 8]);
    let mut values = [0.5; 8];
    values[0] = 0.62;
    values[1] = 0.38;
    let vector = CompositeVector::from_values(values);

    let list = compare_dimensions(&vector, &baseline, 0.10);
    assert_eq!(list[0].class, Some(GapClass::Strength));
    assert_eq!(list[1].class, Some(GapClass::Gap));

    let detail = compare_dimensions(&vector, &baseline, 0.15);
    assert_eq!(detail[0].class, None);
    assert_eq!(detail[1].class, None);
}

#[test]
fn test_gap_pct_zero_baseline() {
    let baseline = baseline_of([0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    let vector = CompositeVector::from_values([0.3, 0.6, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    let cmp = compare_dimensions(&vector, &baseline, 0.10);
    assert_eq!(cmp[0].gap_pct, 0.0);
    assert!((cmp[1].gap_pct - 20.0).abs() < 1e-9);
}

#[test]
fn test_top_dimensions_ties_follow_declaration_order() {
    let vector = CompositeVector::from_values([0.2, 0.5, 0.0, 0.5, 0.1, 0.5, 0.0, 0.0]);
    let top = top_dimensions(&vector, 3);
    let dims: Vec<Dimension> = top.iter().map(|(d, _)| *d).collect();
    assert_eq!(
        dims,
        vec![
            Dimension::CognitiveComplexity,
            Dimension::CreativityInnovation,
            Dimension::LeadershipInfluence
        ]
    );
}

#[test]
fn test_top_dimensions_skip_zero() {
    let vector = CompositeVector::from_values([0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 0.0]);
    assert_eq!(top_dimensions(&vector, 3).len(), 1);
    assert!(top_dimensions(&CompositeVector::default(), 3).is_empty());
}

#[test]
fn test_top_indicators_across_families() {
    let profile = RawAssessmentProfile {
        style: Some(StyleCode::Dominance),
        type_code: Some("INTJ".parse().unwrap()),
        cognitive: CognitiveScores {
            gtq: Some(95.0),
            ..Default::default()
        },
        scales: [(ScaleCode::L, 9.0)].into_iter().collect(),
        themes: themes(&[("Command", 1)]),
    };
    let top = top_indicators(&profile, 3);
    let labels: Vec<&str> = top.iter().map(|(l, _)| l.as_str()).collect();
    // Flags at 1.0 tie and keep enumeration order.
    assert_eq!(labels, vec!["DISC-D", "MBTI-N", "MBTI-T"]);
    assert!(top.iter().all(|(_, v)| *v == 1.0));
}

#[test]
fn test_top_indicators_scores_when_no_flags() {
    let profile = RawAssessmentProfile {
        cognitive: CognitiveScores {
            gtq: Some(40.0),
            iq: Some(120.0),
            ..Default::default()
        },
        scales: [(ScaleCode::A, 7.0), (ScaleCode::T, 0.0)].into_iter().collect(),
        ..Default::default()
    };
    let top = top_indicators(&profile, 3);
    assert_eq!(top[0].0, "IQ");
    assert!((top[0].1 - 1.2).abs() < 1e-12);
    assert_eq!(top[1].0, "PAPI-A");
    assert_eq!(top[2].0, "GTQ");
}

#[test]
fn test_recommendation_bands() {
    let t = InsightThresholds::default_v1();
    assert_eq!(recommend(85.0, &t), Recommendation::StrongMatch);
    assert_eq!(recommend(84.9, &t), Recommendation::GoodMatch);
    assert_eq!(recommend(70.0, &t), Recommendation::GoodMatch);
    assert_eq!(recommend(-3.0, &t), Recommendation::ModerateMatch);
}

#[test]
fn test_run_stage4_follows_ranking_order() {
    let thresholds = InsightThresholds::default_v1();
    let baseline = baseline_of([0.4; 8]);
    let records = vec![EmployeeRecord {
        employee_id: "E1".to_string(),
        fullname: "One".to_string(),
        org: OrgLabels::default(),
        latest_performance: None,
        assessment: Some(RawAssessmentProfile {
            themes: themes(&[("Woo", 2), ("Achiever", 1), ("Belief", 9)]),
            ..Default::default()
        }),
    }];
    let ranking = Ranking {
        records: vec![
            score_candidate("E1", &CompositeVector::from_values([0.4; 8]), &baseline),
            score_candidate("E9", &CompositeVector::from_values([0.1; 8]), &baseline),
        ],
        excluded: Vec::new(),
    };
    let insights = run_stage4(&ranking, &records, &baseline, InsightView::List, &thresholds);
    assert_eq!(insights.len(), 2);
    assert_eq!(insights[0].employee_id, "E1");
    assert_eq!(insights[0].top_themes, vec!["Achiever", "Woo"]);
    assert_eq!(insights[0].strengths().count(), 0);
    assert_eq!(insights[1].gaps().count(), 8);
    assert!(insights[1].top_indicators.is_empty());
}
