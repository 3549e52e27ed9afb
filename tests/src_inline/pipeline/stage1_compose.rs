use std::collections::BTreeMap;

use super::*;
use crate::input::codes::{ScaleCode, StyleCode};
use crate::input::themes::{ThemeRank, ThemeSet};
use crate::input::{CognitiveScores, OrgLabels};
use crate::model::themes;

fn themes_of(names: &[&str]) -> ThemeSet {
    ThemeSet::from_pairs(
        names
            .iter()
            .enumerate()
            .map(|(i, n)| ThemeRank {
                theme: n.to_string(),
                rank: i as u32 + 1,
            })
            .collect(),
    )
}

fn scales_of(pairs: &[(ScaleCode, f64)]) -> BTreeMap<ScaleCode, f64> {
    pairs.iter().copied().collect()
}

fn record(id: &str, assessment: Option<RawAssessmentProfile>) -> EmployeeRecord {
    EmployeeRecord {
        employee_id: id.to_string(),
        fullname: id.to_string(),
        org: OrgLabels::default(),
        latest_performance: None,
        assessment,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn test_adaptability_concrete_scenario() {
    let profile = RawAssessmentProfile {
        style: Some(StyleCode::Steadiness),
        scales: scales_of(&[(ScaleCode::T, 8.0), (ScaleCode::E, 6.0)]),
        themes: themes_of(&[themes::ADAPTABILITY]),
        ..Default::default()
    };
    let v = compose_profile(&profile);
    assert!(approx(v.get(Dimension::AdaptabilityStress), 0.85));
    assert_eq!(v.get(Dimension::CulturalValues), 0.0);
}

#[test]
fn test_empty_profile_is_all_zero() {
    let v = compose_profile(&RawAssessmentProfile::default());
    for (_, value) in v.iter() {
        assert_eq!(value, 0.0);
    }
}

#[test]
fn test_sparse_data_depresses_not_renormalizes() {
    let profile = RawAssessmentProfile {
        cognitive: CognitiveScores {
            gtq: Some(70.0),
            ..Default::default()
        },
        ..Default::default()
    };
    let v = compose_profile(&profile);
    assert!(approx(v.get(Dimension::CognitiveComplexity), 0.7 / 7.0));
}

#[test]
fn test_leadership_attitude_weights() {
    let extravert = RawAssessmentProfile {
        type_code: Some("ESTJ".parse().unwrap()),
        ..Default::default()
    };
    let introvert = RawAssessmentProfile {
        type_code: Some("ISTJ".parse().unwrap()),
        ..Default::default()
    };
    assert!(approx(
        compose_profile(&extravert).get(Dimension::LeadershipInfluence),
        1.0 / 9.0
    ));
    assert!(approx(
        compose_profile(&introvert).get(Dimension::LeadershipInfluence),
        0.5 / 9.0
    ));
}

#[test]
fn test_creativity_uses_intuition_letter() {
    let profile = RawAssessmentProfile {
        type_code: Some("INFP".parse().unwrap()),
        scales: scales_of(&[(ScaleCode::Z, 5.0)]),
        themes: themes_of(&[themes::IDEATION]),
        ..Default::default()
    };
    let v = compose_profile(&profile);
    assert!(approx(v.get(Dimension::CreativityInnovation), (1.0 + 0.5 + 1.0) / 4.0));
}

#[test]
fn test_theme_beyond_top_ranks_still_counts() {
    let mut pairs: Vec<ThemeRank> = (1..=33)
        .map(|rank| ThemeRank {
            theme: format!("Filler{rank}"),
            rank,
        })
        .collect();
    pairs.push(ThemeRank {
        theme: themes::BELIEF.to_string(),
        rank: 34,
    });
    let profile = RawAssessmentProfile {
        themes: ThemeSet::from_pairs(pairs),
        ..Default::default()
    };
    assert_eq!(compose_profile(&profile).get(Dimension::CulturalValues), 1.0);
}

#[test]
fn test_each_style_feeds_one_dimension() {
    let cases = [
        (StyleCode::Steadiness, Dimension::AdaptabilityStress, 4.0),
        (StyleCode::Conscientiousness, Dimension::Conscientiousness, 5.0),
        (StyleCode::Dominance, Dimension::LeadershipInfluence, 9.0),
        (StyleCode::Influence, Dimension::SocialOrientation, 5.0),
    ];
    for (style, dimension, count) in cases {
        let profile = RawAssessmentProfile {
            style: Some(style),
            ..Default::default()
        };
        let v = compose_profile(&profile);
        for (d, value) in v.iter() {
            if d == dimension {
                assert!(approx(value, 1.0 / count));
            } else {
                assert_eq!(value, 0.0);
            }
        }
    }
}

#[test]
fn test_saturated_profile_hits_theoretical_max() {
    let all_scales = ScaleCode::ALL.iter().map(|&c| (c, 10.0)).collect::<Vec<_>>();
    let profile = RawAssessmentProfile {
        style: Some(StyleCode::Steadiness),
        type_code: Some("ENTJ".parse().unwrap()),
        cognitive: CognitiveScores {
            gtq: Some(100.0),
            tiki: Some(100.0),
            iq: Some(100.0),
            pauli: Some(100.0),
        },
        scales: scales_of(&all_scales),
        themes: themes_of(themes::SCORED_THEMES),
    };
    let v = compose_profile(&profile);
    assert!(approx(v.get(Dimension::AdaptabilityStress), 1.0));
    assert!(approx(v.get(Dimension::CognitiveComplexity), 1.0));
    assert!(approx(v.get(Dimension::LeadershipInfluence), 7.0 / 9.0));
    for (d, value) in v.iter() {
        assert!(value <= d.theoretical_max() + 1e-12);
    }
}

struct Lcg(u64);

impl Lcg {
    fn next_unit(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as f64 / (1u64 << 31) as f64
    }
}

#[test]
fn test_bounds_over_generated_profiles() {
    let mut rng = Lcg(0x9E37_79B9_7F4A_7C15);
    let types = ["ENTJ", "INFP", "ISTP", "ESFJ"];
    for i in 0..200 {
        let mut scales = Vec::new();
        for &code in ScaleCode::ALL.iter() {
            if rng.next_unit() > 0.3 {
                scales.push((code, (rng.next_unit() * 10.0).floor()));
            }
        }
        let mut picked = Vec::new();
        for &theme in themes::SCORED_THEMES {
            if rng.next_unit() > 0.5 {
                picked.push(theme);
            }
        }
        let profile = RawAssessmentProfile {
            style: StyleCode::ALL.get(i % 5).copied(),
            type_code: Some(types[i % types.len()].parse().unwrap()),
            cognitive: CognitiveScores {
                gtq: Some(rng.next_unit() * 100.0),
                tiki: None,
                iq: Some(rng.next_unit() * 100.0),
                pauli: Some(rng.next_unit() * 100.0),
            },
            scales: scales_of(&scales),
            themes: themes_of(&picked),
        };
        let v = compose_profile(&profile);
        for (d, value) in v.iter() {
            assert!(value >= 0.0, "{} negative", d.key());
            assert!(value <= d.theoretical_max() + 1e-12, "{} above max", d.key());
        }
    }
}

#[test]
fn test_determinism_bits() {
    let profile = RawAssessmentProfile {
        style: Some(StyleCode::Dominance),
        type_code: Some("ENFJ".parse().unwrap()),
        cognitive: CognitiveScores {
            gtq: Some(63.0),
            tiki: Some(71.0),
            iq: Some(97.0),
            pauli: Some(55.0),
        },
        scales: scales_of(&[(ScaleCode::L, 7.0), (ScaleCode::A, 3.0)]),
        themes: themes_of(&[themes::COMMAND, themes::WOO]),
    };
    let a = compose_profile(&profile);
    let b = compose_profile(&profile);
    for (x, y) in a.values().iter().zip(b.values().iter()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

#[test]
fn test_run_stage1_keeps_order_and_marks_missing() {
    let records = vec![
        record("A", Some(RawAssessmentProfile::default())),
        record("B", None),
        record("C", Some(RawAssessmentProfile::default())),
    ];
    let out = run_stage1(&records);
    let ids: Vec<&str> = out.composed.iter().map(|c| c.employee_id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);
    assert!(out.composed[1].vector.is_none());
    assert_eq!(out.composable(), 2);
}
