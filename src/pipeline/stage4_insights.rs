use std::collections::HashMap;

use serde::Serialize;

use crate::input::{EmployeeRecord, RawAssessmentProfile};
use crate::model::dimensions::Dimension;
use crate::model::indicators::indicator_order;
use crate::model::thresholds::InsightThresholds;
use crate::model::vector::{BaselineVector, CompositeVector, MatchRecord, Ranking};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GapClass {
    Strength,
    Gap,
}

/// Presentation granularity; each carries its own strength/gap cut-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightView {
    List,
    Detail,
}

impl InsightView {
    pub fn threshold(self, thresholds: &InsightThresholds) -> f64 {
        match self {
            InsightView::List => thresholds.list_view,
            InsightView::Detail => thresholds.detail_view,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    StrongMatch,
    GoodMatch,
    ModerateMatch,
}

impl Recommendation {
    pub fn label(self) -> &'static str {
        match self {
            Recommendation::StrongMatch => "STRONG MATCH",
            Recommendation::GoodMatch => "GOOD MATCH",
            Recommendation::ModerateMatch => "MODERATE MATCH",
        }
    }

    pub fn statement(self) -> &'static str {
        match self {
            Recommendation::StrongMatch => {
                "Excellent alignment with benchmark profiles across multiple dimensions."
            }
            Recommendation::GoodMatch => {
                "Solid alignment with key competencies, some development areas identified."
            }
            Recommendation::ModerateMatch => {
                "Some alignment present but significant gaps require development."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionComparison {
    pub dimension: Dimension,
    pub candidate: f64,
    pub baseline: f64,
    pub delta: f64,
    /// Delta relative to the baseline, in percent; 0 when the baseline is 0.
    pub gap_pct: f64,
    pub class: Option<GapClass>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateInsight {
    pub employee_id: String,
    pub match_rate: f64,
    pub top_dimensions: Vec<(Dimension, f64)>,
    pub top_indicators: Vec<(String, f64)>,
    pub comparisons: Vec<DimensionComparison>,
    pub top_themes: Vec<String>,
    pub recommendation: Recommendation,
}

impl CandidateInsight {
    pub fn strengths(&self) -> impl Iterator<Item = &DimensionComparison> {
        self.comparisons
            .iter()
            .filter(|c| c.class == Some(GapClass::Strength))
    }

    pub fn gaps(&self) -> impl Iterator<Item = &DimensionComparison> {
        self.comparisons
            .iter()
            .filter(|c| c.class == Some(GapClass::Gap))
    }
}

pub fn classify_gap(delta: f64, threshold: f64) -> Option<GapClass> {
    if delta > threshold {
        Some(GapClass::Strength)
    } else if delta < -threshold {
        Some(GapClass::Gap)
    } else {
        None
    }
}

pub fn recommend(match_rate: f64, thresholds: &InsightThresholds) -> Recommendation {
    if match_rate >= thresholds.strong_match {
        Recommendation::StrongMatch
    } else if match_rate >= thresholds.good_match {
        Recommendation::GoodMatch
    } else {
        Recommendation::ModerateMatch
    }
}

/// Highest positive components; ties keep dimension declaration order.
pub fn top_dimensions(vector: &CompositeVector, n: usize) -> Vec<(Dimension, f64)> {
    let mut scored: Vec<(Dimension, f64)> = vector.iter().filter(|(_, v)| *v > 0.0).collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(n);
    scored
}

/// Highest individual indicators; ties keep indicator enumeration order.
pub fn top_indicators(profile: &RawAssessmentProfile, n: usize) -> Vec<(String, f64)> {
    let mut scored: Vec<(String, f64)> = indicator_order()
        .into_iter()
        .filter_map(|ind| ind.value(profile).map(|v| (ind.label(), v)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(n);
    scored
}

pub fn compare_dimensions(
    vector: &CompositeVector,
    baseline: &BaselineVector,
    threshold: f64,
) -> Vec<DimensionComparison> {
    Dimension::ALL
        .into_iter()
        .map(|dimension| {
            let candidate = vector.get(dimension);
            let base = baseline.vector.get(dimension);
            let delta = candidate - base;
            let gap_pct = if base != 0.0 { delta / base * 100.0 } else { 0.0 };
            DimensionComparison {
                dimension,
                candidate,
                baseline: base,
                delta,
                gap_pct,
                class: classify_gap(delta, threshold),
            }
        })
        .collect()
}

pub fn extract_insight(
    record: &MatchRecord,
    profile: Option<&RawAssessmentProfile>,
    baseline: &BaselineVector,
    view: InsightView,
    thresholds: &InsightThresholds,
) -> CandidateInsight {
    let (top_indicators, top_themes) = match profile {
        Some(p) => (
            top_indicators(p, thresholds.top_n),
            p.themes
                .top_ranked(thresholds.top_theme_rank)
                .into_iter()
                .map(str::to_string)
                .collect(),
        ),
        None => (Vec::new(), Vec::new()),
    };
    CandidateInsight {
        employee_id: record.employee_id.clone(),
        match_rate: record.match_rate,
        top_dimensions: top_dimensions(&record.vector, thresholds.top_n),
        top_indicators,
        comparisons: compare_dimensions(&record.vector, baseline, view.threshold(thresholds)),
        top_themes,
        recommendation: recommend(record.match_rate, thresholds),
    }
}

/// One insight per ranked candidate, in ranking order.
pub fn run_stage4(
    ranking: &Ranking,
    records: &[EmployeeRecord],
    baseline: &BaselineVector,
    view: InsightView,
    thresholds: &InsightThresholds,
) -> Vec<CandidateInsight> {
    let by_id: HashMap<&str, &EmployeeRecord> = records
        .iter()
        .map(|r| (r.employee_id.as_str(), r))
        .collect();
    ranking
        .records
        .iter()
        .map(|rec| {
            let profile = by_id
                .get(rec.employee_id.as_str())
                .and_then(|r| r.assessment.as_ref());
            extract_insight(rec, profile, baseline, view, thresholds)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_insights.rs"]
mod tests;
