pub mod json;
pub mod text;

use serde::Serialize;

use crate::job_profile::JobProfile;
use crate::model::dimensions::{Dimension, N_DIMENSIONS};
use crate::model::vector::{BaselineVector, Ranking};
use crate::pipeline::stage4_insights::CandidateInsight;

#[derive(Debug, Clone, Serialize)]
pub struct MatchRateStats {
    pub mean: f64,
    pub median: f64,
    pub p10: f64,
    pub p90: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub benchmark_requested: Vec<String>,
    pub baseline: BaselineVector,
    pub n_population: usize,
    pub n_ranked: usize,
    pub excluded: Vec<String>,
    pub match_rate: MatchRateStats,
    pub dimension_means: Vec<(Dimension, f64)>,
    /// Upper bound of each component, for scaling the means.
    pub dimension_max: Vec<(Dimension, f64)>,
    /// Pearson correlation of dimensions across the ranked population.
    pub dimension_correlation: Vec<Vec<f64>>,
    pub job_profile: Option<JobProfile>,
}

/// Narrative detail view of one candidate.
#[derive(Debug, Clone)]
pub struct DetailContext {
    pub fullname: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub latest_performance: Option<f64>,
    pub insight: CandidateInsight,
}

pub fn build_summary(
    benchmark_requested: &[String],
    baseline: &BaselineVector,
    ranking: &Ranking,
    n_population: usize,
    job_profile: Option<JobProfile>,
) -> SummaryData {
    let rates = ranking.match_rates();
    let columns = dimension_columns(ranking);
    SummaryData {
        tool: ToolMeta {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        benchmark_requested: benchmark_requested.to_vec(),
        baseline: baseline.clone(),
        n_population,
        n_ranked: ranking.len(),
        excluded: ranking.excluded.clone(),
        match_rate: MatchRateStats {
            mean: mean(&rates),
            median: median(&rates),
            p10: p10(&rates),
            p90: p90(&rates),
            // Ranking order is descending.
            min: rates.last().copied().unwrap_or(0.0),
            max: rates.first().copied().unwrap_or(0.0),
        },
        dimension_means: Dimension::ALL
            .iter()
            .map(|&d| (d, mean(&columns[d.index()])))
            .collect(),
        dimension_max: Dimension::ALL
            .iter()
            .map(|&d| (d, d.theoretical_max()))
            .collect(),
        dimension_correlation: correlation_matrix(&columns),
        job_profile,
    }
}

fn dimension_columns(ranking: &Ranking) -> Vec<Vec<f64>> {
    let mut columns = vec![Vec::with_capacity(ranking.len()); N_DIMENSIONS];
    for rec in &ranking.records {
        for (i, v) in rec.vector.values().iter().enumerate() {
            columns[i].push(*v);
        }
    }
    columns
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p10(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.10)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// 0 when either side has zero variance or fewer than two samples.
pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n < 2 {
        return 0.0;
    }
    let ma = mean(&a[..n]);
    let mb = mean(&b[..n]);
    let mut cov = 0.0;
    let mut va = 0.0;
    let mut vb = 0.0;
    for i in 0..n {
        let da = a[i] - ma;
        let db = b[i] - mb;
        cov += da * db;
        va += da * da;
        vb += db * db;
    }
    if va == 0.0 || vb == 0.0 {
        return 0.0;
    }
    cov / (va.sqrt() * vb.sqrt())
}

pub fn correlation_matrix(columns: &[Vec<f64>]) -> Vec<Vec<f64>> {
    columns
        .iter()
        .map(|a| columns.iter().map(|b| pearson(a, b)).collect())
        .collect()
}
