use tracing::{info, warn};

use crate::input::ProfileSource;
use crate::model::dimensions::N_DIMENSIONS;
use crate::model::thresholds::RECOMMENDED_MAX_BENCHMARKS;
use crate::model::vector::{BaselineVector, CompositeVector};
use crate::pipeline::MatchError;
use crate::pipeline::stage1_compose::compose_record;

/// Resolves the benchmark identifiers against the source and averages their
/// composite vectors. Identifiers are de-duplicated, first occurrence wins.
pub fn run_stage2(
    source: &dyn ProfileSource,
    benchmark_ids: &[String],
) -> Result<BaselineVector, MatchError> {
    let mut ids: Vec<String> = Vec::with_capacity(benchmark_ids.len());
    for id in benchmark_ids {
        let id = id.trim();
        if !id.is_empty() && !ids.iter().any(|seen| seen == id) {
            ids.push(id.to_string());
        }
    }
    if ids.len() > RECOMMENDED_MAX_BENCHMARKS {
        warn!(
            requested = ids.len(),
            recommended = RECOMMENDED_MAX_BENCHMARKS,
            "benchmark set is larger than recommended"
        );
    }

    let records = source.fetch_by_ids(&ids)?;
    for id in &ids {
        if !records.iter().any(|r| &r.employee_id == id) {
            warn!(employee_id = %id, "benchmark identifier not found");
        }
    }

    let members: Vec<(String, CompositeVector)> = records
        .into_iter()
        .filter_map(|record| {
            let composed = compose_record(record);
            if composed.vector.is_none() {
                warn!(employee_id = %record.employee_id, "benchmark has no assessment record");
            }
            composed.vector.map(|v| (composed.employee_id, v))
        })
        .collect();

    let baseline = aggregate_baseline(&members).ok_or(MatchError::EmptyBenchmark {
        requested: ids.len(),
    })?;
    info!(
        requested = ids.len(),
        contributors = baseline.contributors,
        "computed benchmark baseline"
    );
    Ok(baseline)
}

/// Elementwise mean; `None` for an empty member set.
pub fn aggregate_baseline(members: &[(String, CompositeVector)]) -> Option<BaselineVector> {
    if members.is_empty() {
        return None;
    }
    let mut sums = [0.0f64; N_DIMENSIONS];
    for (_, vector) in members {
        for (sum, value) in sums.iter_mut().zip(vector.values().iter()) {
            *sum += value;
        }
    }
    let n = members.len() as f64;
    for sum in sums.iter_mut() {
        *sum /= n;
    }
    Some(BaselineVector {
        vector: CompositeVector::from_values(sums),
        contributors: members.len(),
        member_ids: members.iter().map(|(id, _)| id.clone()).collect(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_baseline.rs"]
mod tests;
