use tracing::{info, warn};

use crate::model::vector::{BaselineVector, CompositeVector, MatchRecord, Ranking};
use crate::pipeline::stage1_compose::ComposedProfile;

/// `(1 - rms_distance) * 100`. Not clamped: far-off candidates can go negative.
pub fn match_rate(rms_distance: f64) -> f64 {
    (1.0 - rms_distance) * 100.0
}

pub fn score_candidate(
    employee_id: &str,
    vector: &CompositeVector,
    baseline: &BaselineVector,
) -> MatchRecord {
    let rms_distance = vector.rms_distance(&baseline.vector);
    MatchRecord {
        employee_id: employee_id.to_string(),
        vector: *vector,
        rms_distance,
        match_rate: match_rate(rms_distance),
    }
}

/// Scores every composable candidate and orders by match rate, highest first.
/// Equal match rates keep their input order.
pub fn run_stage3(baseline: &BaselineVector, population: &[ComposedProfile]) -> Ranking {
    let mut records = Vec::with_capacity(population.len());
    let mut excluded = Vec::new();
    for candidate in population {
        match &candidate.vector {
            Some(vector) => records.push(score_candidate(&candidate.employee_id, vector, baseline)),
            None => excluded.push(candidate.employee_id.clone()),
        }
    }

    records.sort_by(|a, b| b.match_rate.total_cmp(&a.match_rate));
    let ranking = Ranking { records, excluded };

    if ranking.is_empty() {
        warn!(
            population = population.len(),
            "no candidates ranked against the benchmark"
        );
    } else {
        info!(
            ranked = ranking.len(),
            excluded = ranking.excluded.len(),
            top_match_rate = ranking.records[0].match_rate,
            "ranked candidate population"
        );
    }

    ranking
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_rank.rs"]
mod tests;
