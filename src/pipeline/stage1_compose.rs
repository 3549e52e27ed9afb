use rayon::prelude::*;
use tracing::{debug, info};

use crate::input::{EmployeeRecord, RawAssessmentProfile};
use crate::model::dimensions::Dimension;
use crate::model::vector::CompositeVector;

#[derive(Debug, Clone, PartialEq)]
pub struct ComposedProfile {
    pub employee_id: String,
    /// `None` when the record has no assessment to compose.
    pub vector: Option<CompositeVector>,
}

#[derive(Debug)]
pub struct Stage1Output {
    pub composed: Vec<ComposedProfile>,
}

impl Stage1Output {
    pub fn composable(&self) -> usize {
        self.composed.iter().filter(|c| c.vector.is_some()).count()
    }
}

/// Each component is the sum of its terms over the declared count.
/// Absent data contributes 0 to the sum and never changes the denominator.
pub fn compose_profile(profile: &RawAssessmentProfile) -> CompositeVector {
    let mut out = CompositeVector::default();
    for dimension in Dimension::ALL {
        let sum: f64 = dimension.terms().iter().map(|t| t.value(profile)).sum();
        out.set(dimension, sum / dimension.indicator_count() as f64);
    }
    out
}

pub fn compose_record(record: &EmployeeRecord) -> ComposedProfile {
    ComposedProfile {
        employee_id: record.employee_id.clone(),
        vector: record.assessment.as_ref().map(compose_profile),
    }
}

/// Composes the whole population in parallel; output keeps input order.
pub fn run_stage1(records: &[EmployeeRecord]) -> Stage1Output {
    let composed: Vec<ComposedProfile> = records.par_iter().map(compose_record).collect();
    let out = Stage1Output { composed };
    let composable = out.composable();
    info!(
        population = records.len(),
        composable,
        missing = records.len() - composable,
        "composed population profiles"
    );
    for c in out.composed.iter().filter(|c| c.vector.is_none()) {
        debug!(employee_id = %c.employee_id, "no assessment record to compose");
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_compose.rs"]
mod tests;
