pub mod stage1_compose;
pub mod stage2_baseline;
pub mod stage3_rank;
pub mod stage4_insights;
pub mod stage5_report;

use thiserror::Error;

use crate::input::InputError;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("no benchmark with an assessment record among {requested} requested identifier(s)")]
    EmptyBenchmark { requested: usize },
    #[error(transparent)]
    DataSource(#[from] InputError),
}
