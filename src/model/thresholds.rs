#[derive(Debug, Clone, PartialEq)]
pub struct InsightThresholds {
    /// Strength/gap cut-off for the tabular list view.
    pub list_view: f64,
    /// Strength/gap cut-off for the narrative detail view.
    pub detail_view: f64,
    pub top_n: usize,
    /// Themes ranked at or above this place are shown as top strengths.
    pub top_theme_rank: u32,
    pub strong_match: f64,
    pub good_match: f64,
}

impl InsightThresholds {
    pub fn default_v1() -> Self {
        Self {
            list_view: 0.10,
            detail_view: 0.15,
            top_n: 3,
            top_theme_rank: 3,
            strong_match: 85.0,
            good_match: 70.0,
        }
    }
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}

/// Recommended upper bound on benchmark set size. Larger sets are accepted.
pub const RECOMMENDED_MAX_BENCHMARKS: usize = 3;
