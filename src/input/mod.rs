use std::collections::BTreeMap;

use thiserror::Error;

pub mod codes;
pub mod roster;
pub mod themes;

use codes::{CodeError, ScaleCode, StyleCode, TypeCode};
use themes::ThemeSet;

pub use roster::load_roster;
#[cfg(test)]
pub use roster::{Roster, parse_roster};

/// Upper bound of a cognitive test score.
pub const COGNITIVE_SCORE_MAX: f64 = 100.0;
/// Upper bound of a work-preference scale score.
pub const SCALE_SCORE_MAX: f64 = 10.0;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("duplicate employee id {0}")]
    DuplicateEmployee(String),
    #[error("employee {employee_id}: {source}")]
    InvalidCode {
        employee_id: String,
        #[source]
        source: CodeError,
    },
    #[error("employee {employee_id}: {field} score {value} outside [0, {max}]")]
    ScoreOutOfRange {
        employee_id: String,
        field: String,
        value: f64,
        max: f64,
    },
}

/// How malformed style/type codes and out-of-range scores are handled while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePolicy {
    /// Log and treat the value as absent.
    Lenient,
    /// Fail the load with [`InputError::InvalidCode`] or [`InputError::ScoreOutOfRange`].
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CognitiveTest {
    Gtq,
    Tiki,
    Iq,
    Pauli,
}

impl CognitiveTest {
    pub const ALL: [CognitiveTest; 4] = [
        CognitiveTest::Gtq,
        CognitiveTest::Tiki,
        CognitiveTest::Iq,
        CognitiveTest::Pauli,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CognitiveTest::Gtq => "GTQ",
            CognitiveTest::Tiki => "TIKI",
            CognitiveTest::Iq => "IQ",
            CognitiveTest::Pauli => "Pauli",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CognitiveScores {
    pub gtq: Option<f64>,
    pub tiki: Option<f64>,
    pub iq: Option<f64>,
    pub pauli: Option<f64>,
}

impl CognitiveScores {
    pub fn get(&self, test: CognitiveTest) -> Option<f64> {
        match test {
            CognitiveTest::Gtq => self.gtq,
            CognitiveTest::Tiki => self.tiki,
            CognitiveTest::Iq => self.iq,
            CognitiveTest::Pauli => self.pauli,
        }
    }
}

/// Assessment data for one individual. Absent fields are `None`.
#[derive(Debug, Clone, Default)]
pub struct RawAssessmentProfile {
    pub style: Option<StyleCode>,
    pub type_code: Option<TypeCode>,
    pub cognitive: CognitiveScores,
    pub scales: BTreeMap<ScaleCode, f64>,
    pub themes: ThemeSet,
}

impl RawAssessmentProfile {
    pub fn scale(&self, code: ScaleCode) -> Option<f64> {
        self.scales.get(&code).copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgLabels {
    pub position: Option<String>,
    pub department: Option<String>,
    pub division: Option<String>,
    pub directorate: Option<String>,
    pub grade: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub fullname: String,
    pub org: OrgLabels,
    pub latest_performance: Option<f64>,
    /// `None` when the individual has no assessment record at all.
    pub assessment: Option<RawAssessmentProfile>,
}

/// Read-only access to employee records, by identifier set or in bulk.
pub trait ProfileSource {
    /// Records for the known identifiers, in request order. Unknown ids are skipped.
    fn fetch_by_ids(&self, ids: &[String]) -> Result<Vec<&EmployeeRecord>, InputError>;

    fn fetch_all(&self) -> Result<&[EmployeeRecord], InputError>;
}
