use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::input::codes::{ScaleCode, StyleCode, TypeCode};
use crate::input::themes::{ThemeRank, ThemeSet};
use crate::input::{
    COGNITIVE_SCORE_MAX, CodePolicy, CognitiveScores, CognitiveTest, EmployeeRecord, InputError,
    OrgLabels, ProfileSource, RawAssessmentProfile, SCALE_SCORE_MAX,
};

#[derive(Debug, Deserialize)]
struct RosterFile {
    employees: Vec<WireEmployee>,
}

#[derive(Debug, Deserialize)]
struct WireEmployee {
    employee_id: String,
    #[serde(default)]
    fullname: Option<String>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    department: Option<String>,
    #[serde(default)]
    division: Option<String>,
    #[serde(default)]
    directorate: Option<String>,
    #[serde(default)]
    grade: Option<String>,
    #[serde(default)]
    latest_performance: Option<f64>,
    #[serde(default)]
    assessment: Option<WireAssessment>,
}

#[derive(Debug, Default, Deserialize)]
struct WireAssessment {
    #[serde(default, alias = "disc")]
    style: Option<String>,
    #[serde(default, alias = "mbti")]
    type_code: Option<String>,
    #[serde(default)]
    cognitive: WireCognitive,
    #[serde(default)]
    scales: BTreeMap<String, Option<f64>>,
    #[serde(default)]
    themes: Vec<ThemeRank>,
}

#[derive(Debug, Default, Deserialize)]
struct WireCognitive {
    #[serde(default)]
    gtq: Option<f64>,
    #[serde(default)]
    tiki: Option<f64>,
    #[serde(default)]
    iq: Option<f64>,
    #[serde(default)]
    pauli: Option<f64>,
}

/// In-memory employee roster loaded from a JSON document.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<EmployeeRecord>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn from_records(employees: Vec<EmployeeRecord>) -> Result<Self, InputError> {
        let mut index = HashMap::with_capacity(employees.len());
        for (i, record) in employees.iter().enumerate() {
            if index.insert(record.employee_id.clone(), i).is_some() {
                return Err(InputError::DuplicateEmployee(record.employee_id.clone()));
            }
        }
        Ok(Self { employees, index })
    }

    pub fn get(&self, employee_id: &str) -> Option<&EmployeeRecord> {
        self.index.get(employee_id).map(|&i| &self.employees[i])
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl ProfileSource for Roster {
    fn fetch_by_ids(&self, ids: &[String]) -> Result<Vec<&EmployeeRecord>, InputError> {
        Ok(ids.iter().filter_map(|id| self.get(id)).collect())
    }

    fn fetch_all(&self) -> Result<&[EmployeeRecord], InputError> {
        Ok(&self.employees)
    }
}

pub fn load_roster(path: &Path, policy: CodePolicy) -> Result<Roster, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let text = fs::read_to_string(path)?;
    let roster = parse_roster_from(&text, &path.display().to_string(), policy)?;
    if roster.is_empty() {
        warn!(path = %path.display(), "roster has no employees");
    }
    info!(
        path = %path.display(),
        employees = roster.len(),
        "loaded employee roster"
    );
    Ok(roster)
}

#[cfg(test)]
pub fn parse_roster(json: &str, policy: CodePolicy) -> Result<Roster, InputError> {
    parse_roster_from(json, "<inline>", policy)
}

fn parse_roster_from(json: &str, origin: &str, policy: CodePolicy) -> Result<Roster, InputError> {
    let file: RosterFile = serde_json::from_str(json).map_err(|source| InputError::Json {
        origin: origin.to_string(),
        source,
    })?;
    let mut records = Vec::with_capacity(file.employees.len());
    for wire in file.employees {
        records.push(convert_employee(wire, policy)?);
    }
    Roster::from_records(records)
}

fn convert_employee(wire: WireEmployee, policy: CodePolicy) -> Result<EmployeeRecord, InputError> {
    let employee_id = wire.employee_id.trim().to_string();
    if employee_id.is_empty() {
        return Err(InputError::MissingInput("employee_id".to_string()));
    }
    let assessment = match wire.assessment {
        Some(a) => Some(convert_assessment(&employee_id, a, policy)?),
        None => None,
    };
    Ok(EmployeeRecord {
        fullname: wire.fullname.unwrap_or_default(),
        org: OrgLabels {
            position: wire.position,
            department: wire.department,
            division: wire.division,
            directorate: wire.directorate,
            grade: wire.grade,
        },
        latest_performance: wire.latest_performance,
        assessment,
        employee_id,
    })
}

fn convert_assessment(
    employee_id: &str,
    wire: WireAssessment,
    policy: CodePolicy,
) -> Result<RawAssessmentProfile, InputError> {
    let style = match wire.style.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(raw) => accept_code(employee_id, raw.parse::<StyleCode>(), policy)?,
        None => None,
    };
    let type_code = match wire.type_code.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(raw) => accept_code(employee_id, raw.parse::<TypeCode>(), policy)?,
        None => None,
    };

    let score = |test: CognitiveTest, value: Option<f64>| {
        accept_score(employee_id, test.label(), value, COGNITIVE_SCORE_MAX, policy)
    };
    let cognitive = CognitiveScores {
        gtq: score(CognitiveTest::Gtq, wire.cognitive.gtq)?,
        tiki: score(CognitiveTest::Tiki, wire.cognitive.tiki)?,
        iq: score(CognitiveTest::Iq, wire.cognitive.iq)?,
        pauli: score(CognitiveTest::Pauli, wire.cognitive.pauli)?,
    };

    let mut scales = BTreeMap::new();
    for (key, value) in wire.scales {
        let Some(value) = value else {
            continue;
        };
        match key.parse::<ScaleCode>() {
            Ok(code) => {
                let field = format!("PAPI-{}", code.letter());
                if let Some(v) =
                    accept_score(employee_id, &field, Some(value), SCALE_SCORE_MAX, policy)?
                {
                    scales.insert(code, v);
                }
            }
            Err(err) => {
                debug!(employee_id, %err, "ignoring scale outside the fixed alphabet");
            }
        }
    }

    Ok(RawAssessmentProfile {
        style,
        type_code,
        cognitive,
        scales,
        themes: ThemeSet::from_pairs(wire.themes),
    })
}

fn accept_code<T>(
    employee_id: &str,
    parsed: Result<T, crate::input::codes::CodeError>,
    policy: CodePolicy,
) -> Result<Option<T>, InputError> {
    match parsed {
        Ok(code) => Ok(Some(code)),
        Err(source) => match policy {
            CodePolicy::Strict => Err(InputError::InvalidCode {
                employee_id: employee_id.to_string(),
                source,
            }),
            CodePolicy::Lenient => {
                warn!(employee_id, error = %source, "malformed code treated as absent");
                Ok(None)
            }
        },
    }
}

/// Scores outside `[0, max]` follow the same policy as malformed codes.
fn accept_score(
    employee_id: &str,
    field: &str,
    value: Option<f64>,
    max: f64,
    policy: CodePolicy,
) -> Result<Option<f64>, InputError> {
    let Some(value) = value else {
        return Ok(None);
    };
    if (0.0..=max).contains(&value) {
        return Ok(Some(value));
    }
    match policy {
        CodePolicy::Strict => Err(InputError::ScoreOutOfRange {
            employee_id: employee_id.to_string(),
            field: field.to_string(),
            value,
            max,
        }),
        CodePolicy::Lenient => {
            warn!(employee_id, field, value, max, "out-of-range score treated as absent");
            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
