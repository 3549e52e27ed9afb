//! Free-text job profile shown alongside a ranking.
//!
//! Generation is delegated to an external text service behind
//! [`JobProfileGenerator`]. Any failure falls back to a fixed template, so
//! the ranking never depends on this output.

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("text generation service unavailable")]
    Unavailable,
    #[error("text generation returned a malformed response")]
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkLabel {
    pub fullname: String,
    pub position: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobProfileRequest {
    pub role_name: String,
    pub job_level: String,
    pub role_purpose: String,
    pub benchmarks: Vec<BenchmarkLabel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobProfileOrigin {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobProfile {
    pub role_name: String,
    pub job_level: String,
    pub origin: JobProfileOrigin,
    pub text: String,
}

pub trait JobProfileGenerator {
    fn generate(&self, request: &JobProfileRequest) -> Result<String, GeneratorError>;
}

/// Generator used when no text service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGenerator;

impl JobProfileGenerator for OfflineGenerator {
    fn generate(&self, _request: &JobProfileRequest) -> Result<String, GeneratorError> {
        Err(GeneratorError::Unavailable)
    }
}

pub fn resolve_job_profile(
    generator: &dyn JobProfileGenerator,
    request: &JobProfileRequest,
) -> JobProfile {
    let generated = generator.generate(request).and_then(|text| {
        if text.trim().is_empty() {
            Err(GeneratorError::Malformed)
        } else {
            Ok(text)
        }
    });
    let (origin, text) = match generated {
        Ok(text) => (JobProfileOrigin::Generated, text),
        Err(err) => {
            warn!(error = %err, role = %request.role_name, "using fallback job profile template");
            (JobProfileOrigin::Fallback, fallback_template(request))
        }
    };
    JobProfile {
        role_name: request.role_name.clone(),
        job_level: request.job_level.clone(),
        origin,
        text,
    }
}

pub fn fallback_template(request: &JobProfileRequest) -> String {
    let role = request.role_name.to_lowercase();
    let purpose = request.role_purpose.to_lowercase();
    format!(
        "Job requirements\n\
         - Technical expertise in {role} domain\n\
         - Data analysis and interpretation skills\n\
         - Problem-solving and critical thinking\n\
         - Communication and collaboration abilities\n\
         \n\
         Job description\n\
         You will be responsible for {purpose} using technical skills and business acumen to drive data-informed decisions.\n\
         \n\
         Key competencies\n\
         1. Technical: Relevant tools and technologies for {name}\n\
         2. Analytical: Data-driven decision making and insights generation\n\
         3. Business: Stakeholder management and requirement gathering\n\
         4. Soft skills: Team collaboration and communication\n",
        name = request.role_name,
    )
}
