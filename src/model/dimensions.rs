use serde::Serialize;

use crate::input::codes::{Attitude, Perception, ScaleCode, StyleCode};
use crate::input::{COGNITIVE_SCORE_MAX, CognitiveTest, RawAssessmentProfile, SCALE_SCORE_MAX};
use crate::model::themes;

pub const N_DIMENSIONS: usize = 8;

/// Composite talent dimensions, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    AdaptabilityStress,
    CognitiveComplexity,
    Conscientiousness,
    CreativityInnovation,
    CulturalValues,
    LeadershipInfluence,
    MotivationDrive,
    SocialOrientation,
}

impl Dimension {
    pub const ALL: [Dimension; N_DIMENSIONS] = [
        Dimension::AdaptabilityStress,
        Dimension::CognitiveComplexity,
        Dimension::Conscientiousness,
        Dimension::CreativityInnovation,
        Dimension::CulturalValues,
        Dimension::LeadershipInfluence,
        Dimension::MotivationDrive,
        Dimension::SocialOrientation,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> &'static str {
        match self {
            Dimension::AdaptabilityStress => "adaptability_stress",
            Dimension::CognitiveComplexity => "cognitive_complexity",
            Dimension::Conscientiousness => "conscientiousness",
            Dimension::CreativityInnovation => "creativity_innovation",
            Dimension::CulturalValues => "cultural_values",
            Dimension::LeadershipInfluence => "leadership_influence",
            Dimension::MotivationDrive => "motivation_drive",
            Dimension::SocialOrientation => "social_orientation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::AdaptabilityStress => "Adaptability & Stress Tolerance",
            Dimension::CognitiveComplexity => "Cognitive Complexity",
            Dimension::Conscientiousness => "Conscientiousness & Reliability",
            Dimension::CreativityInnovation => "Creativity & Innovation",
            Dimension::CulturalValues => "Cultural & Values Urgency",
            Dimension::LeadershipInfluence => "Leadership & Influence",
            Dimension::MotivationDrive => "Motivation & Drive",
            Dimension::SocialOrientation => "Social Orientation & Collaboration",
        }
    }

    /// Compact name used in tabular views.
    pub fn short_label(self) -> &'static str {
        match self {
            Dimension::AdaptabilityStress => "Adaptability",
            Dimension::CognitiveComplexity => "Cognitive",
            Dimension::Conscientiousness => "Conscientiousness",
            Dimension::CreativityInnovation => "Creativity",
            Dimension::CulturalValues => "Cultural",
            Dimension::LeadershipInfluence => "Leadership",
            Dimension::MotivationDrive => "Motivation",
            Dimension::SocialOrientation => "Social",
        }
    }

    /// Fixed denominator of the component mean.
    pub const fn indicator_count(self) -> usize {
        match self {
            Dimension::AdaptabilityStress => 4,
            Dimension::CognitiveComplexity => 7,
            Dimension::Conscientiousness => 5,
            Dimension::CreativityInnovation => 4,
            Dimension::CulturalValues => 1,
            Dimension::LeadershipInfluence => 9,
            Dimension::MotivationDrive => 3,
            Dimension::SocialOrientation => 5,
        }
    }

    pub fn terms(self) -> &'static [Term] {
        match self {
            Dimension::AdaptabilityStress => ADAPTABILITY_STRESS,
            Dimension::CognitiveComplexity => COGNITIVE_COMPLEXITY,
            Dimension::Conscientiousness => CONSCIENTIOUSNESS,
            Dimension::CreativityInnovation => CREATIVITY_INNOVATION,
            Dimension::CulturalValues => CULTURAL_VALUES,
            Dimension::LeadershipInfluence => LEADERSHIP_INFLUENCE,
            Dimension::MotivationDrive => MOTIVATION_DRIVE,
            Dimension::SocialOrientation => SOCIAL_ORIENTATION,
        }
    }

    /// Upper bound of the component when every term saturates at its nominal maximum.
    pub fn theoretical_max(self) -> f64 {
        let sum: f64 = self.terms().iter().map(|t| t.nominal_max()).sum();
        sum / self.indicator_count() as f64
    }
}

/// One sub-indicator contributing to exactly one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Term {
    StyleIs(StyleCode),
    AttitudeIs(Attitude, f64),
    PerceptionIs(Perception),
    /// Test score on the nominal 0-100 scale.
    Cognitive(CognitiveTest),
    /// Scale score on the nominal 0-10 scale.
    Scale(ScaleCode),
    Theme(&'static str),
}

impl Term {
    /// Normalized value; 0 when the underlying datum is absent.
    pub fn value(&self, profile: &RawAssessmentProfile) -> f64 {
        match *self {
            Term::StyleIs(code) => indicator(profile.style == Some(code)),
            Term::AttitudeIs(attitude, weight) => match profile.type_code {
                Some(t) if t.attitude == attitude => weight,
                _ => 0.0,
            },
            Term::PerceptionIs(perception) => {
                indicator(profile.type_code.is_some_and(|t| t.perception == perception))
            }
            Term::Cognitive(test) => profile
                .cognitive
                .get(test)
                .map_or(0.0, |v| v / COGNITIVE_SCORE_MAX),
            Term::Scale(code) => profile.scale(code).map_or(0.0, |v| v / SCALE_SCORE_MAX),
            Term::Theme(name) => profile.themes.flag(name),
        }
    }

    pub fn nominal_max(&self) -> f64 {
        match *self {
            Term::AttitudeIs(_, weight) => weight,
            _ => 1.0,
        }
    }
}

fn indicator(hit: bool) -> f64 {
    if hit { 1.0 } else { 0.0 }
}

const ADAPTABILITY_STRESS: &[Term] = &[
    Term::StyleIs(StyleCode::Steadiness),
    Term::Scale(ScaleCode::T),
    Term::Scale(ScaleCode::E),
    Term::Theme(themes::ADAPTABILITY),
];

const COGNITIVE_COMPLEXITY: &[Term] = &[
    Term::Cognitive(CognitiveTest::Gtq),
    Term::Cognitive(CognitiveTest::Tiki),
    Term::Cognitive(CognitiveTest::Iq),
    Term::Scale(ScaleCode::I),
    Term::Theme(themes::CONNECTEDNESS),
    Term::Theme(themes::ANALYTICAL),
    Term::Theme(themes::STRATEGIC),
];

const CONSCIENTIOUSNESS: &[Term] = &[
    Term::StyleIs(StyleCode::Conscientiousness),
    Term::Scale(ScaleCode::C),
    Term::Scale(ScaleCode::D),
    Term::Theme(themes::DELIBERATIVE),
    Term::Theme(themes::DISCIPLINE),
];

const CREATIVITY_INNOVATION: &[Term] = &[
    Term::PerceptionIs(Perception::Intuition),
    Term::Scale(ScaleCode::Z),
    Term::Theme(themes::FUTURISTIC),
    Term::Theme(themes::IDEATION),
];

const CULTURAL_VALUES: &[Term] = &[Term::Theme(themes::BELIEF)];

const LEADERSHIP_INFLUENCE: &[Term] = &[
    Term::AttitudeIs(Attitude::Extraversion, 1.0),
    Term::AttitudeIs(Attitude::Introversion, 0.5),
    Term::StyleIs(StyleCode::Dominance),
    Term::Scale(ScaleCode::L),
    Term::Scale(ScaleCode::P),
    Term::Theme(themes::ARRANGER),
    Term::Theme(themes::COMMAND),
    Term::Theme(themes::SELF_ASSURANCE),
    Term::Theme(themes::DEVELOPER),
];

const MOTIVATION_DRIVE: &[Term] = &[
    Term::Cognitive(CognitiveTest::Pauli),
    Term::Scale(ScaleCode::A),
    Term::Theme(themes::ACHIEVER),
];

const SOCIAL_ORIENTATION: &[Term] = &[
    Term::StyleIs(StyleCode::Influence),
    Term::Scale(ScaleCode::S),
    Term::Theme(themes::COMMUNICATION),
    Term::Theme(themes::WOO),
    Term::Theme(themes::RELATOR),
];
