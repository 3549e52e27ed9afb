use crate::input::codes::{ScaleCode, StyleCode};
use crate::input::{COGNITIVE_SCORE_MAX, CognitiveTest, RawAssessmentProfile, SCALE_SCORE_MAX};
use crate::model::themes::SCORED_THEMES;

/// Weight of the introversion letter among the individual indicators.
pub const INTROVERSION_INDICATOR_WEIGHT: f64 = 0.8;

const TYPE_LETTERS: [char; 8] = ['E', 'I', 'S', 'N', 'T', 'F', 'J', 'P'];

/// Individual assessment indicator, across all measurement families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Cognitive(CognitiveTest),
    Style(StyleCode),
    TypeLetter(char),
    Scale(ScaleCode),
    Theme(&'static str),
}

impl Indicator {
    pub fn label(&self) -> String {
        match *self {
            Indicator::Cognitive(test) => test.label().to_string(),
            Indicator::Style(code) => format!("DISC-{}", code.letter()),
            Indicator::TypeLetter(c) => format!("MBTI-{c}"),
            Indicator::Scale(code) => format!("PAPI-{}", code.letter()),
            Indicator::Theme(name) => format!("Str-{}", name.replace('-', "")),
        }
    }

    /// Normalized value, or `None` when the indicator carries no signal.
    pub fn value(&self, profile: &RawAssessmentProfile) -> Option<f64> {
        let v = match *self {
            Indicator::Cognitive(test) => profile.cognitive.get(test)? / COGNITIVE_SCORE_MAX,
            Indicator::Style(code) => {
                if profile.style != Some(code) {
                    return None;
                }
                1.0
            }
            Indicator::TypeLetter(c) => {
                if !profile.type_code?.contains(c) {
                    return None;
                }
                if c == 'I' {
                    INTROVERSION_INDICATOR_WEIGHT
                } else {
                    1.0
                }
            }
            Indicator::Scale(code) => profile.scale(code)? / SCALE_SCORE_MAX,
            Indicator::Theme(name) => {
                if !profile.themes.contains(name) {
                    return None;
                }
                1.0
            }
        };
        (v > 0.0).then_some(v)
    }
}

/// Fixed enumeration order: cognitive, style, type letters, scales, themes.
pub fn indicator_order() -> Vec<Indicator> {
    let mut out = Vec::with_capacity(4 + 4 + 8 + 10 + SCORED_THEMES.len());
    out.extend(CognitiveTest::ALL.into_iter().map(Indicator::Cognitive));
    out.extend(StyleCode::ALL.into_iter().map(Indicator::Style));
    out.extend(TYPE_LETTERS.into_iter().map(Indicator::TypeLetter));
    out.extend(ScaleCode::ALL.into_iter().map(Indicator::Scale));
    out.extend(SCORED_THEMES.iter().copied().map(Indicator::Theme));
    out
}
