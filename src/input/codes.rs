use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("malformed behavioral style code {raw:?} (expected one of D, I, S, C)")]
    MalformedStyle { raw: String },
    #[error("malformed personality type code {raw:?} (expected E|I, S|N, T|F, J|P)")]
    MalformedType { raw: String },
    #[error("unknown scale code {raw:?}")]
    UnknownScale { raw: String },
}

/// Single-letter behavioral style (DISC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StyleCode {
    Dominance,
    Influence,
    Steadiness,
    Conscientiousness,
}

impl StyleCode {
    pub const ALL: [StyleCode; 4] = [
        StyleCode::Dominance,
        StyleCode::Influence,
        StyleCode::Steadiness,
        StyleCode::Conscientiousness,
    ];

    pub fn letter(self) -> char {
        match self {
            StyleCode::Dominance => 'D',
            StyleCode::Influence => 'I',
            StyleCode::Steadiness => 'S',
            StyleCode::Conscientiousness => 'C',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        StyleCode::ALL.into_iter().find(|s| s.letter() == c)
    }
}

impl FromStr for StyleCode {
    type Err = CodeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => StyleCode::from_letter(c.to_ascii_uppercase()).ok_or_else(|| {
                CodeError::MalformedStyle {
                    raw: raw.to_string(),
                }
            }),
            _ => Err(CodeError::MalformedStyle {
                raw: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for StyleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Attitude {
    Extraversion,
    Introversion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Perception {
    Sensing,
    Intuition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Judgement {
    Thinking,
    Feeling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Lifestyle {
    Judging,
    Perceiving,
}

/// Four-letter personality type, one letter per dichotomy, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypeCode {
    pub attitude: Attitude,
    pub perception: Perception,
    pub judgement: Judgement,
    pub lifestyle: Lifestyle,
}

impl TypeCode {
    pub fn letters(&self) -> [char; 4] {
        [
            match self.attitude {
                Attitude::Extraversion => 'E',
                Attitude::Introversion => 'I',
            },
            match self.perception {
                Perception::Sensing => 'S',
                Perception::Intuition => 'N',
            },
            match self.judgement {
                Judgement::Thinking => 'T',
                Judgement::Feeling => 'F',
            },
            match self.lifestyle {
                Lifestyle::Judging => 'J',
                Lifestyle::Perceiving => 'P',
            },
        ]
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters().contains(&letter)
    }
}

impl FromStr for TypeCode {
    type Err = CodeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || CodeError::MalformedType {
            raw: raw.to_string(),
        };
        let letters: Vec<char> = raw
            .trim()
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if letters.len() != 4 {
            return Err(malformed());
        }
        let attitude = match letters[0] {
            'E' => Attitude::Extraversion,
            'I' => Attitude::Introversion,
            _ => return Err(malformed()),
        };
        let perception = match letters[1] {
            'S' => Perception::Sensing,
            'N' => Perception::Intuition,
            _ => return Err(malformed()),
        };
        let judgement = match letters[2] {
            'T' => Judgement::Thinking,
            'F' => Judgement::Feeling,
            _ => return Err(malformed()),
        };
        let lifestyle = match letters[3] {
            'J' => Lifestyle::Judging,
            'P' => Lifestyle::Perceiving,
            _ => return Err(malformed()),
        };
        Ok(TypeCode {
            attitude,
            perception,
            judgement,
            lifestyle,
        })
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.letters() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// The ten work-preference scales scored 0-10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ScaleCode {
    /// Pace.
    T,
    /// Emotional restraint.
    E,
    /// Ease in decision making.
    I,
    /// Organized type.
    C,
    /// Interest in working with details.
    D,
    /// Need for change.
    Z,
    /// Leadership role.
    L,
    /// Need to control others.
    P,
    /// Need to achieve.
    A,
    /// Social extension.
    S,
}

impl ScaleCode {
    pub const ALL: [ScaleCode; 10] = [
        ScaleCode::T,
        ScaleCode::E,
        ScaleCode::I,
        ScaleCode::C,
        ScaleCode::D,
        ScaleCode::Z,
        ScaleCode::L,
        ScaleCode::P,
        ScaleCode::A,
        ScaleCode::S,
    ];

    pub fn letter(self) -> char {
        match self {
            ScaleCode::T => 'T',
            ScaleCode::E => 'E',
            ScaleCode::I => 'I',
            ScaleCode::C => 'C',
            ScaleCode::D => 'D',
            ScaleCode::Z => 'Z',
            ScaleCode::L => 'L',
            ScaleCode::P => 'P',
            ScaleCode::A => 'A',
            ScaleCode::S => 'S',
        }
    }
}

impl FromStr for ScaleCode {
    type Err = CodeError;

    /// Accepts the bare letter (`"T"`) or the prefixed form (`"Papi_T"`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let letter = match trimmed.rsplit_once('_') {
            Some((prefix, letter)) if prefix.eq_ignore_ascii_case("papi") => letter,
            Some(_) => {
                return Err(CodeError::UnknownScale {
                    raw: raw.to_string(),
                });
            }
            None => trimmed,
        };
        let mut chars = letter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ScaleCode::ALL
                .into_iter()
                .find(|s| s.letter() == c.to_ascii_uppercase())
                .ok_or_else(|| CodeError::UnknownScale {
                    raw: raw.to_string(),
                }),
            _ => Err(CodeError::UnknownScale {
                raw: raw.to_string(),
            }),
        }
    }
}
