pub const ADAPTABILITY: &str = "Adaptability";
pub const CONNECTEDNESS: &str = "Connectedness";
pub const ANALYTICAL: &str = "Analytical";
pub const STRATEGIC: &str = "Strategic";
pub const DELIBERATIVE: &str = "Deliberative";
pub const DISCIPLINE: &str = "Discipline";
pub const FUTURISTIC: &str = "Futuristic";
pub const IDEATION: &str = "Ideation";
pub const BELIEF: &str = "Belief";
pub const ARRANGER: &str = "Arranger";
pub const COMMAND: &str = "Command";
pub const SELF_ASSURANCE: &str = "Self-Assurance";
pub const DEVELOPER: &str = "Developer";
pub const ACHIEVER: &str = "Achiever";
pub const COMMUNICATION: &str = "Communication";
pub const WOO: &str = "Woo";
pub const RELATOR: &str = "Relator";

/// Themes that feed a composite dimension, in indicator enumeration order.
pub const SCORED_THEMES: &[&str] = &[
    ADAPTABILITY,
    CONNECTEDNESS,
    ANALYTICAL,
    STRATEGIC,
    DELIBERATIVE,
    DISCIPLINE,
    FUTURISTIC,
    IDEATION,
    BELIEF,
    ARRANGER,
    COMMAND,
    SELF_ASSURANCE,
    DEVELOPER,
    ACHIEVER,
    COMMUNICATION,
    WOO,
    RELATOR,
];
