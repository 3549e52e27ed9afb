use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRank {
    pub theme: String,
    pub rank: u32,
}

/// Ranked strength themes of one individual, ordered by rank (1 = strongest).
#[derive(Debug, Clone, Default)]
pub struct ThemeSet {
    ranked: Vec<ThemeRank>,
    names: HashSet<String>,
}

impl ThemeSet {
    /// Duplicate theme names keep their best (lowest) rank.
    pub fn from_pairs(pairs: Vec<ThemeRank>) -> Self {
        let mut ranked: Vec<ThemeRank> = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let theme = pair.theme.trim();
            if theme.is_empty() {
                continue;
            }
            match ranked.iter_mut().find(|r| r.theme == theme) {
                Some(existing) => existing.rank = existing.rank.min(pair.rank),
                None => ranked.push(ThemeRank {
                    theme: theme.to_string(),
                    rank: pair.rank,
                }),
            }
        }
        ranked.sort_by_key(|r| r.rank);
        let names = ranked.iter().map(|r| r.theme.clone()).collect();
        Self { ranked, names }
    }

    pub fn contains(&self, theme: &str) -> bool {
        self.names.contains(theme)
    }

    pub fn flag(&self, theme: &str) -> f64 {
        if self.contains(theme) { 1.0 } else { 0.0 }
    }

    /// Themes ranked within the first `max_rank` places, strongest first.
    pub fn top_ranked(&self, max_rank: u32) -> Vec<&str> {
        self.ranked
            .iter()
            .filter(|r| r.rank <= max_rank)
            .map(|r| r.theme.as_str())
            .collect()
    }
}
