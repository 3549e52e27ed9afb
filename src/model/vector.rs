use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::model::dimensions::{Dimension, N_DIMENSIONS};

/// One value per composite dimension, indexed by [`Dimension::index`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CompositeVector {
    values: [f64; N_DIMENSIONS],
}

impl CompositeVector {
    pub fn from_values(values: [f64; N_DIMENSIONS]) -> Self {
        Self { values }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.values[dimension.index()]
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        self.values[dimension.index()] = value;
    }

    pub fn values(&self) -> &[f64; N_DIMENSIONS] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Root-mean-square of the per-dimension differences.
    pub fn rms_distance(&self, other: &CompositeVector) -> f64 {
        let sum_sq: f64 = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        (sum_sq / N_DIMENSIONS as f64).sqrt()
    }
}

impl Serialize for CompositeVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(N_DIMENSIONS))?;
        for (d, v) in self.iter() {
            map.serialize_entry(d.key(), &v)?;
        }
        map.end()
    }
}

/// Elementwise mean of the benchmark members' composite vectors.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BaselineVector {
    pub vector: CompositeVector,
    pub contributors: usize,
    pub member_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MatchRecord {
    pub employee_id: String,
    pub vector: CompositeVector,
    pub rms_distance: f64,
    pub match_rate: f64,
}

/// Ordered result of one ranking request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    pub records: Vec<MatchRecord>,
    /// Candidates without a composable profile, in input order.
    pub excluded: Vec<String>,
}

impl Ranking {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn top(&self) -> Option<&MatchRecord> {
        self.records.first()
    }

    pub fn match_rates(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.match_rate).collect()
    }
}
