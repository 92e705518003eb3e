use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Condition name → accumulated plausibility score.
///
/// Entries keep knowledge-base declaration order, which is also the
/// tie-break order when sorting. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreMap(IndexMap<String, f64>);

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score for a condition, replacing any earlier value in place.
    pub fn insert(&mut self, condition: impl Into<String>, score: f64) {
        self.0.insert(condition.into(), score);
    }

    pub fn get(&self, condition: &str) -> Option<f64> {
        self.0.get(condition).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, score)| (name.as_str(), *score))
    }

    /// Entries sorted by score, highest first. Equal scores keep
    /// declaration order.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, score)| (name.into(), score)).collect())
    }
}
