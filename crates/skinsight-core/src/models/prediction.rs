use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Canonical comparison form of a condition label: lowercase, trimmed,
/// with underscores, hyphens and whitespace removed.
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .collect()
}

/// One classifier output: a condition label and, when the caller supplied
/// one, its probability in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Prediction {
    pub label: String,
    pub probability: Option<f64>,
}

/// Image classifier output in its single canonical shape: predictions
/// ordered by probability, highest first. Entries without a probability
/// sort after those with one and otherwise keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassifierResult {
    pub predictions: Vec<Prediction>,
}

/// Every payload shape the upload/camera pages have produced.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPredictions {
    Label(String),
    Ranked(Vec<RankedEntry>),
    Top {
        top_prediction: String,
        #[serde(default)]
        probability: Option<f64>,
    },
    Mapped {
        predictions: BTreeMap<String, f64>,
    },
}

#[derive(Deserialize)]
struct RankedEntry {
    condition: String,
    #[serde(default)]
    probability: Option<f64>,
}

impl ClassifierResult {
    /// Build from an already extracted top label.
    pub fn from_label(label: impl Into<String>) -> Self {
        Self {
            predictions: vec![Prediction {
                label: label.into(),
                probability: None,
            }],
        }
    }

    pub fn from_predictions(mut predictions: Vec<Prediction>) -> Result<Self, CoreError> {
        for p in &predictions {
            if let Some(prob) = p.probability
                && !(0.0..=1.0).contains(&prob)
            {
                return Err(CoreError::MalformedPrediction(format!(
                    "probability {prob} for '{}' is outside [0, 1]",
                    p.label
                )));
            }
        }
        predictions.sort_by(|a, b| match (a.probability, b.probability) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        Ok(Self { predictions })
    }

    /// Normalize any accepted JSON payload shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        let raw: RawPredictions = serde_json::from_value(value)
            .map_err(|e| CoreError::MalformedPrediction(e.to_string()))?;

        let predictions = match raw {
            RawPredictions::Label(label) => vec![Prediction {
                label,
                probability: None,
            }],
            RawPredictions::Ranked(entries) => entries
                .into_iter()
                .map(|e| Prediction {
                    label: e.condition,
                    probability: e.probability,
                })
                .collect(),
            RawPredictions::Top {
                top_prediction,
                probability,
            } => vec![Prediction {
                label: top_prediction,
                probability,
            }],
            RawPredictions::Mapped { predictions } => predictions
                .into_iter()
                .map(|(label, probability)| Prediction {
                    label,
                    probability: Some(probability),
                })
                .collect(),
        };

        Self::from_predictions(predictions)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn top(&self) -> Option<&Prediction> {
        self.predictions.first()
    }

    /// The leading label, or `""` when the classifier returned nothing.
    pub fn top_label(&self) -> &str {
        self.top().map(|p| p.label.as_str()).unwrap_or("")
    }
}

/// Triage urgency derived from the classifier's leading prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Urgency {
    High,
    Moderate,
    Low,
}

/// Labels (normalized) that escalate a confident prediction to `High`.
const HIGH_RISK_LABELS: &[&str] = &[
    "melanoma",
    "squamouscellcarcinoma",
    "squamouscellcancer",
    "basalcellcarcinoma",
    "basalcellcancer",
    "actinickeratosis",
    "mel",
    "scc",
    "bcc",
    "akiec",
];

const HIGH_THRESHOLD: f64 = 0.7;
const MODERATE_THRESHOLD: f64 = 0.5;

impl Urgency {
    pub fn assess(result: &ClassifierResult) -> Urgency {
        let Some(top) = result.top() else {
            return Urgency::Low;
        };
        let Some(probability) = top.probability else {
            return Urgency::Low;
        };

        let high_risk = HIGH_RISK_LABELS.contains(&normalize_label(&top.label).as_str());
        if probability > HIGH_THRESHOLD && high_risk {
            Urgency::High
        } else if probability > MODERATE_THRESHOLD {
            Urgency::Moderate
        } else {
            Urgency::Low
        }
    }
}
