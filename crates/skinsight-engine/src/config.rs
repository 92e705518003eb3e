use serde::{Deserialize, Serialize};

/// Base plausibility every condition starts from before any evidence.
pub const INITIAL_SCORE: f64 = 5.0;

/// Lower bound used while questioning.
pub const SELECTION_FLOOR: f64 = -10.0;

/// Number of conditions shown in the final ranking.
pub const DEFAULT_TOP_K: usize = 4;

/// How far a condition score may fall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreFloor {
    /// Clamp at `min`; lets strongly contradicted conditions stay ranked
    /// below merely unconfirmed ones.
    Bounded { min: f64 },
    /// Clamp at zero, for inputs feeding percentage math.
    NonNegative,
}

impl ScoreFloor {
    pub fn apply(&self, score: f64) -> f64 {
        match self {
            ScoreFloor::Bounded { min } => score.max(*min),
            ScoreFloor::NonNegative => score.max(0.0),
        }
    }
}

/// When to end the questionnaire before every question has been asked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum StopPolicy {
    /// Stop once the leader is above `confidence_floor` and ahead of the
    /// runner-up by more than `margin`.
    ScoreGap {
        min_questions: usize,
        confidence_floor: f64,
        margin: f64,
    },
    /// Stop once one condition holds at least the category's
    /// auto-complete share of the top-four positive total.
    ShareOfTop { min_questions: usize },
    /// Ask every question.
    Never,
}

impl StopPolicy {
    pub fn min_questions(&self) -> usize {
        match self {
            StopPolicy::ScoreGap { min_questions, .. }
            | StopPolicy::ShareOfTop { min_questions } => *min_questions,
            StopPolicy::Never => usize::MAX,
        }
    }
}

impl Default for StopPolicy {
    fn default() -> Self {
        StopPolicy::ScoreGap {
            min_questions: 3,
            confidence_floor: 7.0,
            margin: 3.0,
        }
    }
}

/// Inputs to one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringParams {
    pub initial_score: f64,
    pub floor: ScoreFloor,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            initial_score: INITIAL_SCORE,
            floor: ScoreFloor::Bounded {
                min: SELECTION_FLOOR,
            },
        }
    }
}

/// Every tunable of the questionnaire engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub initial_score: f64,
    /// Floor for scores that drive question selection and stopping.
    pub selection_floor: ScoreFloor,
    /// Floor for the scores handed to the display layer.
    pub result_floor: ScoreFloor,
    pub stop: StopPolicy,
    pub top_k: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_score: INITIAL_SCORE,
            selection_floor: ScoreFloor::Bounded {
                min: SELECTION_FLOOR,
            },
            result_floor: ScoreFloor::Bounded {
                min: SELECTION_FLOOR,
            },
            stop: StopPolicy::default(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl EngineConfig {
    pub fn selection_params(&self) -> ScoringParams {
        ScoringParams {
            initial_score: self.initial_score,
            floor: self.selection_floor,
        }
    }

    pub fn result_params(&self) -> ScoringParams {
        ScoringParams {
            initial_score: self.initial_score,
            floor: self.result_floor,
        }
    }
}
