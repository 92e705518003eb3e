//! Early-stop decisions.

use skinsight_core::{AnswerSet, Category, ScoreMap};
use skinsight_knowledge::CategoryBank;

use crate::config::{EngineConfig, StopPolicy};
use crate::scoring::score;

/// How many leading conditions the share-of-top rule compares.
const SHARE_CANDIDATES: usize = 4;

/// Whether the answers so far are conclusive enough to end the session.
///
/// Never true before the policy's minimum number of answers, and never
/// true for a category with fewer than two conditions.
pub fn should_stop(answers: &AnswerSet, bank: &dyn CategoryBank, config: &EngineConfig) -> bool {
    if answers.len() < config.stop.min_questions() || bank.conditions().len() < 2 {
        return false;
    }

    let scores = score(answers, bank, config.selection_params());
    match config.stop {
        StopPolicy::ScoreGap {
            confidence_floor,
            margin,
            ..
        } => score_gap_reached(&scores, confidence_floor, margin),
        StopPolicy::ShareOfTop { .. } => share_of_top_reached(&scores, bank.category()),
        StopPolicy::Never => false,
    }
}

/// True when the leader exceeds `confidence_floor` and leads the runner-up
/// by more than `margin`.
pub fn score_gap_reached(scores: &ScoreMap, confidence_floor: f64, margin: f64) -> bool {
    let ranked = scores.ranked();
    let [(_, top), (_, second), ..] = ranked.as_slice() else {
        return false;
    };
    *top > confidence_floor && top - second > margin
}

/// True when one of the top four positive scores holds at least the
/// category's auto-complete share of their sum.
pub fn share_of_top_reached(scores: &ScoreMap, category: Category) -> bool {
    let leaders: Vec<f64> = scores
        .ranked()
        .into_iter()
        .take(SHARE_CANDIDATES)
        .map(|(_, s)| s)
        .filter(|s| *s > 0.0)
        .collect();
    let total: f64 = leaders.iter().sum();
    if leaders.is_empty() || total <= 0.0 {
        return false;
    }

    let threshold = category.auto_complete_share();
    leaders.iter().any(|s| s / total * 100.0 >= threshold)
}
