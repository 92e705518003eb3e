//! Condition scoring.
//!
//! A score is a pure function of the answer set and the category bank:
//! every call starts from the initial score and replays all answers, so
//! there is no state to drift between calls. Answers are replayed in
//! question-bank order, which makes the result independent of the order
//! the answers were given in.

use skinsight_core::{AnswerSet, ScoreMap};
use skinsight_knowledge::CategoryBank;
use skinsight_knowledge::bank::{Condition, Question};

use crate::config::ScoringParams;

/// Score every condition in the bank against the answers given so far.
pub fn score(answers: &AnswerSet, bank: &dyn CategoryBank, params: ScoringParams) -> ScoreMap {
    bank.conditions()
        .iter()
        .map(|condition| {
            let total = raw_score(condition, answers, bank.questions(), params.initial_score);
            (condition.name(), params.floor.apply(total))
        })
        .collect()
}

/// Unclamped score for one condition.
pub fn raw_score(
    condition: &Condition,
    answers: &AnswerSet,
    questions: &[Question],
    initial_score: f64,
) -> f64 {
    questions
        .iter()
        .filter_map(|question| {
            let given = answers.value(question.id)?;
            evidence(condition, question.attribute_index, given)
        })
        .fold(initial_score, |total, delta| total + delta)
}

/// Score change for one observed trait, or `None` when the condition has
/// no weight at that position.
///
/// A contradiction costs the condition its average weight regardless of
/// which trait was contradicted. A confirmed absence earns the average
/// weight; a confirmed presence earns the trait's own weight.
pub fn evidence(condition: &Condition, attribute_index: usize, given: bool) -> Option<f64> {
    let weight = condition.weight(attribute_index)?;
    let expected = condition.expects(attribute_index).unwrap_or(false);

    let delta = if given != expected {
        -condition.average_weight()
    } else if given {
        weight
    } else {
        condition.average_weight()
    };
    Some(delta)
}
