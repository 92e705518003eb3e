//! Adaptive next-question selection.

use skinsight_core::{AnswerSet, ScoreMap, is_affirmative};
use skinsight_knowledge::CategoryBank;
use skinsight_knowledge::bank::Question;
use tracing::debug;

use crate::config::ScoringParams;
use crate::scoring::score;

const IMPORTANCE_WEIGHT: f64 = 0.6;
const INFORMATION_GAIN_WEIGHT: f64 = 0.4;
const VARIANCE_WEIGHT: f64 = 0.7;
const ELIMINATION_WEIGHT: f64 = 0.3;

/// How many leading conditions information gain looks at.
const LEADING_CANDIDATES: usize = 3;

/// An unanswered question with its selection score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedQuestion<'b> {
    pub question: &'b Question,
    pub score: f64,
}

/// How sharply a trait separates the category's conditions.
///
/// Blends the population variance of the weights at `attribute_index`
/// with the fraction of conditions that carry no weight there. Zero when
/// no condition defines a weight at that index.
pub fn importance(bank: &dyn CategoryBank, attribute_index: usize) -> f64 {
    let weights: Vec<f64> = bank
        .conditions()
        .iter()
        .filter_map(|c| c.weight(attribute_index))
        .collect();
    if weights.is_empty() {
        return 0.0;
    }

    let n = weights.len() as f64;
    let mean = weights.iter().sum::<f64>() / n;
    let variance = weights.iter().map(|w| (w - mean).powi(2)).sum::<f64>() / n;
    let elimination = weights.iter().filter(|w| **w <= 0.0).count() as f64 / n;

    VARIANCE_WEIGHT * variance + ELIMINATION_WEIGHT * elimination
}

/// How well a question splits the current leading candidates.
///
/// For each answer option, counts the top conditions whose expected trait
/// value equals that option's binary value, then normalizes by
/// `candidates × options`.
pub fn information_gain(question: &Question, bank: &dyn CategoryBank, scores: &ScoreMap) -> f64 {
    let leaders: Vec<_> = scores
        .ranked()
        .into_iter()
        .take(LEADING_CANDIDATES)
        .filter_map(|(name, _)| bank.condition(name))
        .collect();
    if leaders.is_empty() {
        return 0.0;
    }

    let matches: usize = question
        .options
        .iter()
        .map(|option| {
            let value = is_affirmative(option);
            leaders
                .iter()
                .filter(|c| c.expects(question.attribute_index) == Some(value))
                .count()
        })
        .sum();

    matches as f64 / (leaders.len() * question.options.len()) as f64
}

/// Score every unanswered question, in bank order.
pub fn rank_questions<'b>(
    answers: &AnswerSet,
    bank: &'b dyn CategoryBank,
    params: ScoringParams,
) -> Vec<RankedQuestion<'b>> {
    let scores = score(answers, bank, params);
    bank.questions()
        .iter()
        .filter(|q| !answers.contains(q.id))
        .map(|question| RankedQuestion {
            question,
            score: IMPORTANCE_WEIGHT * importance(bank, question.attribute_index)
                + INFORMATION_GAIN_WEIGHT * information_gain(question, bank, &scores),
        })
        .collect()
}

/// Pick the next question to ask, or `None` when every question has been
/// answered.
///
/// Without conditions there is nothing to adapt to, so the first
/// unanswered question in bank order is returned. Otherwise the highest
/// scoring question wins; ties go to the earliest in the bank.
pub fn select_next<'b>(
    answers: &AnswerSet,
    bank: &'b dyn CategoryBank,
    params: ScoringParams,
) -> Option<&'b Question> {
    if bank.conditions().is_empty() {
        return bank.questions().iter().find(|q| !answers.contains(q.id));
    }

    let mut best: Option<RankedQuestion<'b>> = None;
    for candidate in rank_questions(answers, bank, params) {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    if let Some(chosen) = &best {
        debug!(
            category = %bank.category(),
            question_id = chosen.question.id,
            score = chosen.score,
            answered = answers.len(),
            "selected next question"
        );
    }
    best.map(|b| b.question)
}
