//! Properties that must hold for any answers and any scores.

use proptest::prelude::*;
use skinsight_core::{AnswerSet, Category, ScoreMap};
use skinsight_engine::config::{SELECTION_FLOOR, ScoringParams};
use skinsight_engine::{normalize, score, select_next};
use skinsight_knowledge::{CategoryBank, get_bank};

const ADAPTIVE: [Category; 7] = [
    Category::Inflammatory,
    Category::Infectious,
    Category::Autoimmune,
    Category::BenignGrowth,
    Category::Pigmentary,
    Category::SkinCancer,
    Category::Environmental,
];

fn category() -> impl Strategy<Value = Category> {
    (0..ADAPTIVE.len()).prop_map(|i| ADAPTIVE[i])
}

/// One optional yes/no answer per question slot (up to nine).
fn answer_pattern() -> impl Strategy<Value = Vec<Option<bool>>> {
    prop::collection::vec(prop::option::of(any::<bool>()), 9)
}

fn answers_for(bank: &dyn CategoryBank, pattern: &[Option<bool>]) -> Vec<(u32, &'static str)> {
    bank.questions()
        .iter()
        .zip(pattern)
        .filter_map(|(q, given)| given.map(|yes| (q.id, if yes { "Yes" } else { "Not at all" })))
        .collect()
}

fn score_map() -> impl Strategy<Value = ScoreMap> {
    prop::collection::vec(-20.0f64..40.0, 0..8).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, s)| (format!("Condition_{i}"), s))
            .collect()
    })
}

proptest! {
    #[test]
    fn scoring_is_deterministic(category in category(), pattern in answer_pattern()) {
        let bank = get_bank(category);
        let answers: AnswerSet = answers_for(bank.as_ref(), &pattern).into_iter().collect();

        let first = score(&answers, bank.as_ref(), ScoringParams::default());
        let second = score(&answers, bank.as_ref(), ScoringParams::default());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn answer_order_does_not_matter(category in category(), pattern in answer_pattern()) {
        let bank = get_bank(category);
        let given = answers_for(bank.as_ref(), &pattern);
        let forward: AnswerSet = given.iter().copied().collect();
        let backward: AnswerSet = given.iter().rev().copied().collect();

        prop_assert_eq!(
            score(&forward, bank.as_ref(), ScoringParams::default()),
            score(&backward, bank.as_ref(), ScoringParams::default())
        );
    }

    #[test]
    fn scores_respect_the_selection_floor(category in category(), pattern in answer_pattern()) {
        let bank = get_bank(category);
        let answers: AnswerSet = answers_for(bank.as_ref(), &pattern).into_iter().collect();

        for (_, s) in score(&answers, bank.as_ref(), ScoringParams::default()).iter() {
            prop_assert!(s >= SELECTION_FLOOR);
        }
    }

    #[test]
    fn selection_only_offers_unanswered_questions(
        category in category(),
        pattern in answer_pattern(),
    ) {
        let bank = get_bank(category);
        let answers: AnswerSet = answers_for(bank.as_ref(), &pattern).into_iter().collect();

        match select_next(&answers, bank.as_ref(), ScoringParams::default()) {
            Some(q) => {
                prop_assert!(!answers.contains(q.id));
            }
            None => {
                prop_assert_eq!(answers.len(), bank.questions().len());
            }
        }
    }

    #[test]
    fn percentages_are_bounded_distinct_and_sum_to_100(scores in score_map(), top_k in 1usize..6) {
        let bank = get_bank(Category::Default);
        let results = normalize(&scores, top_k, bank.as_ref());

        prop_assert_eq!(results.len(), scores.len().min(top_k));
        prop_assert!(results.iter().all(|r| r.percentage <= 100));
        prop_assert!(results.windows(2).all(|w| w[0].percentage >= w[1].percentage));

        let scored: Vec<u32> = results
            .iter()
            .filter(|r| scores.get(&r.condition).is_some_and(|s| s > 0.0))
            .map(|r| r.percentage)
            .collect();
        prop_assert!(scored.iter().all(|p| *p >= 1));
        prop_assert!(scored.windows(2).all(|w| w[0] > w[1]));

        let any_positive = scores.iter().any(|(_, s)| s > 0.0);
        let sum: u32 = results.iter().map(|r| r.percentage).sum();
        if any_positive {
            prop_assert_eq!(sum, 100);
        } else {
            prop_assert_eq!(sum, 0);
        }
    }
}
