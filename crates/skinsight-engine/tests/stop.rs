use skinsight_core::{AnswerSet, Category, ScoreMap};
use skinsight_engine::stop::{score_gap_reached, share_of_top_reached};
use skinsight_engine::{EngineConfig, StopPolicy, should_stop};
use skinsight_knowledge::bank::{Condition, CustomBank, Question};
use skinsight_knowledge::{CategoryBank, get_bank};

fn decisive_bank() -> CustomBank {
    CustomBank::new(
        Category::Inflammatory,
        vec![
            Question::yes_no(1, "First", 0),
            Question::yes_no(2, "Second", 1),
            Question::yes_no(3, "Third", 2),
        ],
        vec![
            Condition::new("Strong", vec![true, false, false], vec![9.0, 1.0, 1.0]).unwrap(),
            Condition::new("Weak", vec![false, false, false], vec![1.0, 1.0, 1.0]).unwrap(),
        ],
    )
    .unwrap()
}

fn scores(entries: &[(&str, f64)]) -> ScoreMap {
    entries.iter().map(|(name, s)| (*name, *s)).collect()
}

#[test]
fn never_stops_before_the_minimum_number_of_answers() {
    let bank = decisive_bank();
    let answers: AnswerSet = [(1, "Yes")].into_iter().collect();

    // Strong 14 vs Weak 4 would satisfy the gap rule.
    assert!(!should_stop(&answers, &bank, &EngineConfig::default()));

    let eager = EngineConfig {
        stop: StopPolicy::ScoreGap {
            min_questions: 1,
            confidence_floor: 7.0,
            margin: 3.0,
        },
        ..EngineConfig::default()
    };
    assert!(should_stop(&answers, &bank, &eager));
}

#[test]
fn never_stops_with_fewer_than_two_conditions() {
    let bank = get_bank(Category::Default);
    let answers: AnswerSet = bank.questions().iter().map(|q| (q.id, "Yes")).collect();
    assert!(!should_stop(&answers, bank.as_ref(), &EngineConfig::default()));
}

#[test]
fn never_policy_asks_everything() {
    let bank = decisive_bank();
    let answers: AnswerSet = [(1, "Yes"), (2, "Not at all"), (3, "Not at all")]
        .into_iter()
        .collect();
    let config = EngineConfig {
        stop: StopPolicy::Never,
        ..EngineConfig::default()
    };
    assert!(!should_stop(&answers, &bank, &config));
}

#[test]
fn score_gap_needs_both_a_confident_leader_and_a_margin() {
    assert!(score_gap_reached(&scores(&[("A", 12.0), ("B", 8.0)]), 7.0, 3.0));
    // gap too small
    assert!(!score_gap_reached(&scores(&[("A", 12.0), ("B", 9.5)]), 7.0, 3.0));
    // leader not above the floor
    assert!(!score_gap_reached(&scores(&[("A", 6.0), ("B", -4.0)]), 7.0, 3.0));
    // ranking, not insertion order, decides the leader
    assert!(score_gap_reached(&scores(&[("B", 2.0), ("A", 11.0)]), 7.0, 3.0));
    assert!(!score_gap_reached(&scores(&[("A", 20.0)]), 7.0, 3.0));
}

#[test]
fn share_of_top_uses_the_category_threshold() {
    let leader = scores(&[("A", 9.0), ("B", 3.0), ("C", 3.0), ("D", 3.0)]);
    // A holds 50%: enough for INFLAMMATORY (45), not for SKIN_CANCER (60)
    assert!(share_of_top_reached(&leader, Category::Inflammatory));
    assert!(!share_of_top_reached(&leader, Category::SkinCancer));

    let even = scores(&[("A", 5.0), ("B", 5.0), ("C", 5.0), ("D", 5.0)]);
    assert!(!share_of_top_reached(&even, Category::Environmental));
}

#[test]
fn share_of_top_ignores_non_positive_scores() {
    let negatives = scores(&[("A", 5.0), ("B", 5.0), ("C", -10.0), ("D", 0.0)]);
    assert!(share_of_top_reached(&negatives, Category::Inflammatory));

    let nothing = scores(&[("A", -1.0), ("B", 0.0)]);
    assert!(!share_of_top_reached(&nothing, Category::Infectious));
    assert!(!share_of_top_reached(&ScoreMap::new(), Category::Infectious));
}

#[test]
fn share_of_top_policy_drives_should_stop() {
    let bank = decisive_bank();
    let answers: AnswerSet = [(1, "Yes")].into_iter().collect();
    let config = EngineConfig {
        stop: StopPolicy::ShareOfTop { min_questions: 1 },
        ..EngineConfig::default()
    };

    // Strong 14 of 18 is 78%
    assert!(should_stop(&answers, &bank, &config));
}
