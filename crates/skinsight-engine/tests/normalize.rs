use pretty_assertions::assert_eq;
use skinsight_core::{Category, ScoreMap};
use skinsight_engine::normalize;
use skinsight_knowledge::bank::{Condition, CustomBank, Question};
use skinsight_knowledge::get_bank;

fn scores(entries: &[(&str, f64)]) -> ScoreMap {
    entries.iter().map(|(name, s)| (*name, *s)).collect()
}

fn percentages(scores: &ScoreMap, top_k: usize) -> Vec<(String, u32)> {
    let bank = get_bank(Category::Default);
    normalize(scores, top_k, bank.as_ref())
        .into_iter()
        .map(|r| (r.condition, r.percentage))
        .collect()
}

fn pairs(expected: &[(&str, u32)]) -> Vec<(String, u32)> {
    expected.iter().map(|(n, p)| (n.to_string(), *p)).collect()
}

#[test]
fn tied_leaders_are_separated_and_the_sum_is_100() {
    let input = scores(&[("A", 30.0), ("B", 30.0), ("C", 20.0), ("D", 10.0)]);
    let result = percentages(&input, 4);

    assert_eq!(result, pairs(&[("A", 34), ("B", 32), ("C", 22), ("D", 12)]));
    assert_eq!(result.iter().map(|(_, p)| p).sum::<u32>(), 100);
}

#[test]
fn more_specific_condition_wins_the_tie() {
    let questions = (1..=4).map(|id| Question::yes_no(id, "q", id as usize - 1)).collect();
    let condition = |name: &str, attributes: [bool; 4]| {
        Condition::new(name, attributes.to_vec(), vec![1.0; 4]).unwrap()
    };
    let bank = CustomBank::new(
        Category::Inflammatory,
        questions,
        vec![
            condition("A", [true, false, false, false]),
            condition("B", [true, true, true, false]),
            condition("C", [true, true, false, false]),
            condition("D", [true, false, false, false]),
        ],
    )
    .unwrap();

    let input = scores(&[("A", 30.0), ("B", 30.0), ("C", 20.0), ("D", 10.0)]);
    let result: Vec<(String, u32)> = normalize(&input, 4, &bank)
        .into_iter()
        .map(|r| (r.condition, r.percentage))
        .collect();

    assert_eq!(result, pairs(&[("B", 34), ("A", 32), ("C", 22), ("D", 12)]));
}

#[test]
fn empty_scores_give_no_results() {
    assert!(percentages(&ScoreMap::new(), 4).is_empty());
}

#[test]
fn zero_total_gives_zero_percentages() {
    let input = scores(&[("A", 0.0), ("B", -3.0)]);
    assert_eq!(percentages(&input, 4), pairs(&[("A", 0), ("B", 0)]));
}

#[test]
fn negative_scores_are_clamped_before_sharing() {
    let input = scores(&[("A", 15.0), ("B", 5.0), ("C", -5.0)]);
    assert_eq!(percentages(&input, 4), pairs(&[("A", 75), ("B", 25), ("C", 0)]));
}

#[test]
fn only_the_top_k_are_kept() {
    let input = scores(&[("A", 1.0), ("B", 6.0), ("C", 3.0), ("D", 2.0), ("E", 5.0)]);
    let result = percentages(&input, 2);

    // 6 / 11 and 5 / 11
    assert_eq!(result, pairs(&[("B", 55), ("E", 45)]));
}

#[test]
fn overshooting_rounding_is_taken_from_the_last_scored_entry() {
    // 43.75 → 44, 37.5 → 38, 18.75 → 19 would sum to 101.
    let input = scores(&[("A", 7.0), ("B", 6.0), ("C", 3.0), ("D", 0.0)]);
    assert_eq!(
        percentages(&input, 4),
        pairs(&[("A", 44), ("B", 38), ("C", 18), ("D", 0)])
    );
}

#[test]
fn residue_never_lifts_a_lower_rank_above_the_leader() {
    // 33 + 33 + 34 before separation.
    let input = scores(&[("A", 1.0), ("B", 1.0), ("C", 1.0)]);
    let result = percentages(&input, 4);

    assert_eq!(result, pairs(&[("A", 35), ("B", 33), ("C", 32)]));
}

#[test]
fn separating_a_tie_pushes_into_its_neighbours() {
    let input = scores(&[("A", 26.0), ("B", 25.0), ("C", 25.0), ("D", 24.0)]);
    let result = percentages(&input, 4);

    assert_eq!(result, pairs(&[("A", 27), ("B", 26), ("C", 24), ("D", 23)]));
}

#[test]
fn scored_conditions_never_show_zero() {
    let input = scores(&[("A", 98.0), ("B", 1.0), ("C", 1.0)]);
    let result = percentages(&input, 4);

    assert_eq!(result, pairs(&[("A", 97), ("B", 2), ("C", 1)]));
}

#[test]
fn zero_score_rows_take_no_residue() {
    // 33 + 33 + 33 leaves 1 point over; D has nothing to show.
    let input = scores(&[("A", 1.0), ("B", 1.0), ("C", 1.0), ("D", -2.0)]);
    let result = percentages(&input, 4);

    assert_eq!(result[3], ("D".to_string(), 0));
    assert_eq!(result.iter().map(|(_, p)| p).sum::<u32>(), 100);
}

#[test]
fn entries_carry_display_metadata() {
    let bank = get_bank(Category::SkinCancer);
    let input = scores(&[("Basal_Cell_Cancer", 8.0), ("Melanoma", 2.0)]);
    let result = normalize(&input, 4, bank.as_ref());

    assert_eq!(result[0].display_name, "Basal Cell Cancer");
    assert_eq!(result[0].category, Category::SkinCancer);
    assert_eq!(result[0].display_threshold, 10);
    assert_eq!(result[0].percentage, 80);
    assert_eq!(result[1].percentage, 20);
}
