//! Turn raw condition scores into the ranked percentages shown to the user.

use std::cmp::Reverse;

use skinsight_core::{ResultEntry, ScoreMap, display_name};
use skinsight_knowledge::CategoryBank;

/// Rank the top `top_k` conditions and express each as a whole-number
/// share of their combined score.
///
/// * Scores are clamped at zero first.
/// * Rows are ranked by score, then by specificity (fewer traits expected
///   absent first), then by declaration order. Display order never
///   changes after that.
/// * When the combined score is zero every entry gets 0%.
/// * Otherwise percentages sum to exactly 100: the rounding residue is
///   absorbed by the lowest-ranked entry with a positive score.
/// * Entries with a positive score then get strictly descending
///   percentages of at least 1%, staying as close to the rounded values
///   as the sum allows.
///
/// An empty score map yields an empty list.
pub fn normalize(scores: &ScoreMap, top_k: usize, bank: &dyn CategoryBank) -> Vec<ResultEntry> {
    let specificity = |name: &str| {
        bank.condition(name)
            .map(|c| c.zero_attribute_count())
            .unwrap_or(usize::MAX)
    };
    let mut ranked: Vec<(&str, f64)> = scores.iter().map(|(name, s)| (name, s.max(0.0))).collect();
    ranked.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then_with(|| specificity(a.0).cmp(&specificity(b.0)))
    });
    ranked.truncate(top_k);

    let total: f64 = ranked.iter().map(|(_, s)| s).sum();
    let mut percentages: Vec<i64> = if total > 0.0 {
        ranked
            .iter()
            .map(|(_, s)| (s / total * 100.0).round() as i64)
            .collect()
    } else {
        vec![0; ranked.len()]
    };

    let scored = ranked.iter().take_while(|(_, s)| *s > 0.0).count();
    separate(&mut percentages[..scored]);

    let category = bank.category();
    ranked
        .into_iter()
        .zip(percentages)
        .map(|((name, _), pct)| ResultEntry {
            condition: name.to_string(),
            display_name: display_name(name),
            percentage: pct.clamp(0, 100) as u32,
            category,
            display_threshold: category.display_threshold(),
        })
        .collect()
}

/// Fix up the rounded percentages of positively scored rows, in rank order.
///
/// The last row takes `100 - sum(others)`. The rows are then fitted to
/// the closest strictly descending sequence with the same sum and a
/// minimum of 1. Subtracting a staircase (`n-1, …, 1, 0`) turns
/// "strictly descending" into "non-increasing", which a pool-adjacent
/// pass solves. With too many rows for a 1-point staircase under 100
/// the rows are only made non-increasing.
fn separate(percentages: &mut [i64]) {
    let Some((last, rest)) = percentages.split_last_mut() else {
        return;
    };
    *last = 100 - rest.iter().sum::<i64>();

    let n = percentages.len() as i64;
    let (step, floor) = if n * (n + 1) / 2 <= 100 { (1, 1) } else { (0, 0) };
    let stair = |i: usize| step * (n - 1 - i as i64);

    let mut levels: Vec<i64> = percentages
        .iter()
        .enumerate()
        .map(|(i, p)| p - stair(i))
        .collect();
    raise_to_floor(&mut levels, floor);
    let fitted = non_increasing_fit(&levels);

    for (i, (pct, level)) in percentages.iter_mut().zip(fitted).enumerate() {
        *pct = level + stair(i);
    }
}

/// Lift every value to at least `floor`, paying for it one point at a
/// time from the current largest value (first one on ties).
fn raise_to_floor(values: &mut [i64], floor: i64) {
    let mut deficit = 0;
    for value in values.iter_mut() {
        if *value < floor {
            deficit += floor - *value;
            *value = floor;
        }
    }
    while deficit > 0 {
        let Some(i) = (0..values.len()).max_by_key(|&i| (values[i], Reverse(i))) else {
            return;
        };
        if values[i] <= floor {
            return;
        }
        values[i] -= 1;
        deficit -= 1;
    }
}

/// Closest non-increasing integer sequence with the same sum.
///
/// Adjacent blocks are pooled while a block's mean is below the next
/// one's. Each value then takes the floor of its block mean, and the
/// leftover points go to the largest fractional parts, earliest first.
fn non_increasing_fit(values: &[i64]) -> Vec<i64> {
    // (sum, len)
    let mut blocks: Vec<(i64, i64)> = Vec::with_capacity(values.len());
    for &value in values {
        let mut block = (value, 1);
        while let Some(&(sum, len)) = blocks.last() {
            if sum * block.1 >= block.0 * len {
                break;
            }
            blocks.pop();
            block = (sum + block.0, len + block.1);
        }
        blocks.push(block);
    }

    let mut fitted = Vec::with_capacity(values.len());
    // (remainder, block len, position)
    let mut fractions = Vec::with_capacity(values.len());
    for &(sum, len) in &blocks {
        for _ in 0..len {
            fractions.push((sum.rem_euclid(len), len, fitted.len()));
            fitted.push(sum.div_euclid(len));
        }
    }

    let leftover = values.iter().sum::<i64>() - fitted.iter().sum::<i64>();
    fractions.sort_by(|a, b| (b.0 * a.1).cmp(&(a.0 * b.1)).then(a.2.cmp(&b.2)));
    for &(_, _, i) in fractions.iter().take(leftover.max(0) as usize) {
        fitted[i] += 1;
    }
    fitted
}
