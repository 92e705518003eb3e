use std::sync::LazyLock;

use skinsight_core::Category;

use crate::CategoryBank;
use crate::bank::{Condition, Question};
use crate::categories::visual_trait_questions;

/// Reactions to plants, shaving, sun and climate.
pub struct Environmental;

impl CategoryBank for Environmental {
    fn category(&self) -> Category {
        Category::Environmental
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(visual_trait_questions);
        &QUESTIONS
    }

    fn conditions(&self) -> &[Condition] {
        static CONDITIONS: LazyLock<Vec<Condition>> = LazyLock::new(|| {
            vec![
                Condition::table(
                    "Poison_Ivy",
                    &[1, 1, 0, 1, 1, 1, 1, 1, 0],
                    &[9.0, 3.0, 0.0, 2.0, 6.0, 2.0, 3.0, 1.0, 0.0],
                ),
                Condition::table(
                    "Razor_Bumps",
                    &[1, 1, 0, 1, 1, 1, 1, 1, 0],
                    &[2.0, 4.0, 0.0, 1.0, 3.0, 1.0, 1.0, 8.0, 0.0],
                ),
                Condition::table(
                    "Dry_Skin",
                    &[1, 1, 0, 1, 0, 1, 1, 0, 0],
                    &[6.0, 1.0, 0.0, 1.0, 0.0, 9.0, 1.0, 0.0, 0.0],
                ),
                Condition::table(
                    "Hyperhidrosis",
                    &[1, 0, 0, 1, 0, 1, 1, 0, 0],
                    &[2.0, 0.0, 0.0, 1.0, 0.0, 3.0, 1.0, 0.0, 0.0],
                ),
                Condition::table(
                    "Sun_Damage",
                    &[1, 0, 0, 1, 0, 1, 1, 0, 1],
                    &[1.0, 0.0, 0.0, 3.0, 0.0, 2.0, 4.0, 0.0, 6.0],
                ),
            ]
        });
        &CONDITIONS
    }
}
