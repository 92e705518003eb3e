use std::sync::LazyLock;

use skinsight_core::Category;

use crate::CategoryBank;
use crate::bank::{Condition, Question};
use crate::categories::visual_trait_questions;

pub struct Pigmentary;

impl CategoryBank for Pigmentary {
    fn category(&self) -> Category {
        Category::Pigmentary
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(visual_trait_questions);
        &QUESTIONS
    }

    fn conditions(&self) -> &[Condition] {
        static CONDITIONS: LazyLock<Vec<Condition>> = LazyLock::new(|| {
            vec![
                Condition::table(
                    "Age_Spots",
                    &[0, 0, 0, 1, 0, 0, 1, 0, 1],
                    &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 8.0],
                ),
                Condition::table(
                    "Dyschromia",
                    &[0, 0, 0, 1, 0, 0, 1, 0, 1],
                    &[0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 7.0, 0.0, 6.0],
                ),
                Condition::table(
                    "Melasma",
                    &[0, 0, 0, 1, 0, 0, 1, 0, 1],
                    &[0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 5.0, 0.0, 7.0],
                ),
                Condition::table(
                    "Hyperpigmentation",
                    &[0, 0, 0, 1, 0, 0, 1, 0, 1],
                    &[0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 6.0, 0.0, 5.0],
                ),
                Condition::table(
                    "Varicose_Veins",
                    &[1, 1, 0, 1, 0, 0, 1, 0, 1],
                    &[3.0, 4.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 3.0],
                ),
            ]
        });
        &CONDITIONS
    }
}
