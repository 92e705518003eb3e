use std::sync::LazyLock;

use skinsight_core::Category;

use crate::CategoryBank;
use crate::bank::{Condition, Question};
use crate::categories::visual_trait_questions;

/// Non-cancerous lumps, cysts and scars.
pub struct BenignGrowth;

impl CategoryBank for BenignGrowth {
    fn category(&self) -> Category {
        Category::BenignGrowth
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(visual_trait_questions);
        &QUESTIONS
    }

    fn conditions(&self) -> &[Condition] {
        static CONDITIONS: LazyLock<Vec<Condition>> = LazyLock::new(|| {
            vec![
                Condition::table(
                    "Dermatofibroma",
                    &[1, 1, 0, 1, 0, 0, 1, 1, 1],
                    &[1.0, 2.0, 0.0, 1.0, 0.0, 0.0, 3.0, 9.0, 3.0],
                ),
                Condition::table(
                    "Digital_Mucous_Cyst",
                    &[0, 1, 0, 1, 0, 0, 1, 1, 1],
                    &[0.0, 3.0, 0.0, 1.0, 0.0, 0.0, 2.0, 8.0, 5.0],
                ),
                Condition::table(
                    "Cyst",
                    &[0, 1, 0, 1, 0, 0, 1, 1, 1],
                    &[0.0, 4.0, 0.0, 2.0, 0.0, 0.0, 2.0, 9.0, 2.0],
                ),
                Condition::table(
                    "Lipoma",
                    &[0, 1, 0, 1, 0, 0, 1, 1, 1],
                    &[0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 8.0, 4.0],
                ),
                Condition::table(
                    "Keloids",
                    &[1, 1, 0, 1, 0, 0, 1, 1, 1],
                    &[2.0, 3.0, 0.0, 2.0, 0.0, 0.0, 3.0, 9.0, 1.0],
                ),
            ]
        });
        &CONDITIONS
    }
}
