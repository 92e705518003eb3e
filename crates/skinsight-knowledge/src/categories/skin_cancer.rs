use std::sync::LazyLock;

use skinsight_core::Category;

use crate::CategoryBank;
use crate::bank::{Condition, Question};
use crate::categories::visual_trait_questions;

/// Malignant and pre-malignant lesions. All four share one attribute
/// profile; only the weights separate them.
pub struct SkinCancer;

impl CategoryBank for SkinCancer {
    fn category(&self) -> Category {
        Category::SkinCancer
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(visual_trait_questions);
        &QUESTIONS
    }

    fn conditions(&self) -> &[Condition] {
        static CONDITIONS: LazyLock<Vec<Condition>> = LazyLock::new(|| {
            let profile: [u8; 9] = [1, 1, 0, 1, 0, 1, 1, 1, 1];
            vec![
                Condition::table(
                    "Actinic_Keratosis",
                    &profile,
                    &[2.0, 1.0, 0.0, 6.0, 0.0, 8.0, 4.0, 3.0, 2.0],
                ),
                Condition::table(
                    "Basal_Cell_Cancer",
                    &profile,
                    &[1.0, 2.0, 0.0, 7.0, 0.0, 3.0, 5.0, 4.0, 3.0],
                ),
                Condition::table(
                    "Squamous_Cell_Cancer",
                    &profile,
                    &[2.0, 3.0, 0.0, 8.0, 0.0, 4.0, 6.0, 3.0, 2.0],
                ),
                Condition::table(
                    "Melanoma",
                    &profile,
                    &[1.0, 1.0, 0.0, 9.0, 0.0, 2.0, 9.0, 2.0, 1.0],
                ),
            ]
        });
        &CONDITIONS
    }
}
