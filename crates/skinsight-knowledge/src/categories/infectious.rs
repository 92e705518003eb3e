use std::sync::LazyLock;

use skinsight_core::Category;

use crate::CategoryBank;
use crate::bank::{Condition, Question};

/// Bacterial, viral and fungal skin infections.
pub struct Infectious;

impl CategoryBank for Infectious {
    fn category(&self) -> Category {
        Category::Infectious
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            vec![
                Question::yes_no(1, "Does it look like a ring or circle on the skin?", 0),
                Question::yes_no(2, "Does it hurt or feel sore when you touch it?", 1),
                Question::yes_no(
                    3,
                    "Are there blisters, or a crust left where blisters burst?",
                    2,
                ),
                Question::yes_no(
                    4,
                    "Are there small, smooth, dome-shaped bumps with a dimple in the center?",
                    3,
                ),
                Question::yes_no(5, "Is the area warm, swollen, or spreading?", 4),
                Question::yes_no(6, "Does it feel itchy?", 5),
            ]
        });
        &QUESTIONS
    }

    fn conditions(&self) -> &[Condition] {
        static CONDITIONS: LazyLock<Vec<Condition>> = LazyLock::new(|| {
            vec![
                Condition::table("Boils", &[0, 1, 1, 0, 1, 1], &[2.0, 4.8, 2.0, 2.0, 5.7, 1.0]),
                Condition::table(
                    "Cellulitis",
                    &[0, 1, 0, 0, 1, 0],
                    &[2.0, 5.0, 2.0, 2.0, 7.5, 2.0],
                ),
                Condition::table(
                    "Folliculitis",
                    &[0, 0, 0, 0, 1, 1],
                    &[2.0, 2.0, 2.0, 2.0, 4.2, 3.7],
                ),
                Condition::table("Impetigo", &[0, 1, 1, 0, 0, 1], &[2.0, 3.7, 5.2, 2.0, 2.0, 2.7]),
                Condition::table(
                    "Cold_Sores",
                    &[0, 0, 1, 0, 1, 0],
                    &[2.0, 2.0, 6.3, 2.0, 4.2, 2.0],
                ),
                Condition::table(
                    "Molluscum_Contagiosum",
                    &[0, 0, 0, 1, 0, 0],
                    &[2.0, 2.0, 2.0, 7.2, 2.0, 2.0],
                ),
                Condition::table("Ringworm", &[1, 0, 0, 0, 0, 1], &[7.5, 2.0, 2.0, 2.0, 2.0, 4.8]),
            ]
        });
        &CONDITIONS
    }
}
