use std::sync::LazyLock;

use skinsight_core::Category;

use crate::CategoryBank;
use crate::bank::{Condition, Question};

/// Acne, dermatitis and psoriasis family.
pub struct Inflammatory;

impl CategoryBank for Inflammatory {
    fn category(&self) -> Category {
        Category::Inflammatory
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            vec![
                Question::yes_no(
                    1,
                    "Did it start as small red spots, pimples, or plugged pores?",
                    0,
                ),
                Question::yes_no(2, "Does it feel itchy?", 1),
                Question::yes_no(
                    3,
                    "Is it where clothing, jewelry, hair, or a new product touches the skin?",
                    2,
                ),
                Question::yes_no(4, "Are there raised bumps on the skin?", 3),
                Question::yes_no(5, "Does the skin feel rough, scaly, or flaky?", 4),
                Question::yes_no(6, "Does it hurt or feel sore when you touch it?", 5),
            ]
        });
        &QUESTIONS
    }

    fn conditions(&self) -> &[Condition] {
        static CONDITIONS: LazyLock<Vec<Condition>> = LazyLock::new(|| {
            vec![
                Condition::table("Acne", &[1, 0, 0, 1, 0, 1], &[4.8, 2.0, 2.0, 3.8, 2.0, 3.2]),
                Condition::table(
                    "Acne_Keloidalis_Nuchae",
                    &[1, 1, 1, 1, 0, 0],
                    &[2.8, 1.2, 3.8, 4.2, 2.0, 2.0],
                ),
                Condition::table(
                    "Atopic_Dermatitis",
                    &[0, 1, 1, 1, 1, 1],
                    &[2.0, 5.2, 2.8, 2.2, 4.2, 2.8],
                ),
                Condition::table(
                    "Contact_Dermatitis",
                    &[1, 1, 1, 1, 1, 1],
                    &[2.8, 3.5, 3.2, 2.2, 2.8, 3.5],
                ),
                Condition::table(
                    "Seborrheic_Dermatitis",
                    &[0, 1, 0, 1, 1, 0],
                    &[2.0, 3.2, 2.0, 1.8, 5.2, 2.0],
                ),
                Condition::table("Psoriasis", &[1, 1, 0, 1, 1, 0], &[2.2, 2.8, 2.0, 2.8, 5.5, 2.0]),
            ]
        });
        &CONDITIONS
    }
}
