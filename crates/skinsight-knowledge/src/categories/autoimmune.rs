use std::sync::LazyLock;

use skinsight_core::Category;

use crate::CategoryBank;
use crate::bank::{Condition, Question};

pub struct Autoimmune;

impl CategoryBank for Autoimmune {
    fn category(&self) -> Category {
        Category::Autoimmune
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            vec![
                Question::yes_no(1, "Are there white patches where the skin has lost color?", 0),
                Question::yes_no(2, "Does the skin feel rough, scaly, or thickened?", 1),
                Question::yes_no(3, "Does the spot have uneven borders or multiple colors?", 2),
                Question::yes_no(4, "Is it getting bigger, spreading, or changing shape?", 3),
                Question::yes_no(5, "Is the area itchy or causing discomfort?", 4),
                Question::yes_no(6, "Does it feel painful or tender?", 5),
            ]
        });
        &QUESTIONS
    }

    fn conditions(&self) -> &[Condition] {
        static CONDITIONS: LazyLock<Vec<Condition>> = LazyLock::new(|| {
            vec![
                Condition::table("Vitiligo", &[1, 0, 0, 1, 0, 0], &[3.5, 2.0, 2.0, 1.2, 2.0, 2.0]),
                Condition::table("Lupus", &[0, 1, 1, 0, 1, 1], &[1.5, 3.5, 3.2, 1.5, 2.8, 2.5]),
                Condition::table(
                    "Drug_Induced_Pigmentation",
                    &[0, 0, 1, 1, 1, 0],
                    &[2.0, 2.0, 2.8, 2.5, 1.2, 2.0],
                ),
                Condition::table(
                    "Lichen_Related_Diseases",
                    &[0, 1, 1, 1, 1, 1],
                    &[2.0, 3.0, 2.2, 1.5, 2.5, 1.8],
                ),
            ]
        });
        &CONDITIONS
    }
}
