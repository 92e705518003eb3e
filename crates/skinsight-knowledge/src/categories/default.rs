use std::sync::LazyLock;

use skinsight_core::Category;

use crate::CategoryBank;
use crate::bank::{Condition, Question};

/// Fallback when the classifier label matches no category. Generic
/// questions, no conditions: questions are asked in order and no
/// condition is ranked.
pub struct DefaultBank;

impl CategoryBank for DefaultBank {
    fn category(&self) -> Category {
        Category::Default
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            vec![
                Question::yes_no(1, "Does it feel itchy?", 0),
                Question::yes_no(2, "Is it painful?", 1),
                Question::yes_no(3, "Is it changing?", 2),
            ]
        });
        &QUESTIONS
    }

    fn conditions(&self) -> &[Condition] {
        &[]
    }
}
