//! One module per category. Condition weights share a 0–10 scale and
//! every vector has one entry per question in its category's bank.

pub mod autoimmune;
pub mod benign_growth;
pub mod default;
pub mod environmental;
pub mod infectious;
pub mod inflammatory;
pub mod pigmentary;
pub mod skin_cancer;

use crate::bank::Question;

/// The nine visual traits shared by the growth, pigment, cancer and
/// environmental banks.
pub(crate) fn visual_trait_questions() -> Vec<Question> {
    vec![
        Question::yes_no(1, "Does it feel itchy?", 0),
        Question::yes_no(2, "Does it hurt or feel sore when you touch it?", 1),
        Question::yes_no(3, "Does it look like a ring or circle on the skin?", 2),
        Question::yes_no(
            4,
            "Have you noticed the spot getting darker, bigger, or changing shape?",
            3,
        ),
        Question::yes_no(5, "Do you see small blisters filled with clear fluid?", 4),
        Question::yes_no(6, "Does the skin feel rough, scaly, or flaky?", 5),
        Question::yes_no(
            7,
            "Does the spot look uneven in shape or have more than one color?",
            6,
        ),
        Question::yes_no(8, "Does it look like a small bump that sticks up from the skin?", 7),
        Question::yes_no(
            9,
            "Does it look smooth and shiny, or as if it's sitting on top of the skin like a sticker?",
            8,
        ),
    ]
}
