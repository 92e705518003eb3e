pub mod answer;
pub mod category;
pub mod prediction;
pub mod result;
pub mod score;

pub use answer::{AFFIRMATIVE_KEYWORD, AnswerSet, is_affirmative};
pub use category::Category;
pub use prediction::{ClassifierResult, Prediction, Urgency, normalize_label};
pub use result::{AnsweredQuestion, FinalResult, ResultEntry, display_name};
pub use score::ScoreMap;
