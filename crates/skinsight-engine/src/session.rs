//! One user's pass through the adaptive questionnaire.
//!
//! ```text
//! Idle ──start──▶ AwaitingAnswer ──answer──▶ AwaitingAnswer ─┐
//!                  ▲      │                                  │
//!                  └─previous                                │
//!                         └──answer / finish──▶ Completed ◀──┘
//! ```
//!
//! The session owns the answer set and is the only writer. Every answer
//! triggers a full rescore; nothing is carried over incrementally.

use std::fmt;

use serde::{Deserialize, Serialize};
use skinsight_core::{
    AnswerSet, AnsweredQuestion, Category, ClassifierResult, FinalResult, ScoreMap, Urgency,
};
use skinsight_knowledge::bank::Question;
use skinsight_knowledge::classifier::classify;
use skinsight_knowledge::{CategoryBank, get_bank};
use tracing::info;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::normalize::normalize;
use crate::scoring::score;
use crate::selector::select_next;
use crate::stop::should_stop;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    AwaitingAnswer,
    Completed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SessionState::Idle => "idle",
            SessionState::AwaitingAnswer => "awaiting an answer",
            SessionState::Completed => "completed",
        })
    }
}

/// What the UI should do next.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Step {
    Ask { question: Question },
    Complete { result: Box<FinalResult> },
}

pub struct Session {
    id: Uuid,
    bank: Box<dyn CategoryBank>,
    classifier: ClassifierResult,
    config: EngineConfig,
    answers: AnswerSet,
    /// Question ids in the order they were put to the user; the last one
    /// is the question currently being asked.
    history: Vec<u32>,
    state: SessionState,
    result: Option<FinalResult>,
}

impl Session {
    pub fn new(
        bank: Box<dyn CategoryBank>,
        classifier: ClassifierResult,
        config: EngineConfig,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            bank,
            classifier,
            config,
            answers: AnswerSet::new(),
            history: Vec::new(),
            state: SessionState::Idle,
            result: None,
        }
    }

    /// Resolve the category from the classifier's top label and use its
    /// built-in bank.
    pub fn from_classifier(classifier: ClassifierResult, config: EngineConfig) -> Self {
        let bank = get_bank(classify(classifier.top_label()));
        Self::new(bank, classifier, config)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn category(&self) -> Category {
        self.bank.category()
    }

    pub fn bank(&self) -> &dyn CategoryBank {
        self.bank.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn history(&self) -> &[u32] {
        &self.history
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::AwaitingAnswer => {
                self.history.last().and_then(|id| self.bank.question(*id))
            }
            _ => None,
        }
    }

    /// Scores for the answers given so far, at the selection floor.
    pub fn scores(&self) -> ScoreMap {
        score(&self.answers, self.bank.as_ref(), self.config.selection_params())
    }

    pub fn result(&self) -> Option<&FinalResult> {
        self.result.as_ref()
    }

    /// Pick the first question. Completes immediately for an empty bank.
    pub fn start(&mut self) -> Result<Step, EngineError> {
        self.expect_state(SessionState::Idle, "start")?;
        info!(
            session_id = %self.id,
            category = %self.category(),
            label = self.classifier.top_label(),
            questions = self.bank.questions().len(),
            "questionnaire session started"
        );
        Ok(self.advance())
    }

    /// Record the answer to the current question and move on.
    pub fn answer(&mut self, question_id: u32, answer: &str) -> Result<Step, EngineError> {
        self.expect_state(SessionState::AwaitingAnswer, "answer")?;
        let expected = self.history.last().copied().unwrap_or_default();
        if question_id != expected {
            return Err(EngineError::UnexpectedQuestion {
                expected,
                got: question_id,
            });
        }

        self.answers.insert(question_id, answer);

        if should_stop(&self.answers, self.bank.as_ref(), &self.config) {
            info!(
                session_id = %self.id,
                answered = self.answers.len(),
                "evidence conclusive, stopping early"
            );
            return Ok(Step::Complete {
                result: Box::new(self.complete()),
            });
        }
        Ok(self.advance())
    }

    /// Step back to the previous question, discarding the answer it received.
    pub fn previous(&mut self) -> Result<&Question, EngineError> {
        self.expect_state(SessionState::AwaitingAnswer, "go back")?;
        if self.history.len() < 2 {
            return Err(EngineError::NoPreviousQuestion);
        }

        self.history.pop();
        if let Some(id) = self.history.last().copied() {
            self.answers.remove(id);
        }
        self.current_question().ok_or(EngineError::NoPreviousQuestion)
    }

    /// End the questionnaire now with the answers given so far.
    pub fn finish(&mut self) -> Result<FinalResult, EngineError> {
        self.expect_state(SessionState::AwaitingAnswer, "finish")?;
        Ok(self.complete())
    }

    fn expect_state(
        &self,
        expected: SessionState,
        action: &'static str,
    ) -> Result<(), EngineError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(EngineError::InvalidTransition {
                action,
                state: self.state,
            })
        }
    }

    fn advance(&mut self) -> Step {
        let params = self.config.selection_params();
        let next = select_next(&self.answers, self.bank.as_ref(), params).cloned();
        match next {
            Some(question) => {
                self.history.push(question.id);
                self.state = SessionState::AwaitingAnswer;
                Step::Ask { question }
            }
            None => Step::Complete {
                result: Box::new(self.complete()),
            },
        }
    }

    fn complete(&mut self) -> FinalResult {
        let bank = self.bank.as_ref();
        let scores = score(&self.answers, bank, self.config.result_params());
        let normalized_results = normalize(&scores, self.config.top_k, bank);

        let answered = self
            .answers
            .iter()
            .map(|(question_id, answer)| AnsweredQuestion {
                question_id,
                question: bank
                    .question(question_id)
                    .map(|q| q.text.clone())
                    .unwrap_or_else(|| format!("Question {question_id}")),
                answer: answer.to_string(),
            })
            .collect();

        let result = FinalResult {
            session_id: self.id,
            category: bank.category(),
            classifier: self.classifier.clone(),
            urgency: Urgency::assess(&self.classifier),
            answers: self.answers.clone(),
            answered,
            scores,
            normalized_results,
            completed_at: jiff::Timestamp::now(),
        };

        info!(
            session_id = %self.id,
            category = %result.category,
            answered = self.answers.len(),
            leading = result
                .normalized_results
                .first()
                .map(|r| r.condition.as_str())
                .unwrap_or("none"),
            "questionnaire completed"
        );

        self.state = SessionState::Completed;
        self.result = Some(result.clone());
        result
    }
}
