//! Wizard session — index tracking, answer mutation, review transition.

use std::sync::Arc;

use crate::answers::{AnswerStore, FileUpload};
use crate::catalog::{OptionSources, QuestionDefinition, QuestionKind, ids};
use crate::config::WizardConfig;
use crate::error::SubmitError;
use crate::sequence::compute_sequence;
use crate::validate::answer_is_valid;

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Presenting the question at this index of the effective sequence.
    Question(usize),
    /// Terminal review screen; every question has been answered.
    Review,
}

/// Outcome of the single side-effecting submission call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

/// One registration attempt.
///
/// Created fresh per attempt, owned by a single event context, never
/// persisted. The effective sequence is recomputed from the answers on
/// every access rather than stored.
pub struct WizardSession {
    answers: AnswerStore,
    sources: Arc<OptionSources>,
    config: WizardConfig,
    current_index: usize,
    complete: bool,
    submission: SubmissionState,
}

impl WizardSession {
    pub fn new(sources: Arc<OptionSources>, config: WizardConfig) -> Self {
        Self {
            answers: AnswerStore::new(),
            sources,
            config,
            current_index: 0,
            complete: false,
            submission: SubmissionState::Idle,
        }
    }

    /// The effective question sequence for the current answers.
    pub fn sequence(&self) -> Vec<QuestionDefinition> {
        compute_sequence(&self.answers, &self.sources)
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn sources(&self) -> &OptionSources {
        &self.sources
    }

    pub fn step(&self) -> Step {
        if self.complete {
            Step::Review
        } else {
            Step::Question(self.current_index)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// The question currently presented.
    pub fn current_question(&self) -> QuestionDefinition {
        let sequence = self.sequence();
        let index = self.current_index.min(sequence.len() - 1);
        sequence[index].clone()
    }

    /// Answer the currently presented question with text.
    ///
    /// Only the current question is writable. A role change swaps the
    /// branch under the user, so the index snaps back to the role question
    /// and the walk continues down the new branch from there.
    pub fn answer_text(&mut self, value: impl Into<String>) {
        let question = self.current_question();
        let value = value.into();
        let role_changed = question.id == ids::ROLE && self.answers.text(ids::ROLE) != value;
        self.answers.set_text(question.id, value);
        if role_changed {
            self.current_index = self
                .sequence()
                .iter()
                .position(|q| q.id == ids::ROLE)
                .unwrap_or(0);
        }
        self.clamp_index();
    }

    /// Attach a file to the current question. Ignored unless the current
    /// question is a file upload.
    pub fn attach_file(&mut self, upload: FileUpload) {
        let question = self.current_question();
        if question.kind == QuestionKind::File {
            self.answers.set_file(question.id, upload);
        }
    }

    /// Whether the current answer passes its validation gate.
    pub fn can_advance(&self) -> bool {
        answer_is_valid(&self.current_question(), &self.answers, &self.config)
    }

    /// Advance past the current question. Invalid answers hold position;
    /// the last question transitions to Review instead of overflowing.
    pub fn advance(&mut self) -> Step {
        if self.complete || !self.can_advance() {
            return self.step();
        }
        let len = self.sequence().len();
        if self.current_index < len - 1 {
            self.current_index += 1;
        } else {
            self.complete = true;
        }
        self.step()
    }

    /// Step back one question; from Review, back to the last question.
    pub fn back(&mut self) -> Step {
        if self.complete {
            self.complete = false;
        } else {
            self.current_index = self.current_index.saturating_sub(1);
        }
        self.step()
    }

    /// One-based position and total, for a progress display.
    pub fn progress(&self) -> (usize, usize) {
        let len = self.sequence().len();
        (self.current_index.min(len - 1) + 1, len)
    }

    /// Mark a submission in flight. Refuses while one is already pending.
    pub fn begin_submission(&mut self) -> Result<(), SubmitError> {
        if self.submission == SubmissionState::Pending {
            return Err(SubmitError::AlreadyPending);
        }
        self.submission = SubmissionState::Pending;
        Ok(())
    }

    /// Record the submission outcome. Answers are kept either way so a
    /// failed attempt can be retried without re-entry.
    pub fn finish_submission(&mut self, outcome: Result<(), String>) {
        self.submission = match outcome {
            Ok(()) => SubmissionState::Succeeded,
            Err(message) => SubmissionState::Failed(message),
        };
    }

    fn clamp_index(&mut self) {
        let len = self.sequence().len();
        if self.current_index >= len {
            self.current_index = len - 1;
        }
    }
}
