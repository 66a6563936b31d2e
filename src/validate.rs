//! Per-question validation gates.

use std::sync::OnceLock;

use regex::Regex;

use crate::answers::AnswerStore;
use crate::catalog::{QuestionDefinition, QuestionKind, Role};
use crate::config::WizardConfig;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Single-@, dotted-domain email shape.
fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

/// Whether the stored answer for `question` permits advancing.
///
/// A pure boolean gate: invalid input disables progression, it never
/// raises. Generic answers are trimmed before the emptiness check, so
/// whitespace-only input does not pass.
pub fn answer_is_valid(question: &QuestionDefinition, answers: &AnswerStore, config: &WizardConfig) -> bool {
    match question.kind {
        QuestionKind::Email => email_re().is_match(answers.text(question.id)),
        QuestionKind::Password => {
            answers.text(question.id).chars().count() >= config.password_min_len
        }
        QuestionKind::File => {
            // Buyers never reach the upload step, so it cannot block them.
            answers.role() != Some(Role::Sell) || answers.file(question.id).is_some()
        }
        QuestionKind::ShortText | QuestionKind::SingleSelect | QuestionKind::Telephone => {
            !answers.text(question.id).trim().is_empty()
        }
    }
}
