//! Question sequencer — computes the effective question list from answers.

use crate::answers::AnswerStore;
use crate::catalog::{OptionSources, QuestionDefinition, Role, base_questions, final_questions, seller_questions};

/// The ordered questions the current user walks through.
///
/// Recomputed from scratch on every state change and never cached, so the
/// sequence cannot drift from the answers it was derived from. Buyers get
/// the base questions followed by the final block; sellers get the seller
/// block in between, with the specialization options resolved against the
/// current industry answer.
pub fn compute_sequence(answers: &AnswerStore, sources: &OptionSources) -> Vec<QuestionDefinition> {
    let mut sequence = base_questions();
    if answers.role() == Some(Role::Sell) {
        sequence.extend(seller_questions(sources, answers.industry()));
    }
    sequence.extend(final_questions(sources));
    sequence
}
