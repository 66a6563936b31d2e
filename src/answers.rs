//! Answer store — one entry per question id, total over the catalog.

use std::collections::HashMap;

use crate::catalog::{Role, ids};

/// A stored answer. File uploads live in the same store as text answers
/// so the one-entry-per-id invariant stays visible in the type instead of
/// splitting into two parallel stores.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    Text(String),
    File(FileUpload),
}

impl AnswerValue {
    /// The unanswered value every entry is seeded with.
    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    /// Text view of the answer; file answers read as empty.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::File(_) => "",
        }
    }
}

/// An uploaded file held in memory until submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Flat map from question id to the current answer.
///
/// Seeded with an empty entry for every catalog id. Writes enforce the
/// dependent-field rule: a changed `industry` clears `specific`, so a
/// stale specialization never outlives the option list it was picked from.
#[derive(Debug, Clone)]
pub struct AnswerStore {
    values: HashMap<&'static str, AnswerValue>,
}

impl Default for AnswerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerStore {
    pub fn new() -> Self {
        let values = ids::ALL.iter().map(|id| (*id, AnswerValue::empty())).collect();
        Self { values }
    }

    /// Current text for a question id; "" for unanswered or file answers.
    pub fn text(&self, id: &str) -> &str {
        self.values.get(id).map(AnswerValue::as_text).unwrap_or("")
    }

    /// The uploaded file for a question id, if one is attached.
    pub fn file(&self, id: &str) -> Option<&FileUpload> {
        match self.values.get(id) {
            Some(AnswerValue::File(f)) => Some(f),
            _ => None,
        }
    }

    /// Parsed role answer; `None` until the role question is answered.
    pub fn role(&self) -> Option<Role> {
        Role::parse(self.text(ids::ROLE))
    }

    pub fn industry(&self) -> &str {
        self.text(ids::INDUSTRY)
    }

    /// Store a text answer. Changing `industry` resets `specific`.
    pub fn set_text(&mut self, id: &'static str, value: impl Into<String>) {
        let value = value.into();
        if id == ids::INDUSTRY && self.text(ids::INDUSTRY) != value {
            self.values.insert(ids::SPECIFIC, AnswerValue::empty());
        }
        self.values.insert(id, AnswerValue::Text(value));
    }

    /// Attach a file to a question id.
    pub fn set_file(&mut self, id: &'static str, upload: FileUpload) {
        self.values.insert(id, AnswerValue::File(upload));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_with_every_catalog_id() {
        let store = AnswerStore::new();
        for id in ids::ALL {
            assert_eq!(store.text(id), "", "{id} should start empty");
        }
    }

    #[test]
    fn stored_text_reads_back_unchanged() {
        let mut store = AnswerStore::new();
        store.set_text(ids::NAME, "Asha");
        assert_eq!(store.text(ids::NAME), "Asha");

        // No silent coercion, whitespace included.
        store.set_text(ids::CITY, "  Dar es Salaam ");
        assert_eq!(store.text(ids::CITY), "  Dar es Salaam ");
    }

    #[test]
    fn industry_change_clears_specific() {
        let mut store = AnswerStore::new();
        store.set_text(ids::INDUSTRY, "Retail");
        store.set_text(ids::SPECIFIC, "Boutique");

        store.set_text(ids::INDUSTRY, "Agriculture");
        assert_eq!(store.text(ids::SPECIFIC), "");
        assert_eq!(store.industry(), "Agriculture");
    }

    #[test]
    fn rewriting_same_industry_keeps_specific() {
        let mut store = AnswerStore::new();
        store.set_text(ids::INDUSTRY, "Retail");
        store.set_text(ids::SPECIFIC, "Boutique");

        store.set_text(ids::INDUSTRY, "Retail");
        assert_eq!(store.text(ids::SPECIFIC), "Boutique");
    }

    #[test]
    fn file_answer_stored_in_same_map() {
        let mut store = AnswerStore::new();
        assert!(store.file(ids::IMAGE).is_none());

        store.set_file(
            ids::IMAGE,
            FileUpload {
                file_name: "shop.png".into(),
                content_type: "image/png".into(),
                bytes: vec![1, 2, 3],
            },
        );
        let upload = store.file(ids::IMAGE).unwrap();
        assert_eq!(upload.file_name, "shop.png");
        // The text view of a file answer is empty, not a path or name.
        assert_eq!(store.text(ids::IMAGE), "");
    }

    #[test]
    fn role_parses_from_stored_answer() {
        let mut store = AnswerStore::new();
        assert_eq!(store.role(), None);
        store.set_text(ids::ROLE, "Sell");
        assert_eq!(store.role(), Some(Role::Sell));
    }
}
