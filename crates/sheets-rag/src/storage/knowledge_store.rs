//! In-memory document store with insert-or-replace semantics

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};
use crate::ingestion::SAMPLE_SOURCES;
use crate::types::document::{ORIGIN_MANUAL, ORIGIN_SAMPLE};
use crate::types::{Document, NewDocument};

/// Ordered document list, most recent first for new ids
///
/// Every mutation happens inside one write-lock section, so readers never see a
/// half-applied upsert.
pub struct KnowledgeStore {
    documents: RwLock<Vec<Document>>,
    /// Shared by manual and sample ids
    id_seq: AtomicU64,
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            id_seq: AtomicU64::new(0),
        }
    }

    /// Insert a new document at the front, or replace the existing one in place
    pub fn upsert(&self, new: NewDocument) -> Document {
        let document = Document::from_new(new);
        let mut documents = self.documents.write();

        match documents.iter().position(|d| d.id == document.id) {
            Some(index) => {
                tracing::debug!("Replacing document {} at position {}", document.id, index);
                documents[index] = document.clone();
            }
            None => {
                tracing::debug!("Adding document {}", document.id);
                documents.insert(0, document.clone());
            }
        }

        document
    }

    /// Snapshot of every document in store order
    pub fn list(&self) -> Vec<Document> {
        self.documents.read().clone()
    }

    pub fn get(&self, id: &str) -> Option<Document> {
        self.documents.read().iter().find(|d| d.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    /// Next id for the given prefix, e.g. `manual-3`
    pub fn next_id(&self, prefix: &str) -> String {
        let seq = self.id_seq.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", prefix, seq)
    }

    /// Add text pasted in by hand
    ///
    /// Blank content is rejected. A blank title becomes `Custom source <n>` where
    /// `n` is the store size after the insert.
    pub fn add_manual(&self, title: Option<&str>, content: &str) -> Result<Document> {
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::invalid_input("Please paste some content"));
        }

        let title = match title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(title) => title.to_string(),
            None => format!("Custom source {}", self.len() + 1),
        };

        let document = self.upsert(NewDocument::new(
            self.next_id("manual"),
            title,
            content,
            ORIGIN_MANUAL,
        ));
        tracing::info!("Added manual source {} ({} chars)", document.id, document.word_count);
        Ok(document)
    }

    /// Upsert the built-in samples, returning them in load order
    pub fn load_samples(&self) -> Vec<Document> {
        SAMPLE_SOURCES
            .iter()
            .map(|sample| {
                self.upsert(NewDocument::new(
                    self.next_id("sample"),
                    sample.title,
                    sample.content,
                    ORIGIN_SAMPLE,
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn doc(id: &str, content: &str) -> NewDocument {
        NewDocument::new(id, format!("title {}", id), content, "test")
    }

    fn ids(store: &KnowledgeStore) -> Vec<String> {
        store.list().into_iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_new_ids_go_first() {
        let store = KnowledgeStore::new();
        store.upsert(doc("a", "one"));
        store.upsert(doc("b", "two"));
        store.upsert(doc("c", "three"));

        assert_eq!(ids(&store), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_existing_id_replaced_in_place() {
        let store = KnowledgeStore::new();
        store.upsert(doc("a", "one"));
        store.upsert(doc("b", "two"));
        store.upsert(doc("c", "three"));

        let replaced = store.upsert(doc("b", "new content here"));

        assert_eq!(ids(&store), vec!["c", "b", "a"]);
        assert_eq!(store.get("b").unwrap().content, "new content here");
        assert_eq!(replaced.word_count, 14);
    }

    #[test]
    fn test_manual_source_defaults() {
        let store = KnowledgeStore::new();
        store.upsert(doc("x", "existing"));

        let added = store.add_manual(Some("   "), "  some text  ").unwrap();
        assert_eq!(added.title, "Custom source 2");
        assert_eq!(added.content, "some text");
        assert_eq!(added.origin_label, ORIGIN_MANUAL);
        assert!(added.id.starts_with("manual-"));

        let titled = store.add_manual(Some("Notes"), "more").unwrap();
        assert_eq!(titled.title, "Notes");
        assert_ne!(titled.id, added.id);
    }

    #[test]
    fn test_manual_source_requires_content() {
        let store = KnowledgeStore::new();
        let err = store.add_manual(None, " \n\t ").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_samples_load_with_fresh_ids() {
        let store = KnowledgeStore::new();
        let first = store.load_samples();
        let second = store.load_samples();

        assert_eq!(first.len(), 2);
        assert_eq!(store.len(), 4);
        assert!(first.iter().all(|d| d.origin_label == ORIGIN_SAMPLE));
        assert_ne!(first[0].id, second[0].id);
        // Last sample loaded sits at the front
        assert_eq!(store.list()[0].id, second[1].id);
    }

    proptest! {
        #[test]
        fn prop_upsert_size_and_position(
            existing in prop::collection::vec("[a-e]", 1..10),
            incoming in "[a-h]",
        ) {
            let store = KnowledgeStore::new();
            for id in &existing {
                store.upsert(doc(id, "x"));
            }
            let before = ids(&store);

            store.upsert(doc(&incoming, "y"));
            let after = ids(&store);

            match before.iter().position(|id| *id == incoming) {
                Some(index) => {
                    prop_assert_eq!(after.len(), before.len());
                    prop_assert_eq!(&after[index], &incoming);
                    prop_assert_eq!(&after, &before);
                }
                None => {
                    prop_assert_eq!(after.len(), before.len() + 1);
                    prop_assert_eq!(&after[0], &incoming);
                }
            }
        }
    }
}
