//! Knowledge Store
//!
//! An immutable snapshot of the policy documents together with the text
//! sent to the model. [`KnowledgeBase`] shares the current snapshot between
//! sessions; admin changes publish a replacement snapshot instead of
//! mutating the one readers hold.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

use super::policies;
use crate::config::KnowledgeConfig;
use crate::types::{DeskError, DocumentId, Result};

/// Separator placed between rendered documents
const DOCUMENT_SEPARATOR: &str = "\n\n---\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    #[default]
    Txt,
}

/// One policy document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDocument {
    pub id: DocumentId,
    pub name: String,
    pub content: String,
    pub kind: DocumentKind,
    pub category: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl PolicyDocument {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: DocumentId::generate(),
            name: name.into(),
            content: content.into(),
            kind: DocumentKind::Txt,
            category: None,
            uploaded_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<DocumentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    fn render_into(&self, out: &mut String) {
        out.push_str("[Document: ");
        out.push_str(&self.name);
        out.push_str("]\n");
        out.push_str(&self.content);
    }
}

/// Immutable set of policy documents and their rendered text
#[derive(Debug, Clone, Default)]
pub struct KnowledgeStore {
    documents: Vec<PolicyDocument>,
    text: String,
}

impl KnowledgeStore {
    pub fn new(documents: Vec<PolicyDocument>) -> Self {
        let text = render(&documents);
        Self { documents, text }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in IndiaSportsHub corpus
    pub fn builtin() -> Self {
        Self::new(builtin_documents())
    }

    /// Build the store described by configuration. Configured files are
    /// read once here; a missing file is an error.
    pub fn load(config: &KnowledgeConfig) -> Result<Self> {
        let mut documents = if config.include_builtin {
            builtin_documents()
        } else {
            Vec::new()
        };

        for path in &config.files {
            documents.push(read_policy_file(path)?);
        }

        info!("Knowledge store loaded: {} documents", documents.len());
        Ok(Self::new(documents))
    }

    /// Full text sent with every request
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn documents(&self) -> &[PolicyDocument] {
        &self.documents
    }

    pub fn get(&self, id: &DocumentId) -> Option<&PolicyDocument> {
        self.documents.iter().find(|d| &d.id == id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn render(documents: &[PolicyDocument]) -> String {
    let mut out = String::new();
    for (i, doc) in documents.iter().enumerate() {
        if i > 0 {
            out.push_str(DOCUMENT_SEPARATOR);
        }
        doc.render_into(&mut out);
    }
    out
}

fn builtin_documents() -> Vec<PolicyDocument> {
    vec![
        PolicyDocument::new(policies::ONBOARDING_GUIDE_NAME, policies::ONBOARDING_GUIDE)
            .with_id(policies::ONBOARDING_GUIDE_ID)
            .with_category(policies::ONBOARDING_GUIDE_CATEGORY),
        PolicyDocument::new(policies::HEALTH_BENEFITS_NAME, policies::HEALTH_BENEFITS)
            .with_id(policies::HEALTH_BENEFITS_ID)
            .with_category(policies::HEALTH_BENEFITS_CATEGORY),
    ]
}

fn read_policy_file(path: &Path) -> Result<PolicyDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        DeskError::Config(format!("Cannot read policy file {}: {}", path.display(), e))
    })?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("policy.txt");
    debug!("Loaded policy file {} ({} bytes)", path.display(), content.len());
    Ok(PolicyDocument::new(name, content))
}

// =============================================================================
// Shared Handle
// =============================================================================

/// Cloneable handle to the current knowledge snapshot
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    current: Arc<RwLock<Arc<KnowledgeStore>>>,
}

impl KnowledgeBase {
    pub fn new(store: KnowledgeStore) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(store))),
        }
    }

    /// Current snapshot. Later admin changes do not affect it.
    pub fn snapshot(&self) -> Arc<KnowledgeStore> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn documents(&self) -> Vec<PolicyDocument> {
        self.snapshot().documents().to_vec()
    }

    /// Append a document and publish the new snapshot
    pub fn add(&self, document: PolicyDocument) -> DocumentId {
        let id = document.id.clone();
        let mut guard = self.write();
        let mut documents = guard.documents().to_vec();
        documents.push(document);
        *guard = Arc::new(KnowledgeStore::new(documents));
        info!("Added policy document {} ({} total)", id, guard.len());
        id
    }

    /// Replace a document's content
    pub fn update(&self, id: &DocumentId, content: impl Into<String>) -> Result<()> {
        let content = content.into();
        self.publish(|docs| {
            let doc = docs
                .iter_mut()
                .find(|d| &d.id == id)
                .ok_or_else(|| DeskError::DocumentNotFound(id.to_string()))?;
            doc.content = content;
            Ok(())
        })
    }

    pub fn remove(&self, id: &DocumentId) -> Result<PolicyDocument> {
        let mut removed = None;
        self.publish(|docs| {
            let idx = docs
                .iter()
                .position(|d| &d.id == id)
                .ok_or_else(|| DeskError::DocumentNotFound(id.to_string()))?;
            removed = Some(docs.remove(idx));
            Ok(())
        })?;
        removed.ok_or_else(|| DeskError::DocumentNotFound(id.to_string()))
    }

    fn publish<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<PolicyDocument>) -> Result<()>,
    {
        let mut guard = self.write();
        let mut documents = guard.documents().to_vec();
        edit(&mut documents)?;
        *guard = Arc::new(KnowledgeStore::new(documents));
        debug!("Published knowledge snapshot ({} documents)", guard.len());
        Ok(())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Arc<KnowledgeStore>> {
        self.current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new(KnowledgeStore::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_document() {
        let store = KnowledgeStore::new(vec![PolicyDocument::new(
            "leave.txt",
            "Leave policy: 12 days/year.",
        )]);
        assert_eq!(
            store.text(),
            "[Document: leave.txt]\nLeave policy: 12 days/year."
        );
    }

    #[test]
    fn test_render_joins_with_separator() {
        let store = KnowledgeStore::new(vec![
            PolicyDocument::new("a", "alpha"),
            PolicyDocument::new("b", "beta"),
        ]);
        assert_eq!(
            store.text(),
            "[Document: a]\nalpha\n\n---\n\n[Document: b]\nbeta"
        );
    }

    #[test]
    fn test_empty_store_renders_empty() {
        assert_eq!(KnowledgeStore::empty().text(), "");
        assert!(KnowledgeStore::empty().is_empty());
    }

    #[test]
    fn test_builtin_corpus() {
        let store = KnowledgeStore::builtin();
        assert_eq!(store.len(), 2);
        assert!(store.text().contains("First year: 15 vacation days."));
        assert!(store.text().contains("Sick leave: 12 days per calendar year"));
        assert!(store.get(&DocumentId::new(policies::HEALTH_BENEFITS_ID)).is_some());
    }

    #[test]
    fn test_load_reads_configured_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("travel.txt");
        std::fs::write(&path, "Travel allowance: 500/day.").unwrap();

        let config = KnowledgeConfig {
            include_builtin: false,
            files: vec![path],
        };
        let store = KnowledgeStore::load(&config).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.documents()[0].name, "travel.txt");
        assert!(store.text().contains("Travel allowance: 500/day."));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let config = KnowledgeConfig {
            include_builtin: true,
            files: vec!["/nonexistent/policy.txt".into()],
        };
        assert!(matches!(
            KnowledgeStore::load(&config),
            Err(DeskError::Config(_))
        ));
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_changes() {
        let base = KnowledgeBase::new(KnowledgeStore::empty());
        let before = base.snapshot();

        base.add(PolicyDocument::new("new.txt", "Remote work allowed."));

        assert!(before.is_empty());
        assert_eq!(base.snapshot().len(), 1);
        assert!(base.snapshot().text().contains("Remote work allowed."));
    }

    #[test]
    fn test_update_and_remove() {
        let base = KnowledgeBase::new(KnowledgeStore::empty());
        let id = base.add(PolicyDocument::new("a.txt", "old"));

        base.update(&id, "new").unwrap();
        assert!(base.snapshot().text().contains("new"));

        let removed = base.remove(&id).unwrap();
        assert_eq!(removed.content, "new");
        assert!(base.snapshot().is_empty());

        assert!(matches!(
            base.remove(&id),
            Err(DeskError::DocumentNotFound(_))
        ));
        assert!(base.update(&id, "x").is_err());
    }
}
