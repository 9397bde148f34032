//! Policy Upload
//!
//! Document management exposed after a successful admin unlock. Accepted
//! uploads become policy documents in the shared knowledge base and are
//! visible to every request composed afterwards.

use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

use crate::constants::{admin, messages};
use crate::knowledge::{KnowledgeBase, PolicyDocument};
use crate::types::{DeskError, DocumentId, Result};

/// Acknowledgment of an accepted upload
#[derive(Debug, Clone, Serialize)]
pub struct UploadReceipt {
    pub document_id: DocumentId,
    pub file_name: String,
    pub message: &'static str,
}

/// Handle to the upload and document controls. Only
/// [`AdminPanel::unlock`](super::AdminPanel::unlock) hands one out.
#[derive(Debug, Clone)]
pub struct UploadControl {
    knowledge: KnowledgeBase,
}

impl UploadControl {
    pub(super) fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Accept one plain-text policy file
    pub fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<UploadReceipt> {
        let name = base_name(file_name);
        let content = policy_text(name, bytes)?;

        let document_id = self.knowledge.add(PolicyDocument::new(name, content));
        info!("Uploaded {} as {} ({} bytes)", name, document_id, bytes.len());

        Ok(UploadReceipt {
            document_id,
            file_name: name.to_string(),
            message: messages::UPLOAD_ACK,
        })
    }

    /// Read a file from disk and upload it
    pub fn upload_path(&self, path: &Path) -> Result<UploadReceipt> {
        let bytes = std::fs::read(path)?;
        self.upload(&path.to_string_lossy(), &bytes)
    }

    /// Replace a document's content with a plain-text file from disk.
    /// The file is held to the same rules as an upload.
    pub fn update_path(&self, id: &DocumentId, path: &Path) -> Result<()> {
        let bytes = std::fs::read(path)?;
        let content = policy_text(base_name(&path.to_string_lossy()), &bytes)?;
        self.update(id, content)
    }

    pub fn documents(&self) -> Vec<PolicyDocument> {
        self.knowledge.documents()
    }

    pub fn update(&self, id: &DocumentId, content: impl Into<String>) -> Result<()> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DeskError::upload("replacement content is empty"));
        }
        self.knowledge.update(id, content)?;
        info!("Updated policy document {}", id);
        Ok(())
    }

    pub fn remove(&self, id: &DocumentId) -> Result<PolicyDocument> {
        let removed = self.knowledge.remove(id)?;
        info!("Removed policy document {} ({})", id, removed.name);
        Ok(removed)
    }
}

/// Validate an incoming policy file: `.txt`, UTF-8, not blank
fn policy_text<'a>(name: &str, bytes: &'a [u8]) -> Result<&'a str> {
    if !has_upload_extension(name) {
        warn!("Rejected upload {}: not a .{} file", name, admin::UPLOAD_EXTENSION);
        return Err(DeskError::upload(format!(
            "{} is not a .{} file",
            name,
            admin::UPLOAD_EXTENSION
        )));
    }

    let content = std::str::from_utf8(bytes)
        .map_err(|e| DeskError::upload(format!("{} is not valid UTF-8: {}", name, e)))?;
    if content.trim().is_empty() {
        return Err(DeskError::upload(format!("{} is empty", name)));
    }
    Ok(content)
}

fn base_name(file_name: &str) -> &str {
    Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name)
}

fn has_upload_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(admin::UPLOAD_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeStore;
    use std::io::Write;

    fn control() -> (UploadControl, KnowledgeBase) {
        let knowledge = KnowledgeBase::new(KnowledgeStore::empty());
        (UploadControl::new(knowledge.clone()), knowledge)
    }

    #[test]
    fn test_upload_txt_is_indexed() {
        let (control, knowledge) = control();

        let receipt = control
            .upload("remote-work.txt", b"Hybrid: 3 days office.")
            .unwrap();

        assert_eq!(receipt.message, "File uploaded and indexed.");
        assert_eq!(receipt.file_name, "remote-work.txt");
        let snapshot = knowledge.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.text().contains("Hybrid: 3 days office."));
        assert!(snapshot.get(&receipt.document_id).is_some());
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let (control, _) = control();
        assert!(control.upload("POLICY.TXT", b"content").is_ok());
    }

    #[test]
    fn test_rejects_other_extensions() {
        let (control, knowledge) = control();
        for name in ["policy.pdf", "policy", "policy.txt.exe", ".txt-notes"] {
            let result = control.upload(name, b"content");
            assert!(matches!(result, Err(DeskError::Upload(_))), "{}", name);
        }
        assert!(knowledge.snapshot().is_empty());
    }

    #[test]
    fn test_rejects_invalid_utf8_and_blank() {
        let (control, knowledge) = control();
        assert!(matches!(
            control.upload("bad.txt", &[0xff, 0xfe, 0x00]),
            Err(DeskError::Upload(_))
        ));
        assert!(matches!(
            control.upload("blank.txt", b"  \n\t"),
            Err(DeskError::Upload(_))
        ));
        assert!(knowledge.snapshot().is_empty());
    }

    #[test]
    fn test_upload_path_uses_base_name() {
        let (control, _) = control();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("travel.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Travel: economy class.").unwrap();

        let receipt = control.upload_path(&path).unwrap();
        assert_eq!(receipt.file_name, "travel.txt");
        assert_eq!(control.documents()[0].name, "travel.txt");
    }

    #[test]
    fn test_upload_path_missing_file() {
        let (control, _) = control();
        let result = control.upload_path(Path::new("/nonexistent/policy.txt"));
        assert!(matches!(result, Err(DeskError::Io(_))));
    }

    #[test]
    fn test_update_path_replaces_content() {
        let (control, knowledge) = control();
        let id = control.upload("leave.txt", b"12 days").unwrap().document_id;

        let dir = tempfile::tempdir().unwrap();
        let revised = dir.path().join("leave-2025.txt");
        std::fs::write(&revised, "Leave policy: 18 days/year.").unwrap();
        control.update_path(&id, &revised).unwrap();

        let snapshot = knowledge.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.text().contains("18 days/year"));
        assert!(!snapshot.text().contains("12 days"));
    }

    #[test]
    fn test_update_path_rules_match_upload() {
        let (control, knowledge) = control();
        let id = control.upload("leave.txt", b"12 days").unwrap().document_id;

        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("leave.pdf");
        std::fs::write(&pdf, "18 days").unwrap();
        let blank = dir.path().join("blank.txt");
        std::fs::write(&blank, "   ").unwrap();

        assert!(matches!(control.update_path(&id, &pdf), Err(DeskError::Upload(_))));
        assert!(matches!(control.update_path(&id, &blank), Err(DeskError::Upload(_))));
        assert!(matches!(
            control.update_path(&DocumentId::from("missing"), &dir.path().join("none.txt")),
            Err(DeskError::Io(_))
        ));
        assert!(knowledge.snapshot().text().contains("12 days"));
    }

    #[test]
    fn test_update_and_remove() {
        let (control, knowledge) = control();
        let receipt = control.upload("leave.txt", b"12 days").unwrap();
        let id = receipt.document_id;

        control.update(&id, "15 days").unwrap();
        assert!(knowledge.snapshot().text().contains("15 days"));
        assert!(control.update(&id, " ").is_err());

        let removed = control.remove(&id).unwrap();
        assert_eq!(removed.name, "leave.txt");
        assert!(knowledge.snapshot().is_empty());
        assert!(matches!(
            control.remove(&id),
            Err(DeskError::DocumentNotFound(_))
        ));
    }
}
