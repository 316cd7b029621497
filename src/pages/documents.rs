// ABOUTME: Document library with category filter and sharing stats

use super::{ListPage, PageAction};
use crate::models::document::format_size;
use crate::models::{seed, Document, DocumentCategory};

#[derive(Debug, Clone)]
pub struct DocumentsPage {
    pub documents: Vec<Document>,
    pub list: ListPage<DocumentCategory>,
}

impl DocumentsPage {
    pub fn new() -> Self {
        Self {
            documents: seed::documents(),
            list: ListPage::new(&DocumentCategory::ALL),
        }
    }

    pub fn visible(&self) -> Vec<&Document> {
        self.list.visible(&self.documents)
    }

    pub fn shared_count(&self) -> usize {
        self.documents.iter().filter(|d| d.shared).count()
    }

    pub fn verified_count(&self) -> usize {
        self.documents.iter().filter(|d| d.is_verified()).count()
    }

    pub fn storage_used(&self) -> String {
        format_size(self.documents.iter().map(|d| u64::from(d.size_kb)).sum())
    }

    pub fn handle(&mut self, action: PageAction) {
        self.list.handle(action, &self.documents);
    }
}

impl Default for DocumentsPage {
    fn default() -> Self {
        Self::new()
    }
}
