// ABOUTME: Documents rendering: library stats, category filter and document rows

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::common::{badge, hints, marker, panel, render_empty, render_filter_bar, render_header, render_stats, stat};
use super::theme::{CORNFLOWER_BLUE, LIST_HIGHLIGHT_BG, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE, WARNING_ORANGE};
use crate::models::{Document, DocumentCategory};
use crate::pages::DocumentsPage;

pub struct DocumentsComponent;

impl DocumentsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, page: &DocumentsPage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        render_header(
            frame,
            chunks[0],
            "Documents",
            "Manage your business documents and share them securely with potential buyers.",
        );

        render_stats(
            frame,
            chunks[1],
            &[
                stat("Total Documents", page.documents.len(), ""),
                stat("Shared Documents", page.shared_count(), "with buyers"),
                stat("Verified", page.verified_count(), ""),
                stat("Categories", DocumentCategory::ALL.len(), ""),
                stat("Storage Used", page.storage_used(), "of 100 MB limit"),
            ],
        );

        render_filter_bar(frame, chunks[2], &page.list, "Search documents...");

        let visible = page.visible();
        if visible.is_empty() {
            render_empty(
                frame,
                chunks[3],
                "No documents found. Try adjusting your search terms or upload your first document.",
            );
        } else {
            let items: Vec<ListItem> = visible
                .iter()
                .enumerate()
                .map(|(index, doc)| document_item(doc, index == page.list.cursor))
                .collect();
            let list = List::new(items)
                .block(panel(&format!("Document Library · Showing {} documents", visible.len())))
                .highlight_style(Style::default().bg(LIST_HIGHLIGHT_BG));
            let mut list_state = ListState::default().with_selected(Some(page.list.cursor));
            frame.render_stateful_widget(list, chunks[3], &mut list_state);
        }

        frame.render_widget(
            Paragraph::new(hints(&[("/", "Search"), ("[ ]", "Category"), ("↑↓", "Select")])),
            chunks[4],
        );
    }
}

fn document_item(doc: &Document, selected: bool) -> ListItem<'static> {
    let status_color = if doc.is_verified() { SELECTION_GREEN } else { WARNING_ORANGE };
    let mut title = vec![
        marker(selected),
        Span::styled(doc.name.clone(), Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        badge(&doc.status, status_color),
    ];
    if doc.shared {
        title.push(Span::raw(" "));
        title.push(badge("Shared", CORNFLOWER_BLUE));
    }
    ListItem::new(vec![
        Line::from(title),
        Line::from(Span::styled(
            format!(
                "    {} · {} · {} · Uploaded {}",
                doc.file_type,
                doc.size_label(),
                doc.category,
                doc.upload_date.format("%Y-%m-%d")
            ),
            Style::default().fg(MUTED_GRAY),
        )),
    ])
}

impl Default for DocumentsComponent {
    fn default() -> Self {
        Self::new()
    }
}
