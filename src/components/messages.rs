// ABOUTME: Messages rendering: conversation list with unread badges, thread and draft input

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::common::{badge, hints, marker, panel, render_empty, render_filter_bar};
use super::theme::{
    CORNFLOWER_BLUE, GOLD, LIST_HIGHLIGHT_BG, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER,
};
use crate::models::Conversation;
use crate::pages::MessagesPage;

pub struct MessagesComponent;

impl MessagesComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, page: &MessagesPage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(6), Constraint::Length(1)])
            .split(area);

        render_filter_bar(frame, chunks[0], &page.list, "Search conversations...");

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
            .split(chunks[1]);

        let visible = page.visible();
        if visible.is_empty() {
            render_empty(frame, columns[0], "No conversations found.");
        } else {
            let items: Vec<ListItem> = visible
                .iter()
                .enumerate()
                .map(|(index, c)| conversation_item(c, index == page.list.cursor))
                .collect();
            let list = List::new(items)
                .block(panel("Messages"))
                .highlight_style(Style::default().bg(LIST_HIGHLIGHT_BG));
            let mut list_state = ListState::default().with_selected(Some(page.list.cursor));
            frame.render_stateful_widget(list, columns[0], &mut list_state);
        }

        self.render_thread(frame, columns[1], page);

        let keys = if page.composing {
            hints(&[("Enter", "Send"), ("Esc", "Stop typing")])
        } else {
            hints(&[("/", "Search"), ("[ ]", "Read state"), ("↑↓", "Select"), ("i", "Write")])
        };
        frame.render_widget(Paragraph::new(keys), chunks[2]);
    }

    fn render_thread(&self, frame: &mut Frame, area: Rect, page: &MessagesPage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(3), Constraint::Length(3)])
            .split(area);

        let header = match page.selected() {
            Some(c) => vec![
                Line::from(vec![
                    Span::styled(format!("{} ", c.initials), Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD)),
                    Span::styled(c.name.as_str(), Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
                ]),
                Line::from(Span::styled(format!("   {}", c.company), Style::default().fg(MUTED_GRAY))),
            ],
            None => vec![Line::from(Span::styled("Select a conversation", Style::default().fg(MUTED_GRAY)))],
        };
        frame.render_widget(Paragraph::new(header), chunks[0]);

        let mut lines = Vec::new();
        for message in &page.thread {
            let (alignment, color) = if message.is_own {
                (Alignment::Right, SELECTION_GREEN)
            } else {
                (Alignment::Left, SOFT_WHITE)
            };
            lines.push(Line::from(Span::styled(message.body.as_str(), Style::default().fg(color))).alignment(alignment));
            lines.push(
                Line::from(Span::styled(
                    format!("{} · {}", message.sender, message.time),
                    Style::default().fg(MUTED_GRAY),
                ))
                .alignment(alignment),
            );
            lines.push(Line::from(""));
        }
        let thread = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER)),
        );
        frame.render_widget(thread, chunks[1]);

        let draft_line = if page.composing {
            Line::from(vec![
                Span::styled(page.draft.as_str(), Style::default().fg(SOFT_WHITE)),
                Span::styled("█", Style::default().fg(SELECTION_GREEN)),
            ])
        } else if page.draft.is_empty() {
            Line::from(Span::styled("Type your message...", Style::default().fg(MUTED_GRAY)))
        } else {
            Line::from(Span::styled(page.draft.as_str(), Style::default().fg(SOFT_WHITE)))
        };
        let border = if page.composing { SELECTION_GREEN } else { SUBDUED_BORDER };
        let draft = Paragraph::new(draft_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(draft, chunks[2]);
    }
}

fn conversation_item(c: &Conversation, selected: bool) -> ListItem<'static> {
    let mut title = vec![
        marker(selected),
        Span::styled(format!("{} ", c.initials), Style::default().fg(CORNFLOWER_BLUE)),
        Span::styled(c.name.clone(), Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", c.time), Style::default().fg(MUTED_GRAY)),
    ];
    if c.unread > 0 {
        title.push(Span::raw(" "));
        title.push(badge(c.unread, GOLD));
    }
    ListItem::new(vec![
        Line::from(title),
        Line::from(Span::styled(format!("    {}", c.company), Style::default().fg(MUTED_GRAY))),
        Line::from(Span::styled(format!("    {}", c.last_message), Style::default().fg(SOFT_WHITE))),
    ])
}

impl Default for MessagesComponent {
    fn default() -> Self {
        Self::new()
    }
}
