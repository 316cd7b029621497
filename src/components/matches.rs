// ABOUTME: Matches rendering: stats, filterable match list and new match requests

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::common::{badge, hints, marker, panel, render_empty, render_filter_bar, render_header, render_stats, stat};
use super::theme::{CORNFLOWER_BLUE, GOLD, LIST_HIGHLIGHT_BG, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE};
use crate::models::{Match, MatchStatus};
use crate::pages::MatchesPage;

pub struct MatchesComponent;

impl MatchesComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, page: &MatchesPage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(area);

        render_header(
            frame,
            chunks[0],
            "Matches",
            "Your connections with potential buyers and active conversations.",
        );

        render_stats(
            frame,
            chunks[1],
            &[
                stat("Total Matches", page.matches.len(), "+2 this week"),
                stat("Active Conversations", page.count(MatchStatus::Active), "Ongoing discussions"),
                stat("Pending Responses", page.count(MatchStatus::PendingResponse), "Awaiting buyer response"),
            ],
        );

        render_filter_bar(frame, chunks[2], &page.list, "Search matches by name or company...");

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[3]);

        let visible = page.visible();
        if visible.is_empty() {
            render_empty(frame, body[0], "No matches found.");
        } else {
            let items: Vec<ListItem> = visible
                .iter()
                .enumerate()
                .map(|(index, m)| match_item(m, index == page.list.cursor))
                .collect();
            let list = List::new(items)
                .block(panel("Active Matches"))
                .highlight_style(Style::default().bg(LIST_HIGHLIGHT_BG));
            let mut list_state = ListState::default().with_selected(Some(page.list.cursor));
            frame.render_stateful_widget(list, body[0], &mut list_state);
        }

        self.render_requests(frame, body[1], page);

        frame.render_widget(
            Paragraph::new(hints(&[
                ("/", "Search"),
                ("[ ]", "Status"),
                ("↑↓", "Select"),
                ("a", "Accept request"),
                ("x", "Decline request"),
            ])),
            chunks[4],
        );
    }

    fn render_requests(&self, frame: &mut Frame, area: Rect, page: &MatchesPage) {
        let mut lines = Vec::new();
        if page.requests.is_empty() {
            lines.push(Line::from(Span::styled("No pending matches", Style::default().fg(SOFT_WHITE))));
            lines.push(Line::from(Span::styled(
                "New buyer matches will appear here when they express interest.",
                Style::default().fg(MUTED_GRAY),
            )));
        }
        for request in &page.requests {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", request.initials),
                    Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
                ),
                Span::styled(request.name.as_str(), Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", request.company),
                Style::default().fg(MUTED_GRAY),
            )));
            lines.push(Line::from(Span::styled(
                format!("   Budget: {}", request.budget_range),
                Style::default().fg(GOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("   {}", request.industries.join(", ")),
                Style::default().fg(CORNFLOWER_BLUE),
            )));
            lines.push(Line::from(vec![
                Span::styled("   [a] Accept", Style::default().fg(SELECTION_GREEN)),
                Span::styled("  [x] Decline", Style::default().fg(MUTED_GRAY)),
            ]));
            lines.push(Line::from(""));
        }
        let requests = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("New Match Requests"));
        frame.render_widget(requests, area);
    }
}

fn match_item(m: &Match, selected: bool) -> ListItem<'static> {
    let status_color = match m.status {
        MatchStatus::Active => SELECTION_GREEN,
        MatchStatus::PendingResponse => GOLD,
    };
    ListItem::new(vec![
        Line::from(vec![
            marker(selected),
            Span::styled(format!("{} ", m.initials), Style::default().fg(CORNFLOWER_BLUE)),
            Span::styled(m.name.clone(), Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" · {}  ", m.company), Style::default().fg(MUTED_GRAY)),
            badge(m.status, status_color),
        ]),
        Line::from(Span::styled(
            format!("    Matched on {}", m.match_date.format("%Y-%m-%d")),
            Style::default().fg(MUTED_GRAY),
        )),
        Line::from(vec![
            Span::styled(format!("    {}", m.last_message), Style::default().fg(SOFT_WHITE)),
            Span::styled(format!("  {}", m.message_time), Style::default().fg(MUTED_GRAY)),
        ]),
    ])
}

impl Default for MatchesComponent {
    fn default() -> Self {
        Self::new()
    }
}
