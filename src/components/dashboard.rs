// ABOUTME: Dashboard rendering: stat cards, buyer filter bar and buyer cards

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::common::{badge, hints, marker, panel, render_empty, render_filter_bar, render_header, render_stats, stat};
use super::theme::{CORNFLOWER_BLUE, GOLD, LIST_HIGHLIGHT_BG, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE};
use crate::models::{Buyer, BuyerStatus};
use crate::pages::dashboard::{DashboardPage, INDUSTRY_PREVIEW, STATS};

pub fn status_color(status: BuyerStatus) -> Color {
    match status {
        BuyerStatus::ReadyToBuy => SELECTION_GREEN,
        BuyerStatus::ResearchPhase => GOLD,
        BuyerStatus::ActiveNegotiations => CORNFLOWER_BLUE,
    }
}

pub struct DashboardComponent;

impl DashboardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, page: &DashboardPage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Welcome
                Constraint::Length(4), // Stats
                Constraint::Length(3), // Filter bar
                Constraint::Length(1), // Result count
                Constraint::Min(3),    // Buyer cards
                Constraint::Length(1), // Hints
            ])
            .split(area);

        render_header(
            frame,
            chunks[0],
            "Welcome back! 👋",
            "Discover qualified buyers for your business. Browse profiles and connect with the right match.",
        );

        let stats: Vec<_> = STATS.iter().map(|(label, value, note)| stat(label, value, note)).collect();
        render_stats(frame, chunks[1], &stats);

        render_filter_bar(frame, chunks[2], &page.list, "Search buyers by name or industry...");

        frame.render_widget(
            Paragraph::new(Span::styled(page.result_line(), Style::default().fg(MUTED_GRAY))),
            chunks[3],
        );

        let visible = page.visible();
        if visible.is_empty() {
            render_empty(
                frame,
                chunks[4],
                "No buyers found. Try adjusting your search terms or filters to find more buyers.",
            );
        } else {
            let items: Vec<ListItem> = visible
                .iter()
                .enumerate()
                .map(|(index, buyer)| buyer_card(buyer, index == page.list.cursor))
                .collect();
            let list = List::new(items)
                .block(panel("Qualified Buyers"))
                .highlight_style(Style::default().bg(LIST_HIGHLIGHT_BG));
            let mut list_state = ListState::default().with_selected(Some(page.list.cursor));
            frame.render_stateful_widget(list, chunks[4], &mut list_state);
        }

        frame.render_widget(
            Paragraph::new(hints(&[
                ("/", "Search"),
                ("[ ]", "Status"),
                ("↑↓", "Select"),
                ("c", "Connect"),
                ("p", "Pass"),
                ("d", "Details"),
                ("Tab", "Sidebar"),
            ])),
            chunks[5],
        );
    }
}

fn buyer_card(buyer: &Buyer, selected: bool) -> ListItem<'static> {
    let mut title = vec![
        marker(selected),
        Span::styled(buyer.name.clone(), Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
    ];
    if let Some(company) = &buyer.company {
        title.push(Span::styled(format!(" · {company}"), Style::default().fg(MUTED_GRAY)));
    }
    title.push(Span::raw("  "));
    title.push(badge(buyer.status, status_color(buyer.status)));

    let details = Line::from(Span::styled(
        format!(
            "    {} · {} · {} · {} acquisitions · {}",
            buyer.budget_range, buyer.location, buyer.timeline, buyer.previous_acquisitions, buyer.experience
        ),
        Style::default().fg(MUTED_GRAY),
    ));

    let (shown, more) = buyer.industry_preview(INDUSTRY_PREVIEW);
    let mut industries = vec![Span::raw("    ")];
    for industry in shown {
        industries.push(Span::styled(format!("{industry} "), Style::default().fg(CORNFLOWER_BLUE)));
    }
    if more > 0 {
        industries.push(Span::styled(format!("+{more} more"), Style::default().fg(MUTED_GRAY)));
    }

    let mut lines = vec![Line::from(title), details, Line::from(industries)];
    if let Some(bio) = &buyer.bio {
        lines.push(Line::from(Span::styled(
            format!("    {bio}"),
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::ITALIC),
        )));
    }
    ListItem::new(lines)
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}
