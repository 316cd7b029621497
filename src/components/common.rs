// ABOUTME: Building blocks shared by the page components: headers, stat cards, filter bars, badges

use std::fmt;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::{
    title_style, CORNFLOWER_BLUE, GOLD, LIST_HIGHLIGHT_BG, MUTED_GRAY, PANEL_BG, SELECTION_GREEN,
    SOFT_WHITE, SUBDUED_BORDER,
};
use crate::pages::ListPage;

/// Label, value and a short note under the value
pub type Stat = (String, String, String);

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(SUBDUED_BORDER))
        .style(Style::default().bg(PANEL_BG))
        .title(Span::styled(format!(" {title} "), title_style()))
}

/// Title on the first line, muted subtitle on the second
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(title, title_style())),
        Line::from(Span::styled(subtitle, Style::default().fg(MUTED_GRAY))),
    ]);
    frame.render_widget(header, area);
}

/// One bordered card per stat, side by side
pub fn render_stats(frame: &mut Frame, area: Rect, stats: &[Stat]) {
    if stats.is_empty() {
        return;
    }
    let share = 100 / stats.len() as u16;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(stats.iter().map(|_| Constraint::Percentage(share)))
        .split(area);

    for ((label, value, note), cell) in stats.iter().zip(cells.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                value.as_str(),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(note.as_str(), Style::default().fg(MUTED_GRAY))),
        ])
        .block(panel(label));
        frame.render_widget(card, *cell);
    }
}

pub fn stat(label: &str, value: impl ToString, note: &str) -> Stat {
    (label.to_string(), value.to_string(), note.to_string())
}

/// Search box on the left, category choices on the right
pub fn render_filter_bar<C>(frame: &mut Frame, area: Rect, list: &ListPage<C>, placeholder: &str)
where
    C: Copy + PartialEq + fmt::Display + 'static,
{
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let term = &list.filter.search_term;
    let search_line = if list.searching {
        Line::from(vec![
            Span::styled(term.as_str(), Style::default().fg(SOFT_WHITE)),
            Span::styled("█", Style::default().fg(SELECTION_GREEN)),
        ])
    } else if term.is_empty() {
        Line::from(Span::styled(placeholder, Style::default().fg(MUTED_GRAY)))
    } else {
        Line::from(Span::styled(term.as_str(), Style::default().fg(SOFT_WHITE)))
    };
    let border = if list.searching { SELECTION_GREEN } else { SUBDUED_BORDER };
    let search = Paragraph::new(search_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(Span::styled(" / Search ", Style::default().fg(MUTED_GRAY))),
    );
    frame.render_widget(search, halves[0]);

    let mut spans = Vec::new();
    for choice in list.filter.choices() {
        let label = format!(" {choice} ");
        if choice == list.filter.category {
            spans.push(Span::styled(
                label,
                Style::default().fg(GOLD).bg(LIST_HIGHLIGHT_BG).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(MUTED_GRAY)));
        }
        spans.push(Span::raw(" "));
    }
    let categories = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .title(Span::styled(" [ ] Filter ", Style::default().fg(MUTED_GRAY))),
    );
    frame.render_widget(categories, halves[1]);
}

pub fn badge(text: impl fmt::Display, color: Color) -> Span<'static> {
    Span::styled(format!("[{text}]"), Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Cursor marker for list rows
pub fn marker(selected: bool) -> Span<'static> {
    if selected {
        Span::styled("▶ ", Style::default().fg(SELECTION_GREEN))
    } else {
        Span::raw("  ")
    }
}

pub fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().bg(LIST_HIGHLIGHT_BG)
    } else {
        Style::default()
    }
}

/// Centered muted text for lists the filter emptied
pub fn render_empty(frame: &mut Frame, area: Rect, text: &str) {
    let empty = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(MUTED_GRAY))))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(SUBDUED_BORDER)));
    frame.render_widget(empty, area);
}

/// Key hint line: key in blue, description muted
pub fn hints(pairs: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, description) in pairs {
        spans.push(Span::styled(
            format!(" {key}"),
            Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {description} "), Style::default().fg(MUTED_GRAY)));
    }
    Line::from(spans)
}
