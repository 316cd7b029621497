// ABOUTME: Business profile rendering: owner card and achievements beside the business overview

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::common::{hints, panel, render_header};
use super::theme::{CORNFLOWER_BLUE, GOLD, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE};
use crate::pages::ProfilePage;

fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(MUTED_GRAY)),
        Span::styled(value.into(), Style::default().fg(SOFT_WHITE)),
    ])
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(GOLD).add_modifier(Modifier::BOLD)))
}

pub struct ProfileComponent;

impl ProfileComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, page: &ProfilePage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(4), Constraint::Length(1)])
            .split(area);

        render_header(
            frame,
            chunks[0],
            "Business Profile",
            "How your business appears to qualified buyers.",
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(chunks[1]);

        let owner = &page.owner;
        let mut left = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", owner.initials()),
                    Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD | Modifier::REVERSED),
                ),
                Span::styled(
                    format!(" {}", owner.name),
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(owner.title.clone(), Style::default().fg(MUTED_GRAY))),
            Line::from(""),
            field("Experience", owner.experience.clone()),
            field("Previous exits", owner.previous_exits.to_string()),
            field("Education", owner.education.clone()),
            Line::from(""),
            heading("Key Achievements"),
        ];
        for achievement in &page.achievements {
            left.push(Line::from(vec![
                Span::styled(format!("{:>8} ", achievement.value), Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD)),
                Span::styled(achievement.label.clone(), Style::default().fg(SOFT_WHITE)),
            ]));
        }
        let left = Paragraph::new(left)
            .wrap(Wrap { trim: true })
            .scroll((page.scroll, 0))
            .block(panel("Owner"));
        frame.render_widget(left, columns[0]);

        let business = &page.business;
        let mut right = vec![
            Line::from(Span::styled(
                business.name.clone(),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                business.tags.iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" "),
                Style::default().fg(CORNFLOWER_BLUE),
            )),
            Line::from(""),
            field("Industry", business.industry.clone()),
            field("Founded", business.founded.clone()),
            field("Employees", business.employees.clone()),
            field("Location", business.location.clone()),
            field("Annual revenue", business.revenue.clone()),
            field("Asking price", business.asking_price.clone()),
            Line::from(""),
            Line::from(Span::styled(business.description.clone(), Style::default().fg(SOFT_WHITE))),
            Line::from(""),
            heading("Financial Highlights"),
        ];
        for (label, value) in &business.financial_highlights {
            right.push(field(label, value.clone()));
        }
        right.push(Line::from(""));
        right.push(heading("Market Position"));
        right.push(Line::from(Span::styled("Competitive advantages", Style::default().fg(MUTED_GRAY))));
        for advantage in &business.competitive_advantages {
            right.push(Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(SELECTION_GREEN)),
                Span::styled(advantage.clone(), Style::default().fg(SOFT_WHITE)),
            ]));
        }
        right.push(Line::from(Span::styled("Growth opportunities", Style::default().fg(MUTED_GRAY))));
        for opportunity in &business.growth_opportunities {
            right.push(Line::from(vec![
                Span::styled("  ↗ ", Style::default().fg(GOLD)),
                Span::styled(opportunity.clone(), Style::default().fg(SOFT_WHITE)),
            ]));
        }
        let right = Paragraph::new(right)
            .wrap(Wrap { trim: true })
            .scroll((page.scroll, 0))
            .block(panel("Business Overview"));
        frame.render_widget(right, columns[1]);

        frame.render_widget(Paragraph::new(hints(&[("↑↓", "Scroll"), ("Tab", "Sidebar")])), chunks[2]);
    }
}

impl Default for ProfileComponent {
    fn default() -> Self {
        Self::new()
    }
}
