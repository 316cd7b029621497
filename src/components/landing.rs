// ABOUTME: Landing page rendering: hero, action buttons, platform stats, process steps and features

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::common::{hints, panel, render_stats, stat};
use super::theme::{title_style, GOLD, LIST_HIGHLIGHT_BG, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE};
use crate::pages::landing::{LandingAction, LandingPage};

const PLATFORM_STATS: [(&str, &str); 4] = [
    ("Businesses Sold", "500+"),
    ("Total Deal Value", "$2.3B"),
    ("Success Rate", "89%"),
    ("Avg Days to Match", "45"),
];

const PROCESS_STEPS: [(&str, &str, &str); 4] = [
    ("Create Your Profile", "Tell us about your business or investment criteria", "5 minutes"),
    ("Get Matched", "Our AI finds qualified buyers or sellers for you", "Instant"),
    ("Connect & Negotiate", "Secure messaging and document sharing", "2-8 weeks"),
    ("Close the Deal", "Guided process with milestone tracking", "4-12 weeks"),
];

const FEATURES: [(&str, &str); 4] = [
    ("Smart Matching", "AI-powered matching connects sellers with qualified buyers based on industry, budget, and preferences."),
    ("Secure Process", "End-to-end security with NDA management, document encryption, and verified user profiles."),
    ("Deal Analytics", "Financial document analysis and valuation tools to streamline the acquisition process."),
    ("Guided Communication", "Structured messaging and milestone tracking from initial contact to deal closure."),
];

pub struct LandingComponent;

impl LandingComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, page: &LandingPage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Hero
                Constraint::Length(1), // Buttons
                Constraint::Length(1),
                Constraint::Length(4), // Stats
                Constraint::Length(6), // How it works
                Constraint::Min(0),    // Features
                Constraint::Length(1), // Hints
            ])
            .split(area);

        self.render_hero(frame, chunks[0]);
        self.render_buttons(frame, chunks[1], page);

        let stats: Vec<_> = PLATFORM_STATS.iter().map(|(label, value)| stat(label, value, "")).collect();
        render_stats(frame, chunks[3], &stats);

        self.render_process(frame, chunks[4]);
        self.render_features(frame, chunks[5]);

        let footer = Paragraph::new(hints(&[
            ("←/→", "Choose"),
            ("Enter", "Open"),
            ("s", "Sign in"),
            ("?", "Help"),
            ("q", "Quit"),
        ]));
        frame.render_widget(footer, chunks[6]);
    }

    fn render_hero(&self, frame: &mut Frame, area: Rect) {
        let hero = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Caprae ", Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
                Span::styled("Capital", title_style()),
            ]),
            Line::from(Span::styled("Trusted by 500+ Business Owners", Style::default().fg(MUTED_GRAY))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Connect Business ", Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
                Span::styled("Sellers", title_style()),
                Span::styled(" with ", Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
                Span::styled("Qualified Buyers", title_style()),
            ]),
            Line::from(Span::styled(
                "The modern platform that makes business acquisitions simple, secure, and successful.",
                Style::default().fg(MUTED_GRAY),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(hero, area);
    }

    fn render_buttons(&self, frame: &mut Frame, area: Rect, page: &LandingPage) {
        let selected = page.selected();
        let mut spans = Vec::new();
        for action in LandingAction::ALL {
            let style = if action == selected {
                Style::default().fg(SELECTION_GREEN).bg(LIST_HIGHLIGHT_BG).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_GRAY)
            };
            spans.push(Span::styled(format!(" [ {} ] ", action.label()), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
    }

    fn render_process(&self, frame: &mut Frame, area: Rect) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(area);

        for (index, ((title, description, time), cell)) in PROCESS_STEPS.iter().zip(cells.iter()).enumerate() {
            let card = Paragraph::new(vec![
                Line::from(Span::styled(*description, Style::default().fg(SOFT_WHITE))),
                Line::from(Span::styled(format!("⏱ {time}"), Style::default().fg(GOLD))),
            ])
            .wrap(Wrap { trim: true })
            .block(panel(&format!("{}. {title}", index + 1)).title_alignment(Alignment::Left));
            frame.render_widget(card, *cell);
        }
    }

    fn render_features(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for (title, description) in FEATURES {
            lines.push(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(SELECTION_GREEN)),
                Span::styled(title, Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {description}"), Style::default().fg(MUTED_GRAY)),
            ]));
        }
        let features = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("Why Choose Caprae Capital?"));
        frame.render_widget(features, area);
    }
}

impl Default for LandingComponent {
    fn default() -> Self {
        Self::new()
    }
}
