// ABOUTME: Persona selection rendering: seller and buyer cards plus a sign-in link

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::common::hints;
use super::theme::{
    title_style, CORNFLOWER_BLUE, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
    SUBDUED_BORDER,
};
use crate::pages::selection::{SelectionChoice, SelectionPage};
use crate::wizard::Persona;

struct PersonaCard {
    title: &'static str,
    pitch: &'static str,
    perks: [&'static str; 4],
    button: &'static str,
}

fn card_for(persona: Persona) -> PersonaCard {
    match persona {
        Persona::Seller => PersonaCard {
            title: "I'm Selling My Business",
            pitch: "Connect with pre-qualified buyers who are actively looking to acquire businesses like yours.",
            perks: [
                "Browse qualified buyer profiles",
                "Initiate connections on your terms",
                "Secure document sharing and communication",
                "Guided deal process and milestone tracking",
            ],
            button: "Get Started as Seller",
        },
        Persona::Buyer => PersonaCard {
            title: "I'm Looking to Buy",
            pitch: "Discover acquisition opportunities that match your investment criteria and budget range.",
            perks: [
                "AI-powered business matching",
                "Access to vetted business listings",
                "Direct communication with sellers",
                "Financial analysis and valuation tools",
            ],
            button: "Get Started as Buyer",
        },
    }
}

pub struct SelectionComponent;

impl SelectionComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, page: &SelectionPage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(10),
                Constraint::Length(1), // Sign-in link
                Constraint::Length(1),
                Constraint::Length(1), // Hints
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled("Welcome to Caprae Capital", title_style())),
            Line::from(Span::styled(
                "Let's get you set up with the right account type",
                Style::default().fg(MUTED_GRAY),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let selected = page.selected();
        for (persona, cell) in [Persona::Seller, Persona::Buyer].into_iter().zip(cards.iter()) {
            let focused = selected == SelectionChoice::Persona(persona);
            self.render_card(frame, *cell, &card_for(persona), focused);
        }

        let link_style = if selected == SelectionChoice::SignIn {
            Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(CORNFLOWER_BLUE)
        };
        let link = Paragraph::new(Line::from(vec![
            Span::styled("Already have an account? ", Style::default().fg(MUTED_GRAY)),
            Span::styled("Sign in here", link_style),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(link, chunks[2]);

        frame.render_widget(
            Paragraph::new(hints(&[
                ("←/→", "Choose"),
                ("Enter", "Continue"),
                ("s", "Seller"),
                ("b", "Buyer"),
                ("Esc", "Home"),
            ])),
            chunks[4],
        );
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, card: &PersonaCard, focused: bool) {
        let border = if focused { SELECTION_GREEN } else { SUBDUED_BORDER };
        let mut lines = vec![
            Line::from(Span::styled(card.pitch, Style::default().fg(SOFT_WHITE))),
            Line::from(""),
        ];
        for perk in card.perks {
            lines.push(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(SELECTION_GREEN)),
                Span::styled(perk, Style::default().fg(MUTED_GRAY)),
            ]));
        }
        lines.push(Line::from(""));
        let button_style = if focused {
            Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(MUTED_GRAY)
        };
        lines.push(Line::from(Span::styled(format!("[ {} ]", card.button), button_style)));

        let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(PANEL_BG))
                .title(Span::styled(
                    format!(" {} ", card.title),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                )),
        );
        frame.render_widget(widget, area);
    }
}

impl Default for SelectionComponent {
    fn default() -> Self {
        Self::new()
    }
}
