// ABOUTME: Onboarding wizard rendering: progress, step dots, the current step's questions and Back/Next

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

use super::common::{badge, hints, render_header};
use super::theme::{
    CORNFLOWER_BLUE, DARK_BG, GOLD, LIST_HIGHLIGHT_BG, MUTED_GRAY, PANEL_BG, SELECTION_GREEN,
    SOFT_WHITE, SUBDUED_BORDER,
};
use crate::pages::wizard::{StepRow, WizardPage};
use crate::wizard::FieldKind;

pub struct WizardComponent;

impl WizardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, page: &WizardPage) {
        let controller = page.controller();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Brand + step counter
                Constraint::Length(1), // Gauge
                Constraint::Length(1), // Step dots
                Constraint::Length(1),
                Constraint::Length(2), // Step title
                Constraint::Min(4),    // Questions
                Constraint::Length(1), // Buttons
                Constraint::Length(1), // Hints
            ])
            .split(area);

        let top = Paragraph::new(Line::from(vec![
            Span::styled("Caprae Capital", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {} onboarding", controller.persona().label()),
                Style::default().fg(MUTED_GRAY),
            ),
            Span::styled(
                format!(
                    "   Step {} of {}",
                    controller.current_step(),
                    controller.total_steps()
                ),
                Style::default().fg(SOFT_WHITE),
            ),
        ]));
        frame.render_widget(top, chunks[0]);

        let percent = controller.progress_percent();
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(SELECTION_GREEN).bg(PANEL_BG))
            .percent(percent)
            .label(format!("{percent}% complete"));
        frame.render_widget(gauge, chunks[1]);

        self.render_step_dots(frame, chunks[2], controller.current_step(), controller.total_steps());

        let spec = controller.step_spec();
        render_header(frame, chunks[4], spec.title, spec.subtitle);

        self.render_questions(frame, chunks[5], page);
        self.render_buttons(frame, chunks[6], page);

        frame.render_widget(
            Paragraph::new(hints(&[
                ("↑↓", "Move"),
                ("Space", "Select"),
                ("Enter", page.primary_label()),
                ("Esc", "Back"),
            ])),
            chunks[7],
        );
    }

    fn render_step_dots(&self, frame: &mut Frame, area: Rect, current: usize, total: usize) {
        let mut spans = Vec::new();
        for step in 1..=total {
            let (symbol, style) = if step < current {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if step == current {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };
            if step > 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
            spans.push(Span::styled(symbol, style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
    }

    fn render_questions(&self, frame: &mut Frame, area: Rect, page: &WizardPage) {
        let form = page.controller().form();
        let mut lines: Vec<Line> = Vec::new();
        let mut focused_line = 0;
        let mut last_key = "";

        if page.controller().current_step() == 1 {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", page.avatar_initial()),
                    Style::default().fg(DARK_BG).bg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Profile preview", Style::default().fg(MUTED_GRAY)),
            ]));
            lines.push(Line::from(""));
        }

        for (index, row) in page.rows().into_iter().enumerate() {
            let spec = row.field();
            if spec.key != last_key {
                if !last_key.is_empty() {
                    lines.push(Line::from(""));
                }
                let marker = if spec.required { " *" } else { "" };
                lines.push(Line::from(vec![
                    Span::styled(spec.label, Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
                    Span::styled(marker, Style::default().fg(GOLD)),
                ]));
                last_key = spec.key;
            }

            let focused = index == page.cursor;
            if focused {
                focused_line = lines.len();
            }
            let cursor = if focused {
                Span::styled("▶ ", Style::default().fg(SELECTION_GREEN))
            } else {
                Span::raw("  ")
            };
            let bg = if focused {
                Style::default().bg(LIST_HIGHLIGHT_BG)
            } else {
                Style::default()
            };

            let line = match row {
                StepRow::Input(spec) => {
                    let text = page.input_text(spec);
                    let mut spans = vec![cursor, Span::styled("│ ", Style::default().fg(SUBDUED_BORDER))];
                    if text.is_empty() && !focused {
                        let placeholder = match spec.kind {
                            FieldKind::ChoiceOrCustom(_) => "Or enter a custom amount (e.g. $2,500,000)",
                            _ => spec.placeholder,
                        };
                        spans.push(Span::styled(placeholder, Style::default().fg(MUTED_GRAY)));
                    } else {
                        spans.push(Span::styled(text, Style::default().fg(SOFT_WHITE)));
                        if focused {
                            spans.push(Span::styled("█", Style::default().fg(SELECTION_GREEN)));
                        }
                    }
                    Line::from(spans).style(bg)
                }
                StepRow::Choice(spec, option_index) => {
                    let option = spec.kind.options()[option_index];
                    let chosen = form.is_selected(spec.key, option);
                    let mark = match (spec.kind, chosen) {
                        (FieldKind::MultiChoice(_), true) => "[x] ",
                        (FieldKind::MultiChoice(_), false) => "[ ] ",
                        (_, true) => "(•) ",
                        (_, false) => "( ) ",
                    };
                    let style = if chosen {
                        Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(SOFT_WHITE)
                    };
                    Line::from(vec![cursor, Span::styled(mark, style), Span::styled(option, style)]).style(bg)
                }
            };
            lines.push(line);

            // Echo multi-select answers under the last option
            if let StepRow::Choice(spec, option_index) = row {
                let chosen = form.selections(spec.key);
                let is_last = option_index + 1 == spec.kind.options().len();
                if matches!(spec.kind, FieldKind::MultiChoice(_)) && is_last && !chosen.is_empty() {
                    let mut spans = vec![Span::styled("  Selected: ", Style::default().fg(MUTED_GRAY))];
                    for value in chosen {
                        spans.push(badge(value, CORNFLOWER_BLUE));
                        spans.push(Span::raw(" "));
                    }
                    lines.push(Line::from(""));
                    lines.push(Line::from(spans));
                }
            }
        }

        // Keep the focused row in view on long option lists
        let visible = area.height.saturating_sub(2) as usize;
        let scroll = focused_line.saturating_sub(visible.saturating_sub(1)) as u16;

        let questions = Paragraph::new(lines).scroll((scroll, 0)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(questions, area);
    }

    fn render_buttons(&self, frame: &mut Frame, area: Rect, page: &WizardPage) {
        let controller = page.controller();
        let back_style = if controller.can_go_back() {
            Style::default().fg(SOFT_WHITE)
        } else {
            Style::default().fg(SUBDUED_BORDER)
        };
        let next_style = if controller.can_proceed() {
            Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SUBDUED_BORDER)
        };

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        frame.render_widget(Paragraph::new(Span::styled("[ ← Back ]", back_style)), halves[0]);
        frame.render_widget(
            Paragraph::new(Span::styled(format!("[ {} → ]", page.primary_label()), next_style))
                .alignment(Alignment::Right),
            halves[1],
        );
    }
}

impl Default for WizardComponent {
    fn default() -> Self {
        Self::new()
    }
}
