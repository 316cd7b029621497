// ABOUTME: Tasks rendering: stats, filter bar and task rows with priority, status and due date

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::common::{badge, hints, marker, panel, render_empty, render_filter_bar, render_header, render_stats, stat};
use super::theme::{CORNFLOWER_BLUE, ERROR_RED, LIST_HIGHLIGHT_BG, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE, WARNING_ORANGE};
use crate::models::task::DueState;
use crate::models::{Priority, Task, TaskStatus};
use crate::pages::TasksPage;

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => ERROR_RED,
        Priority::Medium => WARNING_ORANGE,
        Priority::Low => SELECTION_GREEN,
    }
}

fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Pending => WARNING_ORANGE,
        TaskStatus::InProgress => CORNFLOWER_BLUE,
        TaskStatus::Completed => SELECTION_GREEN,
        TaskStatus::Overdue => ERROR_RED,
    }
}

pub struct TasksComponent;

impl TasksComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, page: &TasksPage) {
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
            "Tasks",
            "Manage your acquisition-related tasks and track progress on active deals.",
        );

        render_stats(
            frame,
            chunks[1],
            &[
                stat("Total Tasks", page.tasks.len(), ""),
                stat("Pending", page.count(TaskStatus::Pending), ""),
                stat("Completed", page.count(TaskStatus::Completed), ""),
                stat("Overdue", page.count(TaskStatus::Overdue), ""),
            ],
        );

        render_filter_bar(frame, chunks[2], &page.list, "Search tasks...");

        let visible = page.visible();
        if visible.is_empty() {
            render_empty(
                frame,
                chunks[3],
                "No tasks found. Try adjusting your search terms or create your first task.",
            );
        } else {
            let items: Vec<ListItem> = visible
                .iter()
                .enumerate()
                .map(|(index, task)| task_item(task, index == page.list.cursor, page.today))
                .collect();
            let list = List::new(items)
                .block(panel("Tasks"))
                .highlight_style(Style::default().bg(LIST_HIGHLIGHT_BG));
            let mut list_state = ListState::default().with_selected(Some(page.list.cursor));
            frame.render_stateful_widget(list, chunks[3], &mut list_state);
        }

        frame.render_widget(
            Paragraph::new(hints(&[("/", "Search"), ("[ ]", "Status"), ("↑↓", "Select")])),
            chunks[4],
        );
    }
}

fn task_item(task: &Task, selected: bool, today: NaiveDate) -> ListItem<'static> {
    let title_style = if task.completed {
        Style::default().fg(MUTED_GRAY).add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)
    };
    let check = if task.completed { "☑ " } else { "☐ " };

    let due = match task.due_state(today) {
        DueState::Overdue(days) => Span::styled(format!("{days} days overdue"), Style::default().fg(ERROR_RED)),
        DueState::DueSoon(days) => Span::styled(format!("{days} days left"), Style::default().fg(WARNING_ORANGE)),
        DueState::Later => Span::styled(
            format!("{} days left", task.days_until_due(today)),
            Style::default().fg(MUTED_GRAY),
        ),
    };

    ListItem::new(vec![
        Line::from(vec![
            marker(selected),
            Span::styled(check, Style::default().fg(SELECTION_GREEN)),
            Span::styled(task.title.clone(), title_style),
            Span::raw("  "),
            badge(task.priority, priority_color(task.priority)),
            Span::raw(" "),
            badge(task.status, status_color(task.status)),
        ]),
        Line::from(Span::styled(format!("      {}", task.description), Style::default().fg(MUTED_GRAY))),
        Line::from(vec![
            Span::styled(
                format!("      Due {} · {} · {} · ", task.due_date.format("%Y-%m-%d"), task.assignee, task.category),
                Style::default().fg(MUTED_GRAY),
            ),
            due,
        ]),
    ])
}

impl Default for TasksComponent {
    fn default() -> Self {
        Self::new()
    }
}
