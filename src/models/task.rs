// ABOUTME: Deal tasks with priority, status and due dates

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{parse_label, CategoryParseError};
use crate::filter::Filterable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Priority {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, "priority", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::InProgress, Self::Completed, Self::Overdue];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, "task status", s)
    }
}

/// How close a task is to its due date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueState {
    Overdue(i64),
    DueSoon(i64),
    Later,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
    pub assignee: String,
    pub category: String,
    pub completed: bool,
}

impl Task {
    /// Whole days from `today` until the due date; negative once past due
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }

    /// Overdue when past due, due soon within three days
    pub fn due_state(&self, today: NaiveDate) -> DueState {
        let days = self.days_until_due(today);
        if days < 0 {
            DueState::Overdue(days.abs())
        } else if days <= 3 {
            DueState::DueSoon(days)
        } else {
            DueState::Later
        }
    }
}

impl Filterable for Task {
    type Category = TaskStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }

    fn category(&self) -> TaskStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_due() {
        let task = &seed::tasks()[0];
        assert_eq!(task.due_date, date(2024, 1, 20));
        assert_eq!(task.days_until_due(date(2024, 1, 18)), 2);
        assert_eq!(task.days_until_due(date(2024, 1, 25)), -5);
    }

    #[test]
    fn test_due_state_boundaries() {
        let task = &seed::tasks()[0];
        assert_eq!(task.due_state(date(2024, 1, 20)), DueState::DueSoon(0));
        assert_eq!(task.due_state(date(2024, 1, 17)), DueState::DueSoon(3));
        assert_eq!(task.due_state(date(2024, 1, 16)), DueState::Later);
        assert_eq!(task.due_state(date(2024, 1, 21)), DueState::Overdue(1));
    }

    #[test]
    fn test_status_parses_from_label() {
        assert_eq!("in progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert!("Blocked".parse::<TaskStatus>().is_err());
    }
}
