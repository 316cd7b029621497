// ABOUTME: Task list with stats, priority and due-date tracking

use chrono::{Local, NaiveDate};

use super::{ListPage, PageAction};
use crate::models::{seed, Task, TaskStatus};

#[derive(Debug, Clone)]
pub struct TasksPage {
    pub tasks: Vec<Task>,
    pub list: ListPage<TaskStatus>,
    /// Reference date for "days remaining"
    pub today: NaiveDate,
}

impl TasksPage {
    pub fn new() -> Self {
        Self::with_today(Local::now().date_naive())
    }

    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            tasks: seed::tasks(),
            list: ListPage::new(&TaskStatus::ALL),
            today,
        }
    }

    pub fn visible(&self) -> Vec<&Task> {
        self.list.visible(&self.tasks)
    }

    pub fn count(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    pub fn handle(&mut self, action: PageAction) {
        self.list.handle(action, &self.tasks);
    }
}

impl Default for TasksPage {
    fn default() -> Self {
        Self::new()
    }
}
