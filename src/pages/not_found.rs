// ABOUTME: Fallback page for paths outside the route table

use tracing::warn;

use super::{PageAction, PageContext};
use crate::router::Route;

#[derive(Debug, Clone)]
pub struct NotFoundPage {
    pub path: String,
}

impl NotFoundPage {
    pub fn new(path: String) -> Self {
        warn!(path = %path, "User attempted to access non-existent route");
        Self { path }
    }

    pub fn handle(&mut self, action: PageAction, ctx: &mut PageContext<'_>) {
        if matches!(action, PageAction::Confirm | PageAction::Cancel) {
            ctx.navigator.push(Route::Landing);
        }
    }
}
