// ABOUTME: Sign-in form; submit needs both fields filled, credentials are not checked

use tracing::info;

use super::{step_cursor, PageAction, PageContext};
use crate::notify::Notification;
use crate::router::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInField {
    Email,
    Password,
    Submit,
    CreateAccount,
}

impl SignInField {
    const ORDER: [Self; 4] = [Self::Email, Self::Password, Self::Submit, Self::CreateAccount];
}

#[derive(Debug, Clone)]
pub struct SignInPage {
    pub email: String,
    pub password: String,
    pub focus: SignInField,
}

impl SignInPage {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focus: SignInField::Email,
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.trim().is_empty()
    }

    pub fn wants_text_input(&self) -> bool {
        matches!(self.focus, SignInField::Email | SignInField::Password)
    }

    /// Password shown as bullets
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }

    fn move_focus(&mut self, forward: bool) {
        let idx = SignInField::ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = SignInField::ORDER[step_cursor(idx, SignInField::ORDER.len(), forward)];
    }

    fn submit(&mut self, ctx: &mut PageContext<'_>) {
        if !self.can_submit() {
            return;
        }
        info!(email = %self.email, "Signed in");
        ctx.notifier.emit(
            Notification::success("Welcome back").with_description("You're signed in to Caprae Capital."),
        );
        ctx.navigator.push(Route::Dashboard);
    }

    pub fn handle(&mut self, action: PageAction, ctx: &mut PageContext<'_>) {
        match action {
            PageAction::Up => self.move_focus(false),
            PageAction::Down => self.move_focus(true),
            PageAction::Cancel => ctx.navigator.push(Route::Landing),
            PageAction::Confirm => match self.focus {
                SignInField::CreateAccount => ctx.navigator.push(Route::OnboardingSelection),
                _ => self.submit(ctx),
            },
            PageAction::Char(c) => match self.focus {
                SignInField::Email => self.email.push(c),
                SignInField::Password => self.password.push(c),
                _ => {}
            },
            PageAction::Backspace => match self.focus {
                SignInField::Email => {
                    self.email.pop();
                }
                SignInField::Password => {
                    self.password.pop();
                }
                _ => {}
            },
            _ => {}
        }
    }
}

impl Default for SignInPage {
    fn default() -> Self {
        Self::new()
    }
}
