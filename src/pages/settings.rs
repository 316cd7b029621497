// ABOUTME: Account settings form; edits stay in memory and Save only confirms with a toast

use tracing::info;

use super::{step_cursor, PageAction, PageContext};
use crate::models::{seed, AccountSettings, NotificationSwitch};
use crate::notify::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSetting {
    FirstName,
    LastName,
    Email,
    Phone,
    CurrentPassword,
    NewPassword,
    ConfirmPassword,
}

impl TextSetting {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::CurrentPassword => "Current password",
            Self::NewPassword => "New password",
            Self::ConfirmPassword => "Confirm new password",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::CurrentPassword | Self::NewPassword | Self::ConfirmPassword)
    }
}

/// Focusable rows, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Text(TextSetting),
    Switch(NotificationSwitch),
    Language,
    Timezone,
    Save,
}

pub const ROWS: [SettingsRow; 15] = [
    SettingsRow::Text(TextSetting::FirstName),
    SettingsRow::Text(TextSetting::LastName),
    SettingsRow::Text(TextSetting::Email),
    SettingsRow::Text(TextSetting::Phone),
    SettingsRow::Switch(NotificationSwitch::EmailNotifications),
    SettingsRow::Switch(NotificationSwitch::NewMatchAlerts),
    SettingsRow::Switch(NotificationSwitch::MessageNotifications),
    SettingsRow::Switch(NotificationSwitch::DealUpdates),
    SettingsRow::Switch(NotificationSwitch::ProfileVisibility),
    SettingsRow::Text(TextSetting::CurrentPassword),
    SettingsRow::Text(TextSetting::NewPassword),
    SettingsRow::Text(TextSetting::ConfirmPassword),
    SettingsRow::Language,
    SettingsRow::Timezone,
    SettingsRow::Save,
];

#[derive(Debug, Clone, Default)]
struct PasswordDraft {
    current: String,
    new: String,
    confirm: String,
}

#[derive(Debug, Clone)]
pub struct SettingsPage {
    pub settings: AccountSettings,
    passwords: PasswordDraft,
    pub cursor: usize,
}

impl SettingsPage {
    pub fn new() -> Self {
        Self {
            settings: seed::account_settings(),
            passwords: PasswordDraft::default(),
            cursor: 0,
        }
    }

    pub fn focused(&self) -> SettingsRow {
        ROWS[self.cursor.min(ROWS.len() - 1)]
    }

    pub fn wants_text_input(&self) -> bool {
        matches!(self.focused(), SettingsRow::Text(_))
    }

    pub fn text(&self, setting: TextSetting) -> &str {
        match setting {
            TextSetting::FirstName => &self.settings.first_name,
            TextSetting::LastName => &self.settings.last_name,
            TextSetting::Email => &self.settings.email,
            TextSetting::Phone => &self.settings.phone,
            TextSetting::CurrentPassword => &self.passwords.current,
            TextSetting::NewPassword => &self.passwords.new,
            TextSetting::ConfirmPassword => &self.passwords.confirm,
        }
    }

    fn text_mut(&mut self, setting: TextSetting) -> &mut String {
        match setting {
            TextSetting::FirstName => &mut self.settings.first_name,
            TextSetting::LastName => &mut self.settings.last_name,
            TextSetting::Email => &mut self.settings.email,
            TextSetting::Phone => &mut self.settings.phone,
            TextSetting::CurrentPassword => &mut self.passwords.current,
            TextSetting::NewPassword => &mut self.passwords.new,
            TextSetting::ConfirmPassword => &mut self.passwords.confirm,
        }
    }

    fn activate(&mut self, ctx: &mut PageContext<'_>) {
        match self.focused() {
            SettingsRow::Switch(switch) => self.settings.toggle(switch),
            SettingsRow::Language => self.settings.next_language(),
            SettingsRow::Timezone => self.settings.next_timezone(),
            SettingsRow::Text(_) | SettingsRow::Save => self.save(ctx),
        }
    }

    fn save(&self, ctx: &mut PageContext<'_>) {
        info!(email = %self.settings.email, "Settings saved");
        ctx.notifier.emit(
            Notification::success("Settings saved")
                .with_description("Your changes have been saved."),
        );
    }

    pub fn handle(&mut self, action: PageAction, ctx: &mut PageContext<'_>) {
        match action {
            PageAction::Up => self.cursor = step_cursor(self.cursor, ROWS.len(), false),
            PageAction::Down => self.cursor = step_cursor(self.cursor, ROWS.len(), true),
            PageAction::Confirm => self.activate(ctx),
            PageAction::Toggle => {
                if !self.wants_text_input() {
                    self.activate(ctx);
                }
            }
            PageAction::Char(c) => {
                if let SettingsRow::Text(setting) = self.focused() {
                    self.text_mut(setting).push(c);
                }
            }
            PageAction::Backspace => {
                if let SettingsRow::Text(setting) = self.focused() {
                    self.text_mut(setting).pop();
                }
            }
            _ => {}
        }
    }
}

impl Default for SettingsPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timezone;
    use crate::pages::testing::{Notes, Routes};

    #[test]
    fn test_editing_and_saving() {
        let mut routes = Routes::default();
        let notes = Notes::default();
        let mut page = SettingsPage::new();
        let mut ctx = PageContext { navigator: &mut routes, notifier: &notes };

        page.handle(PageAction::Backspace, &mut ctx);
        page.handle(PageAction::Char('e'), &mut ctx);
        assert_eq!(page.settings.first_name, "Johe");

        for _ in 0..7 {
            page.handle(PageAction::Down, &mut ctx);
        }
        assert_eq!(page.focused(), SettingsRow::Switch(NotificationSwitch::DealUpdates));
        page.handle(PageAction::Toggle, &mut ctx);
        assert!(!page.settings.deal_updates);

        for _ in 0..20 {
            page.handle(PageAction::Down, &mut ctx);
        }
        assert_eq!(page.focused(), SettingsRow::Save);
        page.handle(PageAction::Confirm, &mut ctx);
        assert_eq!(notes.titles(), ["Settings saved"]);
    }

    #[test]
    fn test_timezone_selector_cycles() {
        let mut routes = Routes::default();
        let notes = Notes::default();
        let mut page = SettingsPage::new();
        page.cursor = ROWS.iter().position(|r| *r == SettingsRow::Timezone).unwrap();
        let mut ctx = PageContext { navigator: &mut routes, notifier: &notes };
        page.handle(PageAction::Toggle, &mut ctx);
        assert_eq!(page.settings.timezone, Timezone::Central);
        assert!(notes.titles().is_empty());
    }
}
