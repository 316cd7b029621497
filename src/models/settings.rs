// ABOUTME: Account settings form: profile fields, notification switches and preferences

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationSwitch {
    EmailNotifications,
    NewMatchAlerts,
    MessageNotifications,
    DealUpdates,
    ProfileVisibility,
}

impl NotificationSwitch {
    pub const ALL: [Self; 5] = [
        Self::EmailNotifications,
        Self::NewMatchAlerts,
        Self::MessageNotifications,
        Self::DealUpdates,
        Self::ProfileVisibility,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::EmailNotifications => "Email Notifications",
            Self::NewMatchAlerts => "New Match Alerts",
            Self::MessageNotifications => "Message Notifications",
            Self::DealUpdates => "Deal Updates",
            Self::ProfileVisibility => "Profile Visibility",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::EmailNotifications => "Receive notifications via email",
            Self::NewMatchAlerts => "Get notified when you have new buyer matches",
            Self::MessageNotifications => "Get notified when you receive new messages",
            Self::DealUpdates => "Notifications about deal progress and milestones",
            Self::ProfileVisibility => "Make your profile visible to potential buyers",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    EnglishUs,
    Spanish,
    French,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::EnglishUs, Self::Spanish, Self::French];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EnglishUs => "English (US)",
            Self::Spanish => "Spanish",
            Self::French => "French",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Timezone {
    #[default]
    Eastern,
    Central,
    Mountain,
    Pacific,
}

impl Timezone {
    pub const ALL: [Self; 4] = [Self::Eastern, Self::Central, Self::Mountain, Self::Pacific];
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Eastern => "Eastern Time (ET)",
            Self::Central => "Central Time (CT)",
            Self::Mountain => "Mountain Time (MT)",
            Self::Pacific => "Pacific Time (PT)",
        })
    }
}

/// Pick the entry after `current`, wrapping around
pub fn cycle<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + 1) % all.len()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub email_notifications: bool,
    pub new_match_alerts: bool,
    pub message_notifications: bool,
    pub deal_updates: bool,
    pub profile_visibility: bool,
    pub language: Language,
    pub timezone: Timezone,
}

impl AccountSettings {
    pub fn switch(&self, switch: NotificationSwitch) -> bool {
        match switch {
            NotificationSwitch::EmailNotifications => self.email_notifications,
            NotificationSwitch::NewMatchAlerts => self.new_match_alerts,
            NotificationSwitch::MessageNotifications => self.message_notifications,
            NotificationSwitch::DealUpdates => self.deal_updates,
            NotificationSwitch::ProfileVisibility => self.profile_visibility,
        }
    }

    pub fn toggle(&mut self, switch: NotificationSwitch) {
        let slot = match switch {
            NotificationSwitch::EmailNotifications => &mut self.email_notifications,
            NotificationSwitch::NewMatchAlerts => &mut self.new_match_alerts,
            NotificationSwitch::MessageNotifications => &mut self.message_notifications,
            NotificationSwitch::DealUpdates => &mut self.deal_updates,
            NotificationSwitch::ProfileVisibility => &mut self.profile_visibility,
        };
        *slot = !*slot;
    }

    pub fn next_language(&mut self) {
        self.language = cycle(&Language::ALL, self.language);
    }

    pub fn next_timezone(&mut self) {
        self.timezone = cycle(&Timezone::ALL, self.timezone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed;

    #[test]
    fn test_switches_default_on_and_toggle() {
        let mut settings = seed::account_settings();
        for switch in NotificationSwitch::ALL {
            assert!(settings.switch(switch), "{} should start on", switch.label());
        }
        settings.toggle(NotificationSwitch::DealUpdates);
        assert!(!settings.switch(NotificationSwitch::DealUpdates));
        assert!(settings.switch(NotificationSwitch::NewMatchAlerts));
    }

    #[test]
    fn test_preference_cycling_wraps() {
        let mut settings = seed::account_settings();
        settings.next_timezone();
        assert_eq!(settings.timezone, Timezone::Central);
        for _ in 0..3 {
            settings.next_timezone();
        }
        assert_eq!(settings.timezone, Timezone::Eastern);
        settings.next_language();
        assert_eq!(settings.language.to_string(), "Spanish");
    }
}
