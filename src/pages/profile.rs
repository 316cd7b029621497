// ABOUTME: Read-only business profile page

use super::PageAction;
use crate::models::{seed, Achievement, BusinessProfile, OwnerProfile};

#[derive(Debug, Clone)]
pub struct ProfilePage {
    pub business: BusinessProfile,
    pub owner: OwnerProfile,
    pub achievements: Vec<Achievement>,
    /// Lines scrolled off the top
    pub scroll: u16,
}

impl ProfilePage {
    pub fn new() -> Self {
        Self {
            business: seed::business_profile(),
            owner: seed::owner_profile(),
            achievements: seed::achievements(),
            scroll: 0,
        }
    }

    pub fn handle(&mut self, action: PageAction) {
        match action {
            PageAction::Up | PageAction::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            PageAction::Down | PageAction::Char('j') => self.scroll = self.scroll.saturating_add(1),
            _ => {}
        }
    }
}

impl Default for ProfilePage {
    fn default() -> Self {
        Self::new()
    }
}
