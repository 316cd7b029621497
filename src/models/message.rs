// ABOUTME: Conversations and chat messages for the messages page

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{parse_label, CategoryParseError};
use crate::filter::Filterable;

/// Conversation bucket used by the messages filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadState {
    Unread,
    Read,
}

impl ReadState {
    pub const ALL: [Self; 2] = [Self::Unread, Self::Read];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unread => "Unread",
            Self::Read => "Read",
        }
    }
}

impl fmt::Display for ReadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for ReadState {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, "read state", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: u32,
    pub name: String,
    pub company: String,
    pub last_message: String,
    pub time: String,
    pub unread: u32,
    pub initials: String,
}

impl Filterable for Conversation {
    type Category = ReadState;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.company]
    }

    fn category(&self) -> ReadState {
        if self.unread > 0 {
            ReadState::Unread
        } else {
            ReadState::Read
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u32,
    pub sender: String,
    pub body: String,
    pub time: String,
    pub is_own: bool,
}
