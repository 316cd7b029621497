// ABOUTME: Established matches and incoming match requests

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{parse_label, CategoryParseError};
use crate::filter::Filterable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    Active,
    #[serde(rename = "Pending Response")]
    PendingResponse,
}

impl MatchStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::PendingResponse];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::PendingResponse => "Pending Response",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for MatchStatus {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, "match status", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: u32,
    pub name: String,
    pub company: String,
    pub match_date: NaiveDate,
    pub status: MatchStatus,
    pub initials: String,
    pub last_message: String,
    pub message_time: String,
}

impl Filterable for Match {
    type Category = MatchStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.company]
    }

    fn category(&self) -> MatchStatus {
        self.status
    }
}

/// A buyer waiting for the seller to accept or decline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub id: u32,
    pub name: String,
    pub company: String,
    pub initials: String,
    pub budget_range: String,
    pub industries: Vec<String>,
}
