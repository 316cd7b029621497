// ABOUTME: Prospective buyer profiles listed on the dashboard

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{parse_label, CategoryParseError};
use crate::filter::Filterable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuyerStatus {
    #[serde(rename = "Ready to Buy")]
    ReadyToBuy,
    #[serde(rename = "Research Phase")]
    ResearchPhase,
    #[serde(rename = "Active Negotiations")]
    ActiveNegotiations,
}

impl BuyerStatus {
    pub const ALL: [Self; 3] = [
        Self::ReadyToBuy,
        Self::ResearchPhase,
        Self::ActiveNegotiations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ReadyToBuy => "Ready to Buy",
            Self::ResearchPhase => "Research Phase",
            Self::ActiveNegotiations => "Active Negotiations",
        }
    }
}

impl fmt::Display for BuyerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for BuyerStatus {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, "buyer status", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    pub id: u32,
    pub name: String,
    pub company: Option<String>,
    pub budget_range: String,
    pub industries: Vec<String>,
    pub location: String,
    pub timeline: String,
    pub status: BuyerStatus,
    pub bio: Option<String>,
    pub previous_acquisitions: u32,
    pub experience: String,
}

impl Buyer {
    /// Industries shown on a card, plus how many were left out
    pub fn industry_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.industries.len().min(limit);
        (&self.industries[..shown], self.industries.len() - shown)
    }
}

impl Filterable for Buyer {
    type Category = BuyerStatus;

    fn search_fields(&self) -> Vec<&str> {
        std::iter::once(self.name.as_str())
            .chain(self.industries.iter().map(String::as_str))
            .collect()
    }

    fn category(&self) -> BuyerStatus {
        self.status
    }
}
