// ABOUTME: Seller business profile as seen by potential buyers

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub name: String,
    pub industry: String,
    pub founded: String,
    pub employees: String,
    pub location: String,
    pub revenue: String,
    pub asking_price: String,
    pub description: String,
    pub tags: Vec<String>,
    pub financial_highlights: Vec<(String, String)>,
    pub competitive_advantages: Vec<String>,
    pub growth_opportunities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    pub name: String,
    pub title: String,
    pub experience: String,
    pub previous_exits: u32,
    pub education: String,
}

impl OwnerProfile {
    pub fn initials(&self) -> String {
        super::initials(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub label: String,
    pub value: String,
}
