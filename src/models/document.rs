// ABOUTME: Data-room documents grouped by category

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{parse_label, CategoryParseError};
use crate::filter::Filterable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentCategory {
    Financial,
    Legal,
    #[serde(rename = "Business Plans")]
    BusinessPlans,
    #[serde(rename = "Due Diligence")]
    DueDiligence,
    Contracts,
}

impl DocumentCategory {
    pub const ALL: [Self; 5] = [
        Self::Financial,
        Self::Legal,
        Self::BusinessPlans,
        Self::DueDiligence,
        Self::Contracts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Financial => "Financial",
            Self::Legal => "Legal",
            Self::BusinessPlans => "Business Plans",
            Self::DueDiligence => "Due Diligence",
            Self::Contracts => "Contracts",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for DocumentCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, "document category", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: u32,
    pub name: String,
    pub file_type: String,
    /// Size in kilobytes
    pub size_kb: u32,
    pub category: DocumentCategory,
    pub upload_date: NaiveDate,
    pub status: String,
    pub shared: bool,
}

impl Document {
    /// "2.4 MB" above a megabyte, "156 KB" below
    pub fn size_label(&self) -> String {
        format_size(u64::from(self.size_kb))
    }

    pub fn is_verified(&self) -> bool {
        self.status == "Verified"
    }
}

/// Human size for a kilobyte count
pub fn format_size(size_kb: u64) -> String {
    if size_kb >= 1000 {
        let tenths = (size_kb + 50) / 100;
        format!("{}.{} MB", tenths / 10, tenths % 10)
    } else {
        format!("{size_kb} KB")
    }
}

impl Filterable for Document {
    type Category = DocumentCategory;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn category(&self) -> DocumentCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_labels() {
        assert_eq!(format_size(2400), "2.4 MB");
        assert_eq!(format_size(156), "156 KB");
        assert_eq!(format_size(4100), "4.1 MB");
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in DocumentCategory::ALL {
            assert_eq!(category.label().parse::<DocumentCategory>(), Ok(category));
        }
    }
}
