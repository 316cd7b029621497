// ABOUTME: CLI list command - run the list filter over the seed data and print the matches
//
// Same search and category semantics as the list pages; output as a text table or JSON

use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;

use super::{ListArgs, ListTarget, OutputFormat};
use crate::filter::{filter, CategoryFilter, Filterable, ALL_LABEL};
use crate::models::{seed, Buyer, CategoryParseError, Conversation, Document, Match, Task};

/// One line of the text table
trait TextRow {
    fn header() -> String;
    fn row(&self) -> String;
}

impl TextRow for Buyer {
    fn header() -> String {
        format!("{:<4} {:<18} {:<22} {:<20} INDUSTRIES", "ID", "NAME", "STATUS", "BUDGET")
    }

    fn row(&self) -> String {
        format!(
            "{:<4} {:<18} {:<22} {:<20} {}",
            self.id,
            truncate(&self.name, 18),
            self.status,
            self.budget_range,
            self.industries.join(", ")
        )
    }
}

impl TextRow for Match {
    fn header() -> String {
        format!("{:<4} {:<18} {:<24} {:<18} MATCHED", "ID", "NAME", "COMPANY", "STATUS")
    }

    fn row(&self) -> String {
        format!(
            "{:<4} {:<18} {:<24} {:<18} {}",
            self.id,
            truncate(&self.name, 18),
            truncate(&self.company, 24),
            self.status,
            self.match_date
        )
    }
}

impl TextRow for Conversation {
    fn header() -> String {
        format!("{:<4} {:<18} {:<24} {:<7} LAST MESSAGE", "ID", "NAME", "COMPANY", "UNREAD")
    }

    fn row(&self) -> String {
        format!(
            "{:<4} {:<18} {:<24} {:<7} {}",
            self.id,
            truncate(&self.name, 18),
            truncate(&self.company, 24),
            self.unread,
            truncate(&self.last_message, 40)
        )
    }
}

impl TextRow for Task {
    fn header() -> String {
        format!("{:<4} {:<36} {:<8} {:<12} DUE", "ID", "TITLE", "PRIORITY", "STATUS")
    }

    fn row(&self) -> String {
        format!(
            "{:<4} {:<36} {:<8} {:<12} {}",
            self.id,
            truncate(&self.title, 36),
            self.priority,
            self.status,
            self.due_date
        )
    }
}

impl TextRow for Document {
    fn header() -> String {
        format!("{:<4} {:<32} {:<16} {:<10} STATUS", "ID", "NAME", "CATEGORY", "SIZE")
    }

    fn row(&self) -> String {
        format!(
            "{:<4} {:<32} {:<16} {:<10} {}",
            self.id,
            truncate(&self.name, 32),
            self.category,
            self.size_label(),
            self.status
        )
    }
}

/// Parse a category label; "All" (any case) or no label means no category filter
pub fn parse_category<C>(label: Option<&str>) -> Result<CategoryFilter<C>, CategoryParseError>
where
    C: FromStr<Err = CategoryParseError>,
{
    match label {
        None => Ok(CategoryFilter::All),
        Some(label) if label.trim().eq_ignore_ascii_case(ALL_LABEL) => Ok(CategoryFilter::All),
        Some(label) => label.parse().map(CategoryFilter::Only),
    }
}

pub fn execute(args: ListArgs, format: OutputFormat) -> Result<()> {
    let search = args.search.as_str();
    let category = args.category.as_deref();
    match args.page {
        ListTarget::Dashboard => print_filtered(&seed::buyers(), search, category, format),
        ListTarget::Matches => print_filtered(&seed::matches(), search, category, format),
        ListTarget::Messages => print_filtered(&seed::conversations(), search, category, format),
        ListTarget::Tasks => print_filtered(&seed::tasks(), search, category, format),
        ListTarget::Documents => print_filtered(&seed::documents(), search, category, format),
    }
}

fn print_filtered<T>(items: &[T], search: &str, category: Option<&str>, format: OutputFormat) -> Result<()>
where
    T: Filterable + Serialize + TextRow,
    T::Category: FromStr<Err = CategoryParseError>,
{
    let category = parse_category::<T::Category>(category)?;
    let rows = filter(items, search, category);

    match format {
        OutputFormat::Json => output_json(&rows)?,
        OutputFormat::Text => output_text(&rows),
    }
    Ok(())
}

fn output_json<T: Serialize>(rows: &[&T]) -> Result<()> {
    let json = serde_json::to_string_pretty(rows)?;
    println!("{json}");
    Ok(())
}

fn output_text<T: TextRow>(rows: &[&T]) {
    if rows.is_empty() {
        println!("No results found.");
        return;
    }

    let header = T::header();
    println!("{header}");
    println!("{}", "-".repeat(header.chars().count().max(60)));
    for row in rows {
        println!("{}", row.row());
    }
}

/// Truncate a string to fit in the given width (character-aware for UTF-8)
fn truncate(s: &str, max_len: usize) -> String {
    if max_len <= 3 {
        return ".".repeat(max_len);
    }
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BuyerStatus, DocumentCategory};

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category::<BuyerStatus>(None).unwrap(), CategoryFilter::All);
        assert_eq!(parse_category::<BuyerStatus>(Some("all")).unwrap(), CategoryFilter::All);
        assert_eq!(
            parse_category::<BuyerStatus>(Some("research phase")).unwrap(),
            CategoryFilter::Only(BuyerStatus::ResearchPhase)
        );
        assert_eq!(
            parse_category::<DocumentCategory>(Some("Legal")).unwrap(),
            CategoryFilter::Only(DocumentCategory::Legal)
        );
    }

    #[test]
    fn test_unknown_category_names_the_choices() {
        let err = parse_category::<BuyerStatus>(Some("Window Shopping")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Window Shopping"));
        assert!(message.contains("Ready to Buy"));
    }

    #[test]
    fn test_json_rows_use_camel_case() {
        let buyers = seed::buyers();
        let rows = filter(&buyers, "sarah", CategoryFilter::All);
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["name"], "Sarah Chen");
        assert!(json[0].get("budgetRange").is_some());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_text_rows_render() {
        let tasks = seed::tasks();
        assert!(tasks[0].row().starts_with("1 "));
        assert!(Task::header().contains("PRIORITY"));
    }
}
