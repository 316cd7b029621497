// ABOUTME: Search and category filtering shared by the list pages
// Stable, case-insensitive substring search combined with an "All"-or-exact category match

use std::fmt;

/// Label of the sentinel category that matches everything
pub const ALL_LABEL: &str = "All";

/// A list row that can be searched and bucketed by category
pub trait Filterable {
    type Category: Copy + PartialEq + fmt::Display + 'static;

    /// Fields searched by the free-text filter
    fn search_fields(&self) -> Vec<&str>;

    fn category(&self) -> Self::Category;
}

/// Category half of a filter: everything, or exactly one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn accepts(&self, category: &C) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl<C: fmt::Display> fmt::Display for CategoryFilter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.pad(ALL_LABEL),
            Self::Only(category) => category.fmt(f),
        }
    }
}

fn matches_search<T: Filterable>(item: &T, needle: &str) -> bool {
    needle.is_empty()
        || item
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Items matching both the search term and the category, in source order
pub fn filter<'a, T: Filterable>(
    items: &'a [T],
    search_term: &str,
    category: CategoryFilter<T::Category>,
) -> Vec<&'a T> {
    let needle = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| matches_search(*item, &needle) && category.accepts(&item.category()))
        .collect()
}

/// Filter controls owned by one list page
#[derive(Debug, Clone)]
pub struct ListFilter<C: 'static> {
    pub search_term: String,
    pub category: CategoryFilter<C>,
    categories: &'static [C],
}

impl<C: Copy + PartialEq + fmt::Display + 'static> ListFilter<C> {
    pub fn new(categories: &'static [C]) -> Self {
        Self {
            search_term: String::new(),
            category: CategoryFilter::All,
            categories,
        }
    }

    /// Every choice offered by the filter bar, starting with "All"
    pub fn choices(&self) -> Vec<CategoryFilter<C>> {
        std::iter::once(CategoryFilter::All)
            .chain(self.categories.iter().copied().map(CategoryFilter::Only))
            .collect()
    }

    pub fn apply<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Filterable<Category = C>,
    {
        filter(items, &self.search_term, self.category)
    }

    pub fn push_char(&mut self, c: char) {
        self.search_term.push(c);
    }

    pub fn backspace(&mut self) {
        self.search_term.pop();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    pub fn select(&mut self, category: CategoryFilter<C>) {
        self.category = category;
    }

    /// Move to the next category choice, wrapping back to "All"
    pub fn next_category(&mut self) {
        let choices = self.choices();
        let idx = self.current_index(&choices);
        self.category = choices[(idx + 1) % choices.len()];
    }

    /// Move to the previous category choice, wrapping to the last one
    pub fn previous_category(&mut self) {
        let choices = self.choices();
        let idx = self.current_index(&choices);
        self.category = choices[(idx + choices.len() - 1) % choices.len()];
    }

    fn current_index(&self, choices: &[CategoryFilter<C>]) -> usize {
        choices
            .iter()
            .position(|choice| *choice == self.category)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Shade {
        Light,
        Dark,
    }

    impl fmt::Display for Shade {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(match self {
                Self::Light => "Light",
                Self::Dark => "Dark",
            })
        }
    }

    struct Row {
        name: &'static str,
        tags: Vec<&'static str>,
        shade: Shade,
    }

    impl Filterable for Row {
        type Category = Shade;

        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.name];
            fields.extend(self.tags.iter().copied());
            fields
        }

        fn category(&self) -> Shade {
            self.shade
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Alpha", tags: vec!["red"], shade: Shade::Light },
            Row { name: "Beta", tags: vec!["blue", "green"], shade: Shade::Dark },
            Row { name: "Gamma", tags: vec![], shade: Shade::Light },
        ]
    }

    fn names(rows: &[&Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_empty_search_and_all_returns_everything_in_order() {
        let rows = rows();
        assert_eq!(names(&filter(&rows, "", CategoryFilter::All)), ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_every_field() {
        let rows = rows();
        assert_eq!(names(&filter(&rows, "ALP", CategoryFilter::All)), ["Alpha"]);
        assert_eq!(names(&filter(&rows, "Green", CategoryFilter::All)), ["Beta"]);
        assert!(filter(&rows, "purple", CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_category_and_search_combine() {
        let rows = rows();
        assert_eq!(
            names(&filter(&rows, "", CategoryFilter::Only(Shade::Light))),
            ["Alpha", "Gamma"]
        );
        assert_eq!(names(&filter(&rows, "a", CategoryFilter::Only(Shade::Dark))), ["Beta"]);
    }

    #[test]
    fn test_category_cycling_wraps() {
        let mut list = ListFilter::new(&[Shade::Light, Shade::Dark]);
        assert_eq!(list.category, CategoryFilter::All);
        list.next_category();
        assert_eq!(list.category, CategoryFilter::Only(Shade::Light));
        list.next_category();
        list.next_category();
        assert_eq!(list.category, CategoryFilter::All);
        list.previous_category();
        assert_eq!(list.category, CategoryFilter::Only(Shade::Dark));
    }

    #[test]
    fn test_search_editing() {
        let mut list = ListFilter::new(&[Shade::Light]);
        list.push_char('b');
        list.push_char('e');
        list.backspace();
        assert_eq!(list.search_term, "b");
        let rows = rows();
        assert_eq!(names(&list.apply(&rows)), ["Beta"]);
        list.clear_search();
        assert_eq!(list.apply(&rows).len(), 3);
    }

    #[test]
    fn test_category_filter_labels() {
        assert_eq!(CategoryFilter::<Shade>::All.to_string(), "All");
        assert_eq!(CategoryFilter::Only(Shade::Dark).to_string(), "Dark");
    }
}
