// ABOUTME: Shared search bar, category bar and cursor for the filterable list pages

use std::fmt;

use super::{step_cursor, PageAction};
use crate::filter::{Filterable, ListFilter};

#[derive(Debug, Clone)]
pub struct ListPage<C: 'static> {
    pub filter: ListFilter<C>,
    /// Index into the filtered rows
    pub cursor: usize,
    /// Search box has focus
    pub searching: bool,
}

impl<C: Copy + PartialEq + fmt::Display + 'static> ListPage<C> {
    pub fn new(categories: &'static [C]) -> Self {
        Self {
            filter: ListFilter::new(categories),
            cursor: 0,
            searching: false,
        }
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Filterable<Category = C>,
    {
        self.filter.apply(items)
    }

    /// Row under the cursor, if the filter left any
    pub fn selected<'a, T>(&self, items: &'a [T]) -> Option<&'a T>
    where
        T: Filterable<Category = C>,
    {
        self.visible(items).get(self.cursor).copied()
    }

    /// Handle search, category and cursor keys. Returns false for keys left to the page.
    pub fn handle<T>(&mut self, action: PageAction, items: &[T]) -> bool
    where
        T: Filterable<Category = C>,
    {
        if self.searching {
            match action {
                PageAction::Char(c) => self.filter.push_char(c),
                PageAction::Backspace => self.filter.backspace(),
                PageAction::Confirm | PageAction::Cancel => self.searching = false,
                PageAction::Up | PageAction::Down => {
                    self.searching = false;
                    return self.handle(action, items);
                }
                PageAction::Left | PageAction::Right | PageAction::Toggle => return false,
            }
            self.clamp(items);
            return true;
        }

        match action {
            PageAction::Char('/') => self.searching = true,
            PageAction::Left | PageAction::Char('[') => self.filter.previous_category(),
            PageAction::Right | PageAction::Char(']') => self.filter.next_category(),
            PageAction::Up | PageAction::Char('k') => {
                self.cursor = step_cursor(self.cursor, self.visible(items).len(), false);
            }
            PageAction::Down | PageAction::Char('j') => {
                self.cursor = step_cursor(self.cursor, self.visible(items).len(), true);
            }
            PageAction::Backspace => self.filter.clear_search(),
            _ => return false,
        }
        self.clamp(items);
        true
    }

    fn clamp<T>(&mut self, items: &[T])
    where
        T: Filterable<Category = C>,
    {
        let len = self.visible(items).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFilter;
    use crate::models::{seed, BuyerStatus};

    #[test]
    fn test_typing_in_search_narrows_rows() {
        let buyers = seed::buyers();
        let mut list = ListPage::new(&BuyerStatus::ALL);
        assert!(list.handle(PageAction::Char('/'), &buyers));
        assert!(list.searching);
        for c in "park".chars() {
            list.handle(PageAction::Char(c), &buyers);
        }
        assert_eq!(list.selected(&buyers).map(|b| b.name.as_str()), Some("Emily Park"));
        list.handle(PageAction::Confirm, &buyers);
        assert!(!list.searching);
    }

    #[test]
    fn test_cursor_clamps_when_filter_shrinks() {
        let buyers = seed::buyers();
        let mut list = ListPage::new(&BuyerStatus::ALL);
        for _ in 0..10 {
            list.handle(PageAction::Down, &buyers);
        }
        assert_eq!(list.cursor, 3);

        list.handle(PageAction::Right, &buyers);
        assert_eq!(list.filter.category, CategoryFilter::Only(BuyerStatus::ReadyToBuy));
        assert_eq!(list.cursor, 1);
    }

    #[test]
    fn test_page_keys_pass_through() {
        let buyers = seed::buyers();
        let mut list = ListPage::new(&BuyerStatus::ALL);
        assert!(!list.handle(PageAction::Char('c'), &buyers));
        assert!(!list.handle(PageAction::Confirm, &buyers));
    }
}
