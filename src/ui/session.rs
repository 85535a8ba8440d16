/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of gear-speed.
 *
 * gear-speed is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * gear-speed is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with gear-speed. If not, see <https://www.gnu.org/licenses/>.
 */

use std::num::NonZeroUsize;
use gearing::query::{filter_and_sort, total_pages};
use gearing::{list, GearCombination, InputSpeedFilter, Listing, SortKey};
use crate::ui::format::page_indicator;

/// Browsing state for the combination table.
///
/// The engine keeps no cursor, so the current page, filter and sort live here
/// and every render asks for a fresh [`Listing`].
#[derive(Debug, Clone)]
pub struct Session {
    data: Vec<GearCombination>,
    page: usize,
    filter: InputSpeedFilter,
    sort_key: SortKey,
    page_size: NonZeroUsize
}

impl Session {
    pub fn new(data: Vec<GearCombination>, page_size: NonZeroUsize) -> Session {
        Session {
            data,
            page: 1,
            filter: InputSpeedFilter::All,
            sort_key: SortKey::default(),
            page_size
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn filter(&self) -> InputSpeedFilter {
        self.filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn listing(&self) -> Listing {
        list(&self.data, self.filter, self.sort_key, self.page, self.page_size)
    }

    /// Every row the current filter and sort select, ignoring paging.
    pub fn all_rows(&self) -> Vec<GearCombination> {
        filter_and_sort(&self.data, self.filter, self.sort_key)
    }

    pub fn total_pages(&self) -> usize {
        let count = self.data.iter().filter(|c| self.filter.matches(c)).count();
        total_pages(count, self.page_size)
    }

    pub fn set_filter(&mut self, filter: InputSpeedFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
        self.page = 1;
    }

    /// Jump to `page`, clamped into the valid range. Returns the page landed on.
    pub fn go_to(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.total_pages());
        self.page
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn page_indicator(&self) -> String {
        page_indicator(self.page, self.total_pages())
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;
    use gearing::model::generate_default_combinations;
    use gearing::{InputSpeedFilter, SortKey};
    use crate::ui::session::Session;

    fn session() -> Session {
        Session::new(generate_default_combinations().unwrap(), NonZeroUsize::new(10).unwrap())
    }

    #[test]
    fn starts_on_first_page() {
        let session = session();
        assert_eq!(session.page(), 1);
        assert_eq!(session.total_pages(), 15);
        assert!(!session.has_prev());
        assert!(session.has_next());
        assert_eq!(session.page_indicator(), "Page 1 of 15");
        assert_eq!(session.listing().items.len(), 10);
    }

    #[test]
    fn paging_is_clamped() {
        let mut session = session();
        assert!(!session.prev_page());
        for _ in 0..14 {
            assert!(session.next_page());
        }
        assert_eq!(session.page(), 15);
        assert!(!session.has_next());
        assert!(!session.next_page());
        assert_eq!(session.listing().items.len(), 7);
        assert!(session.prev_page());
        assert_eq!(session.page(), 14);
        assert_eq!(session.go_to(99), 15);
        assert_eq!(session.go_to(0), 1);
    }

    #[test]
    fn next_page_bound_uses_filtered_count() {
        let mut session = session();
        session.set_filter(InputSpeedFilter::Only(600.0));
        assert_eq!(session.total_pages(), 5);
        while session.next_page() {}
        assert_eq!(session.page(), 5);
        assert_eq!(session.listing().items.len(), 9);
    }

    #[test]
    fn changing_filter_or_sort_resets_page() {
        let mut session = session();
        session.go_to(4);
        session.set_sort_key(SortKey::RatioDesc);
        assert_eq!(session.page(), 1);
        assert_eq!(session.sort_key(), SortKey::RatioDesc);
        session.go_to(3);
        session.set_filter(InputSpeedFilter::Only(100.0));
        assert_eq!(session.page(), 1);
        assert_eq!(session.filter(), InputSpeedFilter::Only(100.0));
    }

    #[test]
    fn empty_filter_still_has_one_page() {
        let mut session = session();
        session.set_filter(InputSpeedFilter::Only(42.0));
        assert_eq!(session.total_pages(), 1);
        assert!(!session.has_next());
        assert!(session.listing().items.is_empty());
        assert_eq!(session.page_indicator(), "Page 1 of 1");
    }
}
