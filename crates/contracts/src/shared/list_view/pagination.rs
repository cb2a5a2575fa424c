use serde::{Deserialize, Serialize};

/// Current page (1-based) and page size of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Bring `current_page` back into `[1, total_pages]`
    pub fn clamp(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(10)
    }
}

/// One rendered page
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// Number of pages for `count` items; an empty list still has page 1
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Cut page `current_page` (1-based) out of `records`.
/// Out-of-range pages give an empty slice rather than a panic.
pub fn paginate<T: Clone>(records: &[T], current_page: usize, page_size: usize) -> PageSlice<T> {
    let page_size = page_size.max(1);
    let start = current_page.saturating_sub(1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(records.len());
    PageSlice {
        items: records.get(start..end).unwrap_or(&[]).to_vec(),
        total_pages: total_pages(records.len(), page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_five_items_by_ten() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 3, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_empty_input_has_one_page() {
        let page = paginate::<u32>(&[], 1, 10);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_out_of_range_pages() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, 9, 10).items.is_empty());
        // page 0 is read as page 1
        assert_eq!(paginate(&items, 0, 2).items, vec![1, 2]);
        assert_eq!(paginate(&items, usize::MAX, 2).items, Vec::<u32>::new());
    }

    #[test]
    fn test_pages_concatenate_to_input() {
        let items: Vec<u32> = (0..37).collect();
        for size in 1..=40 {
            let pages = total_pages(items.len(), size);
            let mut joined = Vec::new();
            for p in 1..=pages {
                let slice = paginate(&items, p, size);
                assert!(slice.items.len() <= size);
                joined.extend(slice.items);
            }
            assert_eq!(joined, items, "page size {size}");
        }
    }

    #[test]
    fn test_clamp() {
        let mut state = PageState { current_page: 3, page_size: 10 };
        state.clamp(2);
        assert_eq!(state.current_page, 2);
        state.current_page = 0;
        state.clamp(0);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        assert_eq!(PageState::new(0).page_size, 1);
        assert_eq!(total_pages(3, 0), 3);
    }
}
