//! Client-side pagination math. Pure slicing; the source data is never
//! mutated and changing page is a recompute, not a refetch.

/// Number of pages for `len` items at `page_size` per page. Zero items is
/// one (empty) page so the controls always have something to show.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// The slice of `items` visible on `page` (0-indexed). Out-of-range pages
/// yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return items;
    }
    let start = page.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_three_rows_at_seven_make_four_pages() {
        let rows: Vec<usize> = (0..23).collect();
        assert_eq!(total_pages(rows.len(), 7), 4);
        assert_eq!(page_slice(&rows, 0, 7).len(), 7);
        assert_eq!(page_slice(&rows, 1, 7).len(), 7);
        assert_eq!(page_slice(&rows, 2, 7).len(), 7);
        assert_eq!(page_slice(&rows, 3, 7), &[21, 22]);
    }

    #[test]
    fn navigating_back_reproduces_the_first_page() {
        let rows: Vec<usize> = (0..23).collect();
        let first: Vec<usize> = page_slice(&rows, 0, 7).to_vec();
        let _ = page_slice(&rows, 3, 7);
        assert_eq!(page_slice(&rows, 0, 7), first.as_slice());
        assert_eq!(rows, (0..23).collect::<Vec<_>>());
    }

    #[test]
    fn empty_data_still_has_one_page() {
        let rows: Vec<usize> = Vec::new();
        assert_eq!(total_pages(rows.len(), 7), 1);
        assert!(page_slice(&rows, 0, 7).is_empty());
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let rows: Vec<usize> = (0..3).collect();
        assert!(page_slice(&rows, 5, 7).is_empty());
    }
}
