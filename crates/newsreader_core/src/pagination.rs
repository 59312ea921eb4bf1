/// Returns the slice of `items` shown on `current_page` (1-based).
///
/// Pages outside `1..=page_count` yield an empty slice, never a panic.
pub fn paginate<T>(current_page: usize, page_size: usize, items: &[T]) -> &[T] {
    if current_page == 0 || page_size == 0 {
        return &[];
    }
    let start = (current_page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of page selectors needed for `total` items.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
