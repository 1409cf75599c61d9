//! Copy-with-update helpers for list fields of a form.
//!
//! Row editors never mutate the list they read from; each helper returns the
//! replacement list which is then written back as a whole.

/// Replace row `index` with the result of `f`. Out-of-range is a no-op.
pub fn update_row<T, F>(rows: &[T], index: usize, f: F) -> Vec<T>
where
    T: Clone,
    F: FnOnce(&mut T),
{
    let mut next = rows.to_vec();
    if let Some(row) = next.get_mut(index) {
        f(row);
    }
    next
}

pub fn push_row<T: Clone>(rows: &[T], row: T) -> Vec<T> {
    let mut next = rows.to_vec();
    next.push(row);
    next
}

/// Remove row `index` unless the list would drop below `min_len` rows.
pub fn remove_row<T: Clone>(rows: &[T], index: usize, min_len: usize) -> Vec<T> {
    let mut next = rows.to_vec();
    if index < next.len() && next.len() > min_len {
        next.remove(index);
    }
    next
}

/// Append a copy of row `index` to the end of the list.
pub fn duplicate_row<T: Clone>(rows: &[T], index: usize) -> Vec<T> {
    let mut next = rows.to_vec();
    if let Some(row) = rows.get(index) {
        next.push(row.clone());
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_row_leaves_source_untouched() {
        let rows = vec![1, 2, 3];
        let next = update_row(&rows, 1, |v| *v = 20);
        assert_eq!(next, vec![1, 20, 3]);
        assert_eq!(rows, vec![1, 2, 3]);
        assert_eq!(update_row(&rows, 9, |v| *v = 0), rows);
    }

    #[test]
    fn test_remove_respects_min_len() {
        let rows = vec!["a"];
        assert_eq!(remove_row(&rows, 0, 1), vec!["a"]);
        assert_eq!(remove_row(&rows, 0, 0), Vec::<&str>::new());
        assert_eq!(remove_row(&["a", "b"], 0, 1), vec!["b"]);
    }

    #[test]
    fn test_duplicate_and_push() {
        assert_eq!(duplicate_row(&["a", "b"], 0), vec!["a", "b", "a"]);
        assert_eq!(duplicate_row(&["a"], 5), vec!["a"]);
        assert_eq!(push_row(&["a"], "b"), vec!["a", "b"]);
    }
}
