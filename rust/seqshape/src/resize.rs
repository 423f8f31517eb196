//! In-place padding of growable sequences.

/// Pads `list` with `None` until it holds at least `size` elements.
///
/// Existing elements are left untouched, and a list that is already long
/// enough is not modified.
pub fn ensure_size<T>(list: &mut Vec<Option<T>>, size: usize) {
    ensure_size_with(list, size, || None);
}

/// Pads `list` with values produced by `filler` until it holds at least `size`
/// elements.
///
/// The missing capacity is reserved once before padding.
pub fn ensure_size_with<T, F>(list: &mut Vec<T>, size: usize, filler: F)
where
    F: FnMut() -> T,
{
    if list.len() >= size {
        return;
    }
    list.reserve_exact(size - list.len());
    list.resize_with(size, filler);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_size_pads_with_none() {
        let mut list = vec![Some("a"), Some("b")];
        ensure_size(&mut list, 5);
        assert_eq!(list, vec![Some("a"), Some("b"), None, None, None]);
    }

    #[test]
    fn test_ensure_size_noop_when_long_enough() {
        let mut list = vec![Some(1), None, Some(3)];
        ensure_size(&mut list, 3);
        assert_eq!(list, vec![Some(1), None, Some(3)]);
        ensure_size(&mut list, 0);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_ensure_size_empty_list() {
        let mut list: Vec<Option<u64>> = Vec::new();
        ensure_size(&mut list, 2);
        assert_eq!(list, vec![None, None]);
        assert!(list.capacity() >= 2);
    }

    #[test]
    fn test_ensure_size_with_filler() {
        let mut list = vec![7u32];
        let mut next = 0;
        ensure_size_with(&mut list, 4, || {
            next += 1;
            next
        });
        assert_eq!(list, vec![7, 1, 2, 3]);
    }
}
