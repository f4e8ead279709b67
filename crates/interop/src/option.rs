//! Lookups that may legitimately find nothing.

/// Index of the first element satisfying `predicate`, or `None`.
///
/// `None` for an empty sequence. The input is never modified.
pub fn find_index<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> Option<usize> {
    items.iter().position(predicate)
}

/// First element satisfying `predicate`, or `None`.
pub fn find_first<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> Option<&T> {
    items.iter().find(|item| predicate(item))
}

/// Bounds-checked indexing.
pub fn lookup<T>(items: &[T], index: usize) -> Option<&T> {
    items.get(index)
}

/// `Some(value)` if `predicate` holds for it, otherwise `None`.
pub fn from_predicate<T>(value: T, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
    if predicate(&value) { Some(value) } else { None }
}

/// The held value, or the result of `default` when absent.
///
/// `default` is only invoked for `None`.
pub fn get_or_else_option<T>(option: Option<T>, default: impl FnOnce() -> T) -> T {
    option.unwrap_or_else(default)
}

/// Build a handler that dispatches on an `Option`.
///
/// Each application of the returned function invokes exactly one branch,
/// exactly once: `on_none()` for `None`, `on_some(value)` for `Some(value)`.
///
/// ```ignore
/// let describe = match_option(|| "no value".to_string(), |i| format!("index {i}"));
/// assert_eq!(describe(Some(0)), "index 0");
/// assert_eq!(describe(None), "no value");
/// ```
pub fn match_option<T, R>(
    on_none: impl Fn() -> R,
    on_some: impl Fn(T) -> R,
) -> impl Fn(Option<T>) -> R {
    move |option| match option {
        Some(value) => on_some(value),
        None => on_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    struct Record {
        id: u32,
    }

    fn records() -> Vec<Record> {
        vec![Record { id: 1 }, Record { id: 2 }]
    }

    #[test]
    fn find_index_returns_first_match() {
        assert_eq!(find_index(&records(), |r| r.id == 1), Some(0));
        assert_eq!(find_index(&records(), |r| r.id == 2), Some(1));
        assert_eq!(find_index(&[1, 2, 2, 3], |n| *n == 2), Some(1));
    }

    #[test]
    fn find_index_without_match_is_none() {
        assert_eq!(find_index(&records(), |r| r.id == 42), None);
        assert_eq!(find_index::<Record>(&[], |_| true), None);
    }

    #[test]
    fn find_first_returns_the_element() {
        let items = records();
        assert_eq!(find_first(&items, |r| r.id == 2), Some(&Record { id: 2 }));
        assert_eq!(find_first(&items, |r| r.id == 3), None);
    }

    #[test]
    fn lookup_is_bounds_checked() {
        let items = records();
        assert_eq!(lookup(&items, 1), Some(&Record { id: 2 }));
        assert_eq!(lookup(&items, 2), None);
    }

    #[test]
    fn from_predicate_keeps_or_discards() {
        assert_eq!(from_predicate(4, |n| n % 2 == 0), Some(4));
        assert_eq!(from_predicate(3, |n| n % 2 == 0), None);
    }

    #[test]
    fn get_or_else_option_is_lazy() {
        let calls = Cell::new(0);
        let default = || {
            calls.set(calls.get() + 1);
            0
        };

        assert_eq!(get_or_else_option(Some(5), default), 5);
        assert_eq!(calls.get(), 0);
        assert_eq!(get_or_else_option(None, default), 0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn match_option_runs_exactly_one_branch() {
        let none_calls = Cell::new(0);
        let some_calls = Cell::new(0);
        let describe = match_option(
            || {
                none_calls.set(none_calls.get() + 1);
                "no value".to_string()
            },
            |index: usize| {
                some_calls.set(some_calls.get() + 1);
                format!("index {index}")
            },
        );

        assert_eq!(describe(Some(0)), "index 0");
        assert_eq!((none_calls.get(), some_calls.get()), (0, 1));

        assert_eq!(describe(None), "no value");
        assert_eq!((none_calls.get(), some_calls.get()), (1, 1));
    }
}
