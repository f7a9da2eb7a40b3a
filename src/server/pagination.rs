//! Offset pagination over already-fetched rows.

use serde::Deserialize;

use super::deserializers::deserialize_lenient_int;

pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_lenient_int")]
    page: Option<i64>,
}

impl PageQuery {
    /// 1-indexed page, 1 when absent or unparsable.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

/// Returns the `page`-th slice of `QUESTIONS_PER_PAGE` items.
///
/// Pages below 1 and pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    let start = page
        .checked_sub(1)
        .and_then(|p| usize::try_from(p).ok())
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE));
    match start {
        Some(start) => items
            .into_iter()
            .skip(start)
            .take(QUESTIONS_PER_PAGE)
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn first_page_is_first_ten() {
        assert_eq!(paginate(items(19), 1), items(10));
    }

    #[test]
    fn last_page_is_partial() {
        assert_eq!(paginate(items(19), 2), (11..=19).collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        assert!(paginate(items(19), 3).is_empty());
        assert!(paginate(items(19), 0).is_empty());
        assert!(paginate(items(19), -4).is_empty());
        assert!(paginate(items(19), i64::MAX).is_empty());
        assert!(paginate(items(19), i64::MIN).is_empty());
    }

    #[test]
    fn default_page_is_one() {
        assert_eq!(PageQuery::default().page(), 1);
    }
}
