//! This modules defines the common functionality for paging data.

use crate::Error;

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The maximum transactions to return per page when not specified in a request.
    pub default_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_page_size: 10,
        }
    }
}

/// A validated request for one page of data.
///
/// Pages are numbered from one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
}

impl PageRequest {
    /// Build a page request, falling back to `config` for missing values.
    ///
    /// # Errors
    /// Returns [Error::InvalidPagination] if either `page` or `per_page` is zero.
    pub fn new(
        page: Option<u64>,
        per_page: Option<u64>,
        config: &PaginationConfig,
    ) -> Result<Self, Error> {
        let page = page.unwrap_or(config.default_page);
        let per_page = per_page.unwrap_or(config.default_page_size);

        if page == 0 {
            return Err(Error::InvalidPagination(
                "page must be at least 1".to_owned(),
            ));
        }

        if per_page == 0 {
            return Err(Error::InvalidPagination(
                "perPage must be at least 1".to_owned(),
            ));
        }

        Ok(Self { page, per_page })
    }

    /// The page number, starting from one.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// The maximum number of items on the page.
    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// The number of items that come before this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Take the items on this page from `items`.
    ///
    /// A page past the end of `items` is empty.
    pub fn slice<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let per_page = usize::try_from(self.per_page).unwrap_or(usize::MAX);

        items.into_iter().skip(offset).take(per_page).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        pagination::{PageRequest, PaginationConfig},
    };

    #[test]
    fn missing_values_use_defaults() {
        let config = PaginationConfig::default();

        let got = PageRequest::new(None, None, &config).unwrap();

        assert_eq!(got.page(), 1);
        assert_eq!(got.per_page(), 10);
    }

    #[test]
    fn rejects_zero_page_size() {
        let got = PageRequest::new(Some(1), Some(0), &PaginationConfig::default());

        assert_eq!(
            got,
            Err(Error::InvalidPagination(
                "perPage must be at least 1".to_owned()
            ))
        );
    }

    #[test]
    fn rejects_zero_page() {
        let got = PageRequest::new(Some(0), Some(10), &PaginationConfig::default());

        assert_eq!(
            got,
            Err(Error::InvalidPagination("page must be at least 1".to_owned()))
        );
    }

    #[test]
    fn slices_the_requested_page() {
        let page = PageRequest::new(Some(2), Some(3), &PaginationConfig::default()).unwrap();

        let got = page.slice(1..=8);

        assert_eq!(page.offset(), 3);
        assert_eq!(got, vec![4, 5, 6]);
    }

    #[test]
    fn last_page_may_be_partial() {
        let page = PageRequest::new(Some(3), Some(3), &PaginationConfig::default()).unwrap();

        let got = page.slice(1..=8);

        assert_eq!(got, vec![7, 8]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = PageRequest::new(Some(2), Some(5), &PaginationConfig::default()).unwrap();

        let got = page.slice(1..=5);

        assert!(got.is_empty());
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let page = PageRequest::new(Some(u64::MAX), Some(u64::MAX), &PaginationConfig::default())
            .unwrap();

        let got = page.slice(1..=5);

        assert_eq!(page.offset(), u64::MAX);
        assert!(got.is_empty());
    }
}
