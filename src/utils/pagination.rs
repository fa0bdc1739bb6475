use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: i64,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: i64, page: i64, page_size: i64) -> Self {
        Self {
            items,
            total,
            page,
            page_size,
            total_pages: total_pages(total, page_size),
        }
    }
}

pub fn offset(page: i64, page_size: i64) -> i64 {
    (page - 1) * page_size
}

pub fn total_pages(total: i64, page_size: i64) -> i64 {
    (total + page_size - 1) / page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_one_indexed() {
        assert_eq!(offset(1, 10), 0);
        assert_eq!(offset(2, 10), 10);
        assert_eq!(offset(3, 25), 50);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(15, 10), 2);
        assert_eq!(total_pages(21, 10), 3);
    }

    #[test]
    fn page_two_of_fifteen_holds_the_tail() {
        // 15 filtered results with page_size 10: page 2 is items 11..=15.
        let total = 15;
        let page_size = 10;
        assert_eq!(offset(2, page_size), 10);
        assert_eq!(total - offset(2, page_size), 5);
        assert_eq!(total_pages(total, page_size), 2);
    }

    #[test]
    fn bounds_are_validated() {
        use validator::Validate;
        assert!(PageQuery { page: 0, page_size: 10 }.validate().is_err());
        assert!(PageQuery { page: 1, page_size: 0 }.validate().is_err());
        assert!(PageQuery { page: 1, page_size: 101 }.validate().is_err());
        assert!(PageQuery { page: 1, page_size: 100 }.validate().is_ok());
    }
}
