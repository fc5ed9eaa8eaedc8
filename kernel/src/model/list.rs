use shared::error::{AppError, AppResult};

/// Fixed page size for every paginated listing.
pub const PAGE_SIZE: i64 = 3;

/// Simple page-numbered query for review listings and the like.
#[derive(Debug, Clone, Copy)]
pub struct PageQuery {
    pub page: i64,
}

impl PageQuery {
    pub fn validate(&self) -> AppResult<()> {
        if self.page < 1 {
            return Err(AppError::UnprocessableEntity(
                "page: must be a positive integer".into(),
            ));
        }
        Ok(())
    }

    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * PAGE_SIZE
    }
}

/// Calendar-month scoped, page-numbered query for booking listings.
/// Validated before any query executes.
#[derive(Debug, Clone, Copy)]
pub struct PeriodQuery {
    pub year: i32,
    pub month: u32,
    pub page: i64,
}

impl PeriodQuery {
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(AppError::UnprocessableEntity(
                "month: must be between 1 and 12".into(),
            ));
        }
        if self.page < 1 {
            return Err(AppError::UnprocessableEntity(
                "page: must be a positive integer".into(),
            ));
        }
        Ok(())
    }

    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * PAGE_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_month_is_rejected() {
        let q = PeriodQuery {
            year: 2024,
            month: 13,
            page: 1,
        };
        assert!(q.validate().is_err());
        let q = PeriodQuery {
            year: 2024,
            month: 0,
            page: 1,
        };
        assert!(q.validate().is_err());
    }

    #[test]
    fn non_positive_page_is_rejected() {
        let q = PeriodQuery {
            year: 2024,
            month: 6,
            page: 0,
        };
        assert!(q.validate().is_err());
        assert!(PageQuery { page: 0 }.validate().is_err());
        assert!(PageQuery { page: -1 }.validate().is_err());
    }

    #[test]
    fn page_window_arithmetic() {
        let q = PeriodQuery {
            year: 2024,
            month: 6,
            page: 1,
        };
        assert_eq!(q.offset(), 0);
        let q = PeriodQuery {
            year: 2024,
            month: 6,
            page: 3,
        };
        assert_eq!(q.offset(), 6);
        assert_eq!(q.limit(), PAGE_SIZE);
    }
}
