//! Query parameters shared by several controllers.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::server::{error::AppError, model::page::PageParams, util::date::parse_date};

/// `page` and `limit` query parameters of paginated listings.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl PaginationParams {
    pub fn page_params(&self) -> PageParams {
        PageParams::new(self.page, self.limit)
    }
}

/// Single optional `date` query parameter.
#[derive(Debug, Default, Deserialize)]
pub struct DateParams {
    pub date: Option<String>,
}

impl DateParams {
    /// The requested date, or today in UTC when absent.
    pub fn date_or_today(&self) -> Result<NaiveDate, AppError> {
        let date = parse_optional_date(self.date.as_deref(), "date")?;

        Ok(date.unwrap_or_else(|| Utc::now().date_naive()))
    }
}

/// Optional `start_date` and `end_date` query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct DateRangeParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Parses an optional `YYYY-MM-DD` query value.
///
/// # Arguments
/// - `value` - Raw query value; blank counts as absent
/// - `name` - Parameter name used in the error message
///
/// # Returns
/// - `Ok(Some(NaiveDate))` - Parsed date
/// - `Ok(None)` - Parameter absent or blank
/// - `Err(AppError::BadRequest)` - Value is not a valid date
pub fn parse_optional_date(value: Option<&str>, name: &str) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => parse_date(raw)
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("invalid {} format", name))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_date_is_absent() {
        assert_eq!(parse_optional_date(Some("  "), "date").unwrap(), None);
        assert_eq!(parse_optional_date(None, "date").unwrap(), None);
    }

    #[test]
    fn malformed_date_is_bad_request() {
        let result = parse_optional_date(Some("2024-13-01"), "start_date");

        assert!(matches!(
            result,
            Err(AppError::BadRequest(msg)) if msg == "invalid start_date format"
        ));
    }

    #[test]
    fn pagination_defaults() {
        let params = PaginationParams::default().page_params();

        assert_eq!(params, PageParams::new(Some(1), Some(10)));
    }
}
