use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One daily OHLC row as returned by the market-data provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Inclusive date range covered by a series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Daily price history for one symbol, strictly ascending by date.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PriceHistory {
    pub symbol: String,
    pub points: Vec<PricePoint>,
    pub date_range: Option<DateRange>,
}

impl PriceHistory {
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Self {
        let date_range = match (points.first(), points.last()) {
            (Some(first), Some(last)) => Some(DateRange {
                start: first.date,
                end: last.date,
            }),
            _ => None,
        };
        Self {
            symbol: symbol.into(),
            points,
            date_range,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// (date, close) projection consumed by the forecast pipeline.
    pub fn close_series(&self) -> Vec<(NaiveDate, f64)> {
        self.points.iter().map(|p| (p.date, p.close)).collect()
    }

    /// Last `n` rows, for the table views.
    pub fn tail(&self, n: usize) -> &[PricePoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(y: i32, m: u32, d: u32, close: f64) -> PricePoint {
        PricePoint {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            open: close - 1.0,
            high: close + 1.0,
            low: close - 2.0,
            close,
        }
    }

    #[test]
    fn date_range_follows_endpoints() {
        let history = PriceHistory::new(
            "INFY.NS",
            vec![point(2024, 1, 1, 10.0), point(2024, 1, 5, 12.0)],
        );
        let range = history.date_range.unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn empty_history_has_no_range() {
        let history = PriceHistory::new("INFY.NS", vec![]);
        assert!(history.is_empty());
        assert!(history.date_range.is_none());
    }

    #[test]
    fn tail_never_exceeds_length() {
        let history = PriceHistory::new("INFY.NS", vec![point(2024, 1, 1, 10.0)]);
        assert_eq!(history.tail(5).len(), 1);
        assert_eq!(history.close_series(), vec![(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            10.0
        )]);
    }
}
