use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One forecast row: point estimate plus uncertainty interval.
/// Rows cover the fitted history followed by the projected horizon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Decomposition of the fitted model into interpretable sub-series.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastComponents {
    /// Trend value per forecast row, aligned with `ForecastResponse::points`
    pub trend: Vec<f64>,
    /// Additive seasonal effect per trading-week slot
    pub weekly: Vec<f64>,
}

/// Full forecast payload for one (symbol, horizon) interaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastResponse {
    pub symbol: String,
    /// Horizon in calendar days beyond the last observed date
    pub horizon_days: u32,
    pub points: Vec<ForecastPoint>,
    pub components: ForecastComponents,
}

impl ForecastResponse {
    /// Last `n` rows, for the table views.
    pub fn tail(&self, n: usize) -> &[ForecastPoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }

    /// Rows strictly after the given date, i.e. the projected future.
    pub fn future_points(&self, last_observed: NaiveDate) -> Vec<&ForecastPoint> {
        self.points
            .iter()
            .filter(|p| p.date > last_observed)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn future_points_split_on_last_observed() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let mk = |day, v| ForecastPoint {
            date: d(day),
            predicted: v,
            lower: v - 1.0,
            upper: v + 1.0,
        };
        let response = ForecastResponse {
            symbol: "INFY.NS".to_string(),
            horizon_days: 2,
            points: vec![mk(1, 10.0), mk(2, 11.0), mk(3, 12.0), mk(4, 13.0)],
            components: ForecastComponents {
                trend: vec![10.0, 11.0, 12.0, 13.0],
                weekly: vec![0.0; 7],
            },
        };

        let future = response.future_points(d(2));
        assert_eq!(future.len(), 2);
        assert_eq!(future[0].date, d(3));
        assert_eq!(response.tail(3).len(), 3);
    }
}
