use chrono::{Duration, NaiveDate};
use polars::prelude::*;
use tracing::{debug, instrument};

use crate::error::{ForecastError, Result};
use crate::smoothing::{FittedModel, HoltLinear, HoltWinters};

/// Horizon conversion used by the dashboard slider: years of prediction to
/// days, as a plain `years * 365`. Deliberately not calendar-aware (leap
/// days are ignored); preserved as documented behavior.
pub fn horizon_days(n_years: u32) -> u32 {
    n_years * 365
}

/// Output of one fit: the forecast table plus the terminal seasonal cycle.
///
/// `frame` columns: `ds` (ISO date string), `yhat`, `yhat_lower`,
/// `yhat_upper`, `trend`, `seasonal`. Rows cover the fitted history followed
/// by one row per future calendar day up to the horizon.
#[derive(Debug, Clone)]
pub struct ForecastFrame {
    pub frame: DataFrame,
    /// Additive seasonal effect per trading-week slot (empty when the
    /// history was too short for a seasonal fit)
    pub weekly_profile: Vec<f64>,
}

/// Forecast pipeline configuration: smoothing weights, seasonal period and
/// the width of the uncertainty interval.
#[derive(Debug, Clone)]
pub struct Forecaster {
    alpha: f64,
    beta: f64,
    gamma: f64,
    period: usize,
    interval_z: f64,
}

impl Forecaster {
    pub fn new(alpha: f64, beta: f64, gamma: f64, period: usize, interval_z: f64) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            period,
            interval_z,
        }
    }

    /// Fit the additive model on `(date, close)` history and project
    /// `horizon_days` calendar days past the last observation.
    ///
    /// One fit attempt, no retries: on failure the caller re-triggers the
    /// interaction rather than looping here.
    #[instrument(skip(self, history))]
    pub fn fit_and_forecast(
        &self,
        history: &[(NaiveDate, f64)],
        horizon_days: u32,
    ) -> Result<ForecastFrame> {
        if horizon_days == 0 {
            return Err(ForecastError::InvalidHorizon(horizon_days));
        }
        if history.len() < 2 {
            return Err(ForecastError::InsufficientHistory {
                required: 2,
                actual: history.len(),
            });
        }
        for (i, pair) in history.windows(2).enumerate() {
            if pair[0].0 >= pair[1].0 {
                return Err(ForecastError::NonMonotonicDates(i + 1));
            }
        }

        let values: Vec<f64> = history.iter().map(|(_, close)| *close).collect();
        let spread = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
            - values.iter().cloned().fold(f64::INFINITY, f64::min);
        if spread == 0.0 {
            return Err(ForecastError::DegenerateHistory);
        }

        // Holt-Winters once two full cycles are available, otherwise Holt.
        let model = self.fit_model(&values)?;
        let sigma = model.residual_std(&values);
        debug!(
            observations = history.len(),
            horizon_days, sigma, "model fitted"
        );

        let n = history.len();
        let rows = n + horizon_days as usize;
        let mut ds = Vec::with_capacity(rows);
        let mut yhat = Vec::with_capacity(rows);
        let mut lower = Vec::with_capacity(rows);
        let mut upper = Vec::with_capacity(rows);
        let mut trend = Vec::with_capacity(rows);
        let mut seasonal = Vec::with_capacity(rows);

        for (i, (date, _)) in history.iter().enumerate() {
            let estimate = model.fitted()[i];
            let band = self.interval_z * sigma;
            ds.push(date.to_string());
            yhat.push(estimate);
            lower.push(estimate - band);
            upper.push(estimate + band);
            trend.push(model.level_path()[i]);
            seasonal.push(model.seasonal_path()[i]);
        }

        let last_date = history[n - 1].0;
        for h in 1..=horizon_days as usize {
            let date = last_date + Duration::days(h as i64);
            let estimate = model.forecast(h);
            // Interval widens with the square root of the step count.
            let band = self.interval_z * sigma * (h as f64).sqrt();
            ds.push(date.to_string());
            yhat.push(estimate);
            lower.push(estimate - band);
            upper.push(estimate + band);
            trend.push(model.trend_ahead(h));
            seasonal.push(model.seasonal_component_ahead(h));
        }

        let frame = DataFrame::new(vec![
            Series::new("ds".into(), ds).into(),
            Series::new("yhat".into(), yhat).into(),
            Series::new("yhat_lower".into(), lower).into(),
            Series::new("yhat_upper".into(), upper).into(),
            Series::new("trend".into(), trend).into(),
            Series::new("seasonal".into(), seasonal).into(),
        ])?;

        Ok(ForecastFrame {
            frame,
            weekly_profile: model.seasonal_profile().to_vec(),
        })
    }

    fn fit_model(&self, values: &[f64]) -> Result<FittedModel> {
        let seasonal_model = HoltWinters::new(self.alpha, self.beta, self.gamma, self.period)?;
        if values.len() >= seasonal_model.min_observations() {
            seasonal_model.fit(values)
        } else {
            HoltLinear::new(self.alpha, self.beta)?.fit(values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_forecaster;

    fn linear_history(n: usize) -> Vec<(NaiveDate, f64)> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..n)
            .map(|i| (start + Duration::days(i as i64), 100.0 + i as f64))
            .collect()
    }

    fn column(frame: &DataFrame, name: &str) -> Vec<f64> {
        let col = frame.column(name).unwrap();
        (0..frame.height())
            .map(|i| col.get(i).unwrap().try_extract::<f64>().unwrap())
            .collect()
    }

    #[test]
    fn horizon_days_matches_slider_years() {
        assert_eq!(horizon_days(1), 365);
        assert_eq!(horizon_days(2), 730);
        assert_eq!(horizon_days(3), 1095);
        assert_eq!(horizon_days(4), 1460);
    }

    #[test]
    fn forecast_covers_history_plus_horizon() {
        let history = linear_history(30);
        let result = default_forecaster()
            .fit_and_forecast(&history, 10)
            .unwrap();

        assert_eq!(result.frame.height(), 40);
        assert!(result.frame.height() >= history.len());

        let ds = result.frame.column("ds").unwrap();
        let last = ds.get(result.frame.height() - 1).unwrap().to_string();
        // Last row is exactly last_history_date + horizon days.
        assert!(last.contains("2024-02-09"));
    }

    #[test]
    fn linear_trend_continues_within_tolerance() {
        let history = linear_history(30);
        let result = default_forecaster()
            .fit_and_forecast(&history, 30)
            .unwrap();

        let yhat = column(&result.frame, "yhat");
        for h in 1..=30usize {
            let expected = 100.0 + (29 + h) as f64;
            let got = yhat[29 + h];
            assert!(
                (got - expected).abs() <= 0.1 * expected,
                "h={h}: expected {expected}, got {got}"
            );
        }
    }

    #[test]
    fn uncertainty_band_brackets_the_estimate_and_widens() {
        let mut history = linear_history(40);
        // Perturb so the residual deviation is non-zero.
        for (i, point) in history.iter_mut().enumerate() {
            if i % 2 == 0 {
                point.1 += 1.5;
            }
        }

        let result = default_forecaster()
            .fit_and_forecast(&history, 20)
            .unwrap();
        let yhat = column(&result.frame, "yhat");
        let lower = column(&result.frame, "yhat_lower");
        let upper = column(&result.frame, "yhat_upper");

        for i in 0..yhat.len() {
            assert!(lower[i] <= yhat[i] && yhat[i] <= upper[i]);
        }

        let early_width = upper[41] - lower[41];
        let late_width = upper[59] - lower[59];
        assert!(late_width > early_width);
    }

    #[test]
    fn fewer_than_two_points_is_insufficient() {
        let history = linear_history(1);
        let err = default_forecaster()
            .fit_and_forecast(&history, 365)
            .unwrap_err();
        assert!(matches!(err, ForecastError::InsufficientHistory { .. }));
    }

    #[test]
    fn flat_history_is_degenerate() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let history: Vec<_> = (0..20)
            .map(|i| (start + Duration::days(i), 42.0))
            .collect();
        let err = default_forecaster()
            .fit_and_forecast(&history, 365)
            .unwrap_err();
        assert!(matches!(err, ForecastError::DegenerateHistory));
    }

    #[test]
    fn duplicate_dates_are_rejected() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let history = vec![(start, 1.0), (start, 2.0), (start + Duration::days(1), 3.0)];
        let err = default_forecaster()
            .fit_and_forecast(&history, 10)
            .unwrap_err();
        assert!(matches!(err, ForecastError::NonMonotonicDates(1)));
    }

    #[test]
    fn zero_horizon_is_invalid() {
        let history = linear_history(10);
        let err = default_forecaster()
            .fit_and_forecast(&history, 0)
            .unwrap_err();
        assert!(matches!(err, ForecastError::InvalidHorizon(0)));
    }
}
