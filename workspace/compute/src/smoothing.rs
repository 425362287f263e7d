//! Exponential smoothing models behind the forecast pipeline.
//!
//! Two additive variants are implemented:
//!
//! - **Holt's linear method**: level + trend, used when the history is too
//!   short to estimate a seasonal cycle
//! - **Holt-Winters**: level + trend + additive seasonal component over a
//!   fixed period
//!
//! Both record their in-sample state paths so the pipeline can report a
//! trend/seasonality decomposition alongside the point forecasts.

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if !(0.0 < value && value < 1.0) {
        return Err(ForecastError::InvalidParameter {
            name: name.to_string(),
            reason: "must be between 0 and 1 (exclusive)".to_string(),
        });
    }
    Ok(())
}

/// State of a fitted smoothing model, shared by both variants.
///
/// `fitted`, `level_path` and `seasonal_path` are aligned with the input
/// observations; `level`, `trend` and `seasonal` are the terminal state the
/// forecasts extrapolate from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedModel {
    fitted: Vec<f64>,
    level_path: Vec<f64>,
    seasonal_path: Vec<f64>,
    level: f64,
    trend: f64,
    seasonal: Vec<f64>,
    n_obs: usize,
}

impl FittedModel {
    /// One-step-ahead in-sample predictions, one per observation.
    pub fn fitted(&self) -> &[f64] {
        &self.fitted
    }

    /// Smoothed level per observation; the trend component of the fit.
    pub fn level_path(&self) -> &[f64] {
        &self.level_path
    }

    /// Seasonal effect applied at each observation (all zero for Holt).
    pub fn seasonal_path(&self) -> &[f64] {
        &self.seasonal_path
    }

    /// Terminal seasonal state, one entry per position in the cycle.
    pub fn seasonal_profile(&self) -> &[f64] {
        &self.seasonal
    }

    fn seasonal_ahead(&self, steps_ahead: usize) -> f64 {
        if self.seasonal.is_empty() {
            return 0.0;
        }
        let idx = (self.n_obs + steps_ahead - 1) % self.seasonal.len();
        self.seasonal[idx]
    }

    /// Trend component `steps_ahead` steps past the last observation.
    pub fn trend_ahead(&self, steps_ahead: usize) -> f64 {
        self.level + steps_ahead as f64 * self.trend
    }

    /// Point forecast `steps_ahead` steps past the last observation.
    pub fn forecast(&self, steps_ahead: usize) -> f64 {
        self.trend_ahead(steps_ahead) + self.seasonal_ahead(steps_ahead)
    }

    /// Seasonal component `steps_ahead` steps past the last observation.
    pub fn seasonal_component_ahead(&self, steps_ahead: usize) -> f64 {
        self.seasonal_ahead(steps_ahead)
    }

    /// In-sample residual standard deviation, the basis of the uncertainty
    /// interval. Warmup rows (the first seasonal cycle) are excluded.
    pub fn residual_std(&self, data: &[f64]) -> f64 {
        let skip = self.seasonal.len().min(data.len().saturating_sub(1));
        let residuals: Vec<f64> = data
            .iter()
            .zip(self.fitted.iter())
            .skip(skip)
            .map(|(y, f)| y - f)
            .collect();
        if residuals.is_empty() {
            return 0.0;
        }
        let mean_sq = residuals.iter().map(|r| r * r).sum::<f64>() / residuals.len() as f64;
        mean_sq.sqrt()
    }
}

// ============================================================================
// Holt's Linear Trend Method
// ============================================================================

/// Double exponential smoothing: additive level + trend, no seasonality.
///
/// Formulae:
/// `L_t = α·Y_t + (1-α)·(L_{t-1} + T_{t-1})`,
/// `T_t = β·(L_t - L_{t-1}) + (1-β)·T_{t-1}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HoltLinear {
    alpha: f64,
    beta: f64,
}

impl HoltLinear {
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        check_unit_interval("alpha", alpha)?;
        check_unit_interval("beta", beta)?;
        Ok(Self { alpha, beta })
    }

    pub fn fit(&self, data: &[f64]) -> Result<FittedModel> {
        if data.len() < 2 {
            return Err(ForecastError::InsufficientHistory {
                required: 2,
                actual: data.len(),
            });
        }

        let mut level = data[0];
        let mut trend = data[1] - data[0];

        let mut fitted = Vec::with_capacity(data.len());
        let mut level_path = Vec::with_capacity(data.len());
        fitted.push(data[0]);
        level_path.push(level);

        for &value in &data[1..] {
            fitted.push(level + trend);

            let prev_level = level;
            level = self.alpha * value + (1.0 - self.alpha) * (level + trend);
            trend = self.beta * (level - prev_level) + (1.0 - self.beta) * trend;
            level_path.push(level);
        }

        Ok(FittedModel {
            seasonal_path: vec![0.0; data.len()],
            fitted,
            level_path,
            level,
            trend,
            seasonal: Vec::new(),
            n_obs: data.len(),
        })
    }
}

// ============================================================================
// Holt-Winters (additive seasonality)
// ============================================================================

/// Triple exponential smoothing with an additive seasonal cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoltWinters {
    alpha: f64,
    beta: f64,
    gamma: f64,
    period: usize,
}

impl HoltWinters {
    pub fn new(alpha: f64, beta: f64, gamma: f64, period: usize) -> Result<Self> {
        check_unit_interval("alpha", alpha)?;
        check_unit_interval("beta", beta)?;
        check_unit_interval("gamma", gamma)?;
        if period < 2 {
            return Err(ForecastError::InvalidParameter {
                name: "period".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        Ok(Self {
            alpha,
            beta,
            gamma,
            period,
        })
    }

    /// Observations needed to initialize level, trend and a full cycle.
    pub fn min_observations(&self) -> usize {
        self.period * 2
    }

    pub fn fit(&self, data: &[f64]) -> Result<FittedModel> {
        let required = self.min_observations();
        if data.len() < required {
            return Err(ForecastError::InsufficientHistory {
                required,
                actual: data.len(),
            });
        }

        // Level starts at the first cycle's mean, trend at the cycle-over-cycle
        // mean change, seasonal factors at the first cycle's offsets.
        let first_mean = data[..self.period].iter().sum::<f64>() / self.period as f64;
        let second_mean =
            data[self.period..2 * self.period].iter().sum::<f64>() / self.period as f64;

        let mut level = first_mean;
        let mut trend = (second_mean - first_mean) / self.period as f64;
        let mut seasonal: Vec<f64> = data[..self.period].iter().map(|v| v - first_mean).collect();

        let mut fitted = Vec::with_capacity(data.len());
        let mut level_path = Vec::with_capacity(data.len());
        let mut seasonal_path = Vec::with_capacity(data.len());

        for (t, s) in seasonal.iter().enumerate() {
            fitted.push(level + t as f64 * trend + s);
            level_path.push(level + t as f64 * trend);
            seasonal_path.push(*s);
        }

        for (t, &value) in data.iter().enumerate().skip(self.period) {
            let season_idx = t % self.period;
            let prev_seasonal = seasonal[season_idx];

            fitted.push(level + trend + prev_seasonal);

            let prev_level = level;
            level = self.alpha * (value - prev_seasonal)
                + (1.0 - self.alpha) * (level + trend);
            trend = self.beta * (level - prev_level) + (1.0 - self.beta) * trend;
            seasonal[season_idx] =
                self.gamma * (value - level) + (1.0 - self.gamma) * prev_seasonal;

            level_path.push(level);
            seasonal_path.push(prev_seasonal);
        }

        Ok(FittedModel {
            fitted,
            level_path,
            seasonal_path,
            level,
            trend,
            seasonal,
            n_obs: data.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holt_tracks_a_linear_trend_exactly() {
        let data: Vec<f64> = (0..8).map(|i| 10.0 + i as f64 * 2.0).collect();
        let model = HoltLinear::new(0.5, 0.3).unwrap().fit(&data).unwrap();

        // On noiseless linear input the recursion is exact.
        for h in 1..=5 {
            let expected = 10.0 + (7 + h) as f64 * 2.0;
            assert!((model.forecast(h) - expected).abs() < 1e-9);
        }
        assert_eq!(model.fitted().len(), data.len());
    }

    #[test]
    fn holt_rejects_single_point() {
        let err = HoltLinear::new(0.5, 0.3).unwrap().fit(&[10.0]).unwrap_err();
        assert!(matches!(err, ForecastError::InsufficientHistory { .. }));
    }

    #[test]
    fn holt_winters_needs_two_full_cycles() {
        let model = HoltWinters::new(0.3, 0.1, 0.2, 5).unwrap();
        let short: Vec<f64> = (0..9).map(|i| i as f64).collect();
        let err = model.fit(&short).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::InsufficientHistory {
                required: 10,
                actual: 9
            }
        ));
    }

    #[test]
    fn holt_winters_recovers_trend_and_cycle() {
        let period = 5;
        let cycle = [3.0, 1.0, 0.0, -1.0, -3.0];
        let data: Vec<f64> = (0..40)
            .map(|i| 50.0 + i as f64 + cycle[i % period])
            .collect();

        let model = HoltWinters::new(0.3, 0.1, 0.2, period)
            .unwrap()
            .fit(&data)
            .unwrap();

        for h in 1..=10 {
            let i = 40 + h - 1;
            let expected = 50.0 + i as f64 + cycle[i % period];
            let got = model.forecast(h);
            assert!(
                (got - expected).abs() < 2.0,
                "h={h}: expected {expected}, got {got}"
            );
        }
    }

    #[test]
    fn residual_std_is_zero_on_exact_fit() {
        let data: Vec<f64> = (0..10).map(|i| 5.0 + i as f64).collect();
        let model = HoltLinear::new(0.5, 0.3).unwrap().fit(&data).unwrap();
        assert!(model.residual_std(&data) < 1e-9);
    }

    #[test]
    fn parameters_outside_unit_interval_are_rejected() {
        assert!(HoltLinear::new(0.0, 0.3).is_err());
        assert!(HoltLinear::new(0.5, 1.0).is_err());
        assert!(HoltWinters::new(0.3, 0.1, 0.2, 1).is_err());
    }
}
