pub mod error;
pub mod forecast;
pub mod smoothing;

pub use error::{ForecastError, Result};
pub use forecast::{horizon_days, ForecastFrame, Forecaster};

/// Returns a default pre-configured forecaster that will be used most of the
/// time.
///
/// Smoothing weights follow the usual recommendations for daily financial
/// series; the seasonal period is one trading week and the uncertainty
/// interval is the conventional 95% band.
pub fn default_forecaster() -> Forecaster {
    Forecaster::new(0.3, 0.1, 0.2, 5, 1.96)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    /// The default configuration must fit an ordinary daily history without
    /// tripping any validation path.
    #[test]
    fn default_forecaster_handles_a_plain_series() {
        let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let history: Vec<_> = (0..120)
            .map(|i| {
                let wave = (i as f64 / 5.0).sin() * 4.0;
                (start + Duration::days(i), 250.0 + i as f64 * 0.5 + wave)
            })
            .collect();

        let result = default_forecaster()
            .fit_and_forecast(&history, horizon_days(1))
            .expect("default fit should succeed");

        assert_eq!(result.frame.height(), 120 + 365);
        assert_eq!(result.weekly_profile.len(), 5);
    }
}
