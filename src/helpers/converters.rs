use chrono::NaiveDate;
use common::{ForecastComponents, ForecastPoint, ForecastResponse};
use compute::ForecastFrame;
use polars::prelude::AnyValue;
use std::str::FromStr;

/// Helper function to convert the pipeline's DataFrame to a ForecastResponse
pub fn forecast_frame_to_response(
    symbol: &str,
    horizon_days: u32,
    fit: ForecastFrame,
) -> Result<ForecastResponse, String> {
    let df = fit.frame;

    // Extract columns from DataFrame
    let ds_col = df
        .column("ds")
        .map_err(|e| format!("Missing ds column: {}", e))?;
    let yhat_col = df
        .column("yhat")
        .map_err(|e| format!("Missing yhat column: {}", e))?;
    let lower_col = df
        .column("yhat_lower")
        .map_err(|e| format!("Missing yhat_lower column: {}", e))?;
    let upper_col = df
        .column("yhat_upper")
        .map_err(|e| format!("Missing yhat_upper column: {}", e))?;
    let trend_col = df
        .column("trend")
        .map_err(|e| format!("Missing trend column: {}", e))?;

    let mut points = Vec::with_capacity(df.height());
    let mut trend = Vec::with_capacity(df.height());

    for i in 0..df.height() {
        let ds = match ds_col
            .get(i)
            .map_err(|e| format!("Error getting ds at row {}: {}", i, e))?
        {
            AnyValue::String(s) => s.to_string(),
            AnyValue::StringOwned(s) => s.to_string(),
            other => format!("{}", other),
        };
        let date = NaiveDate::from_str(&ds)
            .map_err(|e| format!("Error parsing date '{}' at row {}: {}", ds, i, e))?;

        let predicted = yhat_col
            .get(i)
            .map_err(|e| format!("Error getting yhat at row {}: {}", i, e))?
            .try_extract::<f64>()
            .map_err(|e| format!("Error extracting yhat as f64 at row {}: {}", i, e))?;
        let lower = lower_col
            .get(i)
            .map_err(|e| format!("Error getting yhat_lower at row {}: {}", i, e))?
            .try_extract::<f64>()
            .map_err(|e| format!("Error extracting yhat_lower as f64 at row {}: {}", i, e))?;
        let upper = upper_col
            .get(i)
            .map_err(|e| format!("Error getting yhat_upper at row {}: {}", i, e))?
            .try_extract::<f64>()
            .map_err(|e| format!("Error extracting yhat_upper as f64 at row {}: {}", i, e))?;
        let trend_value = trend_col
            .get(i)
            .map_err(|e| format!("Error getting trend at row {}: {}", i, e))?
            .try_extract::<f64>()
            .map_err(|e| format!("Error extracting trend as f64 at row {}: {}", i, e))?;

        points.push(ForecastPoint {
            date,
            predicted,
            lower,
            upper,
        });
        trend.push(trend_value);
    }

    Ok(ForecastResponse {
        symbol: symbol.to_string(),
        horizon_days,
        points,
        components: ForecastComponents {
            trend,
            weekly: fit.weekly_profile,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use compute::{default_forecaster, horizon_days};

    #[test]
    fn converted_response_preserves_row_count_and_dates() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let history: Vec<_> = (0..30)
            .map(|i| (start + Duration::days(i), 100.0 + i as f64))
            .collect();

        let horizon = horizon_days(1);
        let fit = default_forecaster()
            .fit_and_forecast(&history, horizon)
            .unwrap();
        let response = forecast_frame_to_response("INFY.NS", horizon, fit).unwrap();

        assert_eq!(response.points.len(), 30 + 365);
        assert_eq!(response.components.trend.len(), response.points.len());
        assert_eq!(response.horizon_days, 365);

        let last = response.points.last().unwrap();
        assert_eq!(last.date, start + Duration::days(29 + 365));
        assert!(last.lower <= last.predicted && last.predicted <= last.upper);
    }
}
