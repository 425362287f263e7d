#[cfg(test)]
mod integration_tests {
    use crate::schemas::{ApiResponse, ErrorResponse, HealthResponse};
    use crate::test_utils::test_utils::{
        setup_counting_app, setup_test_app, setup_test_app_state,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{ForecastResponse, PriceHistory, SummaryDto, TickerDto};
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.provider, "synthetic");
    }

    #[tokio::test]
    async fn test_get_tickers_lists_the_whole_directory() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/tickers").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<TickerDto>> = response.json();
        assert!(body.success);
        assert_eq!(body.data.len(), 50);
        assert!(body
            .data
            .iter()
            .any(|t| t.display_name == "Reliance Industries" && t.symbol == "RELIANCE.NS"));
    }

    #[tokio::test]
    async fn test_get_history_is_sorted_ascending() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/tickers/RELIANCE.NS/history")
            .add_query_param("start_date", "2024-01-01")
            .add_query_param("end_date", "2024-03-01")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<PriceHistory> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "History retrieved successfully");
        assert!(!body.data.points.is_empty());
        for pair in body.data.points.windows(2) {
            assert!(pair[0].date < pair[1].date, "dates must strictly increase");
        }
    }

    #[tokio::test]
    async fn test_unknown_symbol_is_rejected_before_any_fetch() {
        let (app, calls) = setup_counting_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/tickers/ZZZZZ.NS/history")
            .add_query_param("start_date", "2024-01-01")
            .add_query_param("end_date", "2024-03-01")
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "NOT_FOUND");
        assert!(!body.success);
        assert_eq!(calls.load(Ordering::SeqCst), 0, "provider must not be called");
    }

    #[tokio::test]
    async fn test_inverted_range_is_a_bad_request() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/tickers/INFY.NS/history")
            .add_query_param("start_date", "2024-03-01")
            .add_query_param("end_date", "2024-01-01")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_history_is_memoized_per_symbol_and_range() {
        let (app, calls) = setup_counting_app();
        let server = TestServer::new(app).unwrap();

        for _ in 0..3 {
            let response = server
                .get("/api/v1/tickers/TCS.NS/history")
                .add_query_param("start_date", "2024-01-01")
                .add_query_param("end_date", "2024-02-01")
                .await;
            response.assert_status(StatusCode::OK);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1, "repeat fetches hit the cache");
    }

    #[tokio::test]
    async fn test_forecast_extends_history_by_the_horizon() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let history_response = server
            .get("/api/v1/tickers/INFY.NS/history")
            .add_query_param("start_date", "2024-01-01")
            .add_query_param("end_date", "2024-03-29")
            .await;
        history_response.assert_status(StatusCode::OK);
        let history: ApiResponse<PriceHistory> = history_response.json();
        let n = history.data.points.len();
        let last_observed = history.data.points.last().unwrap().date;

        let response = server
            .get("/api/v1/tickers/INFY.NS/forecast")
            .add_query_param("years", "2")
            .add_query_param("start_date", "2024-01-01")
            .add_query_param("end_date", "2024-03-29")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastResponse> = response.json();
        assert!(body.success);
        assert_eq!(body.data.horizon_days, 730);
        assert_eq!(body.data.points.len(), n + 730);
        assert!(body.data.points.len() >= n);

        let last = body.data.points.last().unwrap();
        assert_eq!(last.date, last_observed + chrono::Duration::days(730));
        assert_eq!(body.data.components.trend.len(), body.data.points.len());
        assert_eq!(body.data.components.weekly.len(), 5);
    }

    #[tokio::test]
    async fn test_forecast_years_out_of_slider_range() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        for years in ["0", "5"] {
            let response = server
                .get("/api/v1/tickers/INFY.NS/forecast")
                .add_query_param("years", years)
                .await;
            response.assert_status(StatusCode::BAD_REQUEST);
            let body: ErrorResponse = response.json();
            assert_eq!(body.code, "INVALID_REQUEST");
        }
    }

    #[tokio::test]
    async fn test_single_point_history_cannot_be_forecast() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        // 2024-01-02 is a Tuesday; a one-day window yields one point.
        let response = server
            .get("/api/v1/tickers/INFY.NS/forecast")
            .add_query_param("years", "1")
            .add_query_param("start_date", "2024-01-02")
            .add_query_param("end_date", "2024-01-02")
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "FORECAST_UNAVAILABLE");
        assert!(!body.success);
    }

    #[tokio::test]
    async fn test_summary_never_fails_the_interaction() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/tickers/HDFCBANK.NS/summary").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<SummaryDto> = response.json();
        assert!(body.success);
        assert_eq!(body.data.symbol, "HDFCBANK.NS");
        assert!(!body.data.summary.is_empty());
    }

    #[tokio::test]
    async fn test_summary_unknown_symbol_is_not_found() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/tickers/ZZZZZ.NS/summary").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_logo_is_a_plain_not_found() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/tickers/RELIANCE.NS/logo").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_present_logo_is_served_as_png() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("RELIANCE.NS.png"), b"\x89PNG\r\n\x1a\n").unwrap();

        let mut state = setup_test_app_state();
        state.logo_dir = dir.path().to_path_buf();
        let server = TestServer::new(crate::router::create_router(state)).unwrap();

        let response = server.get("/api/v1/tickers/RELIANCE.NS/logo").await;
        response.assert_status(StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "image/png"
        );
    }
}
