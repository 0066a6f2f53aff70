use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{crawler::ScrapeError, declare::{Message, Route}, logging, server::AppState};

/// 不對外揭露上游細節時的 500 訊息
pub const UPSTREAM_ERROR: &str = "Upstream error";

pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (status, Json(body)).into_response()
}

pub fn message(status: StatusCode, msg: impl Into<String>) -> Response {
    json(status, &Message::new(msg))
}

/// 缺少參數不算用戶端錯誤，仍回 200
pub fn missing_input(route: Route) -> Response {
    let msg = match route {
        Route::Stock | Route::Stocks => "You must provide a stock symbol",
        Route::Etf => "You must provide a stock symbol for the ETF",
        Route::IsEtf => "You must provide a stock symbol to check if it is an ETF",
    };

    message(StatusCode::OK, msg)
}

fn empty_message(route: Route) -> &'static str {
    match route {
        Route::Etf => "No holdings for this symbol found. Are you sure this is an ETF?",
        Route::Stock | Route::Stocks | Route::IsEtf => "No stock data found",
    }
}

/// 將爬取失敗轉為回應：查無資料 400，其餘 500
pub fn failure(state: &AppState, route: Route, stock_symbol: &str, why: ScrapeError) -> Response {
    if let ScrapeError::Empty { .. } = why {
        logging::warn_file_async(format!(
            "{} {} found nothing because {}",
            route.path(),
            stock_symbol,
            why
        ));
        return message(StatusCode::BAD_REQUEST, empty_message(route));
    }

    logging::error_file_async(format!(
        "Failed to {} {} because {:?}",
        route.path(),
        stock_symbol,
        why
    ));

    let msg = if state.expose_upstream_errors {
        why.to_string()
    } else {
        UPSTREAM_ERROR.to_string()
    };

    message(StatusCode::INTERNAL_SERVER_ERROR, msg)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::crawler::yahoo::tests::local_yahoo;

    fn state(expose_upstream_errors: bool) -> AppState {
        AppState::new(Arc::new(local_yahoo("http://127.0.0.1:1")), expose_upstream_errors)
    }

    async fn body_of(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_empty_is_bad_request() {
        let why = ScrapeError::Empty {
            url: "u".to_string(),
            selector: "tr".to_string(),
        };

        let response = failure(&state(false), Route::Etf, "ARKK", why);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await["message"],
            "No holdings for this symbol found. Are you sure this is an ETF?"
        );
    }

    #[tokio::test]
    async fn test_misaligned_is_internal_error() {
        let why = ScrapeError::Misaligned {
            url: "u".to_string(),
            column: "symbol",
            expected: 2,
            actual: 1,
        };

        let response = failure(&state(false), Route::Etf, "ARKK", why);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await["message"], UPSTREAM_ERROR);
    }

    #[tokio::test]
    async fn test_exposed_upstream_message_is_verbatim() {
        let why = ScrapeError::Upstream(anyhow::anyhow!("Request failed with status code 404"));

        let response = failure(&state(true), Route::Stock, "MSFT", why);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await["message"],
            "Request failed with status code 404"
        );
    }

    #[tokio::test]
    async fn test_missing_input_messages() {
        let response = missing_input(Route::IsEtf);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_of(response).await["message"],
            "You must provide a stock symbol to check if it is an ETF"
        );
    }
}
