use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};

use crate::{
    declare::{QuotesReply, Route},
    server::{reply, required_param, AppState},
    util::text,
};

/// GET /stocks?stocks=TSLA,ROKU
///
/// 回傳 `{"results": [{"TSLA": {"last-price": "...", "percentage-change": "..."}}, ...]}`
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let stock_symbols = required_param(&params, Route::Stocks)
        .map(text::split_symbols)
        .unwrap_or_default();

    if stock_symbols.is_empty() {
        return reply::missing_input(Route::Stocks);
    }

    match state.portal.get_quote_summaries(&stock_symbols).await {
        Ok(results) => reply::json(StatusCode::OK, &QuotesReply { results }),
        Err(why) => reply::failure(&state, Route::Stocks, &stock_symbols.join(","), why),
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::server::tests::{app, get_json};

    const QUOTES_PAGE: &str = "<html><body><table>\
        <thead><tr><th>Symbol</th><th>Last Price</th><th>Change</th><th>% Change</th></tr></thead>\
        <tbody>\
        <tr><td>TSLA</td><td>769.59</td><td>+41.59</td><td>+5.71%</td></tr>\
        <tr><td>ROKU</td><td>97.84</td><td>+10.34</td><td>+11.82%</td></tr>\
        </tbody></table></body></html>";

    #[tokio::test]
    async fn test_results_follow_input_order() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/quotes/TSLA,ROKU/view/v1")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(QUOTES_PAGE)
            .create_async()
            .await;

        let (status, body) = get_json(app(&server.url(), false), "/stocks?stocks=TSLA,ROKU").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "results": [
                    { "TSLA": { "last-price": "769.59", "percentage-change": "+5.71%" } },
                    { "ROKU": { "last-price": "97.84", "percentage-change": "+11.82%" } }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_row_count_mismatch_is_internal_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/quotes/TSLA,ROKU,AAPL/view/v1")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(QUOTES_PAGE)
            .create_async()
            .await;

        let (status, body) =
            get_json(app(&server.url(), false), "/stocks?stocks=TSLA,ROKU,AAPL").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Upstream error" }));
    }

    #[tokio::test]
    async fn test_missing_percentage_change_is_bad_request() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/quotes/TSLA/view/v1")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html><body><table><tbody><tr><td>TSLA</td><td>769.59</td></tr></tbody></table></body></html>")
            .create_async()
            .await;

        let (status, body) = get_json(app(&server.url(), true), "/stocks?stocks=TSLA").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "No stock data found" }));
    }

    #[tokio::test]
    async fn test_no_rows_is_bad_request() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/quotes/TSLA/view/v1")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html><body></body></html>")
            .create_async()
            .await;

        let (status, body) = get_json(app(&server.url(), false), "/stocks?stocks=TSLA").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "No stock data found" }));
    }
}
