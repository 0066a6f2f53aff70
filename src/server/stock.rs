use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};

use crate::{
    declare::{PriceHistory, Route},
    server::{reply, required_param, AppState},
};

/// GET /stock?stock=MSFT
///
/// 回傳 `{"MSFT": ["252.99", ...]}`
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(stock_symbol) = required_param(&params, Route::Stock) else {
        return reply::missing_input(Route::Stock);
    };

    match state.portal.get_price_history(stock_symbol).await {
        Ok(closes) => reply::json(StatusCode::OK, &PriceHistory::new(stock_symbol, closes)),
        Err(why) => reply::failure(&state, Route::Stock, stock_symbol, why),
    }
}
