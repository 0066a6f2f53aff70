use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};

use crate::{
    declare::{EtfClassification, Route},
    server::{reply, required_param, AppState},
};

/// GET /is_etf?stock=ARKK
///
/// 回傳 `{"symbol": "ARKK", "is-etf": true}`
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(stock_symbol) = required_param(&params, Route::IsEtf) else {
        return reply::missing_input(Route::IsEtf);
    };

    match state.portal.is_etf(stock_symbol).await {
        Ok(is_etf) => reply::json(
            StatusCode::OK,
            &EtfClassification {
                symbol: stock_symbol.to_string(),
                is_etf,
            },
        ),
        Err(why) => reply::failure(&state, Route::IsEtf, stock_symbol, why),
    }
}
