use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};

use crate::{
    declare::{EtfHoldings, HoldingsReply, Route},
    server::{reply, required_param, AppState},
};

/// GET /etf?stock=ARKK
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(stock_symbol) = required_param(&params, Route::Etf) else {
        return reply::missing_input(Route::Etf);
    };

    match state.portal.get_etf_holdings(stock_symbol).await {
        Ok(companies) => reply::json(
            StatusCode::OK,
            &HoldingsReply {
                holdings: EtfHoldings {
                    etf: stock_symbol.to_string(),
                    companies,
                },
            },
        ),
        Err(why) => reply::failure(&state, Route::Etf, stock_symbol, why),
    }
}
