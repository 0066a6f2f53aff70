use std::collections::HashSet;

use anyhow::{bail, Result};
use axum::{
    routing::{any, MethodRouter},
    Router,
};

use crate::{
    declare::Route,
    server::{etf, is_etf, stock, stocks, AppState},
};

/// 對外公開的路徑，啟動時逐一確認都有對應的 handler
const DOCUMENTED_PATHS: [&str; 4] = ["/stock", "/stocks", "/etf", "/is_etf"];

const NOT_DEFINED: &str = "function not defined";

/// 建立路由表；路徑完全相符才會進入 handler，其餘回覆純文字
pub fn create_router(state: AppState) -> Result<Router> {
    verify_route_table()?;

    let router = Route::iterator().fold(Router::<AppState>::new(), |router, route| {
        router.route(route.path(), method_router(route))
    });

    Ok(router.fallback(not_defined).with_state(state))
}

fn method_router(route: Route) -> MethodRouter<AppState> {
    match route {
        Route::Stock => any(stock::handle),
        Route::Stocks => any(stocks::handle),
        Route::Etf => any(etf::handle),
        Route::IsEtf => any(is_etf::handle),
    }
}

/// 路徑需以 `/` 開頭、不可重複，且涵蓋所有公開路徑
pub fn verify_route_table() -> Result<()> {
    let mut paths = HashSet::new();

    for route in Route::iterator() {
        let path = route.path();

        if !path.starts_with('/') {
            bail!("Route {} has a relative path {}", route, path);
        }

        if !paths.insert(path) {
            bail!("Route {} duplicates path {}", route, path);
        }

        if Route::from_path(path) != Some(route) {
            bail!("Route {} cannot be resolved from {}", route, path);
        }
    }

    for path in DOCUMENTED_PATHS {
        if !paths.contains(path) {
            bail!("No handler registered for {}", path);
        }
    }

    Ok(())
}

async fn not_defined() -> &'static str {
    NOT_DEFINED
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::{Request, StatusCode}};
    use tower::ServiceExt;

    use super::*;
    use crate::server::tests::{app, get_text, UNREACHABLE};

    #[test]
    fn test_verify_route_table() {
        assert!(verify_route_table().is_ok());
    }

    #[tokio::test]
    async fn test_unknown_paths_are_not_defined() {
        for uri in ["/", "/quote", "/stock/", "/STOCK", "/etf/holdings?stock=ARKK"] {
            let (status, body) = get_text(app(UNREACHABLE, false), uri).await;

            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body, NOT_DEFINED, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_any_method_is_routed() {
        let response = app(UNREACHABLE, false)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/stock")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["message"], "You must provide a stock symbol");
    }
}
