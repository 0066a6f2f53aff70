use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use anyhow::Result;
use tokio::{net::TcpListener, signal};

use crate::{
    config::SETTINGS,
    crawler::{yahoo::Yahoo, FinancePortal},
    declare::Route,
    logging,
    util::text,
};

pub mod etf;
pub mod is_etf;
pub mod reply;
pub mod router;
pub mod stock;
pub mod stocks;

/// 各 handler 共用的狀態，沒有可變資料
#[derive(Clone)]
pub struct AppState {
    pub portal: Arc<dyn FinancePortal>,
    /// 500 回應是否帶出上游原始錯誤訊息
    pub expose_upstream_errors: bool,
}

impl AppState {
    pub fn new(portal: Arc<dyn FinancePortal>, expose_upstream_errors: bool) -> Self {
        AppState {
            portal,
            expose_upstream_errors,
        }
    }
}

/// 啟動 HTTP 服務，直到收到停止訊號
pub async fn start() -> Result<()> {
    let state = AppState::new(
        Arc::new(Yahoo::from_settings()?),
        SETTINGS.system.expose_upstream_errors,
    );
    let app = router::create_router(state)?;
    let addr: SocketAddr =
        format!("{}:{}", SETTINGS.system.http_host, SETTINGS.system.http_port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    logging::info_file_async(format!("啟動 HTTP({:?}) 服務", addr));
    logging::info_console(format!("HTTP 服務正在 {:?} 開始服務...", addr));

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    match &result {
        Ok(_) => logging::info_file_async(format!("HTTP 服務在 {:?} 正常停止", addr)),
        Err(why) => {
            logging::error_file_async(format!("HTTP 服務運行中斷 ({:?}): {}", addr, why))
        }
    }

    Ok(result?)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(why) = signal::ctrl_c().await {
            logging::error_file_async(format!("Failed to listen for ctrl_c because {:?}", why));
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(why) => {
                logging::error_file_async(format!("Failed to listen for SIGTERM because {:?}", why));
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    logging::info_file_async("收到停止訊號，準備關閉 HTTP 服務".to_string());
}

/// 取出 route 需要的查詢參數，空白視為未提供
pub(crate) fn required_param(params: &HashMap<String, String>, route: Route) -> Option<&str> {
    params.get(route.param()).and_then(|v| text::non_blank(v))
}
