use std::{env, path::PathBuf, str::FromStr};

use anyhow::Result;
use config::{Config as config_config, File as config_file};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::logging;

const CONFIG_PATH: &str = "app.json";

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct App {
    #[serde(default)]
    pub system: System,
    #[serde(default)]
    pub upstream: Upstream,
    #[serde(default)]
    pub layout: Layout,
}

const SYSTEM_HTTP_HOST: &str = "SYSTEM_HTTP_HOST";
const SYSTEM_HTTP_PORT: &str = "SYSTEM_HTTP_PORT";
/// 雲端函式平台慣用的埠號變數，優先順序低於 SYSTEM_HTTP_PORT
const PORT: &str = "PORT";
const SYSTEM_EXPOSE_UPSTREAM_ERRORS: &str = "SYSTEM_EXPOSE_UPSTREAM_ERRORS";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct System {
    pub http_host: String,
    pub http_port: u16,
    /// 500 回應是否帶出上游原始錯誤訊息
    pub expose_upstream_errors: bool,
}

impl Default for System {
    fn default() -> Self {
        System {
            http_host: "0.0.0.0".to_string(),
            http_port: 8080,
            expose_upstream_errors: true,
        }
    }
}

const UPSTREAM_BASE_URL: &str = "UPSTREAM_BASE_URL";
const UPSTREAM_CONNECT_TIMEOUT_SECS: &str = "UPSTREAM_CONNECT_TIMEOUT_SECS";
const UPSTREAM_TIMEOUT_SECS: &str = "UPSTREAM_TIMEOUT_SECS";
const UPSTREAM_USE_SYSTEM_PROXY: &str = "UPSTREAM_USE_SYSTEM_PROXY";

/// 被爬取的財經網站
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Upstream {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
    pub use_system_proxy: bool,
}

impl Default for Upstream {
    fn default() -> Self {
        Upstream {
            base_url: "https://finance.yahoo.com".to_string(),
            connect_timeout_secs: 8,
            timeout_secs: 15,
            use_system_proxy: true,
        }
    }
}

/// 各頁面表格的欄位位置。
///
/// 網站改版時只需調整 app.json 的 `layout` 區塊，不必改程式。
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct Layout {
    pub history: HistoryLayout,
    pub quotes: QuotesLayout,
    pub holdings: HoldingsLayout,
    pub classification: ClassificationLayout,
}

/// 歷史股價頁
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct HistoryLayout {
    pub rows: String,
    /// 收盤價
    pub close: usize,
}

impl Default for HistoryLayout {
    fn default() -> Self {
        HistoryLayout {
            rows: "tr".to_string(),
            close: 6,
        }
    }
}

/// 多檔報價彙總頁
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct QuotesLayout {
    pub rows: String,
    pub last_price: usize,
    pub percentage_change: usize,
}

impl Default for QuotesLayout {
    fn default() -> Self {
        QuotesLayout {
            rows: "tr".to_string(),
            last_price: 2,
            percentage_change: 4,
        }
    }
}

/// ETF 持股頁
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct HoldingsLayout {
    pub rows: String,
    pub name: usize,
    pub symbol: usize,
    pub percentage_assets: usize,
}

impl Default for HoldingsLayout {
    fn default() -> Self {
        HoldingsLayout {
            rows: "div:nth-child(4) tbody tr".to_string(),
            name: 1,
            symbol: 2,
            percentage_assets: 3,
        }
    }
}

/// 個股首頁的導覽列，第 N 個項目為 `Holdings` 時視為 ETF
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ClassificationLayout {
    pub nav: String,
    pub position: usize,
    pub label: String,
    pub expected: String,
}

impl Default for ClassificationLayout {
    fn default() -> Self {
        ClassificationLayout {
            nav: r#"div[id="quote-nav"] ul"#.to_string(),
            position: 7,
            label: "a span".to_string(),
            expected: "Holdings".to_string(),
        }
    }
}

pub static SETTINGS: Lazy<App> = Lazy::new(|| {
    App::get().unwrap_or_else(|why| {
        logging::error_console(format!(
            "I can't read the config context because {:?}",
            why
        ));
        App::default().override_with_env()
    })
});

impl App {
    fn get() -> Result<Self> {
        let config_path = config_path();
        if config_path.exists() {
            let config: App = config_config::builder()
                .add_source(config_file::from(config_path))
                .build()?
                .try_deserialize()?;
            return Ok(config.override_with_env());
        }

        Ok(App::default().override_with_env())
    }

    /// 將來至於 env 的設定值覆蓋掉 json 上的設定值
    fn override_with_env(mut self) -> Self {
        if let Ok(host) = env::var(SYSTEM_HTTP_HOST) {
            self.system.http_host = host;
        }

        if let Some(port) = env::var(SYSTEM_HTTP_PORT)
            .or_else(|_| env::var(PORT))
            .ok()
            .and_then(|p| u16::from_str(&p).ok())
        {
            self.system.http_port = port;
        }

        if let Ok(expose) = env::var(SYSTEM_EXPOSE_UPSTREAM_ERRORS) {
            self.system.expose_upstream_errors = parse_flag(&expose);
        }

        if let Ok(base_url) = env::var(UPSTREAM_BASE_URL) {
            self.upstream.base_url = base_url;
        }

        if let Some(secs) = env::var(UPSTREAM_CONNECT_TIMEOUT_SECS)
            .ok()
            .and_then(|s| u64::from_str(&s).ok())
        {
            self.upstream.connect_timeout_secs = secs;
        }

        if let Some(secs) = env::var(UPSTREAM_TIMEOUT_SECS)
            .ok()
            .and_then(|s| u64::from_str(&s).ok())
        {
            self.upstream.timeout_secs = secs;
        }

        if let Ok(proxy) = env::var(UPSTREAM_USE_SYSTEM_PROXY) {
            self.upstream.use_system_proxy = parse_flag(&proxy);
        }

        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// 回傳設定檔的路徑
fn config_path() -> PathBuf {
    PathBuf::from(CONFIG_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_yahoo_pages() {
        let layout = Layout::default();

        assert_eq!(layout.history.rows, "tr");
        assert_eq!(layout.history.close, 6);
        assert_eq!(layout.quotes.last_price, 2);
        assert_eq!(layout.quotes.percentage_change, 4);
        assert_eq!(layout.holdings.rows, "div:nth-child(4) tbody tr");
        assert_eq!(layout.classification.position, 7);
        assert_eq!(layout.classification.expected, "Holdings");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{
            "system": { "http_port": 9000 },
            "layout": { "history": { "close": 5 } }
        }"#;
        let app: App = serde_json::from_str(json).expect("valid config json");

        assert_eq!(app.system.http_port, 9000);
        assert_eq!(app.system.http_host, "0.0.0.0");
        assert!(app.system.expose_upstream_errors);
        assert_eq!(app.upstream.base_url, "https://finance.yahoo.com");
        assert_eq!(app.layout.history.close, 5);
        assert_eq!(app.layout.history.rows, "tr");
        assert_eq!(app.layout.quotes.percentage_change, 4);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("YES"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_init() {
        dotenv::dotenv().ok();
        logging::debug_file_async(format!("SETTINGS.system: {:#?}\r\n", SETTINGS.system));
        logging::debug_file_async(format!("SETTINGS.upstream: {:#?}\r\n", SETTINGS.upstream));

        assert!(!SETTINGS.upstream.base_url.is_empty());
    }
}
