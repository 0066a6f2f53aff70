//! # Yahoo 財經採集模組
//!
//! 從 Yahoo 財經（美國站）抓取報價、持股等表格資料。
//!
//! ## 支援的功能
//!
//! - **歷史股價 (`history`)**：歷史頁表格的收盤價欄。
//! - **報價彙總 (`quotes`)**：多檔股票的最新價與漲跌幅。
//! - **ETF 持股 (`holdings`)**：公司名稱、代碼、資產占比。
//! - **ETF 判斷 (`classification`)**：導覽列是否有 `Holdings` 分頁。
//!
//! 所有欄位位置都來自 [`Layout`]，網站改版時調整設定即可。

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::{Layout, SETTINGS},
    crawler::{FinancePortal, ScrapeError},
    declare, logging, util,
};

/// 歷史收盤價
pub mod history;
/// 多檔報價彙總
pub mod quotes;
/// ETF 持股
pub mod holdings;
/// ETF 判斷
pub mod classification;

/// Yahoo 財經採集器
#[derive(Debug, Clone)]
pub struct Yahoo {
    base_url: String,
    layout: Layout,
    client: Client,
}

impl Yahoo {
    pub fn new(base_url: impl Into<String>, layout: Layout, client: Client) -> Self {
        Yahoo {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            layout,
            client,
        }
    }

    /// 依 SETTINGS 建立，共用單一 HTTP client
    pub fn from_settings() -> Result<Self> {
        let client = util::http::get_client(&SETTINGS.upstream)?;
        Ok(Self::new(
            SETTINGS.upstream.base_url.clone(),
            SETTINGS.layout.clone(),
            client.clone(),
        ))
    }

    /// 取回網頁原始內容，任何失敗都歸類為上游錯誤
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let text = util::http::get(&self.client, url, None)
            .await
            .map_err(ScrapeError::Upstream)?;

        logging::debug_file_async(format!("fetched {} bytes from {}", text.len(), url));

        Ok(text)
    }
}

/// 網址中的代碼需編碼，避免 `/`、`?` 等字元改變路徑
fn encode(stock_symbol: &str) -> String {
    urlencoding::encode(stock_symbol).into_owned()
}

#[async_trait]
impl FinancePortal for Yahoo {
    async fn get_price_history(&self, stock_symbol: &str) -> Result<Vec<String>, ScrapeError> {
        history::visit(self, stock_symbol).await
    }

    async fn get_quote_summaries(
        &self,
        stock_symbols: &[String],
    ) -> Result<Vec<declare::QuoteSummary>, ScrapeError> {
        quotes::visit(self, stock_symbols).await
    }

    async fn get_etf_holdings(&self, stock_symbol: &str) -> Result<Vec<declare::Holding>, ScrapeError> {
        holdings::visit(self, stock_symbol).await
    }

    async fn is_etf(&self, stock_symbol: &str) -> Result<bool, ScrapeError> {
        classification::visit(self, stock_symbol).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::Upstream;

    /// 指向本機 mock server 的採集器
    pub(crate) fn local_yahoo(base_url: &str) -> Yahoo {
        let upstream = Upstream {
            base_url: base_url.to_string(),
            use_system_proxy: false,
            ..Default::default()
        };
        let client = util::http::build_client(&upstream).expect("client");

        Yahoo::new(upstream.base_url, Layout::default(), client)
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let yahoo = local_yahoo("http://127.0.0.1:1/");

        assert_eq!(yahoo.base_url, "http://127.0.0.1:1");
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode("MSFT"), "MSFT");
        assert_eq!(encode("SHOP.TO"), "SHOP.TO");
        assert_eq!(encode("^GSPC"), "%5EGSPC");
        assert_eq!(encode("A/B"), "A%2FB");
    }
}
