use async_trait::async_trait;
use thiserror::Error;

use crate::declare;

/// 雅虎財經
pub mod yahoo;

/// 爬取失敗的原因
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// 連線失敗、逾時或非 2xx 回應
    #[error("{0}")]
    Upstream(anyhow::Error),

    /// 版面設定中的 CSS selector 無法解析
    #[error("{0}")]
    Selector(anyhow::Error),

    /// 網頁可取得但沒有符合的資料
    #[error("no data matched `{selector}` at {url}")]
    Empty { url: String, selector: String },

    /// 各欄位筆數不一致，無法依位置對應
    #[error("column `{column}` has {actual} cells but {expected} were expected at {url}")]
    Misaligned {
        url: String,
        column: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// 財經網站的爬取介面
#[async_trait]
pub trait FinancePortal: Send + Sync {
    /// 個股歷史收盤價，依網頁呈現順序（新到舊）
    async fn get_price_history(&self, stock_symbol: &str) -> Result<Vec<String>, ScrapeError>;

    /// 多檔股票的最新價與漲跌幅，順序與 `stock_symbols` 相同
    async fn get_quote_summaries(
        &self,
        stock_symbols: &[String],
    ) -> Result<Vec<declare::QuoteSummary>, ScrapeError>;

    /// ETF 前幾大持股
    async fn get_etf_holdings(&self, stock_symbol: &str) -> Result<Vec<declare::Holding>, ScrapeError>;

    /// 是否為 ETF
    async fn is_etf(&self, stock_symbol: &str) -> Result<bool, ScrapeError>;
}

/// 檢查各欄位的筆數皆為 `expected`，否則回傳第一個不一致的欄位
pub(crate) fn ensure_aligned(
    url: &str,
    expected: usize,
    columns: &[(&'static str, usize)],
) -> Result<(), ScrapeError> {
    match columns.iter().find(|(_, actual)| *actual != expected) {
        Some((column, actual)) => Err(ScrapeError::Misaligned {
            url: url.to_string(),
            column: *column,
            expected,
            actual: *actual,
        }),
        None => Ok(()),
    }
}
