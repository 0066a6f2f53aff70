use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};

use crate::util::map::Keyed;

/// 對外提供的功能，每個都對應一個固定路徑
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, strum_macros::Display)]
pub enum Route {
    /// 個股歷史收盤價 /stock
    #[strum(serialize = "stock")]
    Stock,
    /// 多檔報價彙總 /stocks
    #[strum(serialize = "stocks")]
    Stocks,
    /// ETF 持股 /etf
    #[strum(serialize = "etf")]
    Etf,
    /// 是否為 ETF /is_etf
    #[strum(serialize = "is_etf")]
    IsEtf,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Stock => "/stock",
            Route::Stocks => "/stocks",
            Route::Etf => "/etf",
            Route::IsEtf => "/is_etf",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Self::iterator().find(|route| route.path() == path)
    }

    /// 查詢參數名稱
    pub fn param(&self) -> &'static str {
        match self {
            Route::Stocks => "stocks",
            Route::Stock | Route::Etf | Route::IsEtf => "stock",
        }
    }

    pub fn iterator() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// 個股歷史收盤價，序列化為 `{"MSFT": ["...", ...]}`
pub type PriceHistory = Keyed<Vec<String>>;

/// 報價數值，保留網頁上的原始文字
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuoteFigures {
    pub last_price: String,
    pub percentage_change: String,
}

/// 序列化為 `{"TSLA": {"last-price": "...", "percentage-change": "..."}}`
pub type QuoteSummary = Keyed<QuoteFigures>;

#[derive(Debug, Clone, Serialize)]
pub struct QuotesReply {
    pub results: Vec<QuoteSummary>,
}

/// 持股明細
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct HoldingDetail {
    pub symbol: String,
    pub percentage_assets: String,
}

/// 序列化為 `{"Tesla Inc": {"symbol": "TSLA", "percentage-assets": "9.56%"}}`
pub type Holding = Keyed<HoldingDetail>;

#[derive(Debug, Clone, Serialize)]
pub struct EtfHoldings {
    pub etf: String,
    pub companies: Vec<Holding>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HoldingsReply {
    pub holdings: EtfHoldings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EtfClassification {
    pub symbol: String,
    #[serde(rename = "is-etf")]
    pub is_etf: bool,
}

/// 只帶一段訊息的回應
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Message {
            message: message.into(),
        }
    }
}
